//! Data Hazard Detection and Forwarding.
//!
//! This module implements the register-dependency analysis between
//! in-flight instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards between the fetch-
//!    and decode-stage instructions that require a pipeline stall.
//! 2. **Forwarding Detection:** Flags operand-forwarding opportunities
//!    between the decode-stage instruction and instructions further down
//!    the pipeline. Display-only; never alters timing.

use crate::common::Reg;
use crate::isa::opcodes::{OP_LW, OP_SW};
use crate::isa::{Decoded, Kind};

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// Two directions are checked, and they are deliberately not mirror images
/// of one another:
/// 1. the fetch-stage instruction is a load or store whose source
///    registers include the decode-stage instruction's destination
///    (R-type `rd`, I-type `rt`);
/// 2. the decode-stage instruction is a load whose destination is read by
///    the fetch-stage instruction, where an I-type fetch instruction only
///    counts `rs` as a read.
///
/// # Arguments
///
/// * `in_fetch` - The instruction currently in the fetch stage.
/// * `in_decode` - The instruction currently in the decode stage.
///
/// # Returns
///
/// `true` if a stall must be inserted ahead of the fetch-stage slot.
pub fn need_stall_load_use(in_fetch: &Decoded, in_decode: &Decoded) -> bool {
    if in_fetch.opcode == OP_SW || in_fetch.opcode == OP_LW {
        let dest_is_read = match in_decode.kind {
            Kind::RType => {
                in_decode.rd == Some(in_fetch.rs) || in_decode.rd == Some(in_fetch.rt)
            }
            Kind::IType => in_decode.rt == in_fetch.rs || in_decode.rt == in_fetch.rt,
        };
        if dest_is_read {
            return true;
        }
    }

    if in_decode.opcode == OP_LW {
        let load_dest_is_read = match in_fetch.kind {
            Kind::RType => in_decode.rt == in_fetch.rs || in_decode.rt == in_fetch.rt,
            Kind::IType => in_decode.rt == in_fetch.rs,
        };
        if load_dest_is_read {
            return true;
        }
    }

    false
}

/// Checks whether the decode-stage instruction would receive an operand
/// over a forwarding path from an instruction further down the pipeline.
///
/// The rule is a four-case split on the `(consumer kind, producer kind)`
/// pair, evaluated in order. The third and fourth cases each carry a
/// trailing store-consumer clause that is not guarded by the kind pair;
/// an I-type producer has no `rd`, which keeps the unguarded `rd`
/// comparison inert for it. The zero register and store producers are
/// excluded exactly where the individual clauses say so and nowhere else.
///
/// # Arguments
///
/// * `consumer` - The decode-stage instruction.
/// * `producer` - The execute- or memory-stage instruction.
///
/// # Returns
///
/// `true` if a forwarding path connects the pair. Cosmetic: the caller
/// flags both slots for the current cycle only.
pub fn forwards_operand(consumer: &Decoded, producer: &Decoded) -> bool {
    if consumer.kind == Kind::RType
        && producer.kind == Kind::RType
        && (producer.rd == Some(consumer.rs)
            || (producer.rd == Some(consumer.rt) && producer.rd != Some(Reg::ZERO)))
    {
        return true;
    }

    if consumer.kind == Kind::RType
        && producer.kind == Kind::IType
        && (consumer.rs == producer.rt
            || (consumer.rt == producer.rt && producer.opcode != OP_SW))
    {
        return true;
    }

    if (consumer.kind == Kind::IType
        && producer.kind == Kind::RType
        && producer.rd == Some(consumer.rs)
        && producer.rd != Some(Reg::ZERO))
        || (producer.rd == Some(consumer.rt) && consumer.opcode == OP_SW)
    {
        return true;
    }

    if (consumer.kind == Kind::IType
        && producer.kind == Kind::IType
        && consumer.rs == producer.rt
        && producer.opcode != OP_SW)
        || (consumer.rt == producer.rt && consumer.opcode == OP_SW)
    {
        return true;
    }

    false
}
