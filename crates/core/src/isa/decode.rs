//! Instruction decoding.
//!
//! Classifies a 32-bit instruction word and extracts the register fields
//! the dependency analysis needs. Decoding is total: a word in the
//! unsupported opcode set yields `None` and the word stays opaque to
//! hazard and forwarding analysis.

use serde::Serialize;

use crate::common::Reg;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Instruction format kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Kind {
    /// Register-register format: opcode 0, destination in `rd`.
    RType,
    /// Immediate format: destination in `rt`.
    IType,
}

/// Dependency fields of a decoded instruction.
///
/// Only what register-dependency analysis consumes is kept; funct,
/// shamt, and immediate fields carry no timing information here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Major opcode (bits 31-26).
    pub opcode: u32,
    /// Format kind.
    pub kind: Kind,
    /// First source register.
    pub rs: Reg,
    /// Second source register; the destination for I-type instructions.
    pub rt: Reg,
    /// Destination register; present for R-type instructions only.
    pub rd: Option<Reg>,
}

/// Decodes a 32-bit instruction word.
///
/// Opcode 0 is R-type; opcodes in [`opcodes::UNSUPPORTED`] (the
/// branch/jump family) return `None`; every other opcode is I-type.
/// Never panics.
pub fn decode(word: u32) -> Option<Decoded> {
    let opcode = word.opcode();

    if opcode == opcodes::OP_RTYPE {
        return Some(Decoded {
            opcode,
            kind: Kind::RType,
            rs: word.rs(),
            rt: word.rt(),
            rd: Some(word.rd()),
        });
    }

    if opcodes::UNSUPPORTED.contains(&opcode) {
        return None;
    }

    Some(Decoded {
        opcode,
        kind: Kind::IType,
        rs: word.rs(),
        rt: word.rt(),
        rd: None,
    })
}
