//! The per-cycle state transition.
//!
//! [`advance`] is the single transition function: pure, total, and
//! synchronous. Everything derived (stage occupancy, forwarding flags, the
//! termination condition) is recomputed from scratch each cycle rather
//! than patched incrementally, so no stale derived state can survive a
//! tick.

use tracing::debug;

use crate::pipeline::hazards::{forwards_operand, need_stall_load_use};
use crate::pipeline::{Slot, Stage};
use crate::sim::state::{SimState, SlotStatus};

/// Advances the simulation by one cycle.
///
/// Returns the input unchanged when the state is paused or finished.
/// Otherwise the transition runs in a fixed order:
/// 1. hazard check between the slots occupying fetch and decode in the
///    outgoing cycle, inserting at most one stall ahead of the fetch slot
///    (the only structural mutation of the slot sequence in a run);
/// 2. full stage-occupancy recompute over the (possibly grown) sequence
///    at the incoming cycle;
/// 3. forwarding detection on the fresh map, decode against execute and
///    decode against memory independently, flagging both ends of a match;
/// 4. bound and termination update, clamping the reported cycle to the
///    run length.
///
/// Total: a slot that fails to decode contributes no hazard and no
/// forwarding, and the tick proceeds.
pub fn advance(state: &SimState) -> SimState {
    if !state.running || state.finished {
        return state.clone();
    }

    let next_cycle = state.cycle + 1;
    let mut slots = state.slots.clone();

    // The hazard check reads the outgoing cycle's occupancy.
    if let (Some(fetch_slot), Some(decode_slot)) =
        (state.slot_in(Stage::Fetch), state.slot_in(Stage::Decode))
    {
        if let (Some(in_fetch), Some(in_decode)) =
            (slots[fetch_slot].decode(), slots[decode_slot].decode())
        {
            if need_stall_load_use(&in_fetch, &in_decode) {
                debug!(cycle = next_cycle, slot = fetch_slot, "load-use hazard: inserting stall");
                slots.insert(fetch_slot, Slot::Stall);
            }
        }
    }

    let mut stage_of = SimState::occupancy(next_cycle, slots.len());

    // Forwarding is detected on the freshly computed occupancy.
    let consumer_slot = position_in(&stage_of, Stage::Decode);
    let producer_slots = [
        position_in(&stage_of, Stage::Execute),
        position_in(&stage_of, Stage::Memory),
    ];

    if let Some((consumer_slot, consumer)) =
        consumer_slot.and_then(|i| slots[i].decode().map(|d| (i, d)))
    {
        for producer_slot in producer_slots.into_iter().flatten() {
            if let Some(producer) = slots[producer_slot].decode() {
                if forwards_operand(&consumer, &producer) {
                    stage_of[consumer_slot].forwarding = true;
                    stage_of[producer_slot].forwarding = true;
                }
            }
        }
    }

    let total = slots.len() + Stage::COUNT - 1;
    let max_cycles = state.max_cycles.max(total);
    let finished = next_cycle > total;
    let cycle = if finished { total } else { next_cycle };
    if finished {
        debug!(cycle, "run complete");
    }

    SimState {
        slots,
        cycle,
        max_cycles,
        stage_of,
        running: !finished,
        finished,
    }
}

/// Index of the slot occupying `stage` in a freshly built map.
fn position_in(map: &[SlotStatus], stage: Stage) -> Option<usize> {
    map.iter().position(|s| s.stage == Some(stage))
}
