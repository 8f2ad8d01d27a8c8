//! Simulation state structures.
//!
//! The whole simulation is one value: [`SimState`]. Each scheduler tick
//! replaces it wholesale; nothing derived survives a cycle except the slot
//! sequence itself. Collaborators read it, never mutate it.

use serde::Serialize;

use crate::pipeline::{Slot, Stage};

/// Per-slot view for one cycle: occupied stage and forwarding flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
    /// Stage the slot occupies this cycle, if it is in the pipeline.
    pub stage: Option<Stage>,
    /// Whether the slot participates in a forwarding path this cycle.
    pub forwarding: bool,
}

/// Complete simulation state for one cycle.
///
/// Owned exclusively by the controller and replaced wholesale on every
/// tick. Cloning is cheap; a run holds at most a few dozen slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimState {
    /// Ordered instruction slots; grows by at most one stall per cycle.
    pub slots: Vec<Slot>,
    /// Current cycle; 1-based while a run is live, 0 before any run.
    pub cycle: usize,
    /// Upper bound on the cycle count; recomputed whenever `slots` grows.
    pub max_cycles: usize,
    /// Per-slot stage occupancy and forwarding flags, recomputed each cycle.
    pub stage_of: Vec<SlotStatus>,
    /// Whether a driver should currently be ticking this state.
    pub running: bool,
    /// Terminal flag, set once the last slot has left writeback.
    pub finished: bool,
}

impl SimState {
    /// The empty initial state (the `reset` target).
    pub fn initial() -> SimState {
        SimState::default()
    }

    /// State at cycle 1 for a freshly started program: slot 0 occupies
    /// fetch, everything else has not entered the pipeline.
    pub fn at_start(slots: Vec<Slot>) -> SimState {
        let cycle = 1;
        let stage_of = SimState::occupancy(cycle, slots.len());
        let max_cycles = slots.len() + Stage::COUNT - 1;
        SimState {
            slots,
            cycle,
            max_cycles,
            stage_of,
            running: true,
            finished: false,
        }
    }

    /// Full occupancy map for `len` slots at `cycle`, forwarding cleared.
    pub(crate) fn occupancy(cycle: usize, len: usize) -> Vec<SlotStatus> {
        (0..len)
            .map(|slot| SlotStatus {
                stage: Stage::occupied_at(cycle, slot),
                forwarding: false,
            })
            .collect()
    }

    /// Index of the slot currently occupying `stage`, if any.
    ///
    /// Slots advance in lockstep, so at most one slot occupies a stage.
    pub fn slot_in(&self, stage: Stage) -> Option<usize> {
        self.stage_of.iter().position(|s| s.stage == Some(stage))
    }

    /// Cycles a run over the current slot count takes end to end.
    pub fn total_cycles(&self) -> usize {
        self.slots.len() + Stage::COUNT - 1
    }
}
