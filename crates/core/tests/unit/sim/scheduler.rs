//! Scheduler transition tests.
//!
//! `advance` is pure, so these tests drive it directly on hand-built
//! states and check one transition at a time.

use pretty_assertions::assert_eq;

use mipspipe_core::pipeline::{Slot, Stage};
use mipspipe_core::sim::{SimState, advance};

use crate::common::{add, lw, program};

/// Advances `state` by `n` cycles.
fn advance_n(state: &SimState, n: usize) -> SimState {
    let mut current = state.clone();
    for _ in 0..n {
        current = advance(&current);
    }
    current
}

#[test]
fn initial_state_passes_through_unchanged() {
    let state = SimState::initial();
    assert_eq!(advance(&state), state);
}

#[test]
fn paused_state_passes_through_unchanged() {
    let mut state = SimState::at_start(program(&[add(1, 2, 3)]));
    state.running = false;
    assert_eq!(advance(&state), state);
}

#[test]
fn finished_state_passes_through_unchanged() {
    let state = advance_n(&SimState::at_start(program(&[add(1, 2, 3)])), 10);
    assert!(state.finished);
    assert_eq!(advance(&state), state);
}

#[test]
fn a_load_use_hazard_inserts_one_stall_before_the_fetch_slot() {
    // lw $3, 4($1) ; add $3, $3, $4
    let start = SimState::at_start(program(&[0x8C23_0004, 0x0064_1820]));

    // Cycle 2: lw in decode, add in fetch; no check yet at cycle 1.
    let cycle2 = advance(&start);
    assert_eq!(cycle2.cycle, 2);
    assert_eq!(cycle2.slots.len(), 2);

    // Cycle 3: the hazard fires and the stall lands at the fetch index.
    let cycle3 = advance(&cycle2);
    assert_eq!(cycle3.cycle, 3);
    assert_eq!(
        cycle3.slots,
        vec![
            Slot::Word(0x8C23_0004),
            Slot::Stall,
            Slot::Word(0x0064_1820),
        ]
    );
    assert_eq!(cycle3.max_cycles, 7);
    assert_eq!(cycle3.stage_of[0].stage, Some(Stage::Execute));
    assert_eq!(cycle3.stage_of[1].stage, Some(Stage::Decode));
    assert_eq!(cycle3.stage_of[2].stage, Some(Stage::Fetch));
}

#[test]
fn the_same_hazard_never_fires_twice() {
    let start = SimState::at_start(program(&[0x8C23_0004, 0x0064_1820]));
    let done = advance_n(&start, 20);
    assert!(done.finished);
    assert_eq!(done.slots.len(), 3);
    assert_eq!(done.slots.iter().filter(|s| s.is_stall()).count(), 1);
}

#[test]
fn a_user_supplied_stall_already_covers_the_hazard() {
    // With a bubble between the pair, neither slot pair ever meets in
    // fetch/decode, so no second stall is inserted.
    let start = SimState::at_start(vec![
        Slot::Word(0x8C23_0004),
        Slot::Stall,
        Slot::Word(0x0064_1820),
    ]);
    let done = advance_n(&start, 20);
    assert!(done.finished);
    assert_eq!(done.slots.len(), 3);
    assert_eq!(done.max_cycles, 7);
}

#[test]
fn forwarding_flags_mark_both_ends_for_one_cycle_only() {
    // add $3, $1, $2 ; add $5, $3, $4 (RAW served by forwarding).
    let start = SimState::at_start(program(&[add(3, 1, 2), add(5, 3, 4)]));

    // Cycle 3: producer in execute, consumer in decode.
    let cycle3 = advance_n(&start, 2);
    assert_eq!(cycle3.stage_of[0].stage, Some(Stage::Execute));
    assert_eq!(cycle3.stage_of[1].stage, Some(Stage::Decode));
    assert!(cycle3.stage_of[0].forwarding);
    assert!(cycle3.stage_of[1].forwarding);

    // Cycle 4: the consumer has left decode; flags are recomputed clean.
    let cycle4 = advance(&cycle3);
    assert!(!cycle4.stage_of[0].forwarding);
    assert!(!cycle4.stage_of[1].forwarding);
}

#[test]
fn forwarding_is_detected_from_the_memory_stage_too() {
    // add $3, $1, $2 ; add $9, $7, $8 ; add $5, $3, $4
    let start = SimState::at_start(program(&[add(3, 1, 2), add(9, 7, 8), add(5, 3, 4)]));

    // Cycle 4: slot 0 in memory, slot 1 in execute, slot 2 in decode.
    let cycle4 = advance_n(&start, 3);
    assert_eq!(cycle4.stage_of[0].stage, Some(Stage::Memory));
    assert_eq!(cycle4.stage_of[1].stage, Some(Stage::Execute));
    assert_eq!(cycle4.stage_of[2].stage, Some(Stage::Decode));
    assert!(cycle4.stage_of[0].forwarding);
    assert!(!cycle4.stage_of[1].forwarding);
    assert!(cycle4.stage_of[2].forwarding);
}

#[test]
fn forwarding_flags_never_affect_timing() {
    let start = SimState::at_start(program(&[add(3, 1, 2), add(5, 3, 4), add(7, 5, 6)]));
    let mut tampered = start.clone();
    for status in &mut tampered.stage_of {
        status.forwarding = !status.forwarding;
    }

    let mut plain = start;
    let mut flipped = tampered;
    for _ in 0..10 {
        plain = advance(&plain);
        flipped = advance(&flipped);
        assert_eq!(plain, flipped);
    }
}

#[test]
fn unsupported_words_are_hazard_inert() {
    // beq $3, $3 would read the load destination if it were supported;
    // as an unsupported word it contributes nothing.
    let beq = 0b000100_u32 << 26 | 3 << 21 | 3 << 16;
    let start = SimState::at_start(program(&[lw(1, 3), beq]));
    let done = advance_n(&start, 20);
    assert!(done.finished);
    assert_eq!(done.slots.len(), 2);
    assert_eq!(done.max_cycles, 6);
}

#[test]
fn the_reported_cycle_is_clamped_to_the_run_length() {
    let start = SimState::at_start(program(&[add(1, 2, 3)]));
    let done = advance_n(&start, 10);
    assert!(done.finished);
    assert!(!done.running);
    assert_eq!(done.cycle, 5);
    assert_eq!(done.max_cycles, 5);
}

#[test]
fn max_cycles_never_shrinks() {
    let start = SimState::at_start(program(&[0x8C23_0004, 0x0064_1820]));
    let mut previous = start.max_cycles;
    let mut state = start;
    for _ in 0..10 {
        state = advance(&state);
        assert!(state.max_cycles >= previous);
        previous = state.max_cycles;
    }
}
