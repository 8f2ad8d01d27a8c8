//! Read-model state tests.

use pretty_assertions::assert_eq;
use serde_json::json;

use mipspipe_core::pipeline::{Slot, Stage};
use mipspipe_core::sim::{SimState, SlotStatus};

use crate::common::{add, program};

#[test]
fn the_initial_state_is_empty_and_idle() {
    let state = SimState::initial();
    assert_eq!(state.slots, Vec::new());
    assert_eq!(state.cycle, 0);
    assert_eq!(state.max_cycles, 0);
    assert!(state.stage_of.is_empty());
    assert!(!state.running);
    assert!(!state.finished);
}

#[test]
fn at_start_places_only_slot_zero_in_fetch() {
    let state = SimState::at_start(program(&[add(3, 1, 2), add(6, 4, 5), add(9, 7, 8)]));
    assert_eq!(state.cycle, 1);
    assert_eq!(state.max_cycles, 7);
    assert!(state.running);
    assert_eq!(state.slot_in(Stage::Fetch), Some(0));
    assert_eq!(state.slot_in(Stage::Decode), None);
    assert_eq!(state.stage_of[1], SlotStatus::default());
    assert_eq!(state.stage_of[2], SlotStatus::default());
}

#[test]
fn total_cycles_tracks_the_slot_count() {
    let mut state = SimState::at_start(program(&[add(3, 1, 2)]));
    assert_eq!(state.total_cycles(), 5);
    state.slots.push(Slot::Stall);
    assert_eq!(state.total_cycles(), 6);
}

#[test]
fn the_read_model_serializes_for_embedding_surfaces() {
    let state = SimState::at_start(vec![Slot::Word(0x8C23_0004), Slot::Stall]);
    let value = serde_json::to_value(&state).unwrap_or_else(|e| panic!("serialize: {e}"));

    assert_eq!(value["cycle"], json!(1));
    assert_eq!(value["max_cycles"], json!(6));
    assert_eq!(value["running"], json!(true));
    assert_eq!(value["finished"], json!(false));
    assert_eq!(value["slots"][1], json!("Stall"));
    assert_eq!(value["stage_of"][0]["stage"], json!("Fetch"));
    assert_eq!(value["stage_of"][0]["forwarding"], json!(false));
    assert_eq!(value["stage_of"][1]["stage"], json!(null));
}
