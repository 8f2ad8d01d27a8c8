//! Configuration for the pipeline simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (tick cadence).
//! 2. **Structure:** A flat config deserializable from JSON.
//!
//! Configuration is supplied as JSON by an embedding front-end, or use
//! `SimConfig::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Wall-clock milliseconds per simulated cycle.
    ///
    /// One tick per second: slow enough to follow stage movement by eye,
    /// which is the point of a visualization-oriented timing model.
    pub const TICK_MILLIS: u64 = 1000;
}

/// Simulator configuration.
///
/// All fields have defaults, so a partial JSON document is accepted.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Wall-clock milliseconds between driver ticks.
    pub tick_millis: u64,

    /// Emit per-cycle decoded-instruction detail alongside the stage view.
    pub trace: bool,
}

impl Default for SimConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            tick_millis: defaults::TICK_MILLIS,
            trace: false,
        }
    }
}
