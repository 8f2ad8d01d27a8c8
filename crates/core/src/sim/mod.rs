//! Simulation layer: state, transition, and lifecycle.
//!
//! This module ties the pipeline model to a running simulation. It includes:
//! 1. **State:** The complete per-cycle simulation state.
//! 2. **Scheduler:** The pure state-transition function advancing one cycle.
//! 3. **Controller:** The owner of the state and the run lifecycle.
//! 4. **Driver:** The seam for the external clock deciding when cycles elapse.

/// Simulation controller (start/pause/resume/reset lifecycle).
pub mod controller;

/// Tick-driver seam for external clocks.
pub mod driver;

/// The per-cycle state transition.
pub mod scheduler;

/// Simulation state structures.
pub mod state;

pub use controller::{Controller, TickObserver};
pub use driver::{DriverSpawner, NullDriver, TickDriver};
pub use scheduler::advance;
pub use state::{SimState, SlotStatus};
