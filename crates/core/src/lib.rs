//! Five-stage pipeline timing simulator.
//!
//! This crate implements a cycle-accurate model of a classic five-stage
//! in-order instruction pipeline (IF/ID/EX/MEM/WB) over 32-bit MIPS-style
//! instruction words. It provides:
//! 1. **ISA:** Opcode constants, instruction field extraction, and decoding.
//! 2. **Pipeline:** Stage occupancy, instruction slots, load-use hazard
//!    detection, and operand-forwarding detection.
//! 3. **Simulation:** A pure per-cycle state transition, the owning
//!    controller, and the tick-driver seam for external clocks.
//! 4. **Ambient:** Configuration, run statistics, and error types.
//!
//! The engine models control and timing only: stage occupancy, stall
//! insertion, and forwarding opportunities. Register and memory values are
//! never computed.

/// Common types (errors, register identifiers).
pub mod common;
/// Simulator configuration (defaults, tick cadence, tracing).
pub mod config;
/// Instruction set (opcodes, field extraction, decoding).
pub mod isa;
/// Pipeline model (stages, slots, hazard and forwarding detection).
pub mod pipeline;
/// Simulation state, scheduler, controller, and tick-driver seam.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Crate error type; parse and precondition failures.
pub use crate::common::SimError;
/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Owning controller; holds the state and the run lifecycle.
pub use crate::sim::Controller;
/// Complete simulation state for one cycle.
pub use crate::sim::SimState;
