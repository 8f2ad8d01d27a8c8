//! Simulator error definitions.
//!
//! The timing model itself is total: an instruction word that fails to
//! decode is treated as dependency-inert, never as an error, and the
//! scheduler cannot fail. What remains is input parsing and lifecycle
//! preconditions, covered here.

use thiserror::Error;

/// Errors surfaced by the public simulation API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// An input token was neither an 8-hex-digit instruction word nor the
    /// literal stall sentinel.
    #[error("invalid instruction token `{0}`: expected 8 hex digits or `STALL`")]
    BadToken(String),

    /// An accessor that requires a started simulation was called before
    /// `start` created one (or after `reset` discarded it).
    #[error("no active simulation: call `start` first")]
    NoActiveRun,
}
