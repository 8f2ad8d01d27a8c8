//! Instruction slots.
//!
//! A slot is one position in the pipeline's instruction sequence: either a
//! real 32-bit instruction word or a synthetic stall. Stalls enter the
//! sequence two ways, supplied by the user as the literal `STALL` token or
//! inserted by the scheduler to resolve a load-use hazard, and both are
//! treated identically: opaque to decode, permanent for the rest of the run.

use std::fmt;

use serde::Serialize;

use crate::common::SimError;
use crate::isa::{Decoded, decode};

/// Token accepted (and displayed) for a stall slot.
pub const STALL_TOKEN: &str = "STALL";

/// Number of hex digits in an encoded instruction token.
const WORD_DIGITS: usize = 8;

/// One position in the instruction sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// An encoded 32-bit instruction word.
    Word(u32),
    /// A synthetic no-op delaying everything behind it by one cycle.
    Stall,
}

impl Slot {
    /// Parses an input token: eight hex digits or the literal `STALL`.
    ///
    /// # Errors
    ///
    /// [`SimError::BadToken`] for anything else.
    pub fn parse(token: &str) -> Result<Slot, SimError> {
        if token == STALL_TOKEN {
            return Ok(Slot::Stall);
        }
        if token.len() == WORD_DIGITS && token.chars().all(|c| c.is_ascii_hexdigit()) {
            if let Ok(word) = u32::from_str_radix(token, 16) {
                return Ok(Slot::Word(word));
            }
        }
        Err(SimError::BadToken(token.to_string()))
    }

    /// Parses a whole program, preserving order.
    ///
    /// # Errors
    ///
    /// The first [`SimError::BadToken`] encountered.
    pub fn parse_program<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Slot>, SimError> {
        tokens.iter().map(|t| Slot::parse(t.as_ref())).collect()
    }

    /// Dependency fields of this slot.
    ///
    /// `None` for stalls and for words in the unsupported opcode set;
    /// both are invisible to hazard and forwarding analysis.
    pub fn decode(self) -> Option<Decoded> {
        match self {
            Slot::Word(word) => decode(word),
            Slot::Stall => None,
        }
    }

    /// Whether this slot is a stall marker.
    #[inline]
    pub const fn is_stall(self) -> bool {
        matches!(self, Slot::Stall)
    }
}

impl fmt::Display for Slot {
    /// Formats in input-token form: eight uppercase hex digits or `STALL`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Word(word) => write!(f, "{word:08X}"),
            Slot::Stall => f.write_str(STALL_TOKEN),
        }
    }
}
