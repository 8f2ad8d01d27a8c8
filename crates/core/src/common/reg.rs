//! Register identifiers.

use std::fmt;

use serde::Serialize;

/// A 5-bit architectural register index.
///
/// Construction masks to the field width, so a `Reg` is always a valid
/// register number in `0..32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Reg(u8);

impl Reg {
    /// The hard-wired zero register (`$zero`).
    pub const ZERO: Reg = Reg(0);

    /// Wraps a raw field value, masking to 5 bits.
    #[inline]
    pub const fn new(raw: u8) -> Self {
        Reg(raw & 0x1F)
    }

    /// Raw register number in `0..32`.
    #[inline]
    pub const fn num(self) -> u8 {
        self.0
    }

    /// Whether this is the hard-wired zero register.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
