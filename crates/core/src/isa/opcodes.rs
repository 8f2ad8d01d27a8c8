//! MIPS Major Opcodes.
//!
//! Defines the major opcodes (bits 31-26) the timing model distinguishes.

/// Register-register (R-type) instructions; operation selected by funct.
pub const OP_RTYPE: u32 = 0b000000;

/// Load word (LW).
pub const OP_LW: u32 = 0b100011;

/// Store word (SW).
pub const OP_SW: u32 = 0b101011;

/// Branch on equal (BEQ) - control flow, outside the timing model.
pub const OP_BEQ: u32 = 0b000100;

/// Branch on not equal (BNE) - control flow, outside the timing model.
pub const OP_BNE: u32 = 0b000101;

/// Jump (J) - control flow, outside the timing model.
pub const OP_J: u32 = 0b000010;

/// Opcodes whose words decode as unsupported.
///
/// Branch and jump instructions redirect control flow, which this pipeline
/// model does not simulate; their words stay opaque and contribute no
/// register dependencies.
pub const UNSUPPORTED: [u32; 3] = [OP_BEQ, OP_BNE, OP_J];
