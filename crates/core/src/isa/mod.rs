//! Instruction set definitions.
//!
//! This module covers everything the timing model needs to know about the
//! MIPS-style 32-bit instruction encoding:
//! 1. **Opcodes:** Major opcode constants, including the unsupported set.
//! 2. **Field Extraction:** Bit-level access to opcode and register fields.
//! 3. **Decoding:** Classification into R-type/I-type with dependency fields.

/// Instruction decoding into dependency fields.
pub mod decode;

/// Instruction field extraction utilities.
pub mod instruction;

/// MIPS major opcode constants.
pub mod opcodes;

pub use decode::{Decoded, Kind, decode};
pub use instruction::InstructionBits;
