//! # MiniVM Specification
//!
//! Core types for a fixed-memory virtual machine with a 20-byte address space.
//!
//! ## Key Features
//! - 20 byte-wide memory cells holding both code and data
//! - 3 registers: R0 is the program counter, R1 and R2 are accumulators
//! - 3-byte instructions: `[opcode][arg1][arg2]`
//! - 4 operations (LOAD, STORE, ADD, SUB) plus HALT
//! - 16-bit little-endian data words
//!
//! ## Memory Layout
//!
//! ```text
//! 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f 10 11 12 13
//! __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __
//! INSTRUCTIONS ---------------------------^ OUT-^ IN-1^ IN-2^
//! ```
//!
//! The layout is a convention of the programs, the VM does not enforce it.

pub mod opcode;
pub mod instruction;
pub mod image;
pub mod error;

pub use opcode::Opcode;
pub use instruction::Instruction;
pub use image::{Image, ImageBuilder};
pub use error::{SpecError, Result};

/// Number of memory cells
pub const MEMORY_SIZE: usize = 20;

/// Number of registers
pub const NUM_REGISTERS: usize = 3;

/// Register holding the program counter
pub const PC: usize = 0;

/// Bytes per instruction (opcode + 2 operands)
pub const INSTRUCTION_SIZE: usize = 3;

/// Maximum number of instructions before the HALT slot
pub const MAX_INSTRUCTIONS: usize = 4;

/// End of the instruction region (exclusive)
pub const CODE_END: usize = MAX_INSTRUCTIONS * INSTRUCTION_SIZE;

/// Where the terminating HALT is expected
pub const HALT_ADDR: usize = 0x0c;

/// 16-bit output word
pub const OUTPUT_ADDR: usize = 0x0e;

/// First 16-bit input word
pub const INPUT_X_ADDR: usize = 0x10;

/// Second 16-bit input word
pub const INPUT_Y_ADDR: usize = 0x12;

/// Register word. Wide enough for reconstructed 16-bit values; arithmetic wraps at 64 bits.
pub type Word = u64;
