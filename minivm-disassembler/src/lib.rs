//! # MiniVM Disassembler
//!
//! Turn MiniVM images back into readable assembly.
//!
//! ## Example
//!
//! ```rust
//! use minivm_spec::Image;
//! use minivm_disassembler::disassemble;
//!
//! let asm = disassemble(&Image::sample()).unwrap();
//! assert!(asm.contains("add r1, r2"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::disassemble;
pub use decoder::decode;
pub use formatter::format;
