//! # MiniVM Runtime
//!
//! Execute MiniVM images: 20 bytes of memory, three registers, four opcodes.
//!
//! ## Execution Model
//!
//! - **R0** is the program counter, **R1**/**R2** are accumulators
//! - Each instruction is 3 bytes; the PC advances by 3 after every
//!   non-HALT instruction, including unknown ones
//! - HALT stops execution without advancing the PC
//! - ADD/SUB wrap at 64 bits
//! - Out-of-range memory or register operands are reported as
//!   [`RuntimeError`]s; the faulting instruction has no effect
//!
//! ## Example
//!
//! ```rust
//! use minivm_runtime::VM;
//! use minivm_spec::Image;
//!
//! let mut vm = VM::new();
//! vm.load(Image::sample());
//! vm.compute().unwrap();
//! assert_eq!(vm.memory()[0x0e], 2);
//! assert_eq!(vm.memory()[0x0f], 1);
//! ```

pub mod error;
pub mod state;
pub mod execute;
pub mod vm;
pub mod dump;

pub use error::RuntimeError;
pub use execute::StepOutcome;
pub use state::VMState;
pub use vm::{VMConfig, VM};

/// Simple execution helper
///
/// Runs `image` on a fresh VM and returns the final memory.
pub fn run(image: minivm_spec::Image, config: VMConfig) -> Result<minivm_spec::Image, RuntimeError> {
    let mut vm = VM::with_config(config);
    vm.load(image);
    vm.compute()?;
    Ok(minivm_spec::Image::new(*vm.memory()))
}
