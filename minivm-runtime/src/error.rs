//! Runtime error types for MiniVM

use minivm_spec::{SpecError, Word};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Memory out of bounds: address {address:#x} at PC {pc:#x}")]
    OutOfBounds { address: Word, pc: Word },

    #[error("Invalid register index: {index} at PC {pc:#x} (valid range: 0-2)")]
    InvalidRegister { index: u8, pc: Word },

    #[error("Illegal opcode {opcode:#04x} at PC {pc:#x}")]
    IllegalOpcode { opcode: u8, pc: Word },
}

impl RuntimeError {
    /// PC of the faulting instruction, if the error came from execution
    pub fn pc(&self) -> Option<Word> {
        match self {
            RuntimeError::Spec(_) => None,
            RuntimeError::OutOfBounds { pc, .. }
            | RuntimeError::InvalidRegister { pc, .. }
            | RuntimeError::IllegalOpcode { pc, .. } => Some(*pc),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
