//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisassemblerError {
    #[error("Truncated instruction: {available} of 3 bytes available")]
    Truncated { available: usize },
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
