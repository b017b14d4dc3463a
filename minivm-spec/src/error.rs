//! # Error Types for MiniVM images

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Invalid image size: expected {expected} bytes, found {found} bytes")]
    InvalidImageSize { expected: usize, found: usize },

    #[error("Program too long: at most {max} instructions fit before HALT")]
    ProgramTooLong { max: usize },

    #[error("Address out of range: {address:#04x}")]
    AddressOutOfRange { address: usize },
}

pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::InvalidImageSize { expected: 20, found: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid image size: expected 20 bytes, found 3 bytes"
        );

        let err = SpecError::AddressOutOfRange { address: 0x13 };
        assert_eq!(err.to_string(), "Address out of range: 0x13");
    }

    #[test]
    fn test_program_too_long_display() {
        let err = SpecError::ProgramTooLong { max: 4 };
        assert!(err.to_string().contains("at most 4"));
    }
}
