//! Instruction decoder

use crate::error::{DisassemblerError, Result};
use minivm_spec::{Instruction, Opcode, INSTRUCTION_SIZE};

/// Decode the instruction at the start of `bytes`.
///
/// HALT needs only its opcode byte; everything else needs all three.
pub fn decode(bytes: &[u8]) -> Result<Instruction> {
    match bytes {
        [op, ..] if Opcode::from_byte(*op).is_halt() => Ok(Instruction::halt()),
        [op, arg1, arg2, ..] => Ok(Instruction::decode([*op, *arg1, *arg2])),
        _ => Err(DisassemblerError::Truncated {
            available: bytes.len().min(INSTRUCTION_SIZE),
        }),
    }
}
