//! Instruction execution for MiniVM

use crate::error::{Result, RuntimeError};
use crate::state::VMState;
use minivm_spec::{Instruction, Opcode, Word, INSTRUCTION_SIZE};

/// Result of a single fetch-decode-execute round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Instruction executed, PC advanced
    Continued,
    /// HALT reached, PC left pointing at it
    Halted,
}

/// Execute a single decoded instruction.
///
/// On error nothing is written and the PC stays on the faulting instruction.
pub fn execute(inst: &Instruction, state: &mut VMState, strict: bool) -> Result<StepOutcome> {
    let Instruction { opcode, arg1, arg2 } = *inst;

    match opcode {
        Opcode::Halt => return Ok(StepOutcome::Halted),

        Opcode::Load => {
            let value = state.read_word(arg2 as Word)?;
            state.write_reg(arg1, value)?;
        }

        Opcode::Store => {
            let value = state.read_reg(arg1)?;
            state.write_word(arg2 as Word, value)?;
        }

        Opcode::Add => {
            let result = state.read_reg(arg1)?.wrapping_add(state.read_reg(arg2)?);
            state.write_reg(arg1, result)?;
        }

        Opcode::Sub => {
            let result = state.read_reg(arg1)?.wrapping_sub(state.read_reg(arg2)?);
            state.write_reg(arg1, result)?;
        }

        Opcode::Unknown(byte) => {
            if strict {
                return Err(RuntimeError::IllegalOpcode { opcode: byte, pc: state.pc() });
            }
            tracing::warn!("skipping unknown opcode {:#04x} at PC={:#04x}", byte, state.pc());
        }
    }

    state.advance_pc(INSTRUCTION_SIZE as Word);
    state.steps += 1;
    Ok(StepOutcome::Continued)
}
