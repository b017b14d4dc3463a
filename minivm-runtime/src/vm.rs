//! Virtual Machine for MiniVM

use crate::dump::format_memory;
use crate::error::Result;
use crate::execute::{execute, StepOutcome};
use crate::state::VMState;
use minivm_spec::{Image, Instruction, Opcode, Word, MEMORY_SIZE, NUM_REGISTERS};
use serde::{Deserialize, Serialize};

/// VM configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VMConfig {
    /// Fail with `IllegalOpcode` instead of skipping unassigned opcodes
    pub strict_opcodes: bool,
}

impl VMConfig {
    pub fn strict() -> Self {
        Self { strict_opcodes: true }
    }
}

/// MiniVM: 20 bytes of memory, 3 registers, R0 is the PC.
#[derive(Debug, Clone, Default)]
pub struct VM {
    state: VMState,
    config: VMConfig,
}

impl VM {
    /// Zeroed VM with the default (lenient) configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VMConfig) -> Self {
        Self {
            state: VMState::new(),
            config,
        }
    }

    /// Replace the whole of memory with `image`. Registers are left alone.
    pub fn load(&mut self, image: impl Into<Image>) {
        let image = image.into();
        self.state.load_image(&image);
        tracing::debug!("loaded image {:?}", image);
    }

    /// Like [`VM::load`] for untyped input. Memory is untouched on a size mismatch.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let image = Image::from_slice(bytes)?;
        self.load(image);
        Ok(())
    }

    /// Run the loaded program until HALT, mutating memory in place.
    ///
    /// There is no step limit: a program that never reaches HALT never returns.
    pub fn compute(&mut self) -> Result<()> {
        let start = self.state.steps;
        while self.step()? == StepOutcome::Continued {}
        tracing::debug!(
            "halted at PC={:#04x} after {} steps",
            self.state.pc(),
            self.state.steps - start
        );
        Ok(())
    }

    /// Execute exactly one instruction
    pub fn step(&mut self) -> Result<StepOutcome> {
        let inst = self.fetch_and_decode()?;
        tracing::trace!(
            "[{:4}] PC={:#04x} {} {:#04x} {:#04x}",
            self.state.steps,
            self.state.pc(),
            inst.opcode,
            inst.arg1,
            inst.arg2
        );
        execute(&inst, &mut self.state, self.config.strict_opcodes)
    }

    /// Fetch the instruction at PC. Operands of HALT are never read, so a HALT
    /// in the last two cells is still valid.
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let pc = self.state.pc();
        let opcode = Opcode::from_byte(self.state.read_byte(pc)?);
        if opcode.is_halt() {
            return Ok(Instruction::halt());
        }
        let arg1 = self.state.read_byte(pc.wrapping_add(1))?;
        let arg2 = self.state.read_byte(pc.wrapping_add(2))?;
        Ok(Instruction::new(opcode, arg1, arg2))
    }

    /// Zero registers, memory and the step counter
    pub fn reset(&mut self) {
        self.state = VMState::new();
    }

    /// Label line, hex cells, layout caption
    pub fn dump(&self, label: &str) -> String {
        format_memory(label, &self.state.memory)
    }

    /// Write [`VM::dump`] to stdout
    pub fn print(&self, label: &str) {
        print!("{}", self.dump(label));
    }

    pub fn memory(&self) -> &[u8; MEMORY_SIZE] {
        &self.state.memory
    }

    pub fn registers(&self) -> &[Word; NUM_REGISTERS] {
        &self.state.registers
    }

    pub fn register(&self, index: usize) -> Option<Word> {
        self.state.registers.get(index).copied()
    }

    pub fn pc(&self) -> Word {
        self.state.pc()
    }

    pub fn steps(&self) -> u64 {
        self.state.steps
    }

    pub fn config(&self) -> &VMConfig {
        &self.config
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }
}
