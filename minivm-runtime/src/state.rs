//! VM state for MiniVM

use crate::error::{Result, RuntimeError};
use minivm_spec::{Image, Word, MEMORY_SIZE, NUM_REGISTERS, PC};
use serde::{Deserialize, Serialize};

/// Registers and memory. All accessors are bounds-checked and report the
/// current PC on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VMState {
    /// R0 = PC, R1/R2 = accumulators
    pub registers: [Word; NUM_REGISTERS],

    /// Byte-wide memory cells
    pub memory: [u8; MEMORY_SIZE],

    /// Non-HALT instructions executed
    pub steps: u64,
}

impl Default for VMState {
    fn default() -> Self {
        Self::new()
    }
}

impl VMState {
    pub fn new() -> Self {
        VMState {
            registers: [0; NUM_REGISTERS],
            memory: [0; MEMORY_SIZE],
            steps: 0,
        }
    }

    #[inline]
    pub fn pc(&self) -> Word {
        self.registers[PC]
    }

    /// Advance the PC by `n`, wrapping at the word width
    #[inline]
    pub fn advance_pc(&mut self, n: Word) {
        self.registers[PC] = self.registers[PC].wrapping_add(n);
    }

    pub fn load_image(&mut self, image: &Image) {
        self.memory = image.into_bytes();
    }

    #[inline]
    pub fn read_reg(&self, index: u8) -> Result<Word> {
        self.registers
            .get(index as usize)
            .copied()
            .ok_or(RuntimeError::InvalidRegister { index, pc: self.pc() })
    }

    #[inline]
    pub fn write_reg(&mut self, index: u8, value: Word) -> Result<()> {
        let pc = self.pc();
        let slot = self
            .registers
            .get_mut(index as usize)
            .ok_or(RuntimeError::InvalidRegister { index, pc })?;
        *slot = value;
        Ok(())
    }

    #[inline]
    pub fn read_byte(&self, addr: Word) -> Result<u8> {
        self.cell_index(addr).map(|i| self.memory[i])
    }

    #[inline]
    pub fn write_byte(&mut self, addr: Word, value: u8) -> Result<()> {
        let i = self.cell_index(addr)?;
        self.memory[i] = value;
        Ok(())
    }

    /// Little-endian 16-bit read: `mem[addr + 1] << 8 | mem[addr]`
    pub fn read_word(&self, addr: Word) -> Result<Word> {
        let lo = self.read_byte(addr)? as Word;
        let hi = self.read_byte(addr.wrapping_add(1))? as Word;
        Ok((hi << 8) | lo)
    }

    /// Little-endian 16-bit write. Both cells are checked before either is written.
    ///
    /// The high cell receives `value >> 8` truncated to 8 bits.
    pub fn write_word(&mut self, addr: Word, value: Word) -> Result<()> {
        let lo = self.cell_index(addr)?;
        let hi = self.cell_index(addr.wrapping_add(1))?;
        self.memory[lo] = (value & 0xff) as u8;
        self.memory[hi] = (value >> 8) as u8;
        Ok(())
    }

    fn cell_index(&self, addr: Word) -> Result<usize> {
        usize::try_from(addr)
            .ok()
            .filter(|&i| i < MEMORY_SIZE)
            .ok_or(RuntimeError::OutOfBounds { address: addr, pc: self.pc() })
    }
}
