//! # Program Image
//!
//! A program image is exactly [`MEMORY_SIZE`] bytes that are copied into VM
//! memory as-is. Code and data share the same cells.
//!
//! Layout used by the shipped programs:
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────────
//! 0x00    12    up to 4 instructions
//! 0x0c    1     HALT
//! 0x0d    1     unused
//! 0x0e    2     output word (little-endian)
//! 0x10    2     input X (little-endian)
//! 0x12    2     input Y (little-endian)
//! ```

use crate::error::{Result, SpecError};
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::{
    CODE_END, INPUT_X_ADDR, INPUT_Y_ADDR, INSTRUCTION_SIZE, MAX_INSTRUCTIONS, MEMORY_SIZE,
    OUTPUT_ADDR,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image([u8; MEMORY_SIZE]);

impl Image {
    /// All-zero image
    pub const fn zeroed() -> Self {
        Image([0; MEMORY_SIZE])
    }

    pub const fn new(bytes: [u8; MEMORY_SIZE]) -> Self {
        Image(bytes)
    }

    /// Copy an image out of a slice, which must be exactly [`MEMORY_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let cells: [u8; MEMORY_SIZE] =
            bytes.try_into().map_err(|_| SpecError::InvalidImageSize {
                expected: MEMORY_SIZE,
                found: bytes.len(),
            })?;
        Ok(Image(cells))
    }

    /// The `255 + 3` program: load X, load Y, add, store to the output word, halt.
    pub fn sample() -> Self {
        Image([
            0x01, 0x01, 0x10, // 0x00: load r1, [0x10]
            0x01, 0x02, 0x12, // 0x03: load r2, [0x12]
            0x03, 0x01, 0x02, // 0x06: add r1, r2
            0x02, 0x01, 0x0e, // 0x09: store r1, [0x0e]
            0xff, // 0x0c: halt
            0x00, // unused
            0x00, 0x00, // 0x0e: output
            0xff, 0x00, // 0x10: X = 255
            0x03, 0x00, // 0x12: Y = 3
        ])
    }

    pub fn as_bytes(&self) -> &[u8; MEMORY_SIZE] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; MEMORY_SIZE] {
        self.0
    }

    /// Read the little-endian 16-bit word at `addr`.
    pub fn read_word(&self, addr: usize) -> Result<u16> {
        let hi_addr = addr
            .checked_add(1)
            .ok_or(SpecError::AddressOutOfRange { address: addr })?;
        match (self.0.get(addr), self.0.get(hi_addr)) {
            (Some(&lo), Some(&hi)) => Ok(u16::from_le_bytes([lo, hi])),
            _ => Err(SpecError::AddressOutOfRange { address: addr }),
        }
    }

    pub fn output(&self) -> u16 {
        u16::from_le_bytes([self.0[OUTPUT_ADDR], self.0[OUTPUT_ADDR + 1]])
    }

    pub fn inputs(&self) -> (u16, u16) {
        (
            u16::from_le_bytes([self.0[INPUT_X_ADDR], self.0[INPUT_X_ADDR + 1]]),
            u16::from_le_bytes([self.0[INPUT_Y_ADDR], self.0[INPUT_Y_ADDR + 1]]),
        )
    }

    /// Decode the instruction whose opcode sits at `offset`, if all three bytes are in range.
    pub fn instruction_at(&self, offset: usize) -> Option<Instruction> {
        let bytes = self.0.get(offset..offset.checked_add(INSTRUCTION_SIZE)?)?;
        Some(Instruction::decode([bytes[0], bytes[1], bytes[2]]))
    }
}

impl Default for Image {
    fn default() -> Self {
        Image::zeroed()
    }
}

impl From<[u8; MEMORY_SIZE]> for Image {
    fn from(bytes: [u8; MEMORY_SIZE]) -> Self {
        Image(bytes)
    }
}

impl TryFrom<&[u8]> for Image {
    type Error = SpecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Image::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Image {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Image(")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

/// Builds an image from instructions and 16-bit data words.
///
/// Instructions are laid out from offset 0 and a HALT is placed directly
/// after the last one.
///
/// ```
/// use minivm_spec::{Image, ImageBuilder, Instruction};
///
/// let image = ImageBuilder::new()
///     .instruction(Instruction::load(1, 0x10)).unwrap()
///     .instruction(Instruction::load(2, 0x12)).unwrap()
///     .instruction(Instruction::add(1, 2)).unwrap()
///     .instruction(Instruction::store(1, 0x0e)).unwrap()
///     .word(0x10, 255).unwrap()
///     .word(0x12, 3).unwrap()
///     .build();
/// assert_eq!(image, Image::sample());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageBuilder {
    cells: [u8; MEMORY_SIZE],
    instructions: usize,
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instruction(mut self, inst: Instruction) -> Result<Self> {
        if self.instructions == MAX_INSTRUCTIONS {
            return Err(SpecError::ProgramTooLong { max: MAX_INSTRUCTIONS });
        }
        let offset = self.instructions * INSTRUCTION_SIZE;
        self.cells[offset..offset + INSTRUCTION_SIZE].copy_from_slice(&inst.encode());
        self.instructions += 1;
        Ok(self)
    }

    /// Write a little-endian word. Data must live past the instruction region.
    pub fn word(mut self, addr: usize, value: u16) -> Result<Self> {
        if addr <= CODE_END || addr >= MEMORY_SIZE - 1 {
            return Err(SpecError::AddressOutOfRange { address: addr });
        }
        self.cells[addr..addr + 2].copy_from_slice(&value.to_le_bytes());
        Ok(self)
    }

    pub fn build(mut self) -> Image {
        let halt_at = self.instructions * INSTRUCTION_SIZE;
        self.cells[halt_at] = Opcode::HALT;
        Image(self.cells)
    }
}
