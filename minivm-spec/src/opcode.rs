//! # MiniVM Opcode Definitions
//!
//! Opcodes are a single byte. Only five values are assigned:
//!
//! - 0x01: LOAD  - `reg[arg1] = mem[arg2 + 1] << 8 | mem[arg2]`
//! - 0x02: STORE - `mem[arg2] = reg[arg1] & 0xff; mem[arg2 + 1] = reg[arg1] >> 8`
//! - 0x03: ADD   - `reg[arg1] += reg[arg2]`
//! - 0x04: SUB   - `reg[arg1] -= reg[arg2]`
//! - 0xff: HALT
//!
//! Every other byte decodes to [`Opcode::Unknown`], which the VM skips.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized as its byte, so every deserialized value is canonical
/// (`Unknown` never carries an assigned byte).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Opcode {
    /// LOAD: reg[arg1] = 16-bit little-endian word at mem[arg2]
    Load,
    /// STORE: 16-bit little-endian word at mem[arg2] = reg[arg1]
    Store,
    /// ADD: reg[arg1] = reg[arg1] + reg[arg2]
    Add,
    /// SUB: reg[arg1] = reg[arg1] - reg[arg2]
    Sub,
    /// HALT: stop without advancing the PC
    Halt,
    /// Unassigned byte
    Unknown(u8),
}

impl Opcode {
    pub const LOAD: u8 = 0x01;
    pub const STORE: u8 = 0x02;
    pub const ADD: u8 = 0x03;
    pub const SUB: u8 = 0x04;
    pub const HALT: u8 = 0xff;

    /// Decode an opcode byte. Never fails.
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            Self::LOAD => Opcode::Load,
            Self::STORE => Opcode::Store,
            Self::ADD => Opcode::Add,
            Self::SUB => Opcode::Sub,
            Self::HALT => Opcode::Halt,
            other => Opcode::Unknown(other),
        }
    }

    /// Encoded byte value
    pub const fn to_byte(self) -> u8 {
        match self {
            Opcode::Load => Self::LOAD,
            Opcode::Store => Self::STORE,
            Opcode::Add => Self::ADD,
            Opcode::Sub => Self::SUB,
            Opcode::Halt => Self::HALT,
            Opcode::Unknown(byte) => byte,
        }
    }

    /// Assembly mnemonic, `None` for unassigned bytes
    pub const fn mnemonic(self) -> Option<&'static str> {
        match self {
            Opcode::Load => Some("load"),
            Opcode::Store => Some("store"),
            Opcode::Add => Some("add"),
            Opcode::Sub => Some("sub"),
            Opcode::Halt => Some("halt"),
            Opcode::Unknown(_) => None,
        }
    }

    pub const fn is_halt(self) -> bool {
        matches!(self, Opcode::Halt)
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Opcode::Unknown(_))
    }
}

impl From<u8> for Opcode {
    fn from(byte: u8) -> Self {
        Opcode::from_byte(byte)
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.to_byte()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => write!(f, "{}", name.to_uppercase()),
            None => write!(f, "UNKNOWN({:#04x})", self.to_byte()),
        }
    }
}
