//! MiniVM Instruction Set
//!
//! Every instruction is three bytes: `[opcode][arg1][arg2]`.
//!
//! | opcode | arg1            | arg2            |
//! |--------|-----------------|-----------------|
//! | LOAD   | dest register   | source address  |
//! | STORE  | source register | dest address    |
//! | ADD    | dest register   | source register |
//! | SUB    | dest register   | source register |
//! | HALT   | ignored         | ignored         |

use crate::opcode::Opcode;
use crate::INSTRUCTION_SIZE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub arg1: u8,
    pub arg2: u8,
}

impl Instruction {
    pub const fn new(opcode: Opcode, arg1: u8, arg2: u8) -> Self {
        Self { opcode, arg1, arg2 }
    }

    /// LOAD reg, [addr]
    pub const fn load(reg: u8, addr: u8) -> Self {
        Self::new(Opcode::Load, reg, addr)
    }

    /// STORE reg, [addr]
    pub const fn store(reg: u8, addr: u8) -> Self {
        Self::new(Opcode::Store, reg, addr)
    }

    /// ADD dst, src
    pub const fn add(dst: u8, src: u8) -> Self {
        Self::new(Opcode::Add, dst, src)
    }

    /// SUB dst, src
    pub const fn sub(dst: u8, src: u8) -> Self {
        Self::new(Opcode::Sub, dst, src)
    }

    pub const fn halt() -> Self {
        Self::new(Opcode::Halt, 0, 0)
    }

    pub const fn decode(bytes: [u8; INSTRUCTION_SIZE]) -> Self {
        Self::new(Opcode::from_byte(bytes[0]), bytes[1], bytes[2])
    }

    pub const fn encode(&self) -> [u8; INSTRUCTION_SIZE] {
        [self.opcode.to_byte(), self.arg1, self.arg2]
    }
}
