//! Instruction formatting to assembly text

use minivm_spec::{Instruction, Opcode, PC};

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    let Instruction { opcode, arg1, arg2 } = *instr;
    match opcode {
        Opcode::Load => format!("load {}, [{:#04x}]", format_reg(arg1), arg2),
        Opcode::Store => format!("store {}, [{:#04x}]", format_reg(arg1), arg2),
        Opcode::Add => format!("add {}, {}", format_reg(arg1), format_reg(arg2)),
        Opcode::Sub => format!("sub {}, {}", format_reg(arg1), format_reg(arg2)),
        Opcode::Halt => "halt".to_string(),
        Opcode::Unknown(byte) => format!(".byte {:#04x}, {:#04x}, {:#04x}", byte, arg1, arg2),
    }
}

/// Format register name (R0 is shown as `pc`)
fn format_reg(index: u8) -> String {
    if index as usize == PC {
        "pc".to_string()
    } else {
        format!("r{}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory_ops() {
        assert_eq!(format(&Instruction::load(1, 0x10)), "load r1, [0x10]");
        assert_eq!(format(&Instruction::store(1, 0x0e)), "store r1, [0x0e]");
    }

    #[test]
    fn test_format_arithmetic() {
        assert_eq!(format(&Instruction::add(1, 2)), "add r1, r2");
        assert_eq!(format(&Instruction::sub(2, 1)), "sub r2, r1");
    }

    #[test]
    fn test_format_pc_and_bad_registers() {
        assert_eq!(format(&Instruction::load(0, 0x10)), "load pc, [0x10]");
        assert_eq!(format(&Instruction::add(1, 9)), "add r1, r9");
    }

    #[test]
    fn test_format_unknown() {
        let inst = Instruction::decode([0x99, 0x00, 0x07]);
        assert_eq!(format(&inst), ".byte 0x99, 0x00, 0x07");
    }
}
