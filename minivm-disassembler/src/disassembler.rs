//! Main disassembler logic

use crate::decoder::decode;
use crate::error::Result;
use crate::formatter::format;
use minivm_spec::{Image, CODE_END, INPUT_X_ADDR, INPUT_Y_ADDR, INSTRUCTION_SIZE, OUTPUT_ADDR};
use std::fmt::Write;

/// Disassemble an image's instruction stream.
///
/// Decoding starts at offset 0 and stops after the first HALT or at the end
/// of the instruction region, whichever comes first.
pub fn disassemble(image: &Image) -> Result<String> {
    let bytes = image.as_bytes();
    let mut output = String::new();

    output.push_str("; MiniVM Disassembly\n");
    let _ = writeln!(
        output,
        "; out [{:#04x}] = {:#06x}, in [{:#04x}] = {:#06x}, in [{:#04x}] = {:#06x}",
        OUTPUT_ADDR,
        image.output(),
        INPUT_X_ADDR,
        image.inputs().0,
        INPUT_Y_ADDR,
        image.inputs().1,
    );
    output.push('\n');

    let mut addr = 0;
    while addr <= CODE_END {
        let instr = decode(&bytes[addr..])?;
        let _ = write!(output, "{:#04x}:  ", addr);
        let encoded = instr.encode();
        if instr.opcode.is_halt() {
            let _ = write!(output, "{:02x}        ", encoded[0]);
        } else {
            let _ = write!(output, "{:02x} {:02x} {:02x}  ", encoded[0], encoded[1], encoded[2]);
        }
        output.push_str(&format(&instr));
        output.push('\n');

        if instr.opcode.is_halt() {
            break;
        }
        addr += INSTRUCTION_SIZE;
    }

    Ok(output)
}
