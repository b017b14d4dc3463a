//! Property tests for instruction semantics

use minivm_runtime::{StepOutcome, VMConfig, VM};
use minivm_spec::{Image, ImageBuilder, Instruction, INPUT_X_ADDR, INPUT_Y_ADDR, OUTPUT_ADDR};
use proptest::prelude::*;

fn two_operand_program(x: u16, y: u16, op: Instruction) -> Image {
    ImageBuilder::new()
        .instruction(Instruction::load(1, INPUT_X_ADDR as u8))
        .and_then(|b| b.instruction(Instruction::load(2, INPUT_Y_ADDR as u8)))
        .and_then(|b| b.instruction(op))
        .and_then(|b| b.instruction(Instruction::store(1, OUTPUT_ADDR as u8)))
        .and_then(|b| b.word(INPUT_X_ADDR, x))
        .and_then(|b| b.word(INPUT_Y_ADDR, y))
        .unwrap()
        .build()
}

fn run(image: Image) -> VM {
    let mut vm = VM::new();
    vm.load(image);
    vm.compute().unwrap();
    vm
}

#[test]
fn test_sub_underflow_pinned() {
    let vm = run(two_operand_program(1, 3, Instruction::sub(1, 2)));
    assert_eq!(vm.register(1), Some(0xffff_ffff_ffff_fffe));
    assert_eq!(vm.memory()[OUTPUT_ADDR], 0xfe);
    assert_eq!(vm.memory()[OUTPUT_ADDR + 1], 0xff);
}

#[test]
fn test_add_carries_past_16_bits_in_register() {
    let vm = run(two_operand_program(0xffff, 0x0001, Instruction::add(1, 2)));
    assert_eq!(vm.register(1), Some(0x1_0000));
    // the stored word only keeps two bytes
    assert_eq!(&vm.memory()[OUTPUT_ADDR..OUTPUT_ADDR + 2], &[0x00, 0x00]);
}

proptest! {
    #[test]
    fn test_store_then_load_round_trip(
        v in any::<u16>(),
        src in 1u8..3,
        dst in 1u8..3,
        addr in 13u8..19,
    ) {
        let image = ImageBuilder::new()
            .instruction(Instruction::load(src, INPUT_X_ADDR as u8))
            .and_then(|b| b.instruction(Instruction::store(src, addr)))
            .and_then(|b| b.instruction(Instruction::load(dst, addr)))
            .and_then(|b| b.word(INPUT_X_ADDR, v))
            .unwrap()
            .build();

        let vm = run(image);
        prop_assert_eq!(vm.register(dst as usize), Some(v as u64));
        prop_assert_eq!(vm.register(src as usize), Some(v as u64));
    }

    #[test]
    fn test_add_commutative(x in any::<u16>(), y in any::<u16>()) {
        let xy = run(two_operand_program(x, y, Instruction::add(1, 2)));
        let yx = run(two_operand_program(y, x, Instruction::add(1, 2)));

        prop_assert_eq!(xy.register(1), Some(x as u64 + y as u64));
        prop_assert_eq!(xy.register(1), yx.register(1));
        prop_assert_eq!(
            &xy.memory()[OUTPUT_ADDR..OUTPUT_ADDR + 2],
            &yx.memory()[OUTPUT_ADDR..OUTPUT_ADDR + 2]
        );
    }

    #[test]
    fn test_sub_wraps(x in any::<u16>(), y in any::<u16>()) {
        prop_assume!(x < y);
        let vm = run(two_operand_program(x, y, Instruction::sub(1, 2)));
        prop_assert_eq!(vm.register(1), Some((x as u64).wrapping_sub(y as u64)));

        let out = u16::from_le_bytes([vm.memory()[OUTPUT_ADDR], vm.memory()[OUTPUT_ADDR + 1]]);
        prop_assert_eq!(out, x.wrapping_sub(y));
    }

    #[test]
    fn test_pc_advances_by_three(op in 0u8..0xff, arg1 in 1u8..3, arg2 in 0u8..3) {
        let mut bytes = [0u8; 20];
        bytes[..3].copy_from_slice(&[op, arg1, arg2]);

        let mut vm = VM::new();
        vm.load(bytes);
        prop_assert_eq!(vm.step().unwrap(), StepOutcome::Continued);
        prop_assert_eq!(vm.pc(), 3);
        prop_assert_eq!(vm.steps(), 1);
    }

    #[test]
    fn test_halt_is_terminal(mut bytes in prop::array::uniform20(any::<u8>()), strict in any::<bool>()) {
        bytes[0] = 0xff;

        let mut vm = VM::with_config(VMConfig { strict_opcodes: strict });
        vm.load(bytes);
        let before = vm.state().clone();

        prop_assert_eq!(vm.step().unwrap(), StepOutcome::Halted);
        vm.compute().unwrap();
        prop_assert_eq!(vm.state(), &before);
        prop_assert_eq!(vm.pc(), 0);
    }
}
