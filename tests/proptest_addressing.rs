//! Property-based tests for effective address resolution.

use nes6502::addressing::{resolve, AddressingMode};
use nes6502::{MemoryBus, MemoryImage, Registers};
use proptest::prelude::*;

fn setup(bytes: &[u8], x: u8, y: u8) -> (Registers, MemoryImage) {
    let mut memory = MemoryImage::new();
    memory.load(0x8000, bytes);
    let mut regs = Registers::after_reset(0x8000);
    regs.x = x;
    regs.y = y;
    (regs, memory)
}

proptest! {
    #[test]
    fn prop_zero_page_x_wraps(base: u8, x: u8) {
        let (regs, memory) = setup(&[0xB5, base], x, 0);
        let operand = resolve(AddressingMode::ZeroPageX, &regs, &memory, true);
        prop_assert_eq!(operand.address, Some(base.wrapping_add(x) as u16));
        prop_assert!(!operand.page_crossed);
    }

    #[test]
    fn prop_zero_page_y_wraps(base: u8, y: u8) {
        let (regs, memory) = setup(&[0xB6, base], 0, y);
        let operand = resolve(AddressingMode::ZeroPageY, &regs, &memory, true);
        prop_assert_eq!(operand.address, Some(base.wrapping_add(y) as u16));
    }

    #[test]
    fn prop_indexed_indirect_pointer_wraps(zp: u8, x: u8, target: u16) {
        let (regs, mut memory) = setup(&[0xA1, zp], x, 0);
        let ptr = zp.wrapping_add(x);
        let [lo, hi] = target.to_le_bytes();
        memory.write(ptr as u16, lo);
        memory.write(ptr.wrapping_add(1) as u16, hi);

        let operand = resolve(AddressingMode::IndirectX, &regs, &memory, true);
        prop_assert_eq!(operand.address, Some(target));
    }

    #[test]
    fn prop_indirect_indexed_page_cross(zp in 0u8..0xFF, base: u16, y: u8) {
        let (regs, mut memory) = setup(&[0xB1, zp], 0, y);
        let [lo, hi] = base.to_le_bytes();
        memory.write(zp as u16, lo);
        memory.write(zp as u16 + 1, hi);

        let operand = resolve(AddressingMode::IndirectY, &regs, &memory, true);
        let expected = base.wrapping_add(y as u16);
        prop_assert_eq!(operand.address, Some(expected));
        prop_assert_eq!(operand.page_crossed, (base & 0xFF00) != (expected & 0xFF00));
    }

    #[test]
    fn prop_absolute_x_page_cross(base: u16, x: u8) {
        let [lo, hi] = base.to_le_bytes();
        let (regs, memory) = setup(&[0xBD, lo, hi], x, 0);

        let operand = resolve(AddressingMode::AbsoluteX, &regs, &memory, true);
        prop_assert_eq!(operand.address, Some(base.wrapping_add(x as u16)));
        prop_assert_eq!(operand.page_crossed, (base & 0x00FF) + x as u16 > 0xFF);
    }

    #[test]
    fn prop_relative_target(offset: u8) {
        let (regs, memory) = setup(&[0xD0, offset], 0, 0);
        let operand = resolve(AddressingMode::Relative, &regs, &memory, true);

        let expected = (0x8002i32 + offset as i8 as i32) as u16;
        prop_assert_eq!(operand.address, Some(expected));
        prop_assert_eq!(operand.page_crossed, expected & 0xFF00 != 0x8000);
    }
}
