//! Tests for the BIT instruction.

use nes6502::{MemoryBus, MemoryImage, Vector, CPU};

fn setup_cpu(program: &[u8]) -> CPU<MemoryImage> {
    let mut memory = MemoryImage::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_bit_zero_page_copies_high_bits() {
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), Ok(3));
    assert!(cpu.flag_z()); // 0x01 & 0xC0 == 0
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_absolute_nonzero_and() {
    let mut cpu = setup_cpu(&[0x2C, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0x01);
    cpu.set_a(0xFF);
    cpu.set_flag_v(true);
    cpu.set_flag_n(true);

    assert_eq!(cpu.step(), Ok(4));
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_bit_flags_come_from_memory_not_result() {
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0x40);
    cpu.set_a(0x40);

    cpu.step().unwrap();
    assert!(!cpu.flag_z());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
}
