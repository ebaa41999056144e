//! Tests for the AND, ORA and EOR instructions.

use nes6502::{MemoryBus, MemoryImage, Vector, CPU};

fn setup_cpu(program: &[u8]) -> CPU<MemoryImage> {
    let mut memory = MemoryImage::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.load(0x8000, program);
    CPU::new(memory)
}

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let mut cpu = setup_cpu(&[0x29, 0x0F]);
    cpu.set_a(0x3C);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_and_zero_result() {
    let mut cpu = setup_cpu(&[0x29, 0xF0]);
    cpu.set_a(0x0F);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_and_zero_page_x_wraps() {
    let mut cpu = setup_cpu(&[0x35, 0xFF]);
    cpu.memory_mut().write(0x0001, 0x80);
    cpu.set_x(0x02);
    cpu.set_a(0xFF);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
}

// ========== ORA ==========

#[test]
fn test_ora_immediate() {
    let mut cpu = setup_cpu(&[0x09, 0x80]);
    cpu.set_a(0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_ora_absolute_y_page_cross() {
    let mut cpu = setup_cpu(&[0x19, 0xF0, 0x02]);
    cpu.memory_mut().write(0x0300, 0x00);
    cpu.set_y(0x10);

    assert_eq!(cpu.step(), Ok(5));
    assert!(cpu.flag_z());
}

// ========== EOR ==========

#[test]
fn test_eor_immediate() {
    let mut cpu = setup_cpu(&[0x49, 0xFF]);
    cpu.set_a(0x0F);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_eor_self_clears() {
    let mut cpu = setup_cpu(&[0x45, 0x20]);
    cpu.memory_mut().write(0x0020, 0x5A);
    cpu.set_a(0x5A);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_logic_ops_leave_carry_and_overflow() {
    let mut cpu = setup_cpu(&[0x29, 0x00, 0x09, 0x00, 0x49, 0x00]);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);

    for _ in 0..3 {
        cpu.step().unwrap();
    }
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert_eq!(cpu.pc(), 0x8006);
}
