//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Carry in and carry out
//! - Signed overflow
//! - Decimal mode being ignored
//! - Cycle counts including page crossing penalties

use nes6502::{MemoryBus, MemoryImage, Vector, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<MemoryImage> {
    let mut memory = MemoryImage::new();
    memory.set_vector(Vector::Reset, 0x8000);
    CPU::new(memory)
}

fn adc_immediate(a: u8, value: u8, carry: bool) -> CPU<MemoryImage> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x69, value]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step().unwrap();
    cpu
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let cpu = adc_immediate(0x10, 0x05, false);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let cpu = adc_immediate(0x10, 0x05, true);
    assert_eq!(cpu.a(), 0x16);
}

// ========== Flag Tests ==========

#[test]
fn test_adc_carry_out_and_zero() {
    let cpu = adc_immediate(0x01, 0xFF, false);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_positive_overflow() {
    // 0x50 + 0x50 = 0xA0: two positives give a negative
    let cpu = adc_immediate(0x50, 0x50, false);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_negative_overflow() {
    // 0x80 + 0xFF = 0x17F: two negatives give a positive
    let cpu = adc_immediate(0x80, 0xFF, false);

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let cpu = adc_immediate(0x7F, 0x80, true);

    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_ignores_decimal_mode() {
    let mut cpu = setup_cpu();
    // SED; ADC #$01
    cpu.memory_mut().load(0x8000, &[0xF8, 0x69, 0x01]);
    cpu.set_a(0x09);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert!(cpu.flag_d());
    assert_eq!(cpu.a(), 0x0A); // binary result, not BCD 0x10
}

// ========== Addressing Mode and Cycle Tests ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x65, 0x42]);
    cpu.memory_mut().write(0x0042, 0x20);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.a(), 0x21);
}

#[test]
fn test_adc_absolute_x_no_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x7D, 0x00, 0x12]);
    cpu.memory_mut().write(0x1205, 0x03);
    cpu.set_x(0x05);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x03);
}

#[test]
fn test_adc_absolute_x_page_cross_penalty() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x7D, 0xFF, 0x12]);
    cpu.memory_mut().write(0x1300, 0x07);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_adc_indirect_y_page_cross_penalty() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x71, 0x10]);
    cpu.memory_mut().load(0x0010, &[0xFF, 0x20]);
    cpu.memory_mut().write(0x2100, 0x11);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.a(), 0x11);
}
