//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to check arithmetic flags against reference
//! formulas, stack behavior across long push sequences, and that every
//! documented opcode executes from arbitrary register states.

use nes6502::{MemoryBus, MemoryImage, Vector, CPU, INSTRUCTION_TABLE};
use proptest::prelude::*;

fn setup_cpu(program: &[u8]) -> CPU<MemoryImage> {
    let mut memory = MemoryImage::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.load(0x8000, program);
    CPU::new(memory)
}

/// Documented opcodes
fn valid_opcodes() -> Vec<u8> {
    INSTRUCTION_TABLE
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_valid())
        .map(|(i, _)| i as u8)
        .collect()
}

proptest! {
    #[test]
    fn prop_adc_matches_reference(a: u8, m: u8, carry: bool) {
        let mut cpu = setup_cpu(&[0x69, m]);
        cpu.set_a(a);
        cpu.set_flag_c(carry);
        cpu.step().unwrap();

        let unsigned = a as u16 + m as u16 + carry as u16;
        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;
        let result = unsigned as u8;

        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag_c(), unsigned > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag_z(), result == 0);
        prop_assert_eq!(cpu.flag_n(), result & 0x80 != 0);
    }

    #[test]
    fn prop_sbc_matches_reference(a: u8, m: u8, carry: bool) {
        let mut cpu = setup_cpu(&[0xE9, m]);
        cpu.set_a(a);
        cpu.set_flag_c(carry);
        cpu.step().unwrap();

        let borrow = !carry as i16;
        let unsigned = a as i16 - m as i16 - borrow;
        let signed = a as i8 as i16 - m as i8 as i16 - borrow;
        let result = unsigned as u8;

        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag_c(), unsigned >= 0);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag_z(), result == 0);
        prop_assert_eq!(cpu.flag_n(), result & 0x80 != 0);
    }

    #[test]
    fn prop_compare_matches_reference(register: u8, m: u8) {
        let mut cpu = setup_cpu(&[0xC9, m]);
        cpu.set_a(register);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.flag_c(), register >= m);
        prop_assert_eq!(cpu.flag_z(), register == m);
        prop_assert_eq!(cpu.flag_n(), register.wrapping_sub(m) & 0x80 != 0);
        prop_assert_eq!(cpu.a(), register);
    }

    #[test]
    fn prop_push_sequence_stays_in_page_one(values in prop::collection::vec(any::<u8>(), 1..300)) {
        // LDA #v; PHA for each value
        let program: Vec<u8> = values.iter().flat_map(|&v| [0xA9, v, 0x48]).collect();
        let mut cpu = setup_cpu(&program);

        for _ in 0..values.len() * 2 {
            cpu.step().unwrap();
        }

        prop_assert_eq!(cpu.sp(), 0xFDu8.wrapping_sub(values.len() as u8));

        // The last 256 pushes are still intact, each at 0x0100 | SP
        let start = values.len().saturating_sub(256);
        for (i, &v) in values.iter().enumerate().skip(start) {
            let sp = 0xFDu8.wrapping_sub(i as u8);
            prop_assert_eq!(cpu.memory().read(0x0100 | sp as u16), v);
        }
    }

    #[test]
    fn prop_push_pull_round_trip(values in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut program: Vec<u8> = values.iter().flat_map(|&v| [0xA9, v, 0x48]).collect();
        program.extend(std::iter::repeat(0x68).take(values.len()));
        let mut cpu = setup_cpu(&program);

        for _ in 0..values.len() * 2 {
            cpu.step().unwrap();
        }
        for &expected in values.iter().rev() {
            cpu.step().unwrap();
            prop_assert_eq!(cpu.a(), expected);
        }
        prop_assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn prop_reset_loads_vector(target: u16) {
        let mut memory = MemoryImage::new();
        memory.set_vector(Vector::Reset, target);
        let cpu = CPU::new(memory);

        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cpu.sp(), 0xFD);
        prop_assert_eq!(cpu.status(), 0x24);
    }

    #[test]
    fn prop_plp_status_bits(pulled: u8) {
        let mut cpu = setup_cpu(&[0x28]);
        cpu.memory_mut().write(0x01FE, pulled);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.status(), (pulled & !0x10) | 0x20);
    }

    #[test]
    fn prop_documented_opcodes_execute(
        index in 0usize..151,
        a: u8,
        x: u8,
        y: u8,
        sp: u8,
        status: u8,
        operands: [u8; 2],
    ) {
        let opcode = valid_opcodes()[index];
        let mut cpu = setup_cpu(&[opcode, operands[0], operands[1]]);
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_sp(sp);
        cpu.set_status(status);

        let cycles = cpu.step().unwrap();
        prop_assert!((2..=7).contains(&cycles));
        prop_assert_eq!(cpu.cycles(), cycles as u64);
        prop_assert_eq!(cpu.status() & 0x30, 0x20);
    }
}
