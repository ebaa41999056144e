//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Bit test
//!
//! The 2A03 has no decimal mode: ADC and SBC are binary even when D is set.

use super::Next;
use crate::{MemoryBus, Operand, CPU};

/// Adds `value` and the carry to the accumulator, updating C, Z, V and N.
///
/// Overflow is set when both inputs share a sign that the result does not.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let sum = a as u16 + value as u16 + cpu.regs.flags.c as u16;
    let result = sum as u8;

    cpu.regs.flags.c = sum > 0xFF;
    cpu.regs.flags.v = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.regs.flags.set_zn(result);
    cpu.regs.a = result;
}

/// Compares `register` against `value` as CMP/CPX/CPY do.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    cpu.regs.flags.c = register >= value;
    cpu.regs.flags.z = register == value;
    cpu.regs.flags.n = diff & 0x80 != 0;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Updates C, Z, V and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value);
    Next::Advance
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C), computed as ADC of the complemented operand so the
/// carry acts as "not borrow". Updates C, Z, V and N.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, !value);
    Next::Advance
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let result = cpu.regs.a & cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.flags.set_zn(result);
    Next::Advance
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let result = cpu.regs.a | cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.flags.set_zn(result);
    Next::Advance
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let result = cpu.regs.a ^ cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.flags.set_zn(result);
    Next::Advance
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.a;
    compare(cpu, register, value);
    Next::Advance
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.x;
    compare(cpu, register, value);
    Next::Advance
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.y;
    compare(cpu, register, value);
    Next::Advance
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; V and N are copied from bits 6 and 7 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    cpu.regs.flags.z = cpu.regs.a & value == 0;
    cpu.regs.flags.v = value & 0x40 != 0;
    cpu.regs.flags.n = value & 0x80 != 0;
    Next::Advance
}
