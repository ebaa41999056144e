//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (Accumulator mode) or on memory as a
//! read-modify-write. The bit shifted out goes to C; Z and N follow the result.

use super::Next;
use crate::{MemoryBus, Operand, CPU};

/// Reads the target, applies `op` to (value, carry in) and writes the result
/// back. `op` returns (result, carry out).
fn modify<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, op: fn(u8, bool) -> (u8, bool)) {
    let value = cpu.read_operand(operand);
    let (result, carry) = op(value, cpu.regs.flags.c);
    cpu.write_operand(operand, result);
    cpu.regs.flags.c = carry;
    cpu.regs.flags.set_zn(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    modify(cpu, operand, |value, _| (value << 1, value & 0x80 != 0));
    Next::Advance
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to C, bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    modify(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0));
    Next::Advance
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old C enters bit 0, bit 7 goes to C.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    modify(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
    Next::Advance
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old C enters bit 7, bit 0 goes to C.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    modify(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
    Next::Advance
}
