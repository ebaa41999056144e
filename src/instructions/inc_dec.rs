//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory, read-modify-write
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap modulo 256 and update Z and N. Carry is never touched.

use super::Next;
use crate::{MemoryBus, Operand, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.regs.flags.set_zn(result);
    Next::Advance
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.regs.flags.set_zn(result);
    Next::Advance
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.flags.set_zn(cpu.regs.x);
    Next::Advance
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.flags.set_zn(cpu.regs.y);
    Next::Advance
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.flags.set_zn(cpu.regs.x);
    Next::Advance
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.flags.set_zn(cpu.regs.y);
    Next::Advance
}
