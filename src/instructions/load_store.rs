//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected

use super::Next;
use crate::{MemoryBus, Operand, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    cpu.regs.a = value;
    cpu.regs.flags.set_zn(value);
    Next::Advance
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    cpu.regs.x = value;
    cpu.regs.flags.set_zn(value);
    Next::Advance
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.read_operand(operand);
    cpu.regs.y = value;
    cpu.regs.flags.set_zn(value);
    Next::Advance
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.regs.a;
    cpu.write_operand(operand, value);
    Next::Advance
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.regs.x;
    cpu.write_operand(operand, value);
    Next::Advance
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let value = cpu.regs.y;
    cpu.write_operand(operand, value);
    Next::Advance
}
