//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt Disable
//! - CLD / SED: Decimal (stored, ignored by arithmetic)
//! - CLV: Overflow
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use super::Next;
use crate::{MemoryBus, Operand, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.flags.c = false;
    Next::Advance
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.flags.c = true;
    Next::Advance
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// A latched IRQ is taken at the start of the next step.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.flags.i = false;
    Next::Advance
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.flags.i = true;
    Next::Advance
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.flags.d = false;
    Next::Advance
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.flags.d = true;
    Next::Advance
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.flags.v = false;
    Next::Advance
}
