//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All update Z and N from the copied value except TXS.

use super::Next;
use crate::{MemoryBus, Operand, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.flags.set_zn(cpu.regs.x);
    Next::Advance
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.flags.set_zn(cpu.regs.y);
    Next::Advance
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.flags.set_zn(cpu.regs.a);
    Next::Advance
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.flags.set_zn(cpu.regs.a);
    Next::Advance
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.flags.set_zn(cpu.regs.x);
    Next::Advance
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Flags affected: None
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    cpu.regs.sp = cpu.regs.x;
    Next::Advance
}
