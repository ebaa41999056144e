//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows
//! downward. A push writes to 0x0100 | SP and then decrements SP; a pull
//! increments SP and then reads. SP wraps within the page.

use super::Next;
use crate::status::Flags;
use crate::{MemoryBus, Operand, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    let value = cpu.regs.a;
    cpu.push(value);
    Next::Advance
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte has B (bit 4) and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    let status = cpu.regs.flags.to_packed(true);
    cpu.push(status);
    Next::Advance
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    let value = cpu.pull();
    cpu.regs.a = value;
    cpu.regs.flags.set_zn(value);
    Next::Advance
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Bits 4 and 5 of the pulled byte have no register behind them and are
/// dropped.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    let status = cpu.pull();
    cpu.regs.flags = Flags::from_packed(status);
    Next::Advance
}
