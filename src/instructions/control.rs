//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (Absolute or Indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//!
//! JSR pushes the address of its own last byte; RTS adds one after popping.
//! BRK pushes PC+2 (the byte after BRK is padding) and the status with B set.

use super::Next;
use crate::interrupts::Interrupt;
use crate::status::Flags;
use crate::{MemoryBus, Operand, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already followed the pointer for `JMP ($nnnn)`,
/// including the page-wrap defect when it is enabled.
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(_cpu: &mut CPU<M>, operand: &Operand) -> Next {
    match operand.address {
        Some(target) => Next::Jump(target),
        None => Next::Advance,
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC+2 (high byte first), then jumps to the absolute target.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    let return_address = cpu.regs.pc.wrapping_add(2);
    cpu.push_word(return_address);
    match operand.address {
        Some(target) => Next::Jump(target),
        None => Next::Advance,
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address (low byte first) and resumes one byte later.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    let return_address = cpu.pull_word();
    Next::Jump(return_address.wrapping_add(1))
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops the status (B and bit 5 discarded), then the program counter. Unlike
/// RTS there is no +1 adjustment.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    let status = cpu.pull();
    cpu.regs.flags = Flags::from_packed(status);
    Next::Jump(cpu.pull_word())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Runs the interrupt sequence with PC+2 as the return address and the B bit
/// set in the pushed status, then continues at the IRQ/BRK vector.
///
/// Cycle timing: 7 cycles (fixed)
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    let return_address = cpu.regs.pc.wrapping_add(2);
    Next::Jump(cpu.enter_interrupt(Interrupt::Brk, return_address))
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>, _operand: &Operand) -> Next {
    Next::Advance
}
