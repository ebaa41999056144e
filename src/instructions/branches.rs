//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branches use relative addressing. The resolver has already computed
//! the target (next instruction + signed offset); a taken branch returns it as
//! [`Next::Branch`] and the engine charges the extra cycles.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use super::Next;
use crate::{MemoryBus, Operand, CPU};

fn branch_if(condition: bool, operand: &Operand) -> Next {
    match operand.address {
        Some(target) if condition => Next::Branch(target),
        _ => Next::Advance,
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(!cpu.regs.flags.c, operand)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(cpu.regs.flags.c, operand)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(cpu.regs.flags.z, operand)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(!cpu.regs.flags.z, operand)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(cpu.regs.flags.n, operand)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(!cpu.regs.flags.n, operand)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(!cpu.regs.flags.v, operand)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> Next {
    branch_if(cpu.regs.flags.v, operand)
}
