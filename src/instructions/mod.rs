//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone function taking the CPU and the operand
//! the address resolver produced for it. The engine looks the function up by
//! [`Operation`] through [`handler`], so the table drives dispatch and every
//! instruction can be exercised on its own.
//!
//! Instructions never touch the program counter for the generic advance; they
//! return a [`Next`] and the engine applies it.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Operand, Operation, CPU};

/// How the program counter moves once an instruction has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Next {
    /// Step over the opcode and its operand bytes.
    Advance,
    /// Unconditional transfer (JMP, JSR, RTS, RTI, BRK).
    Jump(u16),
    /// Taken conditional branch; costs extra cycles.
    Branch(u16),
}

/// Signature shared by every instruction.
pub(crate) type Handler<M> = fn(&mut CPU<M>, &Operand) -> Next;

/// Maps an operation to its implementation. `None` for `Invalid`.
pub(crate) fn handler<M: MemoryBus>(operation: Operation) -> Option<Handler<M>> {
    use Operation::*;

    let handler: Handler<M> = match operation {
        Adc => alu::execute_adc,
        Sbc => alu::execute_sbc,
        And => alu::execute_and,
        Ora => alu::execute_ora,
        Eor => alu::execute_eor,
        Cmp => alu::execute_cmp,
        Cpx => alu::execute_cpx,
        Cpy => alu::execute_cpy,
        Bit => alu::execute_bit,

        Bcc => branches::execute_bcc,
        Bcs => branches::execute_bcs,
        Beq => branches::execute_beq,
        Bne => branches::execute_bne,
        Bmi => branches::execute_bmi,
        Bpl => branches::execute_bpl,
        Bvc => branches::execute_bvc,
        Bvs => branches::execute_bvs,

        Asl => shifts::execute_asl,
        Lsr => shifts::execute_lsr,
        Rol => shifts::execute_rol,
        Ror => shifts::execute_ror,

        Lda => load_store::execute_lda,
        Ldx => load_store::execute_ldx,
        Ldy => load_store::execute_ldy,
        Sta => load_store::execute_sta,
        Stx => load_store::execute_stx,
        Sty => load_store::execute_sty,

        Inc => inc_dec::execute_inc,
        Dec => inc_dec::execute_dec,
        Inx => inc_dec::execute_inx,
        Iny => inc_dec::execute_iny,
        Dex => inc_dec::execute_dex,
        Dey => inc_dec::execute_dey,

        Jmp => control::execute_jmp,
        Jsr => control::execute_jsr,
        Rts => control::execute_rts,
        Rti => control::execute_rti,
        Brk => control::execute_brk,
        Nop => control::execute_nop,

        Pha => stack::execute_pha,
        Php => stack::execute_php,
        Pla => stack::execute_pla,
        Plp => stack::execute_plp,

        Clc => flags::execute_clc,
        Sec => flags::execute_sec,
        Cli => flags::execute_cli,
        Sei => flags::execute_sei,
        Cld => flags::execute_cld,
        Sed => flags::execute_sed,
        Clv => flags::execute_clv,

        Tax => transfer::execute_tax,
        Tay => transfer::execute_tay,
        Txa => transfer::execute_txa,
        Tya => transfer::execute_tya,
        Tsx => transfer::execute_tsx,
        Txs => transfer::execute_txs,

        Invalid => return None,
    };

    Some(handler)
}
