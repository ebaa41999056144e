//! # Opcode Table
//!
//! The 256-entry instruction table is the single source of truth for decoding.
//! Every opcode byte maps to an [`InstructionEntry`]:
//!
//! - **151 documented instructions** with their operation, addressing mode and
//!   base cycle cost
//! - **105 undefined opcodes**, mapped to [`Operation::Invalid`] with Implicit
//!   addressing and 0 cycles
//!
//! The table is a `const` array, so lookups are total and never fail.

use crate::addressing::AddressingMode;

/// Instruction kinds of the NMOS 6502, plus the `Invalid` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add with carry
    Adc,
    /// Logical AND
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (Z set)
    Beq,
    /// Test bits in memory against A
    Bit,
    /// Branch if minus (N set)
    Bmi,
    /// Branch if not equal (Z clear)
    Bne,
    /// Branch if plus (N clear)
    Bpl,
    /// Software interrupt
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare with A
    Cmp,
    /// Compare with X
    Cpx,
    /// Compare with Y
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Exclusive OR
    Eor,
    /// Increment memory
    Inc,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load A
    Lda,
    /// Load X
    Ldx,
    /// Load Y
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical inclusive OR
    Ora,
    /// Push A
    Pha,
    /// Push processor status
    Php,
    /// Pull A
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left through carry
    Rol,
    /// Rotate right through carry
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with borrow
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Store A
    Sta,
    /// Store X
    Stx,
    /// Store Y
    Sty,
    /// Transfer A to X
    Tax,
    /// Transfer A to Y
    Tay,
    /// Transfer stack pointer to X
    Tsx,
    /// Transfer X to A
    Txa,
    /// Transfer X to stack pointer
    Txs,
    /// Transfer Y to A
    Tya,
    /// Undefined opcode
    Invalid,
}

impl Operation {
    /// Three-letter assembler mnemonic; `"???"` for undefined opcodes.
    pub const fn mnemonic(self) -> &'static str {
        use Operation::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Invalid => "???",
        }
    }

    /// Read instructions that take one extra cycle when indexed addressing
    /// crosses a page boundary. Stores and read-modify-write instructions
    /// always pay the worst case, which is already in their base cycles.
    pub const fn has_page_penalty(self) -> bool {
        use Operation::*;
        matches!(
            self,
            Adc | And | Cmp | Eor | Lda | Ldx | Ldy | Ora | Sbc
        )
    }

    /// Conditional branches (relative addressing).
    pub const fn is_branch(self) -> bool {
        use Operation::*;
        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }
}

/// Decoded form of one opcode byte.
///
/// # Examples
///
/// ```
/// use nes6502::{lookup, AddressingMode, Operation};
///
/// let lda_imm = lookup(0xA9);
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionEntry {
    /// What the instruction does
    pub operation: Operation,

    /// How its operand is addressed
    pub mode: AddressingMode,

    /// Cycle cost before page-cross and branch penalties; 0 for Invalid
    pub base_cycles: u8,
}

impl InstructionEntry {
    /// Entry used for every undefined opcode.
    pub const INVALID: InstructionEntry = InstructionEntry {
        operation: Operation::Invalid,
        mode: AddressingMode::Implicit,
        base_cycles: 0,
    };

    /// Total instruction length: opcode plus operand bytes.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_len()
    }

    /// Whether this opcode has a documented instruction.
    pub const fn is_valid(&self) -> bool {
        !matches!(self.operation, Operation::Invalid)
    }
}

/// Decodes an opcode byte. Total over all 256 values.
///
/// # Examples
///
/// ```
/// use nes6502::{lookup, Operation};
///
/// assert_eq!(lookup(0x00).operation, Operation::Brk);
/// assert_eq!(lookup(0x02).operation, Operation::Invalid);
/// ```
#[inline]
pub fn lookup(opcode: u8) -> InstructionEntry {
    INSTRUCTION_TABLE[opcode as usize]
}

const IMP: AddressingMode = AddressingMode::Implicit;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const ZP0: AddressingMode = AddressingMode::ZeroPage;
const ZPX: AddressingMode = AddressingMode::ZeroPageX;
const ZPY: AddressingMode = AddressingMode::ZeroPageY;
const REL: AddressingMode = AddressingMode::Relative;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteX;
const ABY: AddressingMode = AddressingMode::AbsoluteY;
const IND: AddressingMode = AddressingMode::Indirect;
const IZX: AddressingMode = AddressingMode::IndirectX;
const IZY: AddressingMode = AddressingMode::IndirectY;

const XXX: InstructionEntry = InstructionEntry::INVALID;

const fn e(operation: Operation, mode: AddressingMode, base_cycles: u8) -> InstructionEntry {
    InstructionEntry {
        operation,
        mode,
        base_cycles,
    }
}

use Operation::*;

/// Complete 256-entry instruction table indexed by opcode byte value.
pub const INSTRUCTION_TABLE: [InstructionEntry; 256] = [
    // 0x00
    e(Brk, IMP, 7),
    e(Ora, IZX, 6),
    XXX,
    XXX,
    XXX,
    e(Ora, ZP0, 3),
    e(Asl, ZP0, 5),
    XXX,
    e(Php, IMP, 3),
    e(Ora, IMM, 2),
    e(Asl, ACC, 2),
    XXX,
    XXX,
    e(Ora, ABS, 4),
    e(Asl, ABS, 6),
    XXX,
    // 0x10
    e(Bpl, REL, 2),
    e(Ora, IZY, 5),
    XXX,
    XXX,
    XXX,
    e(Ora, ZPX, 4),
    e(Asl, ZPX, 6),
    XXX,
    e(Clc, IMP, 2),
    e(Ora, ABY, 4),
    XXX,
    XXX,
    XXX,
    e(Ora, ABX, 4),
    e(Asl, ABX, 7),
    XXX,
    // 0x20
    e(Jsr, ABS, 6),
    e(And, IZX, 6),
    XXX,
    XXX,
    e(Bit, ZP0, 3),
    e(And, ZP0, 3),
    e(Rol, ZP0, 5),
    XXX,
    e(Plp, IMP, 4),
    e(And, IMM, 2),
    e(Rol, ACC, 2),
    XXX,
    e(Bit, ABS, 4),
    e(And, ABS, 4),
    e(Rol, ABS, 6),
    XXX,
    // 0x30
    e(Bmi, REL, 2),
    e(And, IZY, 5),
    XXX,
    XXX,
    XXX,
    e(And, ZPX, 4),
    e(Rol, ZPX, 6),
    XXX,
    e(Sec, IMP, 2),
    e(And, ABY, 4),
    XXX,
    XXX,
    XXX,
    e(And, ABX, 4),
    e(Rol, ABX, 7),
    XXX,
    // 0x40
    e(Rti, IMP, 6),
    e(Eor, IZX, 6),
    XXX,
    XXX,
    XXX,
    e(Eor, ZP0, 3),
    e(Lsr, ZP0, 5),
    XXX,
    e(Pha, IMP, 3),
    e(Eor, IMM, 2),
    e(Lsr, ACC, 2),
    XXX,
    e(Jmp, ABS, 3),
    e(Eor, ABS, 4),
    e(Lsr, ABS, 6),
    XXX,
    // 0x50
    e(Bvc, REL, 2),
    e(Eor, IZY, 5),
    XXX,
    XXX,
    XXX,
    e(Eor, ZPX, 4),
    e(Lsr, ZPX, 6),
    XXX,
    e(Cli, IMP, 2),
    e(Eor, ABY, 4),
    XXX,
    XXX,
    XXX,
    e(Eor, ABX, 4),
    e(Lsr, ABX, 7),
    XXX,
    // 0x60
    e(Rts, IMP, 6),
    e(Adc, IZX, 6),
    XXX,
    XXX,
    XXX,
    e(Adc, ZP0, 3),
    e(Ror, ZP0, 5),
    XXX,
    e(Pla, IMP, 4),
    e(Adc, IMM, 2),
    e(Ror, ACC, 2),
    XXX,
    e(Jmp, IND, 5),
    e(Adc, ABS, 4),
    e(Ror, ABS, 6),
    XXX,
    // 0x70
    e(Bvs, REL, 2),
    e(Adc, IZY, 5),
    XXX,
    XXX,
    XXX,
    e(Adc, ZPX, 4),
    e(Ror, ZPX, 6),
    XXX,
    e(Sei, IMP, 2),
    e(Adc, ABY, 4),
    XXX,
    XXX,
    XXX,
    e(Adc, ABX, 4),
    e(Ror, ABX, 7),
    XXX,
    // 0x80
    XXX,
    e(Sta, IZX, 6),
    XXX,
    XXX,
    e(Sty, ZP0, 3),
    e(Sta, ZP0, 3),
    e(Stx, ZP0, 3),
    XXX,
    e(Dey, IMP, 2),
    XXX,
    e(Txa, IMP, 2),
    XXX,
    e(Sty, ABS, 4),
    e(Sta, ABS, 4),
    e(Stx, ABS, 4),
    XXX,
    // 0x90
    e(Bcc, REL, 2),
    e(Sta, IZY, 6),
    XXX,
    XXX,
    e(Sty, ZPX, 4),
    e(Sta, ZPX, 4),
    e(Stx, ZPY, 4),
    XXX,
    e(Tya, IMP, 2),
    e(Sta, ABY, 5),
    e(Txs, IMP, 2),
    XXX,
    XXX,
    e(Sta, ABX, 5),
    XXX,
    XXX,
    // 0xA0
    e(Ldy, IMM, 2),
    e(Lda, IZX, 6),
    e(Ldx, IMM, 2),
    XXX,
    e(Ldy, ZP0, 3),
    e(Lda, ZP0, 3),
    e(Ldx, ZP0, 3),
    XXX,
    e(Tay, IMP, 2),
    e(Lda, IMM, 2),
    e(Tax, IMP, 2),
    XXX,
    e(Ldy, ABS, 4),
    e(Lda, ABS, 4),
    e(Ldx, ABS, 4),
    XXX,
    // 0xB0
    e(Bcs, REL, 2),
    e(Lda, IZY, 5),
    XXX,
    XXX,
    e(Ldy, ZPX, 4),
    e(Lda, ZPX, 4),
    e(Ldx, ZPY, 4),
    XXX,
    e(Clv, IMP, 2),
    e(Lda, ABY, 4),
    e(Tsx, IMP, 2),
    XXX,
    e(Ldy, ABX, 4),
    e(Lda, ABX, 4),
    e(Ldx, ABY, 4),
    XXX,
    // 0xC0
    e(Cpy, IMM, 2),
    e(Cmp, IZX, 6),
    XXX,
    XXX,
    e(Cpy, ZP0, 3),
    e(Cmp, ZP0, 3),
    e(Dec, ZP0, 5),
    XXX,
    e(Iny, IMP, 2),
    e(Cmp, IMM, 2),
    e(Dex, IMP, 2),
    XXX,
    e(Cpy, ABS, 4),
    e(Cmp, ABS, 4),
    e(Dec, ABS, 6),
    XXX,
    // 0xD0
    e(Bne, REL, 2),
    e(Cmp, IZY, 5),
    XXX,
    XXX,
    XXX,
    e(Cmp, ZPX, 4),
    e(Dec, ZPX, 6),
    XXX,
    e(Cld, IMP, 2),
    e(Cmp, ABY, 4),
    XXX,
    XXX,
    XXX,
    e(Cmp, ABX, 4),
    e(Dec, ABX, 7),
    XXX,
    // 0xE0
    e(Cpx, IMM, 2),
    e(Sbc, IZX, 6),
    XXX,
    XXX,
    e(Cpx, ZP0, 3),
    e(Sbc, ZP0, 3),
    e(Inc, ZP0, 5),
    XXX,
    e(Inx, IMP, 2),
    e(Sbc, IMM, 2),
    e(Nop, IMP, 2),
    XXX,
    e(Cpx, ABS, 4),
    e(Sbc, ABS, 4),
    e(Inc, ABS, 6),
    XXX,
    // 0xF0
    e(Beq, REL, 2),
    e(Sbc, IZY, 5),
    XXX,
    XXX,
    XXX,
    e(Sbc, ZPX, 4),
    e(Inc, ZPX, 6),
    XXX,
    e(Sed, IMP, 2),
    e(Sbc, ABY, 4),
    XXX,
    XXX,
    XXX,
    e(Sbc, ABX, 4),
    e(Inc, ABX, 7),
    XXX,
];
