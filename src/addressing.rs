//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the address
//! resolver that turns a mode plus the current registers into an effective
//! address.
//!
//! All address arithmetic wraps: zero-page indexed modes stay inside page 0,
//! everything else wraps modulo 65536.

use crate::memory::MemoryBus;
use crate::registers::Registers;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next
    /// instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }
}

/// A resolved operand.
///
/// `address` is `None` for Implicit and Accumulator modes. For Accumulator the
/// instruction works on A instead of memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Mode this operand was resolved with
    pub mode: AddressingMode,

    /// Effective address, if the mode has one
    pub address: Option<u16>,

    /// Operand bytes after the opcode
    pub len: u8,

    /// Indexing or a branch target moved to a different page
    pub page_crossed: bool,
}

/// Reads the zero-page pointer at `ptr`, fetching the high byte from
/// `(ptr + 1) mod 256`.
fn zero_page_word<M: MemoryBus>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

#[inline]
fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Computes the effective address for `mode` at the current PC.
///
/// `indirect_page_wrap` reproduces the NMOS defect in `JMP ($xxFF)`, where the
/// high byte of the target is read from the start of the same page.
///
/// # Examples
///
/// ```
/// use nes6502::addressing::{resolve, AddressingMode};
/// use nes6502::{MemoryBus, MemoryImage, Registers};
///
/// let mut memory = MemoryImage::new();
/// memory.write(0x8001, 0xFF); // LDA $FF,X
///
/// let mut regs = Registers::after_reset(0x8000);
/// regs.x = 0x02;
///
/// let operand = resolve(AddressingMode::ZeroPageX, &regs, &memory, true);
/// assert_eq!(operand.address, Some(0x0001));
/// assert_eq!(operand.len, 1);
/// ```
pub fn resolve<M: MemoryBus>(
    mode: AddressingMode,
    regs: &Registers,
    memory: &M,
    indirect_page_wrap: bool,
) -> Operand {
    let pc = regs.pc;
    let arg = pc.wrapping_add(1);
    let mut page_crossed = false;

    let address = match mode {
        AddressingMode::Implicit | AddressingMode::Accumulator => None,

        AddressingMode::Immediate => Some(arg),

        AddressingMode::ZeroPage => Some(memory.read(arg) as u16),

        AddressingMode::ZeroPageX => Some(memory.read(arg).wrapping_add(regs.x) as u16),

        AddressingMode::ZeroPageY => Some(memory.read(arg).wrapping_add(regs.y) as u16),

        AddressingMode::Relative => {
            let offset = memory.read(arg) as i8;
            let next = pc.wrapping_add(2);
            let target = next.wrapping_add_signed(offset as i16);
            page_crossed = crosses_page(next, target);
            Some(target)
        }

        AddressingMode::Absolute => Some(memory.read_word(arg)),

        AddressingMode::AbsoluteX => {
            let base = memory.read_word(arg);
            let addr = base.wrapping_add(regs.x as u16);
            page_crossed = crosses_page(base, addr);
            Some(addr)
        }

        AddressingMode::AbsoluteY => {
            let base = memory.read_word(arg);
            let addr = base.wrapping_add(regs.y as u16);
            page_crossed = crosses_page(base, addr);
            Some(addr)
        }

        AddressingMode::Indirect => {
            let ptr = memory.read_word(arg);
            let lo = memory.read(ptr) as u16;
            let hi_addr = if indirect_page_wrap && (ptr & 0x00FF) == 0x00FF {
                ptr & 0xFF00
            } else {
                ptr.wrapping_add(1)
            };
            let hi = memory.read(hi_addr) as u16;
            Some((hi << 8) | lo)
        }

        AddressingMode::IndirectX => {
            let ptr = memory.read(arg).wrapping_add(regs.x);
            Some(zero_page_word(memory, ptr))
        }

        AddressingMode::IndirectY => {
            let base = zero_page_word(memory, memory.read(arg));
            let addr = base.wrapping_add(regs.y as u16);
            page_crossed = crosses_page(base, addr);
            Some(addr)
        }
    };

    Operand {
        mode,
        address,
        len: mode.operand_len(),
        page_crossed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryImage;

    fn setup(bytes: &[u8]) -> (Registers, MemoryImage) {
        let mut memory = MemoryImage::new();
        memory.load(0x8000, bytes);
        (Registers::after_reset(0x8000), memory)
    }

    #[test]
    fn test_operand_lengths() {
        use AddressingMode::*;
        assert_eq!(Implicit.operand_len(), 0);
        assert_eq!(Accumulator.operand_len(), 0);
        assert_eq!(Immediate.operand_len(), 1);
        assert_eq!(IndirectY.operand_len(), 1);
        assert_eq!(Relative.operand_len(), 1);
        assert_eq!(Absolute.operand_len(), 2);
        assert_eq!(Indirect.operand_len(), 2);
    }

    #[test]
    fn test_implicit_and_accumulator_have_no_address() {
        let (regs, memory) = setup(&[0x0A]);
        let op = resolve(AddressingMode::Accumulator, &regs, &memory, true);
        assert_eq!(op.address, None);
        assert_eq!(op.len, 0);

        let op = resolve(AddressingMode::Implicit, &regs, &memory, true);
        assert_eq!(op.address, None);
    }

    #[test]
    fn test_immediate_points_at_operand_byte() {
        let (regs, memory) = setup(&[0xA9, 0x42]);
        let op = resolve(AddressingMode::Immediate, &regs, &memory, true);
        assert_eq!(op.address, Some(0x8001));
    }

    #[test]
    fn test_zero_page_y_wraps() {
        let (mut regs, memory) = setup(&[0xB6, 0xF0]);
        regs.y = 0x20;
        let op = resolve(AddressingMode::ZeroPageY, &regs, &memory, true);
        assert_eq!(op.address, Some(0x0010));
    }

    #[test]
    fn test_relative_backward() {
        // BNE -4 at 0x8000: next = 0x8002, target = 0x7FFE
        let (regs, memory) = setup(&[0xD0, 0xFC]);
        let op = resolve(AddressingMode::Relative, &regs, &memory, true);
        assert_eq!(op.address, Some(0x7FFE));
        assert!(op.page_crossed);
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let (mut regs, memory) = setup(&[0xBD, 0xF0, 0x12]);
        regs.x = 0x20;
        let op = resolve(AddressingMode::AbsoluteX, &regs, &memory, true);
        assert_eq!(op.address, Some(0x1310));
        assert!(op.page_crossed);

        regs.x = 0x01;
        let op = resolve(AddressingMode::AbsoluteX, &regs, &memory, true);
        assert_eq!(op.address, Some(0x12F1));
        assert!(!op.page_crossed);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let (mut regs, mut memory) = setup(&[0xA1, 0xFE]);
        regs.x = 0x01;
        // Pointer at 0xFF: low byte from 0x00FF, high byte from 0x0000
        memory.write(0x00FF, 0x34);
        memory.write(0x0000, 0x12);
        memory.write(0x0100, 0x99);

        let op = resolve(AddressingMode::IndirectX, &regs, &memory, true);
        assert_eq!(op.address, Some(0x1234));
    }

    #[test]
    fn test_indirect_y_adds_after_dereference() {
        let (mut regs, mut memory) = setup(&[0xB1, 0x40]);
        regs.y = 0x10;
        memory.write(0x0040, 0xF8);
        memory.write(0x0041, 0x20);

        let op = resolve(AddressingMode::IndirectY, &regs, &memory, true);
        assert_eq!(op.address, Some(0x2108));
        assert!(op.page_crossed);
    }

    #[test]
    fn test_indirect_page_wrap_defect() {
        let (regs, mut memory) = setup(&[0x6C, 0xFF, 0x10]);
        memory.write(0x10FF, 0x34);
        memory.write(0x1000, 0x12);
        memory.write(0x1100, 0x56);

        let op = resolve(AddressingMode::Indirect, &regs, &memory, true);
        assert_eq!(op.address, Some(0x1234));

        let op = resolve(AddressingMode::Indirect, &regs, &memory, false);
        assert_eq!(op.address, Some(0x5634));
    }
}
