//! # Register File
//!
//! Program counter, stack pointer, accumulator, index registers and flags.

use crate::status::Flags;

/// Base address of the stack page. The stack pointer indexes into it.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after RESET.
pub const RESET_SP: u8 = 0xFD;

/// Snapshot of the 6502 register file.
///
/// # Examples
///
/// ```
/// use nes6502::Registers;
///
/// let regs = Registers::default();
/// assert_eq!(regs.sp, 0xFD);
/// assert_eq!(regs.stack_address(), 0x01FD);
/// assert!(regs.flags.i);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Stack pointer; next free slot is 0x0100 + sp
    pub sp: u8,

    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Processor flags
    pub flags: Flags,
}

impl Registers {
    /// Register state after RESET, with the program counter taken from the
    /// reset vector.
    pub fn after_reset(pc: u16) -> Self {
        Self {
            pc,
            sp: RESET_SP,
            a: 0,
            x: 0,
            y: 0,
            flags: Flags::RESET,
        }
    }

    /// Full address of the next free stack slot. Always within 0x0100-0x01FF.
    #[inline]
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::after_reset(0x0000)
    }
}
