//! 6502 Disassembler
//!
//! Decodes single instructions from a memory bus or a byte slice into
//! assembler text. The CPU uses it for per-instruction trace logging.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::opcodes::{lookup, InstructionEntry};
use crate::MemoryBus;

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Table entry for the opcode
    pub entry: InstructionEntry,

    /// Operand bytes following the opcode (0-2 bytes)
    pub operand_bytes: Vec<u8>,
}

impl Instruction {
    /// Instruction mnemonic; `.byte` for undefined opcodes.
    pub fn mnemonic(&self) -> &'static str {
        if self.entry.is_valid() {
            self.entry.operation.mnemonic()
        } else {
            ".byte"
        }
    }

    /// Total size in bytes; undefined opcodes occupy one byte.
    pub fn size_bytes(&self) -> u8 {
        if self.entry.is_valid() {
            self.entry.size_bytes()
        } else {
            1
        }
    }

    fn byte(&self) -> u8 {
        self.operand_bytes.first().copied().unwrap_or(0)
    }

    fn word(&self) -> u16 {
        let lo = self.operand_bytes.first().copied().unwrap_or(0);
        let hi = self.operand_bytes.get(1).copied().unwrap_or(0);
        u16::from_le_bytes([lo, hi])
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AddressingMode::*;

        if !self.entry.is_valid() {
            return write!(f, ".byte ${:02X}", self.opcode);
        }

        let mnemonic = self.mnemonic();
        match self.entry.mode {
            Implicit => write!(f, "{}", mnemonic),
            Accumulator => write!(f, "{} A", mnemonic),
            Immediate => write!(f, "{} #${:02X}", mnemonic, self.byte()),
            ZeroPage => write!(f, "{} ${:02X}", mnemonic, self.byte()),
            ZeroPageX => write!(f, "{} ${:02X},X", mnemonic, self.byte()),
            ZeroPageY => write!(f, "{} ${:02X},Y", mnemonic, self.byte()),
            Relative => {
                let target = self
                    .address
                    .wrapping_add(2)
                    .wrapping_add(self.byte() as i8 as u16);
                write!(f, "{} ${:04X}", mnemonic, target)
            }
            Absolute => write!(f, "{} ${:04X}", mnemonic, self.word()),
            AbsoluteX => write!(f, "{} ${:04X},X", mnemonic, self.word()),
            AbsoluteY => write!(f, "{} ${:04X},Y", mnemonic, self.word()),
            Indirect => write!(f, "{} (${:04X})", mnemonic, self.word()),
            IndirectX => write!(f, "{} (${:02X},X)", mnemonic, self.byte()),
            IndirectY => write!(f, "{} (${:02X}),Y", mnemonic, self.byte()),
        }
    }
}

/// Decodes the instruction at `address` on the bus.
///
/// Operand bytes are read with 16-bit wraparound.
///
/// # Examples
///
/// ```
/// use nes6502::{disassemble_at, MemoryImage};
///
/// let mut memory = MemoryImage::new();
/// memory.load(0x8000, &[0xBD, 0x34, 0x12]);
///
/// let instr = disassemble_at(&memory, 0x8000);
/// assert_eq!(instr.to_string(), "LDA $1234,X");
/// assert_eq!(instr.size_bytes(), 3);
/// ```
pub fn disassemble_at<M: MemoryBus>(memory: &M, address: u16) -> Instruction {
    let opcode = memory.read(address);
    let entry = lookup(opcode);
    let operand_len = if entry.is_valid() {
        entry.mode.operand_len()
    } else {
        0
    };

    let operand_bytes = (1..=operand_len as u16)
        .map(|i| memory.read(address.wrapping_add(i)))
        .collect();

    Instruction {
        address,
        opcode,
        entry,
        operand_bytes,
    }
}

/// Disassembles a byte slice as if it were loaded at `start_address`.
///
/// Undefined opcodes and instructions cut off by the end of the slice come
/// out as one-byte `.byte` entries.
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let opcode = bytes[offset];
        let mut entry = lookup(opcode);
        let size = entry.size_bytes() as usize;

        let operand_bytes = if entry.is_valid() && offset + size <= bytes.len() {
            bytes[offset + 1..offset + size].to_vec()
        } else {
            entry = InstructionEntry::INVALID;
            Vec::new()
        };

        let instr = Instruction {
            address,
            opcode,
            entry,
            operand_bytes,
        };
        let step = instr.size_bytes();
        offset += step as usize;
        address = address.wrapping_add(step as u16);
        instructions.push(instr);
    }

    instructions
}
