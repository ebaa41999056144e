//! # NES 6502 CPU Core
//!
//! An instruction-accurate emulation of the 2A03's 6502 core, the CPU of the
//! Nintendo Entertainment System.
//!
//! The crate covers the fetch-decode-execute engine only: the 256-entry opcode
//! table, the 13 addressing modes, status flag rules, the stack, and the
//! RESET/NMI/IRQ/BRK sequences. Video, audio, cartridge mappers and input are
//! left to the host emulator, which reaches the CPU through the `MemoryBus`
//! trait and the interrupt lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{MemoryImage, Vector, CPU};
//!
//! let mut memory = MemoryImage::new();
//! memory.set_vector(Vector::Reset, 0x8000);
//! memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the step loop
//! - `opcodes` - Opcode table (operation, addressing mode, cycles)
//! - `addressing` - Addressing modes and effective address resolution
//! - `memory` - `MemoryBus` trait and the flat 64KB image
//! - `devices` - Memory-mapped I/O intercepts
//! - `interrupts` - Interrupt kinds, vectors and the latched lines
//! - `registers` / `status` - Register file and processor flags
//! - `config` - Illegal opcode policy and hardware quirks
//! - `disassembler` - Single-instruction disassembly for tracing

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod disassembler;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::{AddressingMode, Operand};
pub use config::{CpuConfig, IllegalOpcodePolicy};
pub use cpu::CPU;
pub use devices::{Device, DeviceError, MappedMemory, RomDevice};
pub use disassembler::{disassemble, disassemble_at, Instruction};
pub use interrupts::{Interrupt, InterruptLines, Vector};
pub use memory::{MemoryBus, MemoryImage};
pub use opcodes::{lookup, InstructionEntry, Operation, INSTRUCTION_TABLE};
pub use registers::Registers;
pub use status::{Flags, StatusFlags};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte has no documented instruction.
    #[error("illegal opcode 0x{opcode:02X} at 0x{pc:04X}")]
    IllegalOpcode {
        /// The offending opcode byte
        opcode: u8,
        /// Address the opcode was fetched from
        pc: u16,
    },

    /// The CPU stopped on an earlier illegal opcode and needs a reset.
    #[error("CPU halted at 0x{pc:04X}")]
    Halted {
        /// Address of the instruction that halted the CPU
        pc: u16,
    },
}
