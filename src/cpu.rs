//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C (individual bool fields)
//! - **Interrupt lines**: latched NMI and IRQ edges
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Service a pending interrupt, or execute one instruction
//! - `run_for_cycles()`: Step until a cycle budget is exhausted
//! - `reset()`: Reload PC from the reset vector and reinitialize registers

use log::{debug, error, trace, warn};

use crate::addressing::resolve;
use crate::instructions::{self, Next};
use crate::interrupts::{Interrupt, InterruptLines, Vector, INTERRUPT_CYCLES};
use crate::registers::Registers;
use crate::status::Flags;
use crate::{
    disassemble_at, lookup, CpuConfig, ExecutionError, IllegalOpcodePolicy, MemoryBus, Operand,
};

/// Cycles charged for an opcode skipped under [`IllegalOpcodePolicy::Skip`].
const SKIPPED_OPCODE_CYCLES: u8 = 2;

/// 6502 CPU state and execution context.
///
/// The CPU owns its registers and the memory bus. It is generic over the
/// memory implementation via the `MemoryBus` trait, and holds no global
/// state, so several instances can run side by side.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryImage, Vector, CPU};
///
/// let mut memory = MemoryImage::new();
/// memory.set_vector(Vector::Reset, 0x8000);
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Latched NMI/IRQ edges
    pub(crate) lines: InterruptLines,

    /// Execution options
    pub(crate) config: CpuConfig,

    /// Set when an illegal opcode stopped the CPU under the `Halt` policy
    pub(crate) halted: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the default configuration and performs RESET.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFD
    /// - I is set, all other flags clear
    /// - A, X and Y are zeroed
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration and performs RESET.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CpuConfig, IllegalOpcodePolicy, MemoryImage, CPU};
    ///
    /// let config = CpuConfig::default().with_illegal_opcode_policy(IllegalOpcodePolicy::Skip);
    /// let cpu = CPU::with_config(MemoryImage::new(), config);
    /// assert_eq!(cpu.config().illegal_opcode_policy, IllegalOpcodePolicy::Skip);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            lines: InterruptLines::default(),
            config,
            halted: false,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Performs the RESET sequence.
    ///
    /// Available at any time. Reloads PC from the reset vector, reinitializes
    /// the registers, drops pending interrupt edges and clears a halt. The
    /// cycle counter and memory are left alone.
    pub fn reset(&mut self) {
        let pc = self.memory.read_word(Vector::Reset.address());
        self.regs = Registers::after_reset(pc);
        self.lines.clear();
        self.halted = false;
        debug!("reset: PC=0x{:04X}", pc);
    }

    /// Services a pending interrupt or executes one instruction.
    ///
    /// 1. If NMI is latched, or IRQ is latched and I is clear, run the
    ///    interrupt sequence (7 cycles) instead of fetching
    /// 2. Fetch the opcode at PC and look it up in the instruction table
    /// 3. Resolve the operand address for the entry's addressing mode
    /// 4. Run the instruction
    /// 5. Advance PC past the instruction unless it transferred control
    ///
    /// # Returns
    ///
    /// - `Ok(cycles)`: cycles consumed, including page-cross and branch
    ///   penalties
    /// - `Err(ExecutionError::IllegalOpcode)`: undefined opcode, handled per
    ///   the configured [`IllegalOpcodePolicy`]
    /// - `Err(ExecutionError::Halted)`: the CPU stopped earlier and needs a
    ///   `reset()`
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{MemoryImage, Vector, CPU};
    ///
    /// let mut mem = MemoryImage::new();
    /// mem.set_vector(Vector::Reset, 0x8000);
    /// mem.load(0x8000, &[0xEA]); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if self.halted {
            return Err(ExecutionError::Halted { pc: self.regs.pc });
        }

        if let Some(interrupt) = self.lines.take(self.regs.flags.i) {
            let return_address = self.regs.pc;
            self.regs.pc = self.enter_interrupt(interrupt, return_address);
            self.cycles += INTERRUPT_CYCLES as u64;
            return Ok(INTERRUPT_CYCLES);
        }

        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);
        let entry = lookup(opcode);

        let Some(handler) = instructions::handler::<M>(entry.operation) else {
            return self.illegal_opcode(opcode, pc);
        };

        if log::log_enabled!(log::Level::Trace) {
            trace!(
                "{:04X}  {:<14} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
                pc,
                disassemble_at(&self.memory, pc).to_string(),
                self.regs.a,
                self.regs.x,
                self.regs.y,
                self.status(),
                self.regs.sp
            );
        }

        let operand = resolve(
            entry.mode,
            &self.regs,
            &self.memory,
            self.config.indirect_jmp_page_wrap,
        );

        let mut cycles = entry.base_cycles;
        if operand.page_crossed && entry.operation.has_page_penalty() {
            cycles += 1;
        }

        match handler(self, &operand) {
            Next::Advance => {
                self.regs.pc = pc.wrapping_add(entry.size_bytes() as u16);
            }
            Next::Jump(target) => {
                self.regs.pc = target;
            }
            Next::Branch(target) => {
                cycles += 1;
                if operand.page_crossed {
                    cycles += 1;
                }
                self.regs.pc = target;
            }
        }

        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Steps until the cycle budget is exhausted or an error occurs. Returns
    /// the cycles actually consumed, which may overshoot the budget by up to
    /// one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{MemoryImage, Vector, CPU};
    ///
    /// let mut mem = MemoryImage::new();
    /// mem.set_vector(Vector::Reset, 0x8000);
    /// mem.load(0x8000, &[0x4C, 0x00, 0x80]); // JMP $8000
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// // One NTSC frame is roughly 29780 CPU cycles
    /// let consumed = cpu.run_for_cycles(29780).unwrap();
    /// assert!(consumed >= 29780);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Interrupt Lines ==========

    /// Latches an IRQ edge. Taken at the first step where I is clear.
    pub fn raise_irq(&mut self) {
        self.lines.raise_irq();
    }

    /// Withdraws a latched IRQ that has not been serviced yet.
    pub fn clear_irq(&mut self) {
        self.lines.clear_irq();
    }

    /// Latches an NMI edge. Taken at the next step.
    pub fn raise_nmi(&mut self) {
        self.lines.raise_nmi();
    }

    /// Whether an IRQ is latched and waiting.
    pub fn irq_pending(&self) -> bool {
        self.lines.irq_pending()
    }

    /// Whether an NMI is latched and waiting.
    pub fn nmi_pending(&self) -> bool {
        self.lines.nmi_pending()
    }

    /// Whether an illegal opcode halted the CPU.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    // ========== Internal Helpers ==========

    /// Runs the interrupt entry sequence and returns the handler address.
    ///
    /// Pushes `return_address` and the packed status (B set only for BRK),
    /// sets I, and reads the vector.
    pub(crate) fn enter_interrupt(&mut self, interrupt: Interrupt, return_address: u16) -> u16 {
        self.push_word(return_address);
        let status = self.regs.flags.to_packed(interrupt.pushes_break_bit());
        self.push(status);
        self.regs.flags.i = true;

        let handler = self.memory.read_word(interrupt.vector().address());
        debug!(
            "{:?}: return=0x{:04X} status=0x{:02X} handler=0x{:04X}",
            interrupt, return_address, status, handler
        );
        handler
    }

    fn illegal_opcode(&mut self, opcode: u8, pc: u16) -> Result<u8, ExecutionError> {
        match self.config.illegal_opcode_policy {
            IllegalOpcodePolicy::Halt => {
                error!("halting on illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc);
                self.halted = true;
                Err(ExecutionError::IllegalOpcode { opcode, pc })
            }
            IllegalOpcodePolicy::Skip => {
                warn!("skipping illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc);
                self.regs.pc = pc.wrapping_add(1);
                self.cycles += SKIPPED_OPCODE_CYCLES as u64;
                Ok(SKIPPED_OPCODE_CYCLES)
            }
            IllegalOpcodePolicy::Report => {
                error!("illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc);
                self.regs.pc = pc.wrapping_add(1);
                Err(ExecutionError::IllegalOpcode { opcode, pc })
            }
        }
    }

    /// Reads the operand value; Accumulator mode reads A.
    pub(crate) fn read_operand(&self, operand: &Operand) -> u8 {
        match operand.address {
            Some(addr) => self.memory.read(addr),
            None => self.regs.a,
        }
    }

    /// Writes the operand value; Accumulator mode writes A.
    pub(crate) fn write_operand(&mut self, operand: &Operand, value: u8) {
        match operand.address {
            Some(addr) => self.memory.write(addr, value),
            None => self.regs.a = value,
        }
    }

    /// Writes to 0x0100 | SP, then decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(self.regs.stack_address(), value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(self.regs.stack_address())
    }

    /// Pushes high byte first so the word sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV1-DIZC).
    ///
    /// Bit 5 reads as 1 and B as 0, since B only exists on the stack.
    pub fn status(&self) -> u8 {
        self.regs.flags.to_packed(false)
    }

    /// Returns the processor flags.
    pub fn flags(&self) -> Flags {
        self.regs.flags
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the total number of CPU cycles executed since creation.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the execution options.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.flags.n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.flags.v
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.flags.d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.flags.i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.flags.z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.flags.c
    }

    // ========== Setters (debuggers, save states, tests) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces all flags from a packed status byte (B and bit 5 ignored).
    pub fn set_status(&mut self, value: u8) {
        self.regs.flags = Flags::from_packed(value);
    }

    /// Restores a register snapshot taken with [`registers`](Self::registers).
    pub fn set_registers(&mut self, regs: Registers) {
        self.regs = regs;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.flags.n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.flags.v = value;
    }

    /// Sets the Decimal flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.flags.d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.flags.i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.flags.z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.flags.c = value;
    }

    // ========== Memory Access ==========

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for loaders and peripherals between
    /// steps.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns the memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
