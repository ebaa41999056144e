//! WASM API for the NES CPU core.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupt lines,
//! state inspection and disassembly.

use wasm_bindgen::prelude::*;

use crate::{disassemble_at, MemoryBus, MemoryImage, Vector, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::ExecutionError> for JsError {
    fn from(err: crate::ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of disassembly for display
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main CPU interface for JavaScript
#[wasm_bindgen]
pub struct Nes6502 {
    cpu: CPU<MemoryImage>,
}

#[wasm_bindgen]
impl Nes6502 {
    /// Create a CPU over zeroed memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Nes6502 {
            cpu: CPU::new(MemoryImage::new()),
        }
    }

    /// Copy a program into memory at `start_addr`
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load(start_addr, program);
    }

    /// Point the RESET, NMI and IRQ/BRK vectors at handlers
    pub fn set_vectors(&mut self, reset: u16, nmi: u16, irq: u16) {
        let memory = self.cpu.memory_mut();
        memory.set_vector(Vector::Reset, reset);
        memory.set_vector(Vector::Nmi, nmi);
        memory.set_vector(Vector::Irq, irq);
    }

    /// Execute a single instruction, returning cycles consumed
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute until the cycle budget is used, returning cycles consumed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<f64, JsError> {
        Ok(self.cpu.run_for_cycles(cycles as u64)? as f64)
    }

    /// Run the RESET sequence
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn raise_irq(&mut self) {
        self.cpu.raise_irq();
    }

    pub fn clear_irq(&mut self) {
        self.cpu.clear_irq();
    }

    pub fn raise_nmi(&mut self) {
        self.cpu.raise_nmi();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // u64 does not cross into JS numbers
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Read a single byte from memory
    pub fn peek(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.memory().read(start + i)).collect()
    }

    /// Disassemble `count` instructions starting at `start_addr`
    pub fn disassemble(&self, start_addr: u16, count: u32) -> js_sys::Array {
        let lines = js_sys::Array::new();
        let mut addr = start_addr;

        for _ in 0..count {
            let instr = disassemble_at(self.cpu.memory(), addr);
            let mut bytes = vec![instr.opcode];
            bytes.extend_from_slice(&instr.operand_bytes);

            lines.push(&JsValue::from(DisassemblyLine {
                address: instr.address,
                bytes,
                text: instr.to_string(),
            }));
            addr = addr.wrapping_add(instr.size_bytes() as u16);
        }

        lines
    }
}

impl Default for Nes6502 {
    fn default() -> Self {
        Self::new()
    }
}
