//! # Memory Bus Abstraction
//!
//! The CPU reaches RAM, cartridge ROM and memory-mapped registers through the
//! `MemoryBus` trait. This crate ships two implementations:
//!
//! - [`MemoryImage`]: a flat 64KB store, the default backing for programs and
//!   tests
//! - [`MappedMemory`](crate::MappedMemory): a `MemoryImage` with device
//!   intercepts for I/O ranges
//!
//! ## Memory Map Landmarks
//!
//! - `0x0000-0x00FF`: zero page
//! - `0x0100-0x01FF`: stack page (fixed)
//! - `0xFFFA-0xFFFF`: NMI, RESET and IRQ/BRK vectors (little-endian)
//!
//! Like the real bus there are no bus errors: reads and writes always succeed.

use crate::interrupts::Vector;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: shared access; devices with read side effects use
///   interior mutability
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: the 6502 has no bus error mechanism
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, MemoryImage};
///
/// let mut mem = MemoryImage::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nes6502::MemoryBus;
///
/// /// 2KB of internal RAM mirrored four times, program ROM above 0x8000.
/// struct NromBus {
///     ram: [u8; 0x800],
///     prg: Vec<u8>,
/// }
///
/// impl MemoryBus for NromBus {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             0x8000..=0xFFFF => self.prg[(addr as usize - 0x8000) % self.prg.len()],
///             _ => 0,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses may return any value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Writes to read-only or unmapped addresses may be
    /// ignored.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word. The high byte address wraps at
    /// 0xFFFF.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Flat 64KB memory image.
///
/// Every address is writable RAM initialized to 0x00. The loader fills it with
/// program data and vectors before the first `step()`.
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, MemoryImage, Vector};
///
/// let mut memory = MemoryImage::new();
/// memory.load(0xC000, &[0xEA, 0xEA]);
/// memory.set_vector(Vector::Reset, 0xC000);
///
/// assert_eq!(memory.read(0xC001), 0xEA);
/// assert_eq!(memory.read_word(0xFFFC), 0xC000);
/// ```
pub struct MemoryImage {
    data: Box<[u8; 65536]>,
}

impl MemoryImage {
    /// Creates a zero-filled image.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`. Wraps past 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut target = addr;
        for &byte in bytes {
            self.data[target as usize] = byte;
            target = target.wrapping_add(1);
        }
    }

    /// Writes a little-endian handler address into one of the vectors.
    pub fn set_vector(&mut self, vector: Vector, target: u16) {
        let [lo, hi] = target.to_le_bytes();
        let addr = vector.address();
        self.data[addr as usize] = lo;
        self.data[addr as usize + 1] = hi;
    }

    /// The whole image as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MemoryImage {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
