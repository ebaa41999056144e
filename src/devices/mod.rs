//! Memory-mapped device support for the CPU bus.
//!
//! A NES cartridge and the console's I/O registers sit at fixed address
//! windows on the CPU bus. This module lets a host intercept such windows
//! while the rest of the 64KB address space behaves as plain RAM.
//!
//! # Architecture
//!
//! - **Device trait**: Offset-based interface for a memory-mapped component
//! - **MappedMemory**: Routes accesses inside registered windows to devices
//!   and everything else to a backing [`MemoryImage`]
//! - **RomDevice**: Read-only, mirrored program ROM
//!
//! # Example
//!
//! ```rust
//! use nes6502::{MappedMemory, MemoryBus, RomDevice, CPU};
//!
//! // 16KB PRG ROM with the reset vector pointing at 0xC000
//! let mut prg = vec![0xEA; 0x4000];
//! prg[0x3FFC] = 0x00;
//! prg[0x3FFD] = 0xC0;
//!
//! let mut memory = MappedMemory::new();
//! // Mirror the 16KB image across the 32KB window at 0x8000
//! memory
//!     .add_device(0x8000, Box::new(RomDevice::mirrored(prg, 0x8000)))
//!     .unwrap();
//!
//! assert_eq!(memory.read(0x8000), memory.read(0xC000));
//!
//! let cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0xC000);
//! ```

use log::debug;

use crate::{MemoryBus, MemoryImage};

pub mod rom;

pub use rom::RomDevice;

/// Abstract interface for memory-mapped hardware devices.
///
/// The mapper calls these methods with an offset relative to the device's
/// base address (0 to size-1), so a device does not know where it is mapped.
///
/// `read` takes `&self`. Devices whose reads have side effects (clearing a
/// status latch, advancing a shift register) keep that state in a `Cell` or
/// `RefCell`.
///
/// # Examples
///
/// ```rust
/// use nes6502::Device;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
/// }
/// ```
pub trait Device {
    /// Read byte from device at offset relative to device base address.
    fn read(&self, offset: u16) -> u8;

    /// Write byte to device at offset relative to device base address.
    fn write(&mut self, offset: u16, value: u8);

    /// Return size of device's address window in bytes.
    fn size(&self) -> u16;
}

/// Error returned when device registration fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// Address range overlaps with an existing device.
    #[error(
        "device at 0x{new_base:04X} ({new_size} bytes) overlaps device at 0x{existing_base:04X} ({existing_size} bytes)"
    )]
    Overlap {
        /// Base address of the new device
        new_base: u16,
        /// Size of the new device
        new_size: u16,
        /// Base address of the conflicting existing device
        existing_base: u16,
        /// Size of the conflicting existing device
        existing_size: u16,
    },

    /// The device reports a zero-byte window.
    #[error("device at 0x{base:04X} has no addressable bytes")]
    EmptyDevice {
        /// Requested base address
        base: u16,
    },

    /// The window would run past 0xFFFF.
    #[error("device at 0x{base:04X} ({size} bytes) extends past 0xFFFF")]
    OutOfRange {
        /// Requested base address
        base: u16,
        /// Size of the device
        size: u16,
    },
}

/// Internal mapping of a device to a base address.
struct DeviceMapping {
    base: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    /// Exclusive end of the window, widened so a window ending at 0xFFFF fits.
    fn end(&self) -> u32 {
        self.base as u32 + self.device.size() as u32
    }

    fn contains(&self, addr: u16) -> bool {
        addr >= self.base && (addr as u32) < self.end()
    }
}

/// Memory mapper that routes accesses to registered devices.
///
/// `MappedMemory` implements [`MemoryBus`]. Addresses inside a registered
/// window go to that device; all other addresses read and write the backing
/// [`MemoryImage`].
///
/// # Examples
///
/// ```rust
/// use nes6502::{MappedMemory, MemoryBus, RomDevice};
///
/// let mut memory = MappedMemory::new();
/// memory
///     .add_device(0x8000, Box::new(RomDevice::new(vec![0x42; 0x100])))
///     .unwrap();
///
/// // Plain RAM outside the window
/// memory.write(0x1234, 0x99);
/// assert_eq!(memory.read(0x1234), 0x99);
///
/// // ROM ignores writes
/// memory.write(0x8000, 0x00);
/// assert_eq!(memory.read(0x8000), 0x42);
/// ```
pub struct MappedMemory {
    devices: Vec<DeviceMapping>,
    ram: MemoryImage,
}

impl MappedMemory {
    /// Create a mapper with no devices over a zeroed image.
    pub fn new() -> Self {
        Self::with_image(MemoryImage::new())
    }

    /// Create a mapper over an already populated image.
    pub fn with_image(ram: MemoryImage) -> Self {
        Self {
            devices: Vec::new(),
            ram,
        }
    }

    /// Register a device at the specified base address.
    ///
    /// The device occupies `base..base + device.size()`.
    ///
    /// # Errors
    ///
    /// * `DeviceError::EmptyDevice` - the device has size 0
    /// * `DeviceError::OutOfRange` - the window runs past 0xFFFF
    /// * `DeviceError::Overlap` - the window collides with a registered device
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nes6502::{DeviceError, MappedMemory, RomDevice};
    ///
    /// let mut memory = MappedMemory::new();
    /// memory.add_device(0x8000, Box::new(RomDevice::new(vec![0; 0x4000]))).unwrap();
    ///
    /// let result = memory.add_device(0xA000, Box::new(RomDevice::new(vec![0; 0x100])));
    /// assert!(matches!(result, Err(DeviceError::Overlap { .. })));
    /// ```
    pub fn add_device(&mut self, base: u16, device: Box<dyn Device>) -> Result<(), DeviceError> {
        let size = device.size();
        if size == 0 {
            return Err(DeviceError::EmptyDevice { base });
        }

        let new_end = base as u32 + size as u32;
        if new_end > 0x1_0000 {
            return Err(DeviceError::OutOfRange { base, size });
        }

        // Half-open ranges overlap if each starts before the other ends
        if let Some(existing) = self
            .devices
            .iter()
            .find(|m| (base as u32) < m.end() && new_end > m.base as u32)
        {
            return Err(DeviceError::Overlap {
                new_base: base,
                new_size: size,
                existing_base: existing.base,
                existing_size: existing.device.size(),
            });
        }

        debug!(
            "mapped device at 0x{:04X}-0x{:04X}",
            base,
            new_end.saturating_sub(1)
        );
        self.devices.push(DeviceMapping { base, device });
        Ok(())
    }

    /// Copy bytes into the backing image, bypassing devices.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        self.ram.load(addr, data);
    }

    /// The backing image.
    pub fn image(&self) -> &MemoryImage {
        &self.ram
    }

    /// Mutable access to the backing image.
    pub fn image_mut(&mut self) -> &mut MemoryImage {
        &mut self.ram
    }

    /// Number of registered devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    fn find_device(&mut self, addr: u16) -> Option<(&mut dyn Device, u16)> {
        for mapping in &mut self.devices {
            if mapping.contains(addr) {
                let offset = addr - mapping.base;
                let device: &mut dyn Device = mapping.device.as_mut();
                return Some((device, offset));
            }
        }
        None
    }

    fn find_device_immut(&self, addr: u16) -> Option<(&dyn Device, u16)> {
        self.devices
            .iter()
            .find(|m| m.contains(addr))
            .map(|m| (m.device.as_ref(), addr - m.base))
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn read(&self, addr: u16) -> u8 {
        match self.find_device_immut(addr) {
            Some((device, offset)) => device.read(offset),
            None => self.ram.read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match self.find_device(addr) {
            Some((device, offset)) => device.write(offset, value),
            None => self.ram.write(addr, value),
        }
    }
}
