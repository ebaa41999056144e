//! Program ROM device.
//!
//! NES cartridges with a single 16KB PRG bank appear twice in the 32KB
//! window at 0x8000, so the device mirrors its contents across whatever
//! window it is given.

use super::Device;

/// Read-only, mirrored memory device.
///
/// Writes are ignored. Reads at `offset` return `data[offset % data.len()]`.
///
/// # Examples
///
/// ```rust
/// use nes6502::{Device, RomDevice};
///
/// let mut rom = RomDevice::mirrored(vec![0x01, 0x02], 4);
/// assert_eq!(rom.size(), 4);
/// assert_eq!(rom.read(3), 0x02);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.read(0), 0x01);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
    window: u16,
}

impl RomDevice {
    /// Create a ROM whose window is exactly its data.
    ///
    /// Data longer than 0xFFFF bytes is truncated to fit the window.
    pub fn new(data: Vec<u8>) -> Self {
        let window = u16::try_from(data.len()).unwrap_or(u16::MAX);
        Self { data, window }
    }

    /// Create a ROM that repeats `data` across a `window`-byte range.
    ///
    /// ```rust
    /// use nes6502::{Device, RomDevice};
    ///
    /// // 16KB PRG bank mapped into the 32KB cartridge window
    /// let mut prg = vec![0; 0x4000];
    /// prg[0] = 0x4C;
    /// let rom = RomDevice::mirrored(prg, 0x8000);
    ///
    /// assert_eq!(rom.read(0x0000), 0x4C);
    /// assert_eq!(rom.read(0x4000), 0x4C);
    /// ```
    pub fn mirrored(data: Vec<u8>, window: u16) -> Self {
        Self { data, window }
    }

    /// Length of the underlying image, before mirroring.
    pub fn image_len(&self) -> usize {
        self.data.len()
    }
}

impl Device for RomDevice {
    fn read(&self, offset: u16) -> u8 {
        if self.data.is_empty() {
            return 0;
        }
        self.data[offset as usize % self.data.len()]
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> u16 {
        self.window
    }
}
