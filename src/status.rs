//! # Processor Status
//!
//! The 6502 status register is tracked as named booleans while the CPU runs and
//! only packed into a byte when it crosses the stack (PHP, PLP, BRK, RTI and
//! hardware interrupts).
//!
//! ## Packed Layout (NV1B DIZC)
//!
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: always 1 when pushed
//! - Bit 4: B, the push source (1 = PHP/BRK, 0 = IRQ/NMI)
//! - Bit 3: D (Decimal, ignored by the 2A03)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

bitflags! {
    /// Packed status byte as it appears on the stack.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// Processor flags as individual booleans.
///
/// The B and unused bits are not stored: they only exist in the pushed byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// Carry (unsigned overflow, or "no borrow" after subtraction)
    pub c: bool,
    /// Zero
    pub z: bool,
    /// Interrupt Disable (masks IRQ, never NMI)
    pub i: bool,
    /// Decimal mode; stored but has no effect on arithmetic
    pub d: bool,
    /// Overflow (signed overflow, or bit 6 of the BIT operand)
    pub v: bool,
    /// Negative (bit 7 of the last result)
    pub n: bool,
}

impl Flags {
    /// Flags after RESET: interrupts disabled, everything else clear.
    pub const RESET: Flags = Flags {
        c: false,
        z: false,
        i: true,
        d: false,
        v: false,
        n: false,
    };

    /// Updates Z and N from a result byte.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.z = value == 0;
        self.n = value & 0x80 != 0;
    }

    /// Packs the flags for a push.
    ///
    /// `break_bit` selects the push source: `true` for PHP and BRK,
    /// `false` for hardware interrupts. Bit 5 is always set.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::Flags;
    ///
    /// let flags = Flags { c: true, ..Flags::default() };
    /// assert_eq!(flags.to_packed(true), 0b0011_0001);
    /// assert_eq!(flags.to_packed(false), 0b0010_0001);
    /// ```
    pub fn to_packed(self, break_bit: bool) -> u8 {
        let mut packed = StatusFlags::UNUSED;
        packed.set(StatusFlags::CARRY, self.c);
        packed.set(StatusFlags::ZERO, self.z);
        packed.set(StatusFlags::INTERRUPT_DISABLE, self.i);
        packed.set(StatusFlags::DECIMAL, self.d);
        packed.set(StatusFlags::BREAK, break_bit);
        packed.set(StatusFlags::OVERFLOW, self.v);
        packed.set(StatusFlags::NEGATIVE, self.n);
        packed.bits()
    }

    /// Unpacks a byte pulled from the stack. Bits 4 and 5 are discarded.
    pub fn from_packed(value: u8) -> Self {
        let packed = StatusFlags::from_bits_retain(value);
        Self {
            c: packed.contains(StatusFlags::CARRY),
            z: packed.contains(StatusFlags::ZERO),
            i: packed.contains(StatusFlags::INTERRUPT_DISABLE),
            d: packed.contains(StatusFlags::DECIMAL),
            v: packed.contains(StatusFlags::OVERFLOW),
            n: packed.contains(StatusFlags::NEGATIVE),
        }
    }
}
