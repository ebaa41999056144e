//! Interrupt kinds, vectors and the latched interrupt lines.
//!
//! The 2A03 samples /NMI and /IRQ on falling edges. The host scheduler raises
//! a line between calls to `step()`; the CPU checks the latched lines once at
//! the start of each step, before fetching.
//!
//! # Interrupt Sequence
//!
//! Hardware interrupts and BRK share the same sequence:
//!
//! 1. Push PC (high byte, then low byte)
//! 2. Push the packed status; B is set only for BRK
//! 3. Set the I flag
//! 4. Load PC from the vector (NMI: 0xFFFA, IRQ/BRK: 0xFFFE)
//!
//! **Total: 7 cycles.**
//!
//! # Example
//!
//! ```rust
//! use nes6502::{Interrupt, InterruptLines};
//!
//! let mut lines = InterruptLines::default();
//! lines.raise_irq();
//!
//! // Masked while I is set; stays latched
//! assert_eq!(lines.take(true), None);
//! assert_eq!(lines.take(false), Some(Interrupt::Irq));
//! assert_eq!(lines.take(false), None);
//! ```

/// Cycles taken by the interrupt entry sequence.
pub const INTERRUPT_CYCLES: u8 = 7;

/// The three vectors at the top of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector {
    /// Non-maskable interrupt handler (0xFFFA/B)
    Nmi,
    /// Power-on / reset entry point (0xFFFC/D)
    Reset,
    /// IRQ and BRK handler (0xFFFE/F)
    Irq,
}

impl Vector {
    /// Address of the vector's low byte.
    pub const fn address(self) -> u16 {
        match self {
            Vector::Nmi => 0xFFFA,
            Vector::Reset => 0xFFFC,
            Vector::Irq => 0xFFFE,
        }
    }
}

/// Sources that run the interrupt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// Non-maskable interrupt (PPU vblank on the NES)
    Nmi,
    /// Maskable interrupt request (APU frame counter, mappers)
    Irq,
    /// Software interrupt from the BRK instruction
    Brk,
}

impl Interrupt {
    /// Vector the handler address is read from. IRQ and BRK share one.
    pub const fn vector(self) -> Vector {
        match self {
            Interrupt::Nmi => Vector::Nmi,
            Interrupt::Irq | Interrupt::Brk => Vector::Irq,
        }
    }

    /// Whether the pushed status carries the B (push-source) bit.
    pub const fn pushes_break_bit(self) -> bool {
        matches!(self, Interrupt::Brk)
    }
}

/// Latched /NMI and /IRQ edges waiting to be serviced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterruptLines {
    nmi: bool,
    irq: bool,
}

impl InterruptLines {
    /// Latches an NMI edge. Serviced at the next step regardless of I.
    pub fn raise_nmi(&mut self) {
        self.nmi = true;
    }

    /// Latches an IRQ edge. Serviced at the first step where I is clear.
    pub fn raise_irq(&mut self) {
        self.irq = true;
    }

    /// Withdraws a pending IRQ that has not been serviced yet.
    pub fn clear_irq(&mut self) {
        self.irq = false;
    }

    /// Drops every pending edge.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether an NMI is waiting.
    pub fn nmi_pending(&self) -> bool {
        self.nmi
    }

    /// Whether an IRQ is waiting.
    pub fn irq_pending(&self) -> bool {
        self.irq
    }

    /// Consumes the interrupt to service this step, if any. NMI wins over IRQ.
    pub fn take(&mut self, interrupt_disable: bool) -> Option<Interrupt> {
        if self.nmi {
            self.nmi = false;
            Some(Interrupt::Nmi)
        } else if self.irq && !interrupt_disable {
            self.irq = false;
            Some(Interrupt::Irq)
        } else {
            None
        }
    }
}
