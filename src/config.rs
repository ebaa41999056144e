//! # CPU Configuration
//!
//! Knobs the host emulator chooses once, before running: what to do when the
//! CPU fetches an undefined opcode, and whether to reproduce the NMOS indirect
//! JMP page-wrap defect.

/// What the CPU does when it fetches an opcode with no defined instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IllegalOpcodePolicy {
    /// Stop on the offending byte. `step()` returns `IllegalOpcode` once and
    /// `Halted` afterwards, until `reset()`.
    #[default]
    Halt,

    /// Treat the byte as a one-byte, two-cycle NOP and keep going.
    Skip,

    /// Log it, step over the byte, and return `IllegalOpcode` so the caller
    /// can decide whether to continue.
    Report,
}

/// Execution options for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use nes6502::{CpuConfig, IllegalOpcodePolicy};
///
/// let config = CpuConfig::default()
///     .with_illegal_opcode_policy(IllegalOpcodePolicy::Skip)
///     .with_indirect_jmp_page_wrap(false);
///
/// assert_eq!(config.illegal_opcode_policy, IllegalOpcodePolicy::Skip);
/// assert!(!config.indirect_jmp_page_wrap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuConfig {
    /// Handling of undefined opcodes.
    pub illegal_opcode_policy: IllegalOpcodePolicy,

    /// Reproduce the hardware bug where `JMP ($xxFF)` fetches the high byte
    /// of the target from `$xx00` instead of the next page.
    pub indirect_jmp_page_wrap: bool,
}

impl CpuConfig {
    /// Sets the illegal opcode policy.
    pub fn with_illegal_opcode_policy(mut self, policy: IllegalOpcodePolicy) -> Self {
        self.illegal_opcode_policy = policy;
        self
    }

    /// Enables or disables the indirect JMP page-wrap defect.
    pub fn with_indirect_jmp_page_wrap(mut self, enabled: bool) -> Self {
        self.indirect_jmp_page_wrap = enabled;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            illegal_opcode_policy: IllegalOpcodePolicy::Halt,
            indirect_jmp_page_wrap: true,
        }
    }
}
