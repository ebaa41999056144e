//! WebAssembly bindings for the NES CPU core.
//!
//! Exposes a JavaScript-callable wrapper so a browser front end can load a
//! program, drive the CPU and inspect its state.

pub mod api;

pub use api::Nes6502;
