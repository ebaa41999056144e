//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary CPU state and memory contents, then steps a few times
//! under every illegal-opcode policy looking for panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::{CpuConfig, IllegalOpcodePolicy, MemoryImage, Vector, CPU};

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    irq: bool,
    nmi: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute and indexed operands
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    policy: u8,
    page_wrap: bool,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = MemoryImage::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.set_vector(Vector::Nmi, 0x8000);
    memory.set_vector(Vector::Irq, 0x8000);
    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let policy = match input.policy % 3 {
        0 => IllegalOpcodePolicy::Halt,
        1 => IllegalOpcodePolicy::Skip,
        _ => IllegalOpcodePolicy::Report,
    };
    let config = CpuConfig::default()
        .with_illegal_opcode_policy(policy)
        .with_indirect_jmp_page_wrap(input.page_wrap);

    let mut cpu = CPU::with_config(memory, config);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    if input.cpu_state.irq {
        cpu.raise_irq();
    }
    if input.cpu_state.nmi {
        cpu.raise_nmi();
    }

    for _ in 0..(input.steps % 32) {
        let before = cpu.cycles();
        match cpu.step() {
            Ok(cycles) => {
                assert!((2..=7).contains(&cycles));
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            Err(_) => assert_eq!(cpu.cycles(), before),
        }
        // Bit 5 always reads as set, B never does
        assert_eq!(cpu.status() & 0x30, 0x20);
    }
});
