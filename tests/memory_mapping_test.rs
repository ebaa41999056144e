//! Integration tests for running the CPU over a device-mapped bus.
//!
//! Models a minimal NES-style layout: RAM at the bottom, a write-logging
//! register port at 0x2000, and a 16KB PRG ROM mirrored into 0x8000-0xFFFF.

use std::cell::RefCell;
use std::rc::Rc;

use nes6502::{Device, DeviceError, MappedMemory, MemoryBus, RomDevice, CPU};

/// Eight-byte register window that records every write.
struct PortLog {
    writes: Rc<RefCell<Vec<(u16, u8)>>>,
    status: u8,
}

impl Device for PortLog {
    fn read(&self, offset: u16) -> u8 {
        if offset == 2 {
            self.status
        } else {
            0
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.writes.borrow_mut().push((offset, value));
    }

    fn size(&self) -> u16 {
        8
    }
}

fn prg_with(program: &[u8]) -> Vec<u8> {
    let mut prg = vec![0xEA; 0x4000];
    prg[..program.len()].copy_from_slice(program);
    // Reset vector -> 0xC000, the upper mirror
    prg[0x3FFC] = 0x00;
    prg[0x3FFD] = 0xC0;
    prg
}

fn setup(program: &[u8]) -> (CPU<MappedMemory>, Rc<RefCell<Vec<(u16, u8)>>>) {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let mut memory = MappedMemory::new();
    memory
        .add_device(
            0x2000,
            Box::new(PortLog {
                writes: Rc::clone(&writes),
                status: 0x80,
            }),
        )
        .unwrap();
    memory
        .add_device(0x8000, Box::new(RomDevice::mirrored(prg_with(program), 0x8000)))
        .unwrap();
    (CPU::new(memory), writes)
}

#[test]
fn test_reset_vector_read_through_rom_mirror() {
    let (cpu, _) = setup(&[]);
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.memory().read(0xFFFD), cpu.memory().read(0xBFFD));
}

#[test]
fn test_program_writes_reach_device_and_ram() {
    // LDA #$42; STA $2000; STA $0200; LDA $2002
    let (mut cpu, writes) = setup(&[0xA9, 0x42, 0x8D, 0x00, 0x20, 0x8D, 0x00, 0x02, 0xAD, 0x02, 0x20]);

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    assert_eq!(*writes.borrow(), vec![(0, 0x42)]);
    assert_eq!(cpu.memory().read(0x0200), 0x42);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0xC00B);
}

#[test]
fn test_rom_ignores_cpu_writes() {
    // STA $8000
    let (mut cpu, _) = setup(&[0xA9, 0x00, 0x8D, 0x00, 0x80]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x8000), 0xA9);
}

#[test]
fn test_stack_lives_in_fallthrough_ram() {
    // JSR $C010 from 0xC000
    let (mut cpu, writes) = setup(&[0x20, 0x10, 0xC0]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0xC010);
    assert_eq!(cpu.memory().read(0x01FD), 0xC0);
    assert_eq!(cpu.memory().image().read(0x01FC), 0x02);
    assert!(writes.borrow().is_empty());
}

#[test]
fn test_overlapping_registration_is_rejected() {
    let (cpu, _) = setup(&[]);
    let mut memory = cpu.into_memory();

    let result = memory.add_device(0xFFF0, Box::new(RomDevice::new(vec![0; 4])));
    assert!(matches!(result, Err(DeviceError::Overlap { existing_base: 0x8000, .. })));
    assert_eq!(memory.device_count(), 2);
}

#[test]
fn test_loader_writes_bypass_devices() {
    let mut memory = MappedMemory::new();
    memory
        .add_device(0x6000, Box::new(RomDevice::new(vec![0x11; 0x10])))
        .unwrap();
    memory.load(0x6000, &[0x22]);

    assert_eq!(memory.read(0x6000), 0x11);
    assert_eq!(memory.image().read(0x6000), 0x22);
}
