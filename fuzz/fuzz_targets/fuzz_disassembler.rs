//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte sequences to the slice disassembler and checks that
//! the decoded instructions tile the input exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::disassemble;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let instructions = disassemble(&input.bytes, input.start_address);

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);

        let size = instr.size_bytes();
        assert!((1..=3).contains(&size));
        assert_eq!(instr.operand_bytes.len(), size as usize - 1);

        // Rendering must never panic
        let _ = instr.to_string();

        total_size += size as usize;
        expected_address = expected_address.wrapping_add(size as u16);
    }

    assert_eq!(total_size, input.bytes.len());
});
