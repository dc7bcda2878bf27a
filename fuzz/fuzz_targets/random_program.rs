#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyz80::{Cpu, Memory};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Load the fuzz input as a program image
    let mut memory = Memory::default();
    let copy_len = std::cmp::min(data.len(), 0x8000);
    memory.load(0, &data[..copy_len]).unwrap();

    let mut cpu = Cpu::new();
    cpu.sp = 0xFF00; // Set up stack in safe area

    // Execute a bounded number of instructions; the only acceptable
    // failure mode is a clean Result, never a panic.
    for _ in 0..10_000 {
        if cpu.step(&mut memory).is_err() {
            break;
        }
        if cpu.pc as usize >= copy_len {
            break;
        }
    }

    // State accessors should never panic either
    let _ = cpu.hl();
});
