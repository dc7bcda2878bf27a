//! tinyz80 - a minimal Z80-style 8-bit CPU interpreter
//!
//! This library provides a fetch-decode-execute engine over a flat,
//! bounds-checked memory array: a small register file (PC, SP, HL, A)
//! and a 256-entry opcode table covering immediate loads, INC/DEC on the
//! accumulator, an indirect jump, and a downward-growing byte stack with
//! CALL/RET subroutine linkage.
//!
//! The CPU owns its registers only; memory is a separate value passed to
//! [`Cpu::step`], so independent emulator instances share nothing. The
//! caller sets `pc` and `sp` before the first step and decides when to
//! stop stepping: the engine has no halt state.
//!
//! ```
//! use tinyz80::{Cpu, Memory};
//!
//! let mut memory = Memory::default();
//! memory.load(0, &[0x3E, 0x41, 0x3C]).unwrap(); // LD A,0x41; INC A
//! let mut cpu = Cpu::new();
//! cpu.step(&mut memory).unwrap();
//! cpu.step(&mut memory).unwrap();
//! assert_eq!(cpu.a, 0x42);
//! ```

pub mod cpu;
pub mod memory;

pub use cpu::{Cpu, OPCODE_TABLE};
pub use memory::{Memory, MemoryError, Result, MEMORY_SIZE};
