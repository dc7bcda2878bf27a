//! Fetch-decode-execute engine.
//!
//! [`Cpu`] holds the register file; memory is passed explicitly to
//! [`Cpu::step`], which executes exactly one instruction per call.
//! Dispatch goes through the 256-entry [`OPCODE_TABLE`]; bytes with no
//! handler are architectural no-ops, reported through the `log` facade
//! and the [`Cpu::unknown_opcodes`] counter.

use crate::memory::{Memory, MemoryError};

pub mod opcodes;

pub use opcodes::{OpcodeEntry, OPCODE_TABLE};

/// CPU register state.
///
/// All registers are plain unsigned fields: 8-bit values wrap modulo 256,
/// 16-bit values modulo 65536. The HL pair is stored as its two halves;
/// `hl()`/`set_hl()` keep both views consistent.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Accumulator.
    pub a: u8,
    /// High byte of the HL pair.
    pub h: u8,
    /// Low byte of the HL pair.
    pub l: u8,
    /// Stack pointer. Points at the last pushed byte; the stack grows
    /// downward (push decrements first, pop increments after reading).
    pub sp: u16,
    /// Program counter. Points at the next byte to fetch.
    pub pc: u16,
    /// Count of instructions executed to completion since construction
    /// or reset. An instruction interrupted by a memory error is not
    /// counted.
    pub steps: u64,
    /// Count of fetched bytes that had no opcode handler.
    pub unknown_opcodes: u64,
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            a: 0,
            h: 0,
            l: 0,
            sp: 0xFFFF,
            pc: 0,
            steps: 0,
            unknown_opcodes: 0,
        }
    }

    /// Reset the CPU to its initial state.
    pub fn reset(&mut self) {
        self.a = 0;
        self.h = 0;
        self.l = 0;
        self.sp = 0xFFFF;
        self.pc = 0;
        self.steps = 0;
        self.unknown_opcodes = 0;
    }

    // ========== Register pair getters/setters ==========

    pub fn hl(&self) -> u16 {
        (self.h as u16) << 8 | self.l as u16
    }

    pub fn set_hl(&mut self, val: u16) {
        self.h = (val >> 8) as u8;
        self.l = val as u8;
    }

    // ========== Memory access helpers ==========

    fn fetch_byte(&mut self, memory: &Memory) -> Result<u8, MemoryError> {
        let byte = memory.read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(byte)
    }

    // Immediate words sit high byte first in the instruction stream.
    fn fetch_word(&mut self, memory: &Memory) -> Result<u16, MemoryError> {
        let high = self.fetch_byte(memory)? as u16;
        let low = self.fetch_byte(memory)? as u16;
        Ok((high << 8) | low)
    }

    // Stack words are little-endian: low byte at the lower address.
    fn push(&mut self, memory: &mut Memory, value: u16) -> Result<(), MemoryError> {
        self.sp = self.sp.wrapping_sub(1);
        memory.write(self.sp, (value >> 8) as u8)?;
        self.sp = self.sp.wrapping_sub(1);
        memory.write(self.sp, value as u8)
    }

    fn pop(&mut self, memory: &Memory) -> Result<u16, MemoryError> {
        let low = memory.read(self.sp)? as u16;
        self.sp = self.sp.wrapping_add(1);
        let high = memory.read(self.sp)? as u16;
        self.sp = self.sp.wrapping_add(1);
        Ok((high << 8) | low)
    }

    // ========== Main execution ==========

    /// Execute one instruction.
    ///
    /// Fetches the byte at `pc`, advances `pc` past it (16-bit wraparound),
    /// and runs the handler from [`OPCODE_TABLE`]. Handlers may fetch
    /// further operand bytes, mutate registers, and read/write memory.
    /// Any out-of-range access is propagated; registers keep whatever
    /// state the handler reached before the failing access.
    pub fn step(&mut self, memory: &mut Memory) -> Result<(), MemoryError> {
        let at = self.pc;
        let opcode = self.fetch_byte(memory)?;
        let entry = &OPCODE_TABLE[opcode as usize];
        if entry.known {
            log::trace!("{:#06x}: {}", at, entry.mnemonic);
        } else {
            self.unknown_opcodes += 1;
            log::debug!("{:#06x}: unhandled opcode {:#04x}, treated as no-op", at, opcode);
        }
        (entry.handler)(self, memory)?;
        self.steps += 1;
        Ok(())
    }

    /// Execute up to `max_steps` instructions, returning the number
    /// executed.
    ///
    /// There is no halt state, so the caller bounds execution; the first
    /// memory error stops the loop and is returned, with [`Cpu::steps`]
    /// recording how far execution got.
    pub fn run(&mut self, memory: &mut Memory, max_steps: u64) -> Result<u64, MemoryError> {
        let mut executed = 0;
        while executed < max_steps {
            self.step(memory)?;
            executed += 1;
        }
        Ok(executed)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
