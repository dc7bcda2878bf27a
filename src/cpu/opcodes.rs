//! The 256-entry opcode dispatch table.
//!
//! Every possible opcode byte indexes a slot; slots without a real
//! instruction hold the no-op handler and are marked `known: false` so
//! the step loop can report them. Operand word convention: immediates
//! are read high byte first from the instruction stream, while words on
//! the stack are stored low byte at the lower address. Both follow the
//! behavior of the modeled engine and must not be "fixed" independently.

use crate::cpu::Cpu;
use crate::memory::{Memory, MemoryError};

pub type Handler = fn(&mut Cpu, &mut Memory) -> Result<(), MemoryError>;

/// One slot of [`OPCODE_TABLE`].
#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    /// Mnemonic, `"???"` for bytes with no instruction.
    pub mnemonic: &'static str,
    pub handler: Handler,
    /// Whether this byte is a real instruction. Unknown bytes still
    /// execute (as no-ops) but are counted and logged by the step loop.
    pub known: bool,
}

/// Dispatch table indexed by opcode byte.
pub static OPCODE_TABLE: [OpcodeEntry; 256] = build_table();

const fn entry(mnemonic: &'static str, handler: Handler) -> OpcodeEntry {
    OpcodeEntry {
        mnemonic,
        handler,
        known: true,
    }
}

const fn build_table() -> [OpcodeEntry; 256] {
    let mut table = [OpcodeEntry {
        mnemonic: "???",
        handler: op_nop,
        known: false,
    }; 256];

    table[0x00] = entry("NOP", op_nop);
    table[0x21] = entry("LD HL,nn", op_ld_hl_nn);
    table[0x3C] = entry("INC A", op_inc_a);
    table[0x3D] = entry("DEC A", op_dec_a);
    table[0x3E] = entry("LD A,n", op_ld_a_n);
    table[0xC9] = entry("RET", op_ret);
    table[0xCD] = entry("CALL nn", op_call_nn);
    table[0xE1] = entry("POP HL", op_pop_hl);
    table[0xE5] = entry("PUSH HL", op_push_hl);
    table[0xE9] = entry("JP (HL)", op_jp_hl);

    table
}

// ========== Handlers ==========

fn op_nop(_cpu: &mut Cpu, _memory: &mut Memory) -> Result<(), MemoryError> {
    Ok(())
}

fn op_ld_hl_nn(cpu: &mut Cpu, memory: &mut Memory) -> Result<(), MemoryError> {
    let nn = cpu.fetch_word(memory)?;
    cpu.set_hl(nn);
    Ok(())
}

fn op_ld_a_n(cpu: &mut Cpu, memory: &mut Memory) -> Result<(), MemoryError> {
    cpu.a = cpu.fetch_byte(memory)?;
    Ok(())
}

fn op_inc_a(cpu: &mut Cpu, _memory: &mut Memory) -> Result<(), MemoryError> {
    cpu.a = cpu.a.wrapping_add(1);
    Ok(())
}

fn op_dec_a(cpu: &mut Cpu, _memory: &mut Memory) -> Result<(), MemoryError> {
    cpu.a = cpu.a.wrapping_sub(1);
    Ok(())
}

fn op_jp_hl(cpu: &mut Cpu, _memory: &mut Memory) -> Result<(), MemoryError> {
    cpu.pc = cpu.hl();
    Ok(())
}

fn op_push_hl(cpu: &mut Cpu, memory: &mut Memory) -> Result<(), MemoryError> {
    let hl = cpu.hl();
    cpu.push(memory, hl)
}

fn op_pop_hl(cpu: &mut Cpu, memory: &mut Memory) -> Result<(), MemoryError> {
    let value = cpu.pop(memory)?;
    cpu.set_hl(value);
    Ok(())
}

fn op_call_nn(cpu: &mut Cpu, memory: &mut Memory) -> Result<(), MemoryError> {
    // The return address (the byte after both operands) is pushed before
    // the operand bytes themselves are consumed.
    let ret = cpu.pc.wrapping_add(2);
    cpu.push(memory, ret)?;
    let target = cpu.fetch_word(memory)?;
    cpu.pc = target;
    Ok(())
}

fn op_ret(cpu: &mut Cpu, memory: &mut Memory) -> Result<(), MemoryError> {
    cpu.pc = cpu.pop(memory)?;
    Ok(())
}
