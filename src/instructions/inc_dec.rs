//! # Increment and Decrement Instructions
//!
//! INC and DEC read-modify-write a memory location; INX, INY, DEX and DEY
//! adjust an index register. All wrap modulo 256 and update N and Z.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes INC: mem[addr] ← mem[addr] + 1, updating N and Z.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    let result = cpu.memory.read(addr)?.wrapping_add(1);
    cpu.memory.write(addr, result)?;
    cpu.set_nz(result);
    Ok(())
}

/// Executes DEC: mem[addr] ← mem[addr] − 1, updating N and Z.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    let result = cpu.memory.read(addr)?.wrapping_sub(1);
    cpu.memory.write(addr, result)?;
    cpu.set_nz(result);
    Ok(())
}

/// Executes INX: X ← X + 1, updating N and Z.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    let result = cpu.x;
    cpu.set_nz(result);
}

/// Executes INY: Y ← Y + 1, updating N and Z.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    let result = cpu.y;
    cpu.set_nz(result);
}

/// Executes DEX: X ← X − 1, updating N and Z.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    let result = cpu.x;
    cpu.set_nz(result);
}

/// Executes DEY: Y ← Y − 1, updating N and Z.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    let result = cpu.y;
    cpu.set_nz(result);
}
