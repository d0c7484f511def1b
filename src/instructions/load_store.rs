//! # Load and Store Instructions
//!
//! LDA, LDX and LDY load an operand byte into their register and update
//! N and Z. STA, STX and STY write their register to the effective
//! address and leave the flags alone.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes LDA: A ← M, updating N and Z.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.a = value;
    cpu.set_nz(value);
}

/// Executes LDX: X ← M, updating N and Z.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.x = value;
    cpu.set_nz(value);
}

/// Executes LDY: Y ← M, updating N and Z.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.y = value;
    cpu.set_nz(value);
}

/// Executes STA: mem[addr] ← A. No flags.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    cpu.memory.write(addr, cpu.a)?;
    Ok(())
}

/// Executes STX: mem[addr] ← X. No flags.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    cpu.memory.write(addr, cpu.x)?;
    Ok(())
}

/// Executes STY: mem[addr] ← Y. No flags.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    cpu.memory.write(addr, cpu.y)?;
    Ok(())
}
