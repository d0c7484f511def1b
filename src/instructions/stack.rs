//! # Stack Operations
//!
//! PHA, PHP, PLA and PLP move the accumulator or the packed status byte
//! between the register file and the stack page ($0100-$01FF). Pushes
//! write then decrement SP; pulls increment SP then read, both modulo
//! 256 within the page.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes PHA: pushes the accumulator. No flags.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.push_byte(cpu.a)
}

/// Executes PHP: pushes the packed status byte with bit 5 and B both set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let status = cpu.pushed_status(true);
    cpu.push_byte(status)
}

/// Executes PLA: pulls into the accumulator, updating N and Z.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let value = cpu.pull_byte()?;
    cpu.a = value;
    cpu.set_nz(value);
    Ok(())
}

/// Executes PLP: pulls the status byte. B and bit 5 are discarded; the
/// other six flags are restored.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let status = cpu.pull_byte()?;
    cpu.apply_pulled_status(status);
    Ok(())
}
