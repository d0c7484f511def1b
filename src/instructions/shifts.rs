//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate either on the accumulator or on a memory
//! location (read-modify-write). The decoded operand carries the target
//! selector, so each handler is a single bit-twiddling expression applied
//! through `modify`.

use crate::cpu::Operand;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes ASL: shift left, 0 into bit 0, old bit 7 into C. N and Z from
/// the result.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, target: Operand) -> Result<(), ExecutionError> {
    modify(cpu, target, |value, _carry| (value << 1, (value & 0x80) != 0))
}

/// Executes LSR: shift right, 0 into bit 7, old bit 0 into C. N and Z
/// from the result (N is therefore always cleared).
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, target: Operand) -> Result<(), ExecutionError> {
    modify(cpu, target, |value, _carry| (value >> 1, (value & 0x01) != 0))
}

/// Executes ROL: rotate left through carry. Bit 0 ← old C, C ← old bit 7.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, target: Operand) -> Result<(), ExecutionError> {
    modify(cpu, target, |value, carry| {
        ((value << 1) | carry as u8, (value & 0x80) != 0)
    })
}

/// Executes ROR: rotate right through carry. Bit 7 ← old C, C ← old bit 0.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, target: Operand) -> Result<(), ExecutionError> {
    modify(cpu, target, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), (value & 0x01) != 0)
    })
}

/// Applies a shift to the accumulator or to memory, writing back the
/// result and updating C, N and Z.
///
/// The operation receives the old value and the incoming carry and
/// returns the new value and the outgoing carry.
fn modify<M, F>(cpu: &mut CPU<M>, target: Operand, operation: F) -> Result<(), ExecutionError>
where
    M: MemoryBus,
    F: Fn(u8, bool) -> (u8, bool),
{
    let result = match target {
        Operand::Accumulator => {
            let (result, carry_out) = operation(cpu.a, cpu.flag_c);
            cpu.a = result;
            cpu.flag_c = carry_out;
            result
        }
        Operand::Address { addr, .. } => {
            let value = cpu.memory.read(addr)?;
            let (result, carry_out) = operation(value, cpu.flag_c);
            cpu.memory.write(addr, result)?;
            cpu.flag_c = carry_out;
            result
        }
        _ => unreachable!("shift target is neither accumulator nor memory"),
    };

    cpu.set_nz(result);
    Ok(())
}
