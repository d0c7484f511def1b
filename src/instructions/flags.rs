//! # Status Flag Manipulation Instructions
//!
//! Direct flag setters and clearers: CLC, SEC, CLI, SEI, CLD, SED, CLV.
//! All use implied addressing, cost 2 cycles, and change exactly one flag.
//! There is no SEV; overflow can only be set by arithmetic (or BIT).

use crate::{MemoryBus, CPU};

/// Executes CLC: C ← 0.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = false;
}

/// Executes SEC: C ← 1.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = true;
}

/// Executes CLI: I ← 0, unmasking IRQs.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = false;
}

/// Executes SEI: I ← 1, masking IRQs.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = true;
}

/// Executes CLD: D ← 0.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = false;
}

/// Executes SED: D ← 1.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = true;
}

/// Executes CLV: V ← 0.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_v = false;
}
