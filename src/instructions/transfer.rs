//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy between registers and update N and Z
//! on the destination. TXS copies X into SP and, uniquely, touches no
//! flags.

use crate::{MemoryBus, CPU};

/// Executes TAX: X ← A, updating N and Z.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    let result = cpu.x;
    cpu.set_nz(result);
}

/// Executes TAY: Y ← A, updating N and Z.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    let result = cpu.y;
    cpu.set_nz(result);
}

/// Executes TXA: A ← X, updating N and Z.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// Executes TYA: A ← Y, updating N and Z.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    let result = cpu.a;
    cpu.set_nz(result);
}

/// Executes TSX: X ← SP, updating N and Z.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    let result = cpu.x;
    cpu.set_nz(result);
}

/// Executes TXS: SP ← X. No flags.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
