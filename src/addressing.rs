//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502. The mode
//! attached to an opcode determines how the bytes following it are
//! interpreted: as nothing, as an immediate value, or as the ingredients
//! of an effective address.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction (CLC, RTS, NOP).
    Implied,

    /// Operates directly on the accumulator (ASL A, LSR A, ROL A, ROR A).
    Accumulator,

    /// 8-bit constant follows the opcode. Example: `LDA #$10`.
    Immediate,

    /// 8-bit address into the zero page ($00-$FF). Example: `LDA $80`.
    ZeroPage,

    /// Zero page address plus X, wrapping within the zero page.
    /// Example: `LDA $80,X`.
    ZeroPageX,

    /// Zero page address plus Y, wrapping within the zero page.
    /// Example: `LDX $80,Y`.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the
    /// address of the next instruction.
    Relative,

    /// Full 16-bit little-endian address. Example: `JMP $1234`.
    Absolute,

    /// 16-bit address plus X. May incur a +1 cycle page-crossing penalty
    /// on read instructions. Example: `LDA $1234,X`.
    AbsoluteX,

    /// 16-bit address plus Y. May incur a +1 cycle page-crossing penalty
    /// on read instructions. Example: `LDA $1234,Y`.
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only used by JMP, and subject to the
    /// NMOS page-wrap bug when the pointer sits at $xxFF.
    Indirect,

    /// Indexed indirect: the operand plus X selects a zero-page pointer,
    /// which is dereferenced. Example: `LDA ($40,X)`.
    IndirectX,

    /// Indirect indexed: the operand selects a zero-page pointer whose
    /// value plus Y is the effective address. May incur a +1 cycle
    /// page-crossing penalty on reads. Example: `LDA ($40),Y`.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes this mode consumes after the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
