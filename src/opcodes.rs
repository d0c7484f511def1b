//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode metadata table that serves as
//! the single source of truth for 6502 instruction decoding:
//!
//! - **151 documented instructions** - official NMOS 6502 opcodes, each with
//!   its mnemonic, addressing mode and base cycle cost
//! - **105 unassigned opcodes** - represented as `None`
//!
//! Base cycle costs exclude the dynamic penalties (+1 branch taken, +1 page
//! crossing) that the execution loop adds. Instruction size is not stored;
//! it derives from the addressing mode via
//! [`AddressingMode::operand_bytes`].

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instruction mnemonics.
///
/// Dispatch is driven by an exhaustive match over this enum, so an opcode
/// that decodes successfully always reaches a handler; there is no "not yet
/// implemented" state.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
}

/// Static metadata for a single documented opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// How the bytes following the opcode are interpreted.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, before branch-taken and page-crossing penalties.
    /// Documented opcodes cost 2-7 cycles.
    pub base_cycles: u8,
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
    })
}

use AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Accumulator as ACC,
    Immediate as IMM, Implied as IMP, Indirect as IND, IndirectX as IZX,
    IndirectY as IZY, Relative as REL, ZeroPage as ZP, ZeroPageX as ZPX,
    ZeroPageY as ZPY,
};
use Mnemonic::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks the 105 bytes the documented NMOS 6502 leaves unassigned.
/// The table is a process-wide read-only constant; no synchronization is
/// needed to consult it.
///
/// # Examples
///
/// ```
/// use z6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = [
    /* 0x00 */ op(BRK, IMP, 7),
    /* 0x01 */ op(ORA, IZX, 6),
    /* 0x02 */ None,
    /* 0x03 */ None,
    /* 0x04 */ None,
    /* 0x05 */ op(ORA, ZP, 3),
    /* 0x06 */ op(ASL, ZP, 5),
    /* 0x07 */ None,
    /* 0x08 */ op(PHP, IMP, 3),
    /* 0x09 */ op(ORA, IMM, 2),
    /* 0x0A */ op(ASL, ACC, 2),
    /* 0x0B */ None,
    /* 0x0C */ None,
    /* 0x0D */ op(ORA, ABS, 4),
    /* 0x0E */ op(ASL, ABS, 6),
    /* 0x0F */ None,
    /* 0x10 */ op(BPL, REL, 2),
    /* 0x11 */ op(ORA, IZY, 5),
    /* 0x12 */ None,
    /* 0x13 */ None,
    /* 0x14 */ None,
    /* 0x15 */ op(ORA, ZPX, 4),
    /* 0x16 */ op(ASL, ZPX, 6),
    /* 0x17 */ None,
    /* 0x18 */ op(CLC, IMP, 2),
    /* 0x19 */ op(ORA, ABY, 4),
    /* 0x1A */ None,
    /* 0x1B */ None,
    /* 0x1C */ None,
    /* 0x1D */ op(ORA, ABX, 4),
    /* 0x1E */ op(ASL, ABX, 7),
    /* 0x1F */ None,
    /* 0x20 */ op(JSR, ABS, 6),
    /* 0x21 */ op(AND, IZX, 6),
    /* 0x22 */ None,
    /* 0x23 */ None,
    /* 0x24 */ op(BIT, ZP, 3),
    /* 0x25 */ op(AND, ZP, 3),
    /* 0x26 */ op(ROL, ZP, 5),
    /* 0x27 */ None,
    /* 0x28 */ op(PLP, IMP, 4),
    /* 0x29 */ op(AND, IMM, 2),
    /* 0x2A */ op(ROL, ACC, 2),
    /* 0x2B */ None,
    /* 0x2C */ op(BIT, ABS, 4),
    /* 0x2D */ op(AND, ABS, 4),
    /* 0x2E */ op(ROL, ABS, 6),
    /* 0x2F */ None,
    /* 0x30 */ op(BMI, REL, 2),
    /* 0x31 */ op(AND, IZY, 5),
    /* 0x32 */ None,
    /* 0x33 */ None,
    /* 0x34 */ None,
    /* 0x35 */ op(AND, ZPX, 4),
    /* 0x36 */ op(ROL, ZPX, 6),
    /* 0x37 */ None,
    /* 0x38 */ op(SEC, IMP, 2),
    /* 0x39 */ op(AND, ABY, 4),
    /* 0x3A */ None,
    /* 0x3B */ None,
    /* 0x3C */ None,
    /* 0x3D */ op(AND, ABX, 4),
    /* 0x3E */ op(ROL, ABX, 7),
    /* 0x3F */ None,
    /* 0x40 */ op(RTI, IMP, 6),
    /* 0x41 */ op(EOR, IZX, 6),
    /* 0x42 */ None,
    /* 0x43 */ None,
    /* 0x44 */ None,
    /* 0x45 */ op(EOR, ZP, 3),
    /* 0x46 */ op(LSR, ZP, 5),
    /* 0x47 */ None,
    /* 0x48 */ op(PHA, IMP, 3),
    /* 0x49 */ op(EOR, IMM, 2),
    /* 0x4A */ op(LSR, ACC, 2),
    /* 0x4B */ None,
    /* 0x4C */ op(JMP, ABS, 3),
    /* 0x4D */ op(EOR, ABS, 4),
    /* 0x4E */ op(LSR, ABS, 6),
    /* 0x4F */ None,
    /* 0x50 */ op(BVC, REL, 2),
    /* 0x51 */ op(EOR, IZY, 5),
    /* 0x52 */ None,
    /* 0x53 */ None,
    /* 0x54 */ None,
    /* 0x55 */ op(EOR, ZPX, 4),
    /* 0x56 */ op(LSR, ZPX, 6),
    /* 0x57 */ None,
    /* 0x58 */ op(CLI, IMP, 2),
    /* 0x59 */ op(EOR, ABY, 4),
    /* 0x5A */ None,
    /* 0x5B */ None,
    /* 0x5C */ None,
    /* 0x5D */ op(EOR, ABX, 4),
    /* 0x5E */ op(LSR, ABX, 7),
    /* 0x5F */ None,
    /* 0x60 */ op(RTS, IMP, 6),
    /* 0x61 */ op(ADC, IZX, 6),
    /* 0x62 */ None,
    /* 0x63 */ None,
    /* 0x64 */ None,
    /* 0x65 */ op(ADC, ZP, 3),
    /* 0x66 */ op(ROR, ZP, 5),
    /* 0x67 */ None,
    /* 0x68 */ op(PLA, IMP, 4),
    /* 0x69 */ op(ADC, IMM, 2),
    /* 0x6A */ op(ROR, ACC, 2),
    /* 0x6B */ None,
    /* 0x6C */ op(JMP, IND, 5),
    /* 0x6D */ op(ADC, ABS, 4),
    /* 0x6E */ op(ROR, ABS, 6),
    /* 0x6F */ None,
    /* 0x70 */ op(BVS, REL, 2),
    /* 0x71 */ op(ADC, IZY, 5),
    /* 0x72 */ None,
    /* 0x73 */ None,
    /* 0x74 */ None,
    /* 0x75 */ op(ADC, ZPX, 4),
    /* 0x76 */ op(ROR, ZPX, 6),
    /* 0x77 */ None,
    /* 0x78 */ op(SEI, IMP, 2),
    /* 0x79 */ op(ADC, ABY, 4),
    /* 0x7A */ None,
    /* 0x7B */ None,
    /* 0x7C */ None,
    /* 0x7D */ op(ADC, ABX, 4),
    /* 0x7E */ op(ROR, ABX, 7),
    /* 0x7F */ None,
    /* 0x80 */ None,
    /* 0x81 */ op(STA, IZX, 6),
    /* 0x82 */ None,
    /* 0x83 */ None,
    /* 0x84 */ op(STY, ZP, 3),
    /* 0x85 */ op(STA, ZP, 3),
    /* 0x86 */ op(STX, ZP, 3),
    /* 0x87 */ None,
    /* 0x88 */ op(DEY, IMP, 2),
    /* 0x89 */ None,
    /* 0x8A */ op(TXA, IMP, 2),
    /* 0x8B */ None,
    /* 0x8C */ op(STY, ABS, 4),
    /* 0x8D */ op(STA, ABS, 4),
    /* 0x8E */ op(STX, ABS, 4),
    /* 0x8F */ None,
    /* 0x90 */ op(BCC, REL, 2),
    /* 0x91 */ op(STA, IZY, 6),
    /* 0x92 */ None,
    /* 0x93 */ None,
    /* 0x94 */ op(STY, ZPX, 4),
    /* 0x95 */ op(STA, ZPX, 4),
    /* 0x96 */ op(STX, ZPY, 4),
    /* 0x97 */ None,
    /* 0x98 */ op(TYA, IMP, 2),
    /* 0x99 */ op(STA, ABY, 5),
    /* 0x9A */ op(TXS, IMP, 2),
    /* 0x9B */ None,
    /* 0x9C */ None,
    /* 0x9D */ op(STA, ABX, 5),
    /* 0x9E */ None,
    /* 0x9F */ None,
    /* 0xA0 */ op(LDY, IMM, 2),
    /* 0xA1 */ op(LDA, IZX, 6),
    /* 0xA2 */ op(LDX, IMM, 2),
    /* 0xA3 */ None,
    /* 0xA4 */ op(LDY, ZP, 3),
    /* 0xA5 */ op(LDA, ZP, 3),
    /* 0xA6 */ op(LDX, ZP, 3),
    /* 0xA7 */ None,
    /* 0xA8 */ op(TAY, IMP, 2),
    /* 0xA9 */ op(LDA, IMM, 2),
    /* 0xAA */ op(TAX, IMP, 2),
    /* 0xAB */ None,
    /* 0xAC */ op(LDY, ABS, 4),
    /* 0xAD */ op(LDA, ABS, 4),
    /* 0xAE */ op(LDX, ABS, 4),
    /* 0xAF */ None,
    /* 0xB0 */ op(BCS, REL, 2),
    /* 0xB1 */ op(LDA, IZY, 5),
    /* 0xB2 */ None,
    /* 0xB3 */ None,
    /* 0xB4 */ op(LDY, ZPX, 4),
    /* 0xB5 */ op(LDA, ZPX, 4),
    /* 0xB6 */ op(LDX, ZPY, 4),
    /* 0xB7 */ None,
    /* 0xB8 */ op(CLV, IMP, 2),
    /* 0xB9 */ op(LDA, ABY, 4),
    /* 0xBA */ op(TSX, IMP, 2),
    /* 0xBB */ None,
    /* 0xBC */ op(LDY, ABX, 4),
    /* 0xBD */ op(LDA, ABX, 4),
    /* 0xBE */ op(LDX, ABY, 4),
    /* 0xBF */ None,
    /* 0xC0 */ op(CPY, IMM, 2),
    /* 0xC1 */ op(CMP, IZX, 6),
    /* 0xC2 */ None,
    /* 0xC3 */ None,
    /* 0xC4 */ op(CPY, ZP, 3),
    /* 0xC5 */ op(CMP, ZP, 3),
    /* 0xC6 */ op(DEC, ZP, 5),
    /* 0xC7 */ None,
    /* 0xC8 */ op(INY, IMP, 2),
    /* 0xC9 */ op(CMP, IMM, 2),
    /* 0xCA */ op(DEX, IMP, 2),
    /* 0xCB */ None,
    /* 0xCC */ op(CPY, ABS, 4),
    /* 0xCD */ op(CMP, ABS, 4),
    /* 0xCE */ op(DEC, ABS, 6),
    /* 0xCF */ None,
    /* 0xD0 */ op(BNE, REL, 2),
    /* 0xD1 */ op(CMP, IZY, 5),
    /* 0xD2 */ None,
    /* 0xD3 */ None,
    /* 0xD4 */ None,
    /* 0xD5 */ op(CMP, ZPX, 4),
    /* 0xD6 */ op(DEC, ZPX, 6),
    /* 0xD7 */ None,
    /* 0xD8 */ op(CLD, IMP, 2),
    /* 0xD9 */ op(CMP, ABY, 4),
    /* 0xDA */ None,
    /* 0xDB */ None,
    /* 0xDC */ None,
    /* 0xDD */ op(CMP, ABX, 4),
    /* 0xDE */ op(DEC, ABX, 7),
    /* 0xDF */ None,
    /* 0xE0 */ op(CPX, IMM, 2),
    /* 0xE1 */ op(SBC, IZX, 6),
    /* 0xE2 */ None,
    /* 0xE3 */ None,
    /* 0xE4 */ op(CPX, ZP, 3),
    /* 0xE5 */ op(SBC, ZP, 3),
    /* 0xE6 */ op(INC, ZP, 5),
    /* 0xE7 */ None,
    /* 0xE8 */ op(INX, IMP, 2),
    /* 0xE9 */ op(SBC, IMM, 2),
    /* 0xEA */ op(NOP, IMP, 2),
    /* 0xEB */ None,
    /* 0xEC */ op(CPX, ABS, 4),
    /* 0xED */ op(SBC, ABS, 4),
    /* 0xEE */ op(INC, ABS, 6),
    /* 0xEF */ None,
    /* 0xF0 */ op(BEQ, REL, 2),
    /* 0xF1 */ op(SBC, IZY, 5),
    /* 0xF2 */ None,
    /* 0xF3 */ None,
    /* 0xF4 */ None,
    /* 0xF5 */ op(SBC, ZPX, 4),
    /* 0xF6 */ op(INC, ZPX, 6),
    /* 0xF7 */ None,
    /* 0xF8 */ op(SED, IMP, 2),
    /* 0xF9 */ op(SBC, ABY, 4),
    /* 0xFA */ None,
    /* 0xFB */ None,
    /* 0xFC */ None,
    /* 0xFD */ op(SBC, ABX, 4),
    /* 0xFE */ op(INC, ABX, 7),
    /* 0xFF */ None,
];
