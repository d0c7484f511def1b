//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor
//! state and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next opcode byte
//! - **Stack pointer** (SP): 8-bit offset into the stack page ($0100-$01FF)
//! - **Status flags**: N, V, B, D, I, Z, C as individual bool fields
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! Flags live unpacked at rest; the NV1BDIZC byte layout exists only on the
//! stack, which keeps the B flag and bit 5 (neither of which physically
//! exist in the processor) from leaking into resident state.
//!
//! ## Execution Model
//!
//! `step()` executes exactly one instruction (or one interrupt entry) and
//! returns the number of clock cycles it consumed. Halt requests, NMI and
//! IRQ are sampled at the top of `step()` before the opcode fetch.
//! `run_for_cycles()` layers a budget loop on top for frame-locked
//! embeddings.

use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, OPCODE_TABLE};

/// RESET vector location ($FFFC/$FFFD, little-endian).
pub(crate) const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location ($FFFE/$FFFF, little-endian).
pub(crate) const IRQ_VECTOR: u16 = 0xFFFE;

/// NMI vector location ($FFFA/$FFFB, little-endian).
pub(crate) const NMI_VECTOR: u16 = 0xFFFA;

/// Cycles consumed by a hardware interrupt entry sequence.
const INTERRUPT_CYCLES: u8 = 7;

/// Behavior switches fixed at construction time.
///
/// # Examples
///
/// ```
/// use z6502::{CpuConfig, FlatMemory, CPU};
///
/// let config = CpuConfig {
///     strict_illegal_opcodes: true,
///     ..CpuConfig::default()
/// };
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// When set, `step()` reports [`ExecutionError::IllegalOpcode`] for the
    /// 105 unassigned opcode bytes instead of skipping them as 1-byte NOPs.
    pub strict_illegal_opcodes: bool,

    /// When set (the default), ADC and SBC honor the D flag with NMOS
    /// binary-coded-decimal semantics. When cleared the D flag is ignored
    /// and arithmetic is always binary.
    pub decimal_enabled: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            strict_illegal_opcodes: false,
            decimal_enabled: true,
        }
    }
}

/// Read-only copy of the register file, for tests and debuggers.
///
/// Obtained via [`CPU::snapshot`]. The B flag is reported as it would
/// appear in resident state (it is only ever meaningful in the packed byte
/// pushed by BRK/PHP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub flag_n: bool,
    pub flag_v: bool,
    pub flag_b: bool,
    pub flag_d: bool,
    pub flag_i: bool,
    pub flag_z: bool,
    pub flag_c: bool,
}

/// Decoded operand, as produced by the operand decoder.
///
/// The decoder consumes operand bytes at PC (advancing PC exactly that
/// far) and reduces every addressing mode to one of these shapes. Branch
/// offset interpretation is deferred to the branch handler; accumulator
/// targeting is deferred to the shift handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// No operand (implied addressing).
    None,
    /// The operand is the accumulator itself.
    Accumulator,
    /// Immediate byte value.
    Immediate(u8),
    /// Effective memory address, with the page-crossing marker for the
    /// indexed modes (charged only on read-class instructions).
    Address { addr: u16, page_crossed: bool },
    /// Signed branch displacement.
    Relative(i8),
}

impl Operand {
    /// Effective address of a memory operand.
    ///
    /// The opcode table guarantees the operand shape per mnemonic, so this
    /// is only called on `Address` operands.
    pub(crate) fn address(self) -> u16 {
        match self {
            Operand::Address { addr, .. } => addr,
            _ => unreachable!("operand has no effective address"),
        }
    }

    /// +1 if an indexed address computation carried into the high byte.
    fn page_penalty(self) -> u8 {
        match self {
            Operand::Address { page_crossed: true, .. } => 1,
            _ => 0,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait. The
/// CPU owns no memory itself and retains no addresses across `step()`
/// calls; the bus handle is exercised only while a step is in flight.
///
/// # Lifecycle
///
/// Construct with [`CPU::new`], call [`CPU::reset`] once to load the RESET
/// vector, then drive with [`CPU::step`].
///
/// # Examples
///
/// ```
/// use z6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00).unwrap();
/// memory.write(0xFFFD, 0x80).unwrap();
/// memory.write(0x8000, 0xE8).unwrap(); // INX
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset().unwrap();
///
/// let cycles = cpu.step().unwrap();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.x(), 0x01);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next opcode byte)
    pub(crate) pc: u16,

    /// Stack pointer; the next free slot is at 0x0100 + SP
    pub(crate) sp: u8,

    /// Negative flag (bit 7 of the last result)
    pub(crate) flag_n: bool,

    /// Overflow flag (signed overflow on ADC/SBC, bit 6 on BIT)
    pub(crate) flag_v: bool,

    /// Break marker; only meaningful in the packed byte pushed by BRK/PHP
    pub(crate) flag_b: bool,

    /// Decimal mode flag (BCD arithmetic for ADC/SBC when enabled)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (masks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (last result was zero)
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Latched maskable interrupt request
    irq_pending: bool,

    /// Latched non-maskable interrupt request
    nmi_pending: bool,

    /// Embedder-injected stop request
    halt_pending: bool,

    config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and default config.
    ///
    /// The CPU comes up in power-on state: SP = $FD, A = X = Y = 0, the
    /// I flag set, PC = $0000. The bus is not touched; call [`CPU::reset`]
    /// to load PC from the RESET vector before stepping.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with explicit behavior switches.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true, // Interrupt disable set on power-on
            flag_z: false,
            flag_c: false,
            cycles: 0,
            irq_pending: false,
            nmi_pending: false,
            halt_pending: false,
            config,
            memory,
        }
    }

    /// Resets the CPU to its architected post-reset state.
    ///
    /// PC is loaded from the RESET vector at $FFFC/$FFFD (little-endian),
    /// SP becomes $FD, A/X/Y are cleared, the I flag is set and D cleared.
    /// Pending interrupt and halt requests are dropped. The cycle counter
    /// is not reset.
    ///
    /// # Examples
    ///
    /// ```
    /// use z6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00).unwrap();
    /// mem.write(0xFFFD, 0x80).unwrap();
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset().unwrap();
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn reset(&mut self) -> Result<(), ExecutionError> {
        self.pc = self.read_word(RESET_VECTOR)?;
        self.sp = 0xFD;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.irq_pending = false;
        self.nmi_pending = false;
        self.halt_pending = false;

        log::debug!("reset: PC=0x{:04X}", self.pc);

        Ok(())
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// The sequence is:
    /// 1. Honor a pending halt request ([`ExecutionError::HaltRequested`]).
    /// 2. Service a pending NMI, or a pending IRQ when the I flag is clear
    ///    (7 cycles; counts as the whole step).
    /// 3. Fetch the opcode byte at PC and advance PC.
    /// 4. Look the opcode up in [`OPCODE_TABLE`]. Unassigned opcodes follow
    ///    the configured policy: skipped as a 0-cycle 1-byte NOP, or
    ///    reported as [`ExecutionError::IllegalOpcode`] with PC already past
    ///    the byte.
    /// 5. Decode the operand (advancing PC past it) and execute.
    ///
    /// The returned count is the base cycle cost from the table plus any
    /// branch-taken and page-crossing penalties.
    ///
    /// # Examples
    ///
    /// ```
    /// use z6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00).unwrap();
    /// mem.write(0xFFFD, 0x80).unwrap();
    /// mem.write(0x8000, 0xA9).unwrap(); // LDA #$80
    /// mem.write(0x8001, 0x80).unwrap();
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset().unwrap();
    ///
    /// assert_eq!(cpu.step().unwrap(), 2);
    /// assert_eq!(cpu.a(), 0x80);
    /// assert!(cpu.flag_n());
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if self.halt_pending {
            self.halt_pending = false;
            return Err(ExecutionError::HaltRequested);
        }

        if self.nmi_pending {
            self.nmi_pending = false;
            log::trace!("servicing NMI at PC=0x{:04X}", self.pc);
            self.enter_interrupt(NMI_VECTOR)?;
            self.cycles += INTERRUPT_CYCLES as u64;
            return Ok(INTERRUPT_CYCLES);
        }

        if self.irq_pending && !self.flag_i {
            self.irq_pending = false;
            log::trace!("servicing IRQ at PC=0x{:04X}", self.pc);
            self.enter_interrupt(IRQ_VECTOR)?;
            self.cycles += INTERRUPT_CYCLES as u64;
            return Ok(INTERRUPT_CYCLES);
        }

        let opcode = self.fetch_byte()?;

        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            if self.config.strict_illegal_opcodes {
                return Err(ExecutionError::IllegalOpcode(opcode));
            }
            log::warn!(
                "unassigned opcode 0x{:02X} at PC 0x{:04X}, skipping",
                opcode,
                self.pc.wrapping_sub(1)
            );
            return Ok(0);
        };

        let operand = self.decode_operand(metadata.addressing_mode)?;
        let extra = self.execute(metadata.mnemonic, operand)?;

        let total = metadata.base_cycles + extra;
        self.cycles += total as u64;
        Ok(total)
    }

    /// Runs the CPU until a cycle budget is exhausted.
    ///
    /// Executes whole instructions until at least `cycle_budget` cycles
    /// have elapsed, returning the cycles actually consumed (which may
    /// overshoot by up to one instruction). Useful for frame-locked
    /// execution models.
    ///
    /// Under the lenient illegal-opcode policy unassigned opcodes consume
    /// zero cycles, so a memory region containing only unassigned bytes
    /// makes no progress toward the budget; run such images in strict
    /// mode.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Latches a maskable interrupt request.
    ///
    /// Serviced at the start of the next `step()` once the I flag is
    /// clear; while masked the request stays latched.
    pub fn irq(&mut self) {
        self.irq_pending = true;
    }

    /// Latches a non-maskable interrupt request, serviced at the start of
    /// the next `step()` regardless of the I flag.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Asks the CPU to stop cleanly: the next `step()` returns
    /// [`ExecutionError::HaltRequested`] without touching machine state.
    pub fn request_halt(&mut self) {
        self.halt_pending = true;
    }

    /// Returns a read-only copy of all registers and flags.
    pub fn snapshot(&self) -> Registers {
        Registers {
            pc: self.pc,
            sp: self.sp,
            a: self.a,
            x: self.x,
            y: self.y,
            flag_n: self.flag_n,
            flag_v: self.flag_v,
            flag_b: self.flag_b,
            flag_d: self.flag_d,
            flag_i: self.flag_i,
            flag_z: self.flag_z,
            flag_c: self.flag_c,
        }
    }

    // ========== Register and Flag Accessors ==========

    /// Accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer value; the full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The status register packed into NV1BDIZC layout (bit 5 always 1).
    pub fn status(&self) -> u8 {
        let mut status = self.pushed_status(false);
        if self.flag_b {
            status |= 0b0001_0000;
        }
        status
    }

    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // Setters, primarily for tests and debugger frontends.

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable reference to the memory bus, for loading programs and
    /// inspecting side effects in tests.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Whether decimal mode is honored by this instance.
    pub(crate) fn decimal_enabled(&self) -> bool {
        self.config.decimal_enabled
    }

    // ========== Flag Update Primitives ==========

    /// Derives Z and N from a result byte: Z iff zero, N from bit 7.
    pub(crate) fn set_nz(&mut self, result: u8) {
        self.flag_z = result == 0;
        self.flag_n = (result & 0x80) != 0;
    }

    // ========== Bus and Fetch Helpers ==========

    /// Reads the byte at PC and advances PC by one.
    fn fetch_byte(&mut self) -> Result<u8, ExecutionError> {
        let byte = self.memory.read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(byte)
    }

    /// Fetches a little-endian word at PC, advancing PC by two.
    fn fetch_word(&mut self) -> Result<u16, ExecutionError> {
        let lo = self.fetch_byte()? as u16;
        let hi = self.fetch_byte()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Reads a little-endian word from an absolute address.
    fn read_word(&self, addr: u16) -> Result<u16, ExecutionError> {
        let lo = self.memory.read(addr)? as u16;
        let hi = self.memory.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }

    // ========== Stack Discipline ==========

    /// Pushes a byte: write to 0x0100 + SP, then decrement SP.
    pub(crate) fn push_byte(&mut self, value: u8) -> Result<(), ExecutionError> {
        self.memory.write(0x0100 | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pulls a byte: increment SP, then read from 0x0100 + SP.
    pub(crate) fn pull_byte(&mut self) -> Result<u8, ExecutionError> {
        self.sp = self.sp.wrapping_add(1);
        Ok(self.memory.read(0x0100 | self.sp as u16)?)
    }

    /// Packs the status flags into the NV1BDIZC stack layout.
    ///
    /// Bit 5 is always written as 1. Bit 4 (B) is set when the push comes
    /// from BRK or PHP and clear when it comes from a hardware interrupt.
    pub(crate) fn pushed_status(&self, from_brk: bool) -> u8 {
        let mut status: u8 = 0b0010_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if from_brk {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Unpacks a pulled status byte into the flag file.
    ///
    /// B and bit 5 are discarded; they exist only on the stack.
    pub(crate) fn apply_pulled_status(&mut self, status: u8) {
        self.flag_n = (status & 0b1000_0000) != 0;
        self.flag_v = (status & 0b0100_0000) != 0;
        self.flag_d = (status & 0b0000_1000) != 0;
        self.flag_i = (status & 0b0000_0100) != 0;
        self.flag_z = (status & 0b0000_0010) != 0;
        self.flag_c = (status & 0b0000_0001) != 0;
    }

    // ========== Interrupt Entry ==========

    /// Hardware interrupt entry: push PC (high then low) and the status
    /// byte with B clear, set I, load PC from the vector.
    fn enter_interrupt(&mut self, vector: u16) -> Result<(), ExecutionError> {
        self.push_byte((self.pc >> 8) as u8)?;
        self.push_byte((self.pc & 0xFF) as u8)?;
        let status = self.pushed_status(false);
        self.push_byte(status)?;
        self.flag_i = true;
        self.pc = self.read_word(vector)?;
        Ok(())
    }

    // ========== Operand Decoder ==========

    /// Decodes the operand for `mode`, consuming operand bytes at PC.
    ///
    /// PC advances past exactly the bytes consumed. Zero-page indexed
    /// arithmetic wraps within the zero page before any memory read, the
    /// indirect-pointer high byte never crosses out of the zero page, and
    /// indirect JMP reproduces the NMOS page-wrap bug.
    fn decode_operand(&mut self, mode: AddressingMode) -> Result<Operand, ExecutionError> {
        match mode {
            AddressingMode::Implied => Ok(Operand::None),

            AddressingMode::Accumulator => Ok(Operand::Accumulator),

            AddressingMode::Immediate => Ok(Operand::Immediate(self.fetch_byte()?)),

            AddressingMode::ZeroPage => {
                let addr = self.fetch_byte()? as u16;
                Ok(Operand::Address {
                    addr,
                    page_crossed: false,
                })
            }

            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte()?;
                Ok(Operand::Address {
                    addr: base.wrapping_add(self.x) as u16,
                    page_crossed: false,
                })
            }

            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte()?;
                Ok(Operand::Address {
                    addr: base.wrapping_add(self.y) as u16,
                    page_crossed: false,
                })
            }

            AddressingMode::Relative => Ok(Operand::Relative(self.fetch_byte()? as i8)),

            AddressingMode::Absolute => {
                let addr = self.fetch_word()?;
                Ok(Operand::Address {
                    addr,
                    page_crossed: false,
                })
            }

            AddressingMode::AbsoluteX => {
                let base = self.fetch_word()?;
                let addr = base.wrapping_add(self.x as u16);
                Ok(Operand::Address {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                })
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_word()?;
                let addr = base.wrapping_add(self.y as u16);
                Ok(Operand::Address {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                })
            }

            AddressingMode::Indirect => {
                // NMOS bug: a pointer at $xxFF reads its high byte from
                // $xx00 instead of crossing into the next page.
                let ptr = self.fetch_word()?;
                let lo = self.memory.read(ptr)? as u16;
                let hi_addr = if (ptr & 0x00FF) == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = self.memory.read(hi_addr)? as u16;
                Ok(Operand::Address {
                    addr: (hi << 8) | lo,
                    page_crossed: false,
                })
            }

            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte()?.wrapping_add(self.x);
                let lo = self.memory.read(ptr as u16)? as u16;
                let hi = self.memory.read(ptr.wrapping_add(1) as u16)? as u16;
                Ok(Operand::Address {
                    addr: (hi << 8) | lo,
                    page_crossed: false,
                })
            }

            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte()?;
                let lo = self.memory.read(ptr as u16)? as u16;
                let hi = self.memory.read(ptr.wrapping_add(1) as u16)? as u16;
                let base = (hi << 8) | lo;
                let addr = base.wrapping_add(self.y as u16);
                Ok(Operand::Address {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                })
            }
        }
    }

    /// Resolves a value-producing operand: an immediate byte, or a read
    /// through the bus for a memory operand.
    fn operand_value(&mut self, operand: Operand) -> Result<u8, ExecutionError> {
        match operand {
            Operand::Immediate(value) => Ok(value),
            Operand::Address { addr, .. } => Ok(self.memory.read(addr)?),
            _ => unreachable!("operand does not produce a value"),
        }
    }

    /// Branch displacement of a relative operand.
    fn relative_offset(operand: Operand) -> i8 {
        match operand {
            Operand::Relative(offset) => offset,
            _ => unreachable!("operand is not a branch displacement"),
        }
    }

    // ========== Dispatch ==========

    /// Executes one decoded instruction, returning extra cycles beyond the
    /// base count (branch-taken and page-crossing penalties).
    ///
    /// The match is exhaustive over [`Mnemonic`]; the opcode table fixes
    /// which operand shapes each mnemonic can see.
    fn execute(&mut self, mnemonic: Mnemonic, operand: Operand) -> Result<u8, ExecutionError> {
        let mut extra = 0u8;

        match mnemonic {
            // Load/store
            Mnemonic::LDA => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                load_store::lda(self, value);
            }
            Mnemonic::LDX => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                load_store::ldx(self, value);
            }
            Mnemonic::LDY => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                load_store::ldy(self, value);
            }
            Mnemonic::STA => load_store::sta(self, operand.address())?,
            Mnemonic::STX => load_store::stx(self, operand.address())?,
            Mnemonic::STY => load_store::sty(self, operand.address())?,

            // Arithmetic
            Mnemonic::ADC => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                alu::adc(self, value);
            }
            Mnemonic::SBC => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                alu::sbc(self, value);
            }
            Mnemonic::CMP => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                alu::cmp(self, value);
            }
            Mnemonic::CPX => {
                let value = self.operand_value(operand)?;
                alu::cpx(self, value);
            }
            Mnemonic::CPY => {
                let value = self.operand_value(operand)?;
                alu::cpy(self, value);
            }

            // Bitwise
            Mnemonic::AND => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                alu::and(self, value);
            }
            Mnemonic::ORA => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                alu::ora(self, value);
            }
            Mnemonic::EOR => {
                extra = operand.page_penalty();
                let value = self.operand_value(operand)?;
                alu::eor(self, value);
            }
            Mnemonic::BIT => {
                let value = self.operand_value(operand)?;
                alu::bit(self, value);
            }

            // Shift/rotate
            Mnemonic::ASL => shifts::asl(self, operand)?,
            Mnemonic::LSR => shifts::lsr(self, operand)?,
            Mnemonic::ROL => shifts::rol(self, operand)?,
            Mnemonic::ROR => shifts::ror(self, operand)?,

            // Increment/decrement
            Mnemonic::INC => inc_dec::inc(self, operand.address())?,
            Mnemonic::DEC => inc_dec::dec(self, operand.address())?,
            Mnemonic::INX => inc_dec::inx(self),
            Mnemonic::INY => inc_dec::iny(self),
            Mnemonic::DEX => inc_dec::dex(self),
            Mnemonic::DEY => inc_dec::dey(self),

            // Branches
            Mnemonic::BCC => {
                let taken = !self.flag_c;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }
            Mnemonic::BCS => {
                let taken = self.flag_c;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }
            Mnemonic::BNE => {
                let taken = !self.flag_z;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }
            Mnemonic::BEQ => {
                let taken = self.flag_z;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }
            Mnemonic::BPL => {
                let taken = !self.flag_n;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }
            Mnemonic::BMI => {
                let taken = self.flag_n;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }
            Mnemonic::BVC => {
                let taken = !self.flag_v;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }
            Mnemonic::BVS => {
                let taken = self.flag_v;
                extra = branches::branch(self, Self::relative_offset(operand), taken);
            }

            // Jumps, subroutines, interrupt control
            Mnemonic::JMP => control::jmp(self, operand.address()),
            Mnemonic::JSR => control::jsr(self, operand.address())?,
            Mnemonic::RTS => control::rts(self)?,
            Mnemonic::RTI => control::rti(self)?,
            Mnemonic::BRK => control::brk(self)?,
            Mnemonic::NOP => control::nop(),

            // Stack
            Mnemonic::PHA => stack::pha(self)?,
            Mnemonic::PHP => stack::php(self)?,
            Mnemonic::PLA => stack::pla(self)?,
            Mnemonic::PLP => stack::plp(self)?,

            // Transfers
            Mnemonic::TAX => transfer::tax(self),
            Mnemonic::TAY => transfer::tay(self),
            Mnemonic::TXA => transfer::txa(self),
            Mnemonic::TYA => transfer::tya(self),
            Mnemonic::TSX => transfer::tsx(self),
            Mnemonic::TXS => transfer::txs(self),

            // Flag setters
            Mnemonic::CLC => flags::clc(self),
            Mnemonic::SEC => flags::sec(self),
            Mnemonic::CLI => flags::cli(self),
            Mnemonic::SEI => flags::sei(self),
            Mnemonic::CLD => flags::cld(self),
            Mnemonic::SED => flags::sed(self),
            Mnemonic::CLV => flags::clv(self),
        }

        Ok(extra)
    }
}
