//! Tests for the stack instructions (PHA, PHP, PLA, PLP).
//!
//! The stack lives in page $01 and grows downward; pushes write then
//! decrement SP, pulls increment then read.

use z6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00).unwrap();
    memory.write(0xFFFD, 0x80).unwrap();
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);

    cpu.memory_mut().write(0x8000, 0x48).unwrap(); // PHA
    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FD).unwrap(), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cycles, 3);
}

#[test]
fn test_pla_increments_then_reads_and_sets_nz() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0x80).unwrap();

    cpu.memory_mut().write(0x8000, 0x68).unwrap(); // PLA
    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cycles, 4);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x5A);

    cpu.memory_mut().write(0x8000, 0x48).unwrap(); // PHA
    cpu.memory_mut().write(0x8001, 0x68).unwrap(); // PLA

    cpu.step().unwrap();
    cpu.set_a(0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_php_pushes_with_b_and_bit5() {
    let mut cpu = setup_cpu();
    cpu.set_flag_n(true);
    cpu.set_flag_c(true);

    cpu.memory_mut().write(0x8000, 0x08).unwrap(); // PHP
    let cycles = cpu.step().unwrap();

    let pushed = cpu.memory().read(0x01FD).unwrap();
    assert_eq!(pushed & 0b1000_0000, 0b1000_0000); // N
    assert_eq!(pushed & 0b0000_0001, 0b0000_0001); // C
    assert_eq!(pushed & 0b0011_0000, 0b0011_0000); // B and bit 5
    assert_eq!(cycles, 3);
}

#[test]
fn test_php_plp_preserves_flags_across_clobber() {
    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);

    // PHP ; LDA #$00 (sets Z, clears N) ; PLP
    cpu.memory_mut().write(0x8000, 0x08).unwrap();
    cpu.memory_mut().write(0x8001, 0xA9).unwrap();
    cpu.memory_mut().write(0x8002, 0x00).unwrap();
    cpu.memory_mut().write(0x8003, 0x28).unwrap();

    cpu.step().unwrap(); // PHP
    cpu.step().unwrap(); // LDA #$00
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step().unwrap(); // PLP

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_z()); // restored to the pre-PHP value
}

#[test]
fn test_plp_does_not_restore_b() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0xFF).unwrap(); // all bits set

    cpu.memory_mut().write(0x8000, 0x28).unwrap(); // PLP
    cpu.step().unwrap();

    assert!(!cpu.flag_b());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_stack_wraps_at_page_boundary() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x00);
    cpu.set_a(0x77);

    cpu.memory_mut().write(0x8000, 0x48).unwrap(); // PHA
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0100).unwrap(), 0x77);
    assert_eq!(cpu.sp(), 0xFF); // wrapped within page $01
}
