//! Tests for the ADC (Add with Carry) instruction.
//!
//! Covers carry-in/carry-out, the signed overflow matrix, decimal mode,
//! and the configuration switch that ignores the D flag.

use z6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00).unwrap();
    memory.write(0xFFFD, 0x80).unwrap();
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

/// Writes `ADC #imm` at the program origin.
fn program_adc_imm(cpu: &mut CPU<FlatMemory>, imm: u8) {
    cpu.memory_mut().write(0x8000, 0x69).unwrap();
    cpu.memory_mut().write(0x8001, imm).unwrap();
}

// ========== Binary Mode ==========

#[test]
fn test_adc_simple_addition() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);

    program_adc_imm(&mut cpu, 0x20);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_with_carry_in_and_carry_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xF0);
    cpu.set_flag_c(true);

    // $F0 + $20 + 1 = $111
    program_adc_imm(&mut cpu, 0x20);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_carry_out_with_zero_result() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag_c(true);

    program_adc_imm(&mut cpu, 0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_overflow_positive_plus_positive() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);

    // $50 + $50 = $A0: two positives yielding a negative
    program_adc_imm(&mut cpu, 0x50);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_overflow_negative_plus_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x90);

    // $90 + $90 = $120: two negatives yielding a positive
    program_adc_imm(&mut cpu, 0x90);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_no_overflow_mixed_signs() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);

    // Positive plus negative can never overflow
    program_adc_imm(&mut cpu, 0x90);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xE0);
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_zero_page_and_memory_operand() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.memory_mut().write(0x0042, 0x02).unwrap();

    // ADC $42
    cpu.memory_mut().write(0x8000, 0x65).unwrap();
    cpu.memory_mut().write(0x8001, 0x42).unwrap();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x03);
    assert_eq!(cycles, 3);
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_basic() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_a(0x09);

    // 09 + 01 = 10 in BCD
    program_adc_imm(&mut cpu, 0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x10);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_with_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x58);

    // 58 + 46 + 1 = 105 in BCD: A = 05, carry out
    program_adc_imm(&mut cpu, 0x46);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_a(0x99);

    // 99 + 01 = 100 in BCD: A = 00, carry out
    program_adc_imm(&mut cpu, 0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_ignores_d_flag_when_decimal_disabled() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00).unwrap();
    memory.write(0xFFFD, 0x80).unwrap();

    let config = CpuConfig {
        decimal_enabled: false,
        ..CpuConfig::default()
    };
    let mut cpu = CPU::with_config(memory, config);
    cpu.reset().unwrap();

    cpu.set_flag_d(true);
    cpu.set_a(0x09);
    program_adc_imm(&mut cpu, 0x01);
    cpu.step().unwrap();

    // Plain binary: $09 + $01 = $0A
    assert_eq!(cpu.a(), 0x0A);
    assert!(!cpu.flag_c());
}
