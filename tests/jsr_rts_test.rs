//! Tests for subroutine linkage (JSR and RTS).
//!
//! JSR pushes the address of the last byte of its own operand (PC - 1),
//! high byte first; RTS pulls low-then-high and resumes at pulled + 1.

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
fn test_jsr_pushes_return_address_minus_one() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x0000);

    // $0000: JSR $0006
    cpu.memory_mut().write(0x0000, 0x20).unwrap();
    cpu.memory_mut().write(0x0001, 0x06).unwrap();
    cpu.memory_mut().write(0x0002, 0x00).unwrap();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0006);
    assert_eq!(cycles, 6);

    // High byte pushed first at $01FD, low byte at $01FC; the pushed word
    // is $0002, the address of the operand's last byte.
    assert_eq!(cpu.memory().read(0x01FD).unwrap(), 0x00);
    assert_eq!(cpu.memory().read(0x01FC).unwrap(), 0x02);
    assert_eq!(cpu.sp(), 0xFB);
}

#[test]
fn test_rts_resumes_after_the_call() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x0000);

    // $0000: JSR $0006 ; $0006: RTS
    cpu.memory_mut().write(0x0000, 0x20).unwrap();
    cpu.memory_mut().write(0x0001, 0x06).unwrap();
    cpu.memory_mut().write(0x0002, 0x00).unwrap();
    cpu.memory_mut().write(0x0006, 0x60).unwrap();

    cpu.step().unwrap(); // JSR
    let cycles = cpu.step().unwrap(); // RTS

    assert_eq!(cpu.pc(), 0x0003);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cycles, 6);
}

#[test]
fn test_nested_subroutine_calls() {
    let mut cpu = setup_cpu();

    // $8000: JSR $9000 ; $9000: JSR $A000 ; $A000: RTS ; $9003: RTS
    cpu.memory_mut().write(0x8000, 0x20).unwrap();
    cpu.memory_mut().write(0x8001, 0x00).unwrap();
    cpu.memory_mut().write(0x8002, 0x90).unwrap();
    cpu.memory_mut().write(0x9000, 0x20).unwrap();
    cpu.memory_mut().write(0x9001, 0x00).unwrap();
    cpu.memory_mut().write(0x9002, 0xA0).unwrap();
    cpu.memory_mut().write(0xA000, 0x60).unwrap();
    cpu.memory_mut().write(0x9003, 0x60).unwrap();

    cpu.step().unwrap(); // JSR $9000
    cpu.step().unwrap(); // JSR $A000
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xF9);

    cpu.step().unwrap(); // RTS -> $9003
    assert_eq!(cpu.pc(), 0x9003);

    cpu.step().unwrap(); // RTS -> $8003
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_jsr_does_not_touch_flags() {
    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);

    cpu.memory_mut().write(0x8000, 0x20).unwrap();
    cpu.memory_mut().write(0x8001, 0x00).unwrap();
    cpu.memory_mut().write(0x8002, 0x90).unwrap();

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}
