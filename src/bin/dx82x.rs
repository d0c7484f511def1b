//! Zephyr DX82x runner.
//!
//! Thin CLI collaborator around the `z6502` core: loads a raw memory image
//! at $0000, resets the CPU through the RESET vector, and steps until the
//! program stops. The core itself knows nothing about files or processes.

use std::env;
use std::fs;
use std::process;

use z6502::{CpuConfig, ExecutionError, FlatMemory, CPU};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} ROM_file", args[0]);
        process::exit(1);
    }

    let image = match fs::read(&args[1]) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("[ ERROR  ] Could not load ROM file: {}", err);
            process::exit(-1);
        }
    };

    let mut memory = FlatMemory::new();
    let copied = memory.load_image(0x0000, &image);
    if copied < image.len() {
        eprintln!(
            "[WARNING ] Image is {} bytes, truncated to 64KB",
            image.len()
        );
    }

    // Strict mode: a runaway program hitting an unassigned opcode stops
    // with a diagnostic instead of sliding through it.
    let config = CpuConfig {
        strict_illegal_opcodes: true,
        ..CpuConfig::default()
    };
    let mut cpu = CPU::with_config(memory, config);

    if let Err(err) = cpu.reset() {
        eprintln!("[ ERROR  ] Reset failed: {}", err);
        process::exit(-1);
    }

    // A 6502 program signals completion by spinning on a jump-to-self; a
    // PC that stops moving means the program is done (or deliberately
    // parked). Treat that as a clean exit.
    loop {
        let pc_before = cpu.pc();
        match cpu.step() {
            Ok(_) => {}
            Err(ExecutionError::HaltRequested) => break,
            Err(err) => {
                let regs = cpu.snapshot();
                eprintln!("[ ERROR  ] {} (PC=0x{:04X})", err, regs.pc);
                process::exit(2);
            }
        }
        if cpu.pc() == pc_before {
            break;
        }
    }
}
