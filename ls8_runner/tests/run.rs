use std::path::Path;

use ls8_lib::{Cpu, Memory, Tick};
use ls8_runner::loader;

fn load_demo(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("programs")
        .join(name);

    loader::load_program(&path).unwrap()
}

fn cpu_with_program(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new(Memory::default());
    for (address, byte) in program.iter().enumerate() {
        cpu.poke(address, *byte).unwrap();
    }

    cpu
}

#[test]
fn mult_demo_prints_72() {
    let program = load_demo("mult.ls8");
    let mut cpu = cpu_with_program(&program);
    let mut outputs = Vec::new();

    loop {
        match cpu.tick().unwrap() {
            Tick::Instruction(log_line) => {
                if let Some(output) = log_line.output {
                    outputs.push(output.to_string());
                }
            }
            Tick::Interrupt { .. } => (),
            Tick::Halted(_) => break,
        }
    }

    assert_eq!(vec!["72".to_owned()], outputs);
    assert!(cpu.registers().halted);
}

#[test]
fn interrupts_demo_prints_on_timer() {
    let program = load_demo("interrupts.ls8");
    assert_eq!(23, program.len());

    let mut cpu = cpu_with_program(&program);

    // setup instructions plus a few turns of the spin loop
    for _ in 0..8 {
        cpu.tick().unwrap();
    }
    assert_eq!(0x0f, cpu.registers().program_counter);

    // stand in for the timer source
    cpu.raise_interrupt(0);
    assert!(matches!(cpu.tick().unwrap(), Tick::Interrupt { line: 0, .. }));

    let mut outputs = Vec::new();
    for _ in 0..3 {
        if let Tick::Instruction(log_line) = cpu.tick().unwrap() {
            if let Some(output) = log_line.output {
                outputs.push(output.to_string());
            }
        }
    }

    assert_eq!(vec!["A".to_owned()], outputs);
    assert_eq!(0x0f, cpu.registers().program_counter);
    assert!(cpu.registers().interrupts_enabled);
}
