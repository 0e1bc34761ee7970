use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ls8_lib::{Clock, Cpu, Memory};
use ls8_runner::loader;

/// LS-8 machine runner
/// Loads an `.ls8` program image into memory, then starts the instruction
/// clock and the timer interrupt source and runs the program until it
/// halts or faults.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Program file location ("-" to read from standard input)
    filepath: PathBuf,

    /// Instruction clock period in milliseconds
    #[arg(long, default_value_t = 1)]
    tick_interval: u64,

    /// Timer interrupt period in milliseconds
    #[arg(long, default_value_t = 1000)]
    timer_interval: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let parameters = CommandLineArguments::parse();

    let program = loader::load_program(&parameters.filepath)?;
    log::info!("loaded {} bytes", program.len());

    let mut cpu = Cpu::new(Memory::default());
    for (address, byte) in program.iter().enumerate() {
        cpu.poke(address, *byte)?;
    }

    let cpu = Arc::new(Mutex::new(cpu));
    let clock = Clock::start(
        Arc::clone(&cpu),
        Duration::from_millis(parameters.tick_interval),
        Duration::from_millis(parameters.timer_interval),
    );
    clock.wait();

    Ok(())
}
