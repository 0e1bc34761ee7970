use crate::cpu::{Cpu, Tick};
use crate::cpu_instruction::TIMER_INTERRUPT_LINE;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1);
pub const DEFAULT_TIMER_INTERVAL: Duration = Duration::from_secs(1);

/*
 * Clock
 * drives the machine with two periodic sources: the instruction clock
 * invoking one tick per period, and the slower timer source raising
 * interrupt line 0. Both share the CPU behind a single mutex so the
 * status register update and the tick's read-modify-write of it are
 * mutually exclusive, and a common running flag so stopping the clock
 * halts both sources.
 */
pub struct Clock {
    running: Arc<AtomicBool>,
    tick_handle: JoinHandle<()>,
    timer_handle: JoinHandle<()>,
}

impl Clock {
    pub fn start(cpu: Arc<Mutex<Cpu>>, tick_interval: Duration, timer_interval: Duration) -> Clock {
        let running = Arc::new(AtomicBool::new(true));

        let tick_running = running.clone();
        let tick_cpu = cpu.clone();
        let tick_handle = thread::spawn(move || {
            while tick_running.load(Ordering::SeqCst) {
                let result = tick_cpu.lock().unwrap().tick();
                match result {
                    Ok(Tick::Instruction(log_line)) => {
                        if let Some(output) = log_line.output {
                            println!("{}", output);
                        }
                        log::trace!("{}", log_line);
                    }
                    Ok(Tick::Interrupt { line, handler }) => {
                        log::trace!("interrupt line {} serviced, handler at #0x{:02X}", line, handler);
                    }
                    Ok(Tick::Halted(log_line)) => {
                        log::info!("program halted at address #0x{:02X}", log_line.address);
                        tick_running.store(false, Ordering::SeqCst);
                    }
                    Err(error) => {
                        log::error!("{}", error);
                        tick_running.store(false, Ordering::SeqCst);
                    }
                }
                thread::sleep(tick_interval);
            }
        });

        let timer_running = running.clone();
        let timer_handle = thread::spawn(move || {
            // sleep in short slices so a cleared running flag is noticed
            // without waiting out a whole timer period
            let slice = Duration::from_millis(1);
            'timer: while timer_running.load(Ordering::SeqCst) {
                let mut slept = Duration::ZERO;
                while slept < timer_interval {
                    thread::sleep(slice.min(timer_interval - slept));
                    slept += slice;
                    if !timer_running.load(Ordering::SeqCst) {
                        break 'timer;
                    }
                }
                cpu.lock().unwrap().raise_interrupt(TIMER_INTERRUPT_LINE);
            }
        });

        Clock {
            running,
            tick_handle,
            timer_handle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Halt both periodic sources and wait for their threads to finish.
    /// This is the only cancellation primitive the machine has.
    pub fn stop(self) {
        self.running.store(false, Ordering::SeqCst);
        self.join_threads();
    }

    /// Block until the program halts or faults, then reap both threads.
    pub fn wait(self) {
        self.join_threads();
    }

    fn join_threads(self) {
        self.tick_handle
            .join()
            .expect("instruction clock thread panicked");
        self.timer_handle.join().expect("timer thread panicked");
    }
}
