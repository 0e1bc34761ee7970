pub mod alu;
mod clock;
mod cpu;
mod cpu_instruction;
pub mod memory;
mod operand;
mod processing_unit;
mod registers;

pub use clock::{Clock, DEFAULT_TICK_INTERVAL, DEFAULT_TIMER_INTERVAL};
pub use cpu::{Cpu, Tick};
pub use cpu_instruction::{
    opcode, CPUInstruction, LogLine, Output, INTERRUPT_LINES, INTERRUPT_VECTOR_ADDR,
    TIMER_INTERRUPT_LINE,
};
pub use memory::AddressableIO;
pub use memory::RAM as Memory;
pub use operand::{OperandResolution, Operands, ResolutionError};
pub use processing_unit::{execute_step, DispatchTable, ExecutionError};
pub use registers::{
    Registers, GENERAL_REGISTER_COUNT, INTERRUPT_MASK, INTERRUPT_STATUS, STACK_INIT_ADDR,
    STACK_POINTER,
};
