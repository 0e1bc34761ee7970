mod error;

mod add;
mod call;
mod cmp;
mod hlt;
mod iret;
mod jeq;
mod jmp;
mod jne;
mod ldi;
mod mul;
mod nop;
mod pop;
mod pra;
mod prn;
mod push;
mod ret;
mod st;

pub use error::{MicrocodeError, Result};

pub use add::add;
pub use call::call;
pub use cmp::cmp;
pub use hlt::hlt;
pub use iret::iret;
pub use jeq::jeq;
pub use jmp::jmp;
pub use jne::jne;
pub use ldi::ldi;
pub use mul::mul;
pub use nop::nop;
pub use pop::pop;
pub use pra::pra;
pub use prn::prn;
pub use push::push;
pub use ret::ret;
pub use st::st;

// shared scope for the microcode functions, imported with `use super::*`
pub use crate::alu;
pub use crate::cpu_instruction::{CPUInstruction, LogLine, Output};
pub use crate::memory::{AddressableIO, RAM as Memory};
pub use crate::operand::{OperandResolution, Operands};
pub use crate::registers::Registers;
