use crate::memory;
use crate::operand;
use std::error;
use std::fmt;

#[derive(Debug)]
pub enum MicrocodeError {
    // ↓ when a memory access fails during the microcode operation
    Memory(memory::MemoryError),
    Resolution(operand::ResolutionError),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MicrocodeError::Memory(e) => {
                write!(f, "memory fault during microcode operation: {}", e)
            }
            MicrocodeError::Resolution(e) => {
                write!(f, "resolution error caught in microcode operation: {}", e)
            }
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<operand::ResolutionError> for MicrocodeError {
    fn from(err: operand::ResolutionError) -> MicrocodeError {
        MicrocodeError::Resolution(err)
    }
}

impl std::convert::From<memory::MemoryError> for MicrocodeError {
    fn from(err: memory::MemoryError) -> MicrocodeError {
        MicrocodeError::Memory(err)
    }
}
