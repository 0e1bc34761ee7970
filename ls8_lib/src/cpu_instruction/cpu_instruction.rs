use super::microcode::Result as MicrocodeResult;
use crate::memory::RAM as Memory;
use crate::operand::{OperandResolution, Operands};
use crate::registers::Registers;
use std::fmt;

pub type Microcode = fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>;

#[derive(Debug)]
pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub operands: Operands,
    pub microcode: Microcode,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: &str,
        operands: Operands,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: mnemonic.to_owned(),
            operands,
            microcode,
        }
    }

    /// Instruction width in bytes, opcode included. Non-jumping handlers
    /// advance the program counter by exactly this amount.
    pub fn width(&self) -> usize {
        1 + self.operands.byte_count()
    }

    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, self)
    }
}

/// A value emitted on the program output channel by PRN or PRA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Decimal(u8),
    Character(char),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Output::Decimal(value) => write!(f, "{}", value),
            Output::Character(character) => write!(f, "{}", character),
        }
    }
}

#[derive(Debug)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub resolution: OperandResolution,
    pub outcome: String,
    pub output: Option<Output>,
}

impl LogLine {
    pub fn new(
        cpu_instruction: &CPUInstruction,
        resolution: OperandResolution,
        outcome: String,
    ) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic.clone(),
            resolution,
            outcome,
            output: None,
        }
    }

    pub fn with_output(mut self, output: Output) -> LogLine {
        self.output = Some(output);
        self
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![self.opcode];
        for i in self.resolution.operands.clone() {
            bytes.push(i);
        }
        let byte_sequence = format!(
            "({})",
            bytes
                .iter()
                .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
                .trim()
        );

        write!(
            f,
            "#0x{:02X}: {: <12}{: <5}{: <10}{}",
            self.address, byte_sequence, self.mnemonic, self.resolution, self.outcome
        )
    }
}
