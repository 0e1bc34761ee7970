use crate::cpu_instruction::microcode::{self, MicrocodeError};
use crate::cpu_instruction::{opcode, CPUInstruction, LogLine, Microcode};
use crate::memory::{AddressableIO, RAM as Memory};
use crate::operand::Operands;
use crate::registers::Registers;
use std::error;
use std::fmt;

#[derive(Clone, Copy)]
struct InstructionDef {
    mnemonic: &'static str,
    operands: Operands,
    microcode: Microcode,
}

/*
 * DispatchTable
 * immutable opcode → handler mapping, built once at CPU construction and
 * owned by the CPU instance.
 */
pub struct DispatchTable {
    table: [Option<InstructionDef>; 256],
}

impl DispatchTable {
    pub fn new() -> DispatchTable {
        let defs: [(u8, &'static str, Operands, Microcode); 17] = [
            (opcode::NOP, "NOP", Operands::None, microcode::nop),
            (opcode::LDI, "LDI", Operands::RegisterImmediate, microcode::ldi),
            (opcode::MUL, "MUL", Operands::RegisterPair, microcode::mul),
            (opcode::PRN, "PRN", Operands::Register, microcode::prn),
            (opcode::PRA, "PRA", Operands::Register, microcode::pra),
            (opcode::ST, "ST", Operands::RegisterPair, microcode::st),
            (opcode::PUSH, "PUSH", Operands::Register, microcode::push),
            (opcode::POP, "POP", Operands::Register, microcode::pop),
            (opcode::ADD, "ADD", Operands::RegisterPair, microcode::add),
            (opcode::CALL, "CALL", Operands::Register, microcode::call),
            (opcode::RET, "RET", Operands::None, microcode::ret),
            (opcode::JMP, "JMP", Operands::Register, microcode::jmp),
            (opcode::JEQ, "JEQ", Operands::Register, microcode::jeq),
            (opcode::JNE, "JNE", Operands::Register, microcode::jne),
            (opcode::CMP, "CMP", Operands::RegisterPair, microcode::cmp),
            (opcode::IRET, "IRET", Operands::None, microcode::iret),
            (opcode::HLT, "HLT", Operands::None, microcode::hlt),
        ];

        let mut table = [None; 256];
        for (opcode, mnemonic, operands, microcode) in defs {
            table[opcode as usize] = Some(InstructionDef {
                mnemonic,
                operands,
                microcode,
            });
        }

        DispatchTable { table }
    }

    pub fn resolve(&self, address: usize, opcode: u8) -> Result<CPUInstruction, ExecutionError> {
        match self.table[opcode as usize] {
            Some(def) => Ok(CPUInstruction::new(
                address,
                opcode,
                def.mnemonic,
                def.operands,
                def.microcode,
            )),
            None => Err(ExecutionError::Decode { address, opcode }),
        }
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the byte at the program counter into the instruction register,
/// decode it through the dispatch table and execute the bound microcode.
pub fn execute_step(
    registers: &mut Registers,
    memory: &mut Memory,
    dispatch: &DispatchTable,
) -> Result<LogLine, ExecutionError> {
    let opcode = memory
        .read(registers.program_counter, 1)
        .map_err(MicrocodeError::from)?[0];
    registers.instruction_register = opcode;
    let cpu_instruction = dispatch.resolve(registers.program_counter, opcode)?;

    cpu_instruction
        .execute(memory, registers)
        .map_err(ExecutionError::from)
}

#[derive(Debug)]
pub enum ExecutionError {
    // ↓ no handler registered for the opcode at this address, fatal
    Decode { address: usize, opcode: u8 },
    Fault(MicrocodeError),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExecutionError::Decode { address, opcode } => write!(
                f,
                "invalid instruction at address #0x{:02X}: 0b{:08b}",
                address, opcode
            ),
            ExecutionError::Fault(e) => write!(f, "execution fault: {}", e),
        }
    }
}

impl error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ExecutionError::Decode { .. } => None,
            ExecutionError::Fault(e) => Some(e),
        }
    }
}

impl std::convert::From<MicrocodeError> for ExecutionError {
    fn from(err: MicrocodeError) -> ExecutionError {
        ExecutionError::Fault(err)
    }
}
