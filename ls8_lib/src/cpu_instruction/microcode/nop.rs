use super::*;

pub fn nop(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    registers.program_counter += cpu_instruction.width();

    Ok(LogLine::new(cpu_instruction, resolution, String::new()))
}
