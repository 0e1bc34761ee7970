use super::*;

pub fn ret(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;

    registers.program_counter = registers.stack_pull(memory)? as usize;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[PC=0x{:02X}]", registers.program_counter),
    ))
}
