use super::*;

pub fn jmp(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let index = resolution.single();

    registers.program_counter = registers.get(index) as usize;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[PC=0x{:02X}]", registers.program_counter),
    ))
}
