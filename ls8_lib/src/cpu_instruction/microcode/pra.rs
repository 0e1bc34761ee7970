use super::*;

pub fn pra(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let index = resolution.single();
    let value = registers.get(index);

    registers.program_counter += cpu_instruction.width();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[R{}=0x{:02x}]", index, value),
    )
    .with_output(Output::Character(char::from(value))))
}
