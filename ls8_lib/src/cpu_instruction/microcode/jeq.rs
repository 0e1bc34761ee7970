use super::*;

/// # JEQ
///
/// Jump when the `equal` flag is set. An unset flag (no CMP executed yet)
/// does not jump.
pub fn jeq(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let index = resolution.single();

    if registers.equal == Some(true) {
        registers.program_counter = registers.get(index) as usize;
    } else {
        registers.program_counter += cpu_instruction.width();
    }

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[PC=0x{:02X}]", registers.program_counter),
    ))
}
