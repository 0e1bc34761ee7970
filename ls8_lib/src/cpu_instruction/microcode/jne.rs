use super::*;

/// # JNE
///
/// Jump when the `equal` flag is explicitly false. An unset flag does not
/// jump.
pub fn jne(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let index = resolution.single();

    if registers.equal == Some(false) {
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
