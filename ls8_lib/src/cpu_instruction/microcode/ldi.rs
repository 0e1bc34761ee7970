use super::*;

/// # LDI
///
/// Load an immediate value into a general register.
pub fn ldi(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let (index, value) = resolution.pair();

    registers.set(index, value);
    registers.program_counter += cpu_instruction.width();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[R{}=0x{:02x}]", index, value),
    ))
}
