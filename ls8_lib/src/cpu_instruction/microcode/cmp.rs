use super::*;

/// # CMP
///
/// Sets the `equal` flag when every bit set in the first register is also
/// set in the second one. This is a bitwise subset test, not an arithmetic
/// equality, and existing programs rely on it behaving that way.
pub fn cmp(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let (reg_a, reg_b) = resolution.pair();

    let equal = registers.get(reg_a) & !registers.get(reg_b) == 0;
    registers.equal = Some(equal);
    registers.program_counter += cpu_instruction.width();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[F={}]", registers.format_flags()),
    ))
}
