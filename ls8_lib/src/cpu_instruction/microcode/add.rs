use super::*;

pub fn add(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let (reg_a, reg_b) = resolution.pair();

    let result = alu::apply(alu::Operation::Add, registers.get(reg_a), registers.get(reg_b));
    registers.set(reg_a, result);
    registers.program_counter += cpu_instruction.width();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[R{}=0x{:02x}]", reg_a, result),
    ))
}
