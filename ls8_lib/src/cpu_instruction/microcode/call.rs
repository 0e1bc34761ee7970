use super::*;

/// # CALL
///
/// Push the address of the next instruction, then transfer control to the
/// address held in the operand register.
pub fn call(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;
    let index = resolution.single();

    let return_address = ((registers.program_counter + cpu_instruction.width()) & 0xff) as u8;
    registers.stack_push(memory, return_address)?;
    registers.program_counter = registers.get(index) as usize;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[PC=0x{:02X}][SP=0x{:02x}]",
            registers.program_counter,
            registers.stack_pointer()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::cpu_instruction::opcode;

    #[test]
    fn test_call() {
        let cpu_instruction =
            CPUInstruction::new(0x10, opcode::CALL, "CALL", Operands::Register, call);
        let (mut memory, mut registers) = get_stuff(0x10, vec![opcode::CALL, 0x00]);
        registers.set(0, 0x30);
        let log_line = cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!("CALL".to_owned(), log_line.mnemonic);
        assert_eq!(0x30, registers.program_counter);
        // return address is the byte after the CALL instruction
        assert_eq!(vec![0x12], memory.read(0xf7, 1).unwrap());
    }
}
