use super::*;

/// # IRET
///
/// Return from an interrupt handler: pop general registers 7 down to 0
/// (the reverse of the interrupt entry sequence), pop the program counter,
/// then re-enable interrupts.
pub fn iret(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction
        .operands
        .fetch(registers.program_counter, memory)?;

    registers.pull_interrupt_frame(memory)?;
    registers.interrupts_enabled = true;

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
    use crate::registers::STACK_INIT_ADDR;

    #[test]
    fn test_iret() {
        let cpu_instruction =
            CPUInstruction::new(0x11, opcode::IRET, "IRET", Operands::None, iret);
        let (mut memory, mut registers) = get_stuff(0x11, vec![opcode::IRET]);
        registers.program_counter = 0x0f;
        for index in 0..5u8 {
            registers.set(index, 0x20 + index);
        }
        registers.push_interrupt_frame(&mut memory).unwrap();
        registers.interrupts_enabled = false;

        // handler trashes state before returning
        registers.program_counter = 0x11;
        registers.set(2, 0x00);

        let log_line = cpu_instruction.execute(&mut memory, &mut registers).unwrap();
        assert_eq!("IRET".to_owned(), log_line.mnemonic);
        assert_eq!(0x0f, registers.program_counter);
        assert_eq!(0x22, registers.get(2));
        assert!(registers.interrupts_enabled);
        assert_eq!(STACK_INIT_ADDR, registers.stack_pointer());
    }
}
