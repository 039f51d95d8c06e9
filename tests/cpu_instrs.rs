//! Instruction-level scenarios running whole programs through the core.

mod common;

use common::with_program;
use gameboy_cpu::{Cpu, FlatMemory, MemoryBus, BOOT_PC};

#[test]
fn absolute_jump_retargets_the_program_counter() {
    let (mut cpu, mut memory) = with_program(&[0xc3, 0x50, 0x01]); // JP 0x0150
    assert_eq!(cpu.step(&mut memory), 16);
    assert_eq!(cpu.pc, 0x0150);
}

#[test]
fn bcd_addition_program_stays_decimal() {
    // A = 0x19, add 0x28, then DAA: decimal 19 + 28 = 47.
    let (mut cpu, mut memory) = with_program(&[0x3e, 0x19, 0xc6, 0x28, 0x27]);
    cpu.step(&mut memory);
    cpu.step(&mut memory);
    cpu.step(&mut memory);
    assert_eq!(cpu.registers.a, 0x47);
    assert!(!cpu.registers.f.carry);
}

#[test]
fn bit_test_reads_without_writing() {
    let (mut cpu, mut memory) = with_program(&[0xcb, 0x7c]); // BIT 7,H
    cpu.registers.set_h(0x80);
    assert_eq!(cpu.step(&mut memory), 8);
    assert!(!cpu.registers.f.zero);
    assert!(cpu.registers.f.half_carry);
    assert_eq!(cpu.registers.h(), 0x80);
}

#[test]
fn push_pop_round_trip_preserves_the_stack_pointer() {
    let (mut cpu, mut memory) = with_program(&[0xc5, 0xd1]); // PUSH BC / POP DE
    cpu.registers.set_bc(0xbeef);
    let sp = cpu.sp;
    assert_eq!(cpu.step(&mut memory), 16);
    assert_eq!(cpu.step(&mut memory), 12);
    assert_eq!(cpu.registers.get_de(), 0xbeef);
    assert_eq!(cpu.sp, sp);
}

#[test]
fn block_copy_loop_moves_memory() {
    // Copy 4 bytes from 0xC000 to 0xD000:
    //   LD HL,0xC000 / LD DE,0xD000 / LD B,4
    // loop:
    //   LDI A,(HL) / LD (DE),A / INC DE / DEC B / JR NZ,loop
    let (mut cpu, mut memory) = with_program(&[
        0x21, 0x00, 0xc0, // LD HL,0xC000
        0x11, 0x00, 0xd0, // LD DE,0xD000
        0x06, 0x04, // LD B,4
        0x2a, // LDI A,(HL)
        0x12, // LD (DE),A
        0x13, // INC DE
        0x05, // DEC B
        0x20, 0xfa, // JR NZ,-6
        0x10, // STOP
    ]);
    memory.load(0xc000, &[0xde, 0xad, 0xbe, 0xef]);

    cpu.run(&mut memory, 10_000);
    assert!(cpu.halted);
    assert_eq!(&memory.data[0xd000..0xd004], &[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(cpu.registers.get_hl(), 0xc004);
}

#[test]
fn interrupt_round_trip_resumes_after_the_handler() {
    // Main program enables interrupts then halts; the handler at 0x0040
    // bumps B and returns with RETI.
    let (mut cpu, mut memory) = with_program(&[0xfb, 0x76]); // EI / HALT
    memory.load(0x0040, &[0x04, 0xd9]); // INC B / RETI

    cpu.run(&mut memory, 1_000);
    assert!(cpu.halted);

    assert!(cpu.interrupt(&mut memory, 0x0040));
    assert_eq!(cpu.pc, 0x0040);
    assert!(!cpu.interrupt_enabled);
    assert!(!cpu.halted);

    cpu.step(&mut memory); // INC B
    cpu.step(&mut memory); // RETI
    assert_eq!(cpu.registers.b, 0x01);
    assert_eq!(cpu.pc, BOOT_PC + 2);
    assert!(cpu.interrupt_enabled);
}

#[test]
fn pending_interrupt_stays_refused_until_enabled() {
    let (mut cpu, mut memory) = with_program(&[0xfb]); // EI
    assert!(!cpu.interrupt(&mut memory, 0x0048));
    assert_eq!(cpu.pc, BOOT_PC);

    cpu.step(&mut memory);
    assert!(cpu.interrupt(&mut memory, 0x0048));
    assert_eq!(cpu.pc, 0x0048);
}

#[test]
fn run_reports_cycles_consumed_including_overshoot() {
    // NOPs all the way: exact budgets divide evenly, others overshoot by
    // one instruction.
    let (mut cpu, mut memory) = with_program(&[]);
    assert_eq!(cpu.run(&mut memory, 40), 40);

    let (mut cpu, mut memory) = with_program(&[]);
    assert_eq!(cpu.run(&mut memory, 6), 8);
}

#[test]
fn snapshot_resumes_bit_identically() {
    let (mut cpu, mut memory) = with_program(&[
        0x3e, 0x09, // LD A,9
        0xc6, 0x01, // ADD A,1
        0x27, // DAA
        0x06, 0x05, // LD B,5
        0x80, // ADD A,B
    ]);
    cpu.step(&mut memory);
    cpu.step(&mut memory);

    let snapshot = cpu.clone();
    let mut replay = snapshot.clone();
    let mut replay_memory = memory.clone();

    cpu.step(&mut memory);
    cpu.step(&mut memory);
    cpu.step(&mut memory);
    replay.step(&mut replay_memory);
    replay.step(&mut replay_memory);
    replay.step(&mut replay_memory);

    assert_eq!(cpu, replay);
    assert_eq!(cpu.registers.a, 0x15);
}

#[test]
fn conditional_call_and_return_costs() {
    // CP 0 on a zero accumulator takes the Z branches.
    let (mut cpu, mut memory) = with_program(&[
        0xaf, // XOR A
        0xcc, 0x00, 0xc0, // CALL Z,0xC000
    ]);
    memory.write_u8(0xc000, 0xc8); // RET Z

    cpu.step(&mut memory);
    assert!(cpu.registers.f.zero);
    assert_eq!(cpu.step(&mut memory), 24);
    assert_eq!(cpu.pc, 0xc000);
    assert_eq!(cpu.step(&mut memory), 20);
    assert_eq!(cpu.pc, BOOT_PC + 4);

    // Not-taken paths cost less and fall through.
    let (mut cpu, mut memory) = with_program(&[0xc4, 0x00, 0xc0, 0xc0]);
    cpu.registers.f.zero = true;
    assert_eq!(cpu.step(&mut memory), 12); // CALL NZ not taken
    assert_eq!(cpu.step(&mut memory), 8); // RET NZ not taken
    assert_eq!(cpu.pc, BOOT_PC + 4);
}

#[test]
fn halt_wakes_through_interrupt_delivery() {
    let (mut cpu, mut memory) = with_program(&[0xfb, 0x76, 0x00]); // EI / HALT / NOP
    memory.write_u8(0x0040, 0xd9); // RETI

    cpu.run(&mut memory, 1_000);
    assert!(cpu.halted);
    assert!(cpu.interrupt(&mut memory, 0x0040));
    // The handler returns and execution picks up after the HALT.
    cpu.step(&mut memory);
    assert_eq!(cpu.pc, BOOT_PC + 2);
    assert!(cpu.run(&mut memory, 4) > 0);
}

#[test]
fn host_can_halt_and_resume_the_core() {
    let (mut cpu, mut memory) = with_program(&[]); // NOPs
    cpu.stop();
    assert!(cpu.halted);
    assert_eq!(cpu.run(&mut memory, 100), 0);
    assert_eq!(cpu.pc, BOOT_PC);

    cpu.resume();
    assert_eq!(cpu.run(&mut memory, 8), 8);
}

#[test]
fn stop_needs_an_explicit_resume() {
    let (mut cpu, mut memory) = with_program(&[0x10, 0x00]); // STOP / NOP
    cpu.step(&mut memory);
    assert!(cpu.halted);
    assert_eq!(cpu.run(&mut memory, 100), 0);

    cpu.resume();
    assert_eq!(cpu.run(&mut memory, 4), 4);
}

#[test]
fn undefined_opcodes_cannot_wedge_a_run() {
    let (mut cpu, mut memory) = with_program(&[0xd3, 0xdd, 0xed, 0xfd, 0x10]);
    let consumed = cpu.run(&mut memory, 1_000);
    assert!(cpu.halted);
    assert_eq!(consumed, 20);
    assert_eq!(cpu.pc, BOOT_PC + 5);
}

#[test]
fn accumulator_flag_word_survives_the_stack_with_a_clean_low_nibble() {
    let (mut cpu, mut memory) = with_program(&[0x37, 0xf5]); // SCF / PUSH AF
    cpu.registers.a = 0x9c;
    cpu.step(&mut memory);
    cpu.step(&mut memory);
    let pushed = memory.read_u16(cpu.sp);
    assert_eq!(pushed & 0x000f, 0);
    assert_eq!(pushed, 0x9c10);
}

#[test]
fn fresh_cores_start_from_the_boot_handoff_state() {
    let cpu = Cpu::new();
    assert_eq!(cpu.pc, BOOT_PC);
    assert_eq!(cpu.registers.get_af(), 0x0100);
    assert_eq!(cpu.registers.get_bc(), 0x0013);
    assert_eq!(cpu.registers.get_de(), 0x00d8);
    assert_eq!(cpu.registers.get_hl(), 0x014d);
    assert_eq!(cpu.sp, 0xfffe);

    let mut relocated = Cpu::with_start(0x4000);
    assert_eq!(relocated.pc, 0x4000);
    let mut memory = FlatMemory::default();
    memory.write_u8(0x4000, 0x3c); // INC A
    relocated.step(&mut memory);
    assert_eq!(relocated.registers.a, 0x02);
}
