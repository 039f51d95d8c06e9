use log::{debug, info, trace};

use crate::cpu::register::Registers;
use crate::memory::MemoryBus;

/// Address of the first instruction after the boot rom hands over control.
pub const BOOT_PC: u16 = 0x0100;

/// The CPU core: the register file plus the interrupt-enable and halt latches.
///
/// The core owns no memory. Every instruction byte and data access goes
/// through the [`MemoryBus`](crate::memory::MemoryBus) passed to
/// [`step`](Cpu::step) or [`run`](Cpu::run), so the host decides what the
/// address space looks like. The whole state is plain data; cloning it takes
/// a snapshot that resumes bit-identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpu {
    pub registers: Registers,
    pub sp: u16,
    pub pc: u16,
    /// The master interrupt enable (IME). Gates [`interrupt`](Cpu::interrupt)
    /// delivery and is toggled by EI, DI and RETI.
    pub interrupt_enabled: bool,
    /// Set by HALT and STOP; cleared by [`resume`](Cpu::resume) or an
    /// accepted interrupt. While set, [`run`](Cpu::run) executes nothing.
    pub halted: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Creates a CPU in the post-boot-rom state, ready to execute at
    /// [`BOOT_PC`].
    pub fn new() -> Self {
        Self::with_start(BOOT_PC)
    }

    /// Creates a CPU in the post-boot-rom register state but starting at an
    /// arbitrary address.
    pub fn with_start(pc: u16) -> Self {
        let mut registers = Registers::default();
        registers.a = 0x01;
        registers.b = 0x00;
        registers.c = 0x13;
        registers.d = 0x00;
        registers.e = 0xd8;
        registers.set_hl(0x014d);

        Cpu {
            registers,
            sp: 0xfffe,
            pc,
            interrupt_enabled: false,
            halted: false,
        }
    }

    /// Fetches the byte at PC and advances PC past it.
    pub fn fetch_u8<M: MemoryBus>(&mut self, bus: &mut M) -> u8 {
        let byte = bus.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches the byte at PC as a signed displacement.
    pub fn fetch_i8<M: MemoryBus>(&mut self, bus: &mut M) -> i8 {
        self.fetch_u8(bus) as i8
    }

    /// Fetches a little-endian word at PC and advances PC past it.
    pub fn fetch_u16<M: MemoryBus>(&mut self, bus: &mut M) -> u16 {
        let word = bus.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        word
    }

    pub fn push_u16<M: MemoryBus>(&mut self, bus: &mut M, value: u16) {
        self.sp = self.sp.wrapping_sub(2);
        bus.write_u16(self.sp, value);
    }

    pub fn pop_u16<M: MemoryBus>(&mut self, bus: &mut M) -> u16 {
        let value = bus.read_u16(self.sp);
        self.sp = self.sp.wrapping_add(2);
        value
    }

    /// Pushes the current PC and jumps to `address`.
    pub(crate) fn call<M: MemoryBus>(&mut self, bus: &mut M, address: u16) {
        let pc = self.pc;
        self.push_u16(bus, pc);
        self.pc = address;
    }

    /// Pops the return address into PC.
    pub(crate) fn ret<M: MemoryBus>(&mut self, bus: &mut M) {
        self.pc = self.pop_u16(bus);
    }

    /// Sets the halt latch; [`run`](Cpu::run) executes nothing until
    /// [`resume`](Cpu::resume) or an accepted interrupt lifts it.
    pub fn stop(&mut self) {
        debug!("cpu halted at pc {:#06x}", self.pc);
        self.halted = true;
    }

    /// Clears the halt latch so [`run`](Cpu::run) executes again.
    pub fn resume(&mut self) {
        self.halted = false;
    }

    /// Delivers an interrupt request for the handler at `vector`.
    ///
    /// If the master enable is set, it is cleared, the current PC is pushed,
    /// execution moves to `vector`, any halt is lifted and `true` is
    /// returned. Otherwise the request is refused untouched and the caller
    /// keeps it pending.
    pub fn interrupt<M: MemoryBus>(&mut self, bus: &mut M, vector: u16) -> bool {
        if !self.interrupt_enabled {
            debug!("interrupt {:#06x} refused, master enable clear", vector);
            return false;
        }
        info!("servicing interrupt {:#06x}", vector);
        self.interrupt_enabled = false;
        self.call(bus, vector);
        self.resume();
        true
    }

    /// Executes instructions until at least `budget` cycles are consumed or
    /// the CPU halts. Returns the cycles actually consumed, which may exceed
    /// `budget` by up to one instruction.
    pub fn run<M: MemoryBus>(&mut self, bus: &mut M, budget: u32) -> u32 {
        let mut consumed = 0;
        while !self.halted && consumed < budget {
            consumed += self.step(bus);
        }
        consumed
    }

    /// Fetches and executes a single instruction, returning its cycle cost.
    pub fn step<M: MemoryBus>(&mut self, bus: &mut M) -> u32 {
        let pc = self.pc;
        let opcode = self.fetch_u8(bus);
        trace!("pc {:#06x} opcode {:#04x}", pc, opcode);
        self.execute_opcode(bus, opcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn reset_state_matches_boot_handoff() {
        let cpu = Cpu::new();
        assert_eq!(cpu.pc, 0x0100);
        assert_eq!(cpu.sp, 0xfffe);
        assert_eq!(cpu.registers.a, 0x01);
        assert_eq!(cpu.registers.get_bc(), 0x0013);
        assert_eq!(cpu.registers.get_de(), 0x00d8);
        assert_eq!(cpu.registers.get_hl(), 0x014d);
        assert_eq!(u8::from(cpu.registers.f), 0x00);
        assert!(!cpu.interrupt_enabled);
        assert!(!cpu.halted);
    }

    #[test]
    fn fetch_advances_and_wraps_pc() {
        let mut cpu = Cpu::with_start(0xffff);
        let mut bus = FlatMemory::default();
        bus.write_u8(0xffff, 0xab);
        bus.write_u8(0x0000, 0xcd);
        assert_eq!(cpu.fetch_u8(&mut bus), 0xab);
        assert_eq!(cpu.fetch_u8(&mut bus), 0xcd);
        assert_eq!(cpu.pc, 0x0001);
    }

    #[test]
    fn stack_round_trip_restores_sp() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemory::default();
        let sp = cpu.sp;
        cpu.push_u16(&mut bus, 0x1234);
        assert_eq!(cpu.sp, sp.wrapping_sub(2));
        assert_eq!(cpu.pop_u16(&mut bus), 0x1234);
        assert_eq!(cpu.sp, sp);
    }

    #[test]
    fn interrupt_refused_while_disabled() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemory::default();
        let before = cpu.clone();
        assert!(!cpu.interrupt(&mut bus, 0x0040));
        assert_eq!(cpu, before);
    }

    #[test]
    fn interrupt_pushes_pc_and_clears_master_enable() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemory::default();
        cpu.interrupt_enabled = true;
        cpu.halted = true;
        assert!(cpu.interrupt(&mut bus, 0x0048));
        assert_eq!(cpu.pc, 0x0048);
        assert!(!cpu.interrupt_enabled);
        assert!(!cpu.halted);
        assert_eq!(bus.read_u16(cpu.sp), 0x0100);
    }

    #[test]
    fn run_consumes_at_least_the_budget() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemory::default();
        // All zeroes: an endless stream of NOPs at 4 cycles apiece.
        assert_eq!(cpu.run(&mut bus, 40), 40);
        assert_eq!(cpu.pc, 0x0100 + 10);
    }

    #[test]
    fn run_may_overshoot_by_one_instruction() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemory::default();
        assert_eq!(cpu.run(&mut bus, 6), 8);
    }

    #[test]
    fn run_stops_while_halted() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemory::default();
        cpu.halted = true;
        assert_eq!(cpu.run(&mut bus, 100), 0);
        assert_eq!(cpu.pc, 0x0100);
        cpu.resume();
        assert!(cpu.run(&mut bus, 4) > 0);
    }
}
