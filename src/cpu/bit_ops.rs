//! The secondary instruction table, reached through the 0xCB prefix.
//!
//! The sub-opcode byte splits into an operand slot (low three bits) and an
//! operation group (high five bits): groups 0-7 rotate or shift, 8-15 test a
//! bit, 16-23 clear one and 24-31 set one.

use log::trace;
use strum_macros::{AsRefStr, EnumIter};

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// The operand slot addressed by the low three bits of a sub-opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum BitOpTarget {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address in HL.
    HlIndirect,
    A,
}

impl BitOpTarget {
    pub fn from_index(index: u8) -> BitOpTarget {
        match index % 8 {
            0 => BitOpTarget::B,
            1 => BitOpTarget::C,
            2 => BitOpTarget::D,
            3 => BitOpTarget::E,
            4 => BitOpTarget::H,
            5 => BitOpTarget::L,
            6 => BitOpTarget::HlIndirect,
            7 => BitOpTarget::A,
            _ => unreachable!(),
        }
    }

    fn get<M: MemoryBus>(&self, cpu: &Cpu, bus: &mut M) -> u8 {
        match self {
            BitOpTarget::B => cpu.registers.b,
            BitOpTarget::C => cpu.registers.c,
            BitOpTarget::D => cpu.registers.d,
            BitOpTarget::E => cpu.registers.e,
            BitOpTarget::H => cpu.registers.h(),
            BitOpTarget::L => cpu.registers.l(),
            BitOpTarget::HlIndirect => bus.read_u8(cpu.registers.get_hl()),
            BitOpTarget::A => cpu.registers.a,
        }
    }

    fn set<M: MemoryBus>(&self, cpu: &mut Cpu, bus: &mut M, value: u8) {
        match self {
            BitOpTarget::B => cpu.registers.b = value,
            BitOpTarget::C => cpu.registers.c = value,
            BitOpTarget::D => cpu.registers.d = value,
            BitOpTarget::E => cpu.registers.e = value,
            BitOpTarget::H => cpu.registers.set_h(value),
            BitOpTarget::L => cpu.registers.set_l(value),
            BitOpTarget::HlIndirect => bus.write_u8(cpu.registers.get_hl(), value),
            BitOpTarget::A => cpu.registers.a = value,
        }
    }
}

/// The operation group of a sub-opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum BitOp {
    /// Rotate left, bit 7 into both bit 0 and carry.
    Rlc,
    /// Rotate right, bit 0 into both bit 7 and carry.
    Rrc,
    /// Rotate left through carry.
    Rl,
    /// Rotate right through carry.
    Rr,
    /// Shift left arithmetic, bit 7 into carry.
    Sla,
    /// Shift right arithmetic (bit 7 preserved), bit 0 into carry.
    Sra,
    /// Exchange the low and high nibbles.
    Swap,
    /// Shift right logical, bit 0 into carry.
    Srl,
    /// Test a bit: zero flag from the bit, no write-back.
    Bit(u8),
    /// Clear a bit; flags untouched.
    Res(u8),
    /// Set a bit; flags untouched.
    Set(u8),
}

impl BitOp {
    pub fn decode(code: u8) -> BitOp {
        let group = code / 8;
        match group {
            0 => BitOp::Rlc,
            1 => BitOp::Rrc,
            2 => BitOp::Rl,
            3 => BitOp::Rr,
            4 => BitOp::Sla,
            5 => BitOp::Sra,
            6 => BitOp::Swap,
            7 => BitOp::Srl,
            8..=15 => BitOp::Bit(group - 8),
            16..=23 => BitOp::Res(group - 16),
            24..=31 => BitOp::Set(group - 24),
            _ => unreachable!(),
        }
    }
}

impl Cpu {
    /// Executes one secondary-table sub-opcode. The prefix opcode's cycle
    /// cost is charged by the primary table; this only applies the effect.
    pub fn execute_cb_opcode<M: MemoryBus>(&mut self, bus: &mut M, code: u8) {
        let target = BitOpTarget::from_index(code % 8);
        let op = BitOp::decode(code);
        trace!("cb {} {}", op.as_ref(), target.as_ref());

        let value = target.get(self, bus);
        match op {
            BitOp::Rlc => {
                let carry_out = value >> 7;
                let result = value << 1 | carry_out;
                self.set_shift_flags(result, carry_out == 1);
                target.set(self, bus, result);
            }
            BitOp::Rrc => {
                let carry_out = value & 1;
                let result = value >> 1 | carry_out << 7;
                self.set_shift_flags(result, carry_out == 1);
                target.set(self, bus, result);
            }
            BitOp::Rl => {
                let carry_out = value >> 7;
                let result = value << 1 | self.registers.f.carry as u8;
                self.set_shift_flags(result, carry_out == 1);
                target.set(self, bus, result);
            }
            BitOp::Rr => {
                let carry_out = value & 1;
                let result = value >> 1 | (self.registers.f.carry as u8) << 7;
                self.set_shift_flags(result, carry_out == 1);
                target.set(self, bus, result);
            }
            BitOp::Sla => {
                let carry_out = value >> 7;
                let result = value << 1;
                self.set_shift_flags(result, carry_out == 1);
                target.set(self, bus, result);
            }
            BitOp::Sra => {
                let carry_out = value & 1;
                let result = value >> 1 | value & 0x80;
                self.set_shift_flags(result, carry_out == 1);
                target.set(self, bus, result);
            }
            BitOp::Swap => {
                let result = value << 4 | value >> 4;
                self.set_shift_flags(result, false);
                target.set(self, bus, result);
            }
            BitOp::Srl => {
                let carry_out = value & 1;
                let result = value >> 1;
                self.set_shift_flags(result, carry_out == 1);
                target.set(self, bus, result);
            }
            BitOp::Bit(bit) => {
                // Test only: the operand is not written back and carry is
                // untouched.
                self.registers.f.zero = value & 1 << bit == 0;
                self.registers.f.subtract = false;
                self.registers.f.half_carry = true;
            }
            BitOp::Res(bit) => {
                target.set(self, bus, value & !(1 << bit));
            }
            BitOp::Set(bit) => {
                target.set(self, bus, value | 1 << bit);
            }
        }
    }

    fn set_shift_flags(&mut self, result: u8, carry_out: bool) {
        self.registers.f.zero = result == 0;
        self.registers.f.subtract = false;
        self.registers.f.half_carry = false;
        self.registers.f.carry = carry_out;
    }
}
