//! The primary instruction table.
//!
//! One exhaustive match over the opcode byte. Each arm performs the
//! instruction's effect against the register file and bus and returns its
//! cycle cost; conditional jumps, calls and returns return the taken or
//! not-taken cost depending on the flag tested. The operand bytes are fetched
//! inside the arm, so PC always ends up past the full instruction.

use log::debug;

use crate::cpu::alu;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

impl Cpu {
    /// Executes one already-fetched opcode and returns its cycle cost.
    pub fn execute_opcode<M: MemoryBus>(&mut self, bus: &mut M, opcode: u8) -> u32 {
        match opcode {
            // NOP
            0x00 => 4,
            // LD BC,d16
            0x01 => {
                let value = self.fetch_u16(bus);
                self.registers.set_bc(value);
                12
            }
            // LD (BC),A
            0x02 => {
                bus.write_u8(self.registers.get_bc(), self.registers.a);
                8
            }
            // INC BC
            0x03 => {
                let value = self.registers.get_bc().wrapping_add(1);
                self.registers.set_bc(value);
                8
            }
            // INC B
            0x04 => {
                self.registers.b = alu::increment8(&mut self.registers.f, self.registers.b);
                4
            }
            // DEC B
            0x05 => {
                self.registers.b = alu::decrement8(&mut self.registers.f, self.registers.b);
                4
            }
            // LD B,d8
            0x06 => {
                self.registers.b = self.fetch_u8(bus);
                8
            }
            // RLCA, expressed through the secondary table's RLC A
            0x07 => {
                self.execute_cb_opcode(bus, 0x07);
                4
            }
            // LD (a16),SP
            0x08 => {
                let address = self.fetch_u16(bus);
                bus.write_u16(address, self.sp);
                20
            }
            // ADD HL,BC
            0x09 => {
                let bc = self.registers.get_bc();
                let sum = alu::add16(&mut self.registers.f, self.registers.hl, bc);
                self.registers.set_hl(sum);
                8
            }
            // LD A,(BC)
            0x0a => {
                self.registers.a = bus.read_u8(self.registers.get_bc());
                8
            }
            // DEC BC
            0x0b => {
                let value = self.registers.get_bc().wrapping_sub(1);
                self.registers.set_bc(value);
                8
            }
            // INC C
            0x0c => {
                self.registers.c = alu::increment8(&mut self.registers.f, self.registers.c);
                4
            }
            // DEC C
            0x0d => {
                self.registers.c = alu::decrement8(&mut self.registers.f, self.registers.c);
                4
            }
            // LD C,d8
            0x0e => {
                self.registers.c = self.fetch_u8(bus);
                8
            }
            // RRCA
            0x0f => {
                self.execute_cb_opcode(bus, 0x0f);
                4
            }
            // STOP: halts regardless of the master interrupt enable.
            0x10 => {
                self.stop();
                4
            }
            // LD DE,d16
            0x11 => {
                let value = self.fetch_u16(bus);
                self.registers.set_de(value);
                12
            }
            // LD (DE),A
            0x12 => {
                bus.write_u8(self.registers.get_de(), self.registers.a);
                8
            }
            // INC DE
            0x13 => {
                let value = self.registers.get_de().wrapping_add(1);
                self.registers.set_de(value);
                8
            }
            // INC D
            0x14 => {
                self.registers.d = alu::increment8(&mut self.registers.f, self.registers.d);
                4
            }
            // DEC D
            0x15 => {
                self.registers.d = alu::decrement8(&mut self.registers.f, self.registers.d);
                4
            }
            // LD D,d8
            0x16 => {
                self.registers.d = self.fetch_u8(bus);
                8
            }
            // RLA
            0x17 => {
                self.execute_cb_opcode(bus, 0x17);
                4
            }
            // JR r8
            0x18 => {
                let offset = self.fetch_i8(bus);
                self.pc = self.pc.wrapping_add_signed(offset as i16);
                12
            }
            // ADD HL,DE
            0x19 => {
                let de = self.registers.get_de();
                let sum = alu::add16(&mut self.registers.f, self.registers.hl, de);
                self.registers.set_hl(sum);
                8
            }
            // LD A,(DE)
            0x1a => {
                self.registers.a = bus.read_u8(self.registers.get_de());
                8
            }
            // DEC DE
            0x1b => {
                let value = self.registers.get_de().wrapping_sub(1);
                self.registers.set_de(value);
                8
            }
            // INC E
            0x1c => {
                self.registers.e = alu::increment8(&mut self.registers.f, self.registers.e);
                4
            }
            // DEC E
            0x1d => {
                self.registers.e = alu::decrement8(&mut self.registers.f, self.registers.e);
                4
            }
            // LD E,d8
            0x1e => {
                self.registers.e = self.fetch_u8(bus);
                8
            }
            // RRA
            0x1f => {
                self.execute_cb_opcode(bus, 0x1f);
                4
            }
            // JR NZ,r8
            0x20 => {
                let offset = self.fetch_i8(bus);
                if !self.registers.f.zero {
                    self.pc = self.pc.wrapping_add_signed(offset as i16);
                    12
                } else {
                    8
                }
            }
            // LD HL,d16
            0x21 => {
                let value = self.fetch_u16(bus);
                self.registers.set_hl(value);
                12
            }
            // LDI (HL),A
            0x22 => {
                bus.write_u8(self.registers.hl, self.registers.a);
                self.registers.hl = self.registers.hl.wrapping_add(1);
                8
            }
            // INC HL
            0x23 => {
                self.registers.hl = self.registers.hl.wrapping_add(1);
                8
            }
            // INC H
            0x24 => {
                let h = self.registers.h();
                let value = alu::increment8(&mut self.registers.f, h);
                self.registers.set_h(value);
                4
            }
            // DEC H
            0x25 => {
                let h = self.registers.h();
                let value = alu::decrement8(&mut self.registers.f, h);
                self.registers.set_h(value);
                4
            }
            // LD H,d8
            0x26 => {
                let value = self.fetch_u8(bus);
                self.registers.set_h(value);
                8
            }
            // DAA
            0x27 => {
                self.registers.a = alu::decimal_adjust(&mut self.registers.f, self.registers.a);
                4
            }
            // JR Z,r8
            0x28 => {
                let offset = self.fetch_i8(bus);
                if self.registers.f.zero {
                    self.pc = self.pc.wrapping_add_signed(offset as i16);
                    12
                } else {
                    8
                }
            }
            // ADD HL,HL
            0x29 => {
                let sum = alu::add16(&mut self.registers.f, self.registers.hl, self.registers.hl);
                self.registers.set_hl(sum);
                8
            }
            // LDI A,(HL)
            0x2a => {
                self.registers.a = bus.read_u8(self.registers.hl);
                self.registers.hl = self.registers.hl.wrapping_add(1);
                8
            }
            // DEC HL
            0x2b => {
                self.registers.hl = self.registers.hl.wrapping_sub(1);
                8
            }
            // INC L
            0x2c => {
                let l = self.registers.l();
                let value = alu::increment8(&mut self.registers.f, l);
                self.registers.set_l(value);
                4
            }
            // DEC L
            0x2d => {
                let l = self.registers.l();
                let value = alu::decrement8(&mut self.registers.f, l);
                self.registers.set_l(value);
                4
            }
            // LD L,d8
            0x2e => {
                let value = self.fetch_u8(bus);
                self.registers.set_l(value);
                8
            }
            // CPL
            0x2f => {
                self.registers.a = !self.registers.a;
                self.registers.f.subtract = true;
                self.registers.f.half_carry = true;
                4
            }
            // JR NC,r8
            0x30 => {
                let offset = self.fetch_i8(bus);
                if !self.registers.f.carry {
                    self.pc = self.pc.wrapping_add_signed(offset as i16);
                    12
                } else {
                    8
                }
            }
            // LD SP,d16
            0x31 => {
                self.sp = self.fetch_u16(bus);
                12
            }
            // LDD (HL),A
            0x32 => {
                bus.write_u8(self.registers.hl, self.registers.a);
                self.registers.hl = self.registers.hl.wrapping_sub(1);
                8
            }
            // INC SP
            0x33 => {
                self.sp = self.sp.wrapping_add(1);
                8
            }
            // INC (HL)
            0x34 => {
                let address = self.registers.hl;
                let value = alu::increment8(&mut self.registers.f, bus.read_u8(address));
                bus.write_u8(address, value);
                12
            }
            // DEC (HL)
            0x35 => {
                let address = self.registers.hl;
                let value = alu::decrement8(&mut self.registers.f, bus.read_u8(address));
                bus.write_u8(address, value);
                12
            }
            // LD (HL),d8
            0x36 => {
                let value = self.fetch_u8(bus);
                bus.write_u8(self.registers.hl, value);
                12
            }
            // SCF
            0x37 => {
                self.registers.f.subtract = false;
                self.registers.f.half_carry = false;
                self.registers.f.carry = true;
                4
            }
            // JR C,r8
            0x38 => {
                let offset = self.fetch_i8(bus);
                if self.registers.f.carry {
                    self.pc = self.pc.wrapping_add_signed(offset as i16);
                    12
                } else {
                    8
                }
            }
            // ADD HL,SP
            0x39 => {
                let sum = alu::add16(&mut self.registers.f, self.registers.hl, self.sp);
                self.registers.set_hl(sum);
                8
            }
            // LDD A,(HL)
            0x3a => {
                self.registers.a = bus.read_u8(self.registers.hl);
                self.registers.hl = self.registers.hl.wrapping_sub(1);
                8
            }
            // DEC SP
            0x3b => {
                self.sp = self.sp.wrapping_sub(1);
                8
            }
            // INC A
            0x3c => {
                self.registers.a = alu::increment8(&mut self.registers.f, self.registers.a);
                4
            }
            // DEC A
            0x3d => {
                self.registers.a = alu::decrement8(&mut self.registers.f, self.registers.a);
                4
            }
            // LD A,d8
            0x3e => {
                self.registers.a = self.fetch_u8(bus);
                8
            }
            // CCF
            0x3f => {
                self.registers.f.subtract = false;
                self.registers.f.half_carry = false;
                self.registers.f.carry = !self.registers.f.carry;
                4
            }

            // LD B,r
            0x40 => 4,
            0x41 => {
                self.registers.b = self.registers.c;
                4
            }
            0x42 => {
                self.registers.b = self.registers.d;
                4
            }
            0x43 => {
                self.registers.b = self.registers.e;
                4
            }
            0x44 => {
                self.registers.b = self.registers.h();
                4
            }
            0x45 => {
                self.registers.b = self.registers.l();
                4
            }
            0x46 => {
                self.registers.b = bus.read_u8(self.registers.hl);
                8
            }
            0x47 => {
                self.registers.b = self.registers.a;
                4
            }
            // LD C,r
            0x48 => {
                self.registers.c = self.registers.b;
                4
            }
            0x49 => 4,
            0x4a => {
                self.registers.c = self.registers.d;
                4
            }
            0x4b => {
                self.registers.c = self.registers.e;
                4
            }
            0x4c => {
                self.registers.c = self.registers.h();
                4
            }
            0x4d => {
                self.registers.c = self.registers.l();
                4
            }
            0x4e => {
                self.registers.c = bus.read_u8(self.registers.hl);
                8
            }
            0x4f => {
                self.registers.c = self.registers.a;
                4
            }
            // LD D,r
            0x50 => {
                self.registers.d = self.registers.b;
                4
            }
            0x51 => {
                self.registers.d = self.registers.c;
                4
            }
            0x52 => 4,
            0x53 => {
                self.registers.d = self.registers.e;
                4
            }
            0x54 => {
                self.registers.d = self.registers.h();
                4
            }
            0x55 => {
                self.registers.d = self.registers.l();
                4
            }
            0x56 => {
                self.registers.d = bus.read_u8(self.registers.hl);
                8
            }
            0x57 => {
                self.registers.d = self.registers.a;
                4
            }
            // LD E,r
            0x58 => {
                self.registers.e = self.registers.b;
                4
            }
            0x59 => {
                self.registers.e = self.registers.c;
                4
            }
            0x5a => {
                self.registers.e = self.registers.d;
                4
            }
            0x5b => 4,
            0x5c => {
                self.registers.e = self.registers.h();
                4
            }
            0x5d => {
                self.registers.e = self.registers.l();
                4
            }
            0x5e => {
                self.registers.e = bus.read_u8(self.registers.hl);
                8
            }
            0x5f => {
                self.registers.e = self.registers.a;
                4
            }
            // LD H,r
            0x60 => {
                self.registers.set_h(self.registers.b);
                4
            }
            0x61 => {
                self.registers.set_h(self.registers.c);
                4
            }
            0x62 => {
                self.registers.set_h(self.registers.d);
                4
            }
            0x63 => {
                self.registers.set_h(self.registers.e);
                4
            }
            0x64 => 4,
            0x65 => {
                let l = self.registers.l();
                self.registers.set_h(l);
                4
            }
            0x66 => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.set_h(value);
                8
            }
            0x67 => {
                self.registers.set_h(self.registers.a);
                4
            }
            // LD L,r
            0x68 => {
                self.registers.set_l(self.registers.b);
                4
            }
            0x69 => {
                self.registers.set_l(self.registers.c);
                4
            }
            0x6a => {
                self.registers.set_l(self.registers.d);
                4
            }
            0x6b => {
                self.registers.set_l(self.registers.e);
                4
            }
            0x6c => {
                let h = self.registers.h();
                self.registers.set_l(h);
                4
            }
            0x6d => 4,
            0x6e => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.set_l(value);
                8
            }
            0x6f => {
                self.registers.set_l(self.registers.a);
                4
            }
            // LD (HL),r
            0x70 => {
                bus.write_u8(self.registers.hl, self.registers.b);
                8
            }
            0x71 => {
                bus.write_u8(self.registers.hl, self.registers.c);
                8
            }
            0x72 => {
                bus.write_u8(self.registers.hl, self.registers.d);
                8
            }
            0x73 => {
                bus.write_u8(self.registers.hl, self.registers.e);
                8
            }
            0x74 => {
                bus.write_u8(self.registers.hl, self.registers.h());
                8
            }
            0x75 => {
                bus.write_u8(self.registers.hl, self.registers.l());
                8
            }
            // HALT: only halts when the master interrupt enable is set, so a
            // core no interrupt can ever wake keeps executing.
            0x76 => {
                if self.interrupt_enabled {
                    self.stop();
                }
                4
            }
            0x77 => {
                bus.write_u8(self.registers.hl, self.registers.a);
                8
            }
            // LD A,r
            0x78 => {
                self.registers.a = self.registers.b;
                4
            }
            0x79 => {
                self.registers.a = self.registers.c;
                4
            }
            0x7a => {
                self.registers.a = self.registers.d;
                4
            }
            0x7b => {
                self.registers.a = self.registers.e;
                4
            }
            0x7c => {
                self.registers.a = self.registers.h();
                4
            }
            0x7d => {
                self.registers.a = self.registers.l();
                4
            }
            0x7e => {
                self.registers.a = bus.read_u8(self.registers.hl);
                8
            }
            0x7f => 4,

            // ADD A,r
            0x80 => {
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0x81 => {
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0x82 => {
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0x83 => {
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0x84 => {
                let h = self.registers.h();
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0x85 => {
                let l = self.registers.l();
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0x86 => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0x87 => {
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }
            // ADC A,r
            0x88 => {
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0x89 => {
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0x8a => {
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0x8b => {
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0x8c => {
                let h = self.registers.h();
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0x8d => {
                let l = self.registers.l();
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0x8e => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0x8f => {
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }
            // SUB r
            0x90 => {
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0x91 => {
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0x92 => {
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0x93 => {
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0x94 => {
                let h = self.registers.h();
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0x95 => {
                let l = self.registers.l();
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0x96 => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0x97 => {
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }
            // SBC A,r
            0x98 => {
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0x99 => {
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0x9a => {
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0x9b => {
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0x9c => {
                let h = self.registers.h();
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0x9d => {
                let l = self.registers.l();
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0x9e => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0x9f => {
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }
            // AND r
            0xa0 => {
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0xa1 => {
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0xa2 => {
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0xa3 => {
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0xa4 => {
                let h = self.registers.h();
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0xa5 => {
                let l = self.registers.l();
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0xa6 => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0xa7 => {
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }
            // XOR r
            0xa8 => {
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0xa9 => {
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0xaa => {
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0xab => {
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0xac => {
                let h = self.registers.h();
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0xad => {
                let l = self.registers.l();
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0xae => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0xaf => {
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }
            // OR r
            0xb0 => {
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0xb1 => {
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0xb2 => {
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0xb3 => {
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0xb4 => {
                let h = self.registers.h();
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0xb5 => {
                let l = self.registers.l();
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0xb6 => {
                let value = bus.read_u8(self.registers.hl);
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0xb7 => {
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }
            // CP r: subtraction flags only, the accumulator keeps its value.
            0xb8 => {
                alu::sub8(&mut self.registers.f, self.registers.a, self.registers.b);
                4
            }
            0xb9 => {
                alu::sub8(&mut self.registers.f, self.registers.a, self.registers.c);
                4
            }
            0xba => {
                alu::sub8(&mut self.registers.f, self.registers.a, self.registers.d);
                4
            }
            0xbb => {
                alu::sub8(&mut self.registers.f, self.registers.a, self.registers.e);
                4
            }
            0xbc => {
                let h = self.registers.h();
                alu::sub8(&mut self.registers.f, self.registers.a, h);
                4
            }
            0xbd => {
                let l = self.registers.l();
                alu::sub8(&mut self.registers.f, self.registers.a, l);
                4
            }
            0xbe => {
                let value = bus.read_u8(self.registers.hl);
                alu::sub8(&mut self.registers.f, self.registers.a, value);
                8
            }
            0xbf => {
                alu::sub8(&mut self.registers.f, self.registers.a, self.registers.a);
                4
            }

            // RET NZ
            0xc0 => {
                if !self.registers.f.zero {
                    self.ret(bus);
                    20
                } else {
                    8
                }
            }
            // POP BC
            0xc1 => {
                let value = self.pop_u16(bus);
                self.registers.set_bc(value);
                12
            }
            // JP NZ,a16
            0xc2 => {
                let address = self.fetch_u16(bus);
                if !self.registers.f.zero {
                    self.pc = address;
                    16
                } else {
                    12
                }
            }
            // JP a16
            0xc3 => {
                self.pc = self.fetch_u16(bus);
                16
            }
            // CALL NZ,a16
            0xc4 => {
                let address = self.fetch_u16(bus);
                if !self.registers.f.zero {
                    self.call(bus, address);
                    24
                } else {
                    12
                }
            }
            // PUSH BC
            0xc5 => {
                let value = self.registers.get_bc();
                self.push_u16(bus, value);
                16
            }
            // ADD A,d8
            0xc6 => {
                let value = self.fetch_u8(bus);
                self.registers.a = alu::add8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 00h
            0xc7 => {
                self.call(bus, 0x0000);
                16
            }
            // RET Z
            0xc8 => {
                if self.registers.f.zero {
                    self.ret(bus);
                    20
                } else {
                    8
                }
            }
            // RET
            0xc9 => {
                self.ret(bus);
                16
            }
            // JP Z,a16
            0xca => {
                let address = self.fetch_u16(bus);
                if self.registers.f.zero {
                    self.pc = address;
                    16
                } else {
                    12
                }
            }
            // CB prefix: the sub-opcode dispatches through the secondary
            // table at a flat cost.
            0xcb => {
                let code = self.fetch_u8(bus);
                self.execute_cb_opcode(bus, code);
                8
            }
            // CALL Z,a16
            0xcc => {
                let address = self.fetch_u16(bus);
                if self.registers.f.zero {
                    self.call(bus, address);
                    24
                } else {
                    12
                }
            }
            // CALL a16
            0xcd => {
                let address = self.fetch_u16(bus);
                self.call(bus, address);
                24
            }
            // ADC A,d8
            0xce => {
                let value = self.fetch_u8(bus);
                self.registers.a = alu::adc8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 08h
            0xcf => {
                self.call(bus, 0x0008);
                16
            }
            // RET NC
            0xd0 => {
                if !self.registers.f.carry {
                    self.ret(bus);
                    20
                } else {
                    8
                }
            }
            // POP DE
            0xd1 => {
                let value = self.pop_u16(bus);
                self.registers.set_de(value);
                12
            }
            // JP NC,a16
            0xd2 => {
                let address = self.fetch_u16(bus);
                if !self.registers.f.carry {
                    self.pc = address;
                    16
                } else {
                    12
                }
            }
            // CALL NC,a16
            0xd4 => {
                let address = self.fetch_u16(bus);
                if !self.registers.f.carry {
                    self.call(bus, address);
                    24
                } else {
                    12
                }
            }
            // PUSH DE
            0xd5 => {
                let value = self.registers.get_de();
                self.push_u16(bus, value);
                16
            }
            // SUB d8
            0xd6 => {
                let value = self.fetch_u8(bus);
                self.registers.a = alu::sub8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 10h
            0xd7 => {
                self.call(bus, 0x0010);
                16
            }
            // RET C
            0xd8 => {
                if self.registers.f.carry {
                    self.ret(bus);
                    20
                } else {
                    8
                }
            }
            // RETI
            0xd9 => {
                self.interrupt_enabled = true;
                self.ret(bus);
                16
            }
            // JP C,a16
            0xda => {
                let address = self.fetch_u16(bus);
                if self.registers.f.carry {
                    self.pc = address;
                    16
                } else {
                    12
                }
            }
            // CALL C,a16
            0xdc => {
                let address = self.fetch_u16(bus);
                if self.registers.f.carry {
                    self.call(bus, address);
                    24
                } else {
                    12
                }
            }
            // SBC A,d8
            0xde => {
                let value = self.fetch_u8(bus);
                self.registers.a = alu::sbc8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 18h
            0xdf => {
                self.call(bus, 0x0018);
                16
            }
            // LDH (a8),A
            0xe0 => {
                let offset = self.fetch_u8(bus);
                bus.write_u8(0xff00 + offset as u16, self.registers.a);
                12
            }
            // POP HL
            0xe1 => {
                self.registers.hl = self.pop_u16(bus);
                12
            }
            // LD (C),A
            0xe2 => {
                bus.write_u8(0xff00 + self.registers.c as u16, self.registers.a);
                8
            }
            // PUSH HL
            0xe5 => {
                let value = self.registers.hl;
                self.push_u16(bus, value);
                16
            }
            // AND d8
            0xe6 => {
                let value = self.fetch_u8(bus);
                self.registers.a = alu::and8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 20h
            0xe7 => {
                self.call(bus, 0x0020);
                16
            }
            // ADD SP,r8: carry flags from the 16-bit add, zero always clear.
            0xe8 => {
                let offset = self.fetch_i8(bus);
                self.sp = alu::add16_signed(&mut self.registers.f, self.sp, offset);
                self.registers.f.zero = false;
                16
            }
            // JP (HL)
            0xe9 => {
                self.pc = self.registers.hl;
                4
            }
            // LD (a16),A
            0xea => {
                let address = self.fetch_u16(bus);
                bus.write_u8(address, self.registers.a);
                16
            }
            // XOR d8
            0xee => {
                let value = self.fetch_u8(bus);
                self.registers.a = alu::xor8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 28h
            0xef => {
                self.call(bus, 0x0028);
                16
            }
            // LDH A,(a8)
            0xf0 => {
                let offset = self.fetch_u8(bus);
                self.registers.a = bus.read_u8(0xff00 + offset as u16);
                12
            }
            // POP AF
            0xf1 => {
                let value = self.pop_u16(bus);
                self.registers.set_af(value);
                12
            }
            // LD A,(C)
            0xf2 => {
                self.registers.a = bus.read_u8(0xff00 + self.registers.c as u16);
                8
            }
            // DI
            0xf3 => {
                self.interrupt_enabled = false;
                4
            }
            // PUSH AF
            0xf5 => {
                let value = self.registers.get_af();
                self.push_u16(bus, value);
                16
            }
            // OR d8
            0xf6 => {
                let value = self.fetch_u8(bus);
                self.registers.a = alu::or8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 30h
            0xf7 => {
                self.call(bus, 0x0030);
                16
            }
            // LD HL,SP+r8
            0xf8 => {
                let offset = self.fetch_i8(bus);
                let value = alu::add16_signed(&mut self.registers.f, self.sp, offset);
                self.registers.f.zero = false;
                self.registers.set_hl(value);
                12
            }
            // LD SP,HL
            0xf9 => {
                self.sp = self.registers.hl;
                8
            }
            // LD A,(a16)
            0xfa => {
                let address = self.fetch_u16(bus);
                self.registers.a = bus.read_u8(address);
                16
            }
            // EI
            0xfb => {
                self.interrupt_enabled = true;
                4
            }
            // CP d8
            0xfe => {
                let value = self.fetch_u8(bus);
                alu::sub8(&mut self.registers.f, self.registers.a, value);
                8
            }
            // RST 38h
            0xff => {
                self.call(bus, 0x0038);
                16
            }

            // Holes in the instruction table. Treated as a NOP so a stray
            // jump into data cannot wedge execution in place.
            0xd3 | 0xdb | 0xdd | 0xe3 | 0xe4 | 0xeb | 0xec | 0xed | 0xf4 | 0xfc | 0xfd => {
                debug!("undefined opcode {:#04x}", opcode);
                4
            }
        }
    }
}
