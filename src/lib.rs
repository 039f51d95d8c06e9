//! An interpreter for the Game Boy's 8-bit CPU.
//!
//! The crate models the processor alone: the register file, the
//! flag-producing ALU, both instruction tables and the interrupt and halt
//! machinery. Memory stays on the host's side of the [`MemoryBus`] trait, so
//! the same core drives anything from a flat test RAM to a fully mapped
//! system.
//!
//! ```
//! use gameboy_cpu::{Cpu, FlatMemory, MemoryBus};
//!
//! let mut cpu = Cpu::new();
//! let mut memory = FlatMemory::default();
//! // LD A,0x2A / LD (0xC000),A
//! memory.load(0x0100, &[0x3e, 0x2a, 0xea, 0x00, 0xc0]);
//!
//! cpu.step(&mut memory);
//! cpu.step(&mut memory);
//! assert_eq!(memory.read_u8(0xc000), 0x2a);
//! ```

pub mod cpu;
pub mod memory;

pub use cpu::{Cpu, BOOT_PC};
pub use memory::{FlatMemory, MemoryBus};
