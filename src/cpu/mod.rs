pub mod alu;
pub mod bit_ops;
#[allow(clippy::module_inception)]
mod cpu;
mod instruction;
pub mod register;

pub use cpu::{Cpu, BOOT_PC};
