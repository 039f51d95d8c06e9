use gameboy_cpu::{Cpu, FlatMemory, BOOT_PC};

/// Builds a CPU in the post-boot state with `program` loaded at the boot
/// handoff address.
pub fn with_program(program: &[u8]) -> (Cpu, FlatMemory) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut memory = FlatMemory::default();
    memory.load(BOOT_PC, program);
    (Cpu::new(), memory)
}
