use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gameboy_cpu::{Cpu, FlatMemory};

fn repeat_opcode(c: &mut Criterion, name: &str, opcode: u8) {
    let mut cpu = Cpu::new();
    let mut memory = FlatMemory::default();

    c.bench_function(name, |b| {
        b.iter(|| cpu.execute_opcode(&mut memory, black_box(opcode)))
    });
}

fn repeat_nop(c: &mut Criterion) {
    repeat_opcode(c, "nop", 0x00);
}

fn repeat_inc_b_reg(c: &mut Criterion) {
    repeat_opcode(c, "inc-b", 0x04);
}

fn repeat_add_hl_indirect(c: &mut Criterion) {
    repeat_opcode(c, "add-a-hl", 0x86);
}

fn repeat_cb_swap(c: &mut Criterion) {
    let mut cpu = Cpu::new();
    let mut memory = FlatMemory::default();

    c.bench_function("cb-swap-a", |b| {
        b.iter(|| cpu.execute_cb_opcode(&mut memory, black_box(0x37)))
    });
}

fn bench_tight_loop(c: &mut Criterion) {
    let mut cpu = Cpu::new();
    let mut memory = FlatMemory::default();
    // JR -2: spins in place so every slice measures pure dispatch.
    memory.load(0x0100, &[0x18, 0xfe]);

    c.bench_function("run 4k cycle slice", |b| {
        b.iter(|| black_box(cpu.run(&mut memory, 4096)));
    });
}

criterion_group! {
    name = cpu_benches;
    config = Criterion::default().sample_size(500);
    targets = repeat_nop, repeat_inc_b_reg, repeat_add_hl_indirect, repeat_cb_swap, bench_tight_loop
}
criterion_main!(cpu_benches);
