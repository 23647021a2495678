//! Per-argument `count` / `write` costs.

use bumpfmt_core::{BigEndian, BufferView, Format, Hex, LittleEndian};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn run(c: &mut Criterion, name: &str, value: &dyn Format) {
    let mut buf = [0u8; 64];
    c.bench_function(&format!("{name}_count"), |b| {
        b.iter(|| black_box(black_box(value).count()));
    });
    c.bench_function(&format!("{name}_write"), |b| {
        b.iter(|| black_box(value.write(BufferView::new(&mut buf))));
    });
}

fn bench_integers(c: &mut Criterion) {
    run(c, "u64_max", &u64::MAX);
    run(c, "i32_neg", &-1_234_567i32);
    run(c, "u128_max", &u128::MAX);
    run(c, "hex_u64", &Hex(0xDEAD_BEEF_u64));
}

fn bench_binary(c: &mut Criterion) {
    run(c, "be_u64", &BigEndian(0x0102_0304_0506_0708u64));
    run(c, "le_u64", &LittleEndian(0x0102_0304_0506_0708u64));
    run(c, "be_f64", &BigEndian(core::f64::consts::PI));
}

fn bench_bytes(c: &mut Criterion) {
    run(c, "str_32", &"abcdefghijklmnopqrstuvwxyz012345");
}

criterion_group!(benches, bench_integers, bench_binary, bench_bytes);
criterion_main!(benches);
