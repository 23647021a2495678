//! Template engine throughput.
//!
//! Compares the engine against `std::io::Write` + `write!` into the same
//! fixed buffer, and measures how cost scales with placeholder count.

use std::io::Write as _;

use bumpfmt_core::{BigEndian, FailurePolicy, Format, upper_bound, write_with_policy};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_hello(c: &mut Criterion) {
    let mut buf = [0u8; 64];
    c.bench_function("engine_hello", |b| {
        b.iter(|| {
            let n = write_with_policy(
                FailurePolicy::Leave,
                &mut buf,
                black_box(b"hello {} world"),
                &[&black_box(123u32)],
            );
            black_box(n)
        });
    });

    c.bench_function("std_write_hello", |b| {
        b.iter(|| {
            let mut cursor = std::io::Cursor::new(&mut buf[..]);
            let r = write!(cursor, "hello {} world", black_box(123u32));
            black_box((r.is_ok(), cursor.position()))
        });
    });
}

fn bench_mixed_record(c: &mut Criterion) {
    let mut buf = [0u8; 128];
    let id = 0x8081_8283u32;
    let name = "sensor-7";
    let reading = -40i32;
    let template = b"id={} name={} reading={} raw={}";
    c.bench_function("engine_mixed_record", |b| {
        b.iter(|| {
            let args: [&dyn Format; 4] = [&id, &name, &reading, &BigEndian(id)];
            black_box(write_with_policy(
                FailurePolicy::Leave,
                &mut buf,
                black_box(template),
                &args,
            ))
        });
    });
}

fn bench_placeholder_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("placeholder_scaling");
    for count in [1usize, 4, 16, 64] {
        let template = b"{},".repeat(count);
        let values: Vec<u64> = (0..count as u64).map(|i| i * 1_000_003).collect();
        let args: Vec<&dyn Format> = values.iter().map(|v| v as &dyn Format).collect();
        let mut buf = vec![0u8; upper_bound(&template, &args)];
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                black_box(write_with_policy(
                    FailurePolicy::Leave,
                    &mut buf,
                    &template,
                    &args,
                ))
            });
        });
    }
    group.finish();
}

fn bench_failure_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("overflow_policy");
    let mut buf = vec![0u8; 256];
    let long = "x".repeat(300);
    for policy in [FailurePolicy::Leave, FailurePolicy::Scrub] {
        group.bench_function(policy.as_str(), |b| {
            b.iter(|| {
                black_box(write_with_policy(policy, &mut buf, b"{}", &[&long]).is_err())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_hello,
    bench_mixed_record,
    bench_placeholder_scaling,
    bench_failure_policies
);
criterion_main!(benches);
