//! Benchmarks for the rotor cipher engine.
//!
//! Measures machine construction time and per-symbol encryption
//! throughput across message sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotorcrypt::{EnigmaMachine, EnigmaMachineConfig};

/// Benchmarks full machine assembly from the stock configuration.
///
/// Covers wiring validation for the whole pool, working-set selection,
/// plugboard parsing, and circuit assembly.
fn bench_construction(c: &mut Criterion) {
    c.bench_function("machine_construction", |b| {
        b.iter(|| EnigmaMachine::new(black_box(EnigmaMachineConfig::default())).unwrap());
    });
}

/// Benchmarks `encrypt_decrypt` throughput for growing message sizes.
///
/// The machine is built once per size; rotor state advances naturally
/// between iterations, reflecting streaming use.
fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_decrypt");
    for size in [16usize, 256, 4096] {
        let message: String = ('A'..='Z').cycle().take(size).collect();
        let mut machine = EnigmaMachine::with_default_config().unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| machine.encrypt_decrypt(black_box(message)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_encrypt);
criterion_main!(benches);
