use cryptography::{x25519, x25519_base};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_x25519(c: &mut Criterion) {
    let scalar = [5u8; 32];
    let public = x25519_base(&scalar);

    c.bench_function("x25519_base", |b| {
        b.iter(|| x25519_base(black_box(&scalar)))
    });

    c.bench_function("x25519", |b| {
        b.iter(|| x25519(black_box(&scalar), black_box(&public)))
    });
}

criterion_group!(benches, bench_x25519);
criterion_main!(benches);
