use triform25519::consts::CURVE25519_BASE_X_BYTES;
use triform25519::curve25519::curve25519_scalar_mult;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_ladder(c: &mut Criterion) {
    let q = CURVE25519_BASE_X_BYTES;
    let mut e = [0u8; 32];
    e[31] = 0x40;
    e[0] = 0x2a;

    c.bench_function("curve25519 scalar mult", |bencher| {
        bencher.iter(|| curve25519_scalar_mult(black_box(&q), black_box(&e)))
    });
}

criterion_group!(benches, bench_ladder);
criterion_main!(benches);
