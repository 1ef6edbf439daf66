use triform25519::consts::{CURVE25519_BASE_X_BYTES, WEI_BASE_Y_BYTES};
use triform25519::field::FieldElement;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_field_mul(c: &mut Criterion) {
    let a = FieldElement::from_bytes(&CURVE25519_BASE_X_BYTES);
    let b = FieldElement::from_bytes(&WEI_BASE_Y_BYTES);

    c.bench_function("field mul", |bencher| bencher.iter(|| black_box(a) * black_box(b)));
}

pub fn bench_field_invert(c: &mut Criterion) {
    let a = FieldElement::from_bytes(&CURVE25519_BASE_X_BYTES);

    c.bench_function("field invert", |bencher| bencher.iter(|| black_box(a).invert()));
}

criterion_group!(benches, bench_field_mul, bench_field_invert);
criterion_main!(benches);
