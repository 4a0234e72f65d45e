use criterion::{criterion_group, criterion_main, Criterion};
use tabula::Matrix;

fn matmul_5x5(c: &mut Criterion) {
    let a = Matrix::from_fn(5, 5, |i, j| (i * 5 + j + 1) as f64).unwrap();
    let b = Matrix::from_fn(5, 5, |i, j| (i + j + 1) as f64).unwrap();
    c.bench_function("matmul_5x5", |bench| {
        bench.iter(|| std::hint::black_box(&a) * std::hint::black_box(&b))
    });
}

fn det_6x6(c: &mut Criterion) {
    // Diagonally dominated so the determinant stays well away from zero.
    let a = Matrix::from_fn(6, 6, |i, j| {
        ((i + 1) * (j + 2)) as f64 + if i == j { 10.0 } else { 0.0 }
    })
    .unwrap();
    c.bench_function("det_6x6_cofactor", |bench| {
        bench.iter(|| std::hint::black_box(&a).det().unwrap())
    });
}

fn inverse_5x5(c: &mut Criterion) {
    let a = Matrix::from_fn(5, 5, |i, j| {
        ((i + 1) * (j + 2)) as f64 + if i == j { 10.0 } else { 0.0 }
    })
    .unwrap();
    c.bench_function("inverse_5x5_adjugate", |bench| {
        bench.iter(|| std::hint::black_box(&a).inverse().unwrap())
    });
}

fn transpose_8x8(c: &mut Criterion) {
    let a = Matrix::from_fn(8, 8, |i, j| (i * 8 + j) as f64).unwrap();
    c.bench_function("transpose_8x8", |bench| {
        bench.iter(|| std::hint::black_box(&a).transpose())
    });
}

criterion_group!(benches, matmul_5x5, det_6x6, inverse_5x5, transpose_8x8);
criterion_main!(benches);
