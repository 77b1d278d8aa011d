use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use scalar_fun::{Curve, CurveScalar, Params};

fn scalar_ops(c: &mut Criterion) {
    for curve in [Curve::Secp256k1, Curve::Secp521r1] {
        let mut group = c.benchmark_group(format!("scalar:{}", curve));

        group.bench_function("random", |b| {
            b.iter(|| CurveScalar::random(curve, &mut rand::thread_rng()))
        });

        group.bench_function("mul", |b| {
            b.iter_batched(
                || {
                    (
                        CurveScalar::random(curve, &mut rand::thread_rng()),
                        CurveScalar::random(curve, &mut rand::thread_rng()),
                    )
                },
                |(lhs, rhs)| &lhs * &rhs,
                BatchSize::SmallInput,
            )
        });

        group.bench_function("invert", |b| {
            b.iter_batched(
                || CurveScalar::random(curve, &mut rand::thread_rng()),
                |x| x.invert(),
                BatchSize::SmallInput,
            )
        });

        group.bench_function("hash_to_scalar", |b| {
            let params = Params::new(curve);
            b.iter(|| CurveScalar::hash_to_scalar(&params, &[b"hello", b" world"]))
        });

        group.finish();
    }
}

criterion_group!(benches, scalar_ops);
criterion_main!(benches);
