use cayley_dickson::random::standard_normal;
use cayley_dickson::{
    asin, associator, bracketing_spread, cos, exp, log, powi, tanh, Algebra, Complex, Octonion,
    Pathion, Quaternion, Sedenion,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("products");

    // Deterministic operands for stable benches
    let mut rng = StdRng::seed_from_u64(42);
    let (za, zb): (Complex<f64>, Complex<f64>) = (standard_normal(&mut rng), standard_normal(&mut rng));
    let (qa, qb): (Quaternion<f64>, Quaternion<f64>) =
        (standard_normal(&mut rng), standard_normal(&mut rng));
    let (oa, ob): (Octonion<f64>, Octonion<f64>) =
        (standard_normal(&mut rng), standard_normal(&mut rng));
    let (sa, sb): (Sedenion<f64>, Sedenion<f64>) =
        (standard_normal(&mut rng), standard_normal(&mut rng));
    let (pa, pb): (Pathion<f64>, Pathion<f64>) =
        (standard_normal(&mut rng), standard_normal(&mut rng));

    group.bench_function("mul_2", |bencher| bencher.iter(|| black_box(za) * black_box(zb)));
    group.bench_function("mul_4", |bencher| bencher.iter(|| black_box(qa) * black_box(qb)));
    group.bench_function("mul_8", |bencher| bencher.iter(|| black_box(oa) * black_box(ob)));
    group.bench_function("mul_16", |bencher| bencher.iter(|| black_box(sa) * black_box(sb)));
    group.bench_function("mul_32", |bencher| bencher.iter(|| black_box(pa) * black_box(pb)));

    group.bench_function("div_8", |bencher| bencher.iter(|| black_box(oa) / black_box(ob)));

    group.bench_function("associator_8", |bencher| {
        bencher.iter(|| associator(black_box(oa), black_box(ob), black_box(oa)))
    });

    group.bench_function("powi_16_chain", |bencher| {
        bencher.iter(|| black_box(powi(black_box(sa), 13)))
    });

    group.finish();
}

fn bench_elementary<A>(c: &mut Criterion, name: &str)
where
    A: Algebra<Real = f64>,
{
    let mut group = c.benchmark_group(format!("elementary_{}", name));
    let x: A = standard_normal(&mut StdRng::seed_from_u64(7));

    group.bench_with_input(BenchmarkId::new("exp", A::DIM), &x, |bencher, x| {
        bencher.iter(|| exp(black_box(*x)))
    });
    group.bench_with_input(BenchmarkId::new("log", A::DIM), &x, |bencher, x| {
        bencher.iter(|| log(black_box(*x)))
    });
    group.bench_with_input(BenchmarkId::new("cos", A::DIM), &x, |bencher, x| {
        bencher.iter(|| cos(black_box(*x)))
    });
    group.bench_with_input(BenchmarkId::new("tanh", A::DIM), &x, |bencher, x| {
        bencher.iter(|| tanh(black_box(*x)))
    });
    group.bench_with_input(BenchmarkId::new("asin", A::DIM), &x, |bencher, x| {
        bencher.iter(|| asin(black_box(*x)))
    });

    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    bench_elementary::<Complex<f64>>(c, "complex");
    bench_elementary::<Quaternion<f64>>(c, "quaternion");
    bench_elementary::<Octonion<f64>>(c, "octonion");
    bench_elementary::<Sedenion<f64>>(c, "sedenion");
}

fn bench_bracketings(c: &mut Criterion) {
    let mut group = c.benchmark_group("bracketing_spread");
    let mut rng = StdRng::seed_from_u64(3);
    for n in [3usize, 5, 7] {
        let xs: Vec<Octonion<f64>> = (0..n).map(|_| standard_normal(&mut rng)).collect();
        group.bench_with_input(BenchmarkId::new("octonion", n), &xs, |bencher, xs| {
            bencher.iter(|| bracketing_spread(black_box(xs)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_products, bench_kernels, bench_bracketings);
criterion_main!(benches);
