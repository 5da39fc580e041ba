use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hadamard::transform::fwht::fwht_in_place;
use hadamard::transform::randomized::{inverse_randomized_transform, randomized_transform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vector(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn bench_fwht(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("FWHT in place");

    for k in [6u32, 10, 14, 18] {
        let n = 1usize << k;
        let input = random_vector(&mut rng, n);

        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut buf| {
                    fwht_in_place(black_box(&mut buf)).unwrap();
                    buf
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_randomized_round_trip(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("Randomized round trip");

    for n in [1024usize, 1 << 16] {
        let input = random_vector(&mut rng, n);

        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let (y, mask) = randomized_transform(black_box(input), &mut rng).unwrap();
                inverse_randomized_transform(&y, &mask).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fwht, bench_randomized_round_trip);
criterion_main!(benches);
