use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sensei_quiz::generate_quiz_with;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("quiz_assembly");

    // SQL hits the authored catalog, KUBERNETES synthesizes every question.
    for skill in ["SQL", "KUBERNETES"] {
        group.bench_with_input(BenchmarkId::new("generate", skill), &skill, |b, &skill| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                generate_quiz_with(black_box(skill), "beginner", &mut rng)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
