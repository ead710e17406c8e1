use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sensei_match::{MentorRecord, match_skills};
use std::hint::black_box;

fn roster(size: usize) -> Vec<MentorRecord> {
    (0..size)
        .map(|i| {
            let skill = match i % 3 {
                0 => "SQL",
                1 => "Rust",
                _ => "Python",
            };
            let score = u32::try_from(i % 101).unwrap_or(0);
            MentorRecord::verified(&format!("mentor{i:04}"), skill, score)
        })
        .collect()
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("skill_matching");

    for size in [10usize, 100, 1000] {
        let mentors = roster(size);
        group.bench_with_input(
            BenchmarkId::new("match_skills", size),
            &mentors,
            |b, mentors| {
                b.iter(|| match_skills(black_box("sql"), mentors));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match);
criterion_main!(benches);
