use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use seqfind::{search, ElementGap, OccurrenceGap, SearchConfig};

/// Deterministic pseudo-random target over a small alphabet so every key in
/// the pattern occurs many times.
fn make_target(len: usize) -> Vec<i64> {
    let mut state = 0x9e3779b97f4a7c15_u64;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % 8) as i64
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let pattern: Vec<i64> = vec![0, 3, 1, 3];
    let combos = [
        ("unrestricted_unordered", OccurrenceGap::Unrestricted, ElementGap::Unordered),
        ("unrestricted_ordered", OccurrenceGap::Unrestricted, ElementGap::Ordered),
        ("non_overlapping_unordered", OccurrenceGap::NonOverlapping, ElementGap::Unordered),
        ("non_overlapping_ordered", OccurrenceGap::NonOverlapping, ElementGap::Ordered),
    ];

    let mut group = c.benchmark_group("search");
    for size in [1_000, 10_000, 100_000] {
        let target = make_target(size);
        group.throughput(Throughput::Elements(size as u64));
        for (name, occurrence_gap, element_gap) in combos {
            let config = SearchConfig::default()
                .with_occurrence_gap(occurrence_gap)
                .with_element_gap(element_gap);
            group.bench_function(format!("{name}_{size}"), |b| {
                b.iter(|| {
                    search(black_box(&pattern), black_box(&target), black_box(&config))
                        .expect("search")
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
