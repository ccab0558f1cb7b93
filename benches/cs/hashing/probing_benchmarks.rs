use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probe_experiment::cs::hashing::{
    generate_twin_prime, DoubleHashing, HashTable, LinearProbing, ProbeSequence, RawHash,
};
use probe_experiment::experiment::{RandomIntegers, Timestamp, Timestamps};

const LOAD_FACTORS: [f64; 4] = [0.5, 0.7, 0.9, 0.99];

fn fill<P: ProbeSequence, K: RawHash + Eq>(
    capacity: usize,
    load_factor: f64,
    probe: P,
    keys: impl Iterator<Item = K>,
) -> HashTable<K, P> {
    let mut table = HashTable::new(capacity, load_factor, probe).unwrap();
    for key in keys {
        if !table.insert(key) {
            break;
        }
    }
    table
}

fn bench_fill_random(c: &mut Criterion) {
    let capacity = generate_twin_prime(9500, 9700).unwrap();
    let mut group = c.benchmark_group("fill random integers");

    for lf in LOAD_FACTORS {
        group.bench_with_input(BenchmarkId::new("linear", lf), &lf, |b, &lf| {
            b.iter(|| fill(capacity, lf, LinearProbing, RandomIntegers::with_seed(1)))
        });
        group.bench_with_input(BenchmarkId::new("double", lf), &lf, |b, &lf| {
            b.iter(|| fill(capacity, lf, DoubleHashing, RandomIntegers::with_seed(1)))
        });
    }
    group.finish();
}

fn bench_fill_timestamps(c: &mut Criterion) {
    let capacity = generate_twin_prime(9500, 9700).unwrap();
    let start = Timestamp(1_700_000_000_000);
    let mut group = c.benchmark_group("fill timestamps");

    for lf in LOAD_FACTORS {
        group.bench_with_input(BenchmarkId::new("linear", lf), &lf, |b, &lf| {
            b.iter(|| fill(capacity, lf, LinearProbing, Timestamps::starting_at(start)))
        });
        group.bench_with_input(BenchmarkId::new("double", lf), &lf, |b, &lf| {
            b.iter(|| fill(capacity, lf, DoubleHashing, Timestamps::starting_at(start)))
        });
    }
    group.finish();
}

fn bench_search_full_table(c: &mut Criterion) {
    let capacity = generate_twin_prime(9500, 9700).unwrap();
    let keys: Vec<i32> = RandomIntegers::with_seed(2).take(capacity).collect();
    let linear = fill(capacity, 0.9, LinearProbing, keys.iter().copied());
    let double = fill(capacity, 0.9, DoubleHashing, keys.iter().copied());

    c.bench_function("search linear 0.9", |b| {
        b.iter(|| keys.iter().filter(|k| linear.search(black_box(k)).is_some()).count())
    });
    c.bench_function("search double 0.9", |b| {
        b.iter(|| keys.iter().filter(|k| double.search(black_box(k)).is_some()).count())
    });
}

criterion_group!(
    benches,
    bench_fill_random,
    bench_fill_timestamps,
    bench_search_full_table
);
criterion_main!(benches);
