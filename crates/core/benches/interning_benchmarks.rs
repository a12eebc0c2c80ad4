use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use scalarvo_core::{DeclaredType, ScalarValue, ValueObjectStore};

/// Repeated lookups of an already-interned value (read-lock path).
fn bench_hit(c: &mut Criterion) {
    let store = ValueObjectStore::new();
    let base = DeclaredType::base();
    store.instance(&base, 42).unwrap();

    c.bench_function("instance_hit_int", |b| {
        b.iter(|| store.instance(&base, black_box(42)).unwrap())
    });

    store.instance(&base, "order-status:shipped").unwrap();
    c.bench_function("instance_hit_text", |b| {
        b.iter(|| store.instance(&base, black_box("order-status:shipped")).unwrap())
    });
}

/// First-time interning of distinct values (write-lock path).
fn bench_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("instance_miss");
    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let store = ValueObjectStore::new();
                let base = DeclaredType::base();
                for n in 0..size as i64 {
                    store.scalar_instance(&base, ScalarValue::Int(n)).unwrap();
                }
                store.len()
            })
        });
    }
    group.finish();
}

/// Lookups through a refined lineage (normalization runs every call).
fn bench_refined(c: &mut Criterion) {
    let store = ValueObjectStore::new();
    let refined = DeclaredType::base()
        .extend("Level1")
        .extend("Level2")
        .refine("Passthrough", Ok);
    store.instance(&refined, 7).unwrap();

    c.bench_function("instance_hit_refined_depth3", |b| {
        b.iter(|| store.instance(&refined, black_box(7)).unwrap())
    });
}

criterion_group!(benches, bench_hit, bench_miss, bench_refined);
criterion_main!(benches);
