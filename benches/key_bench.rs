use criterion::{Criterion, black_box, criterion_group, criterion_main};
use item_index::{Bounds, FuzzyMode, ItemKey, ItemRecord, ItemRegistry, ItemType, Metadata};

fn record(id: u32, durability: i32) -> ItemRecord {
    ItemRecord::new(ItemType::damageable(id, 1561)).with_durability(durability)
}

fn bench_compare(c: &mut Criterion) {
    let meta = Metadata::payload(b"efficiency:5".to_vec());
    let a = ItemKey::from(record(278, 100).with_metadata(meta.clone()));
    let b = ItemKey::from(record(278, 100).with_metadata(meta));
    c.bench_function("item_key_cmp", |bench| {
        bench.iter(|| black_box(&a).cmp(black_box(&b)))
    });
}

fn bench_bounds(c: &mut Criterion) {
    let source = record(278, 900);
    c.bench_function("fuzzy_bounds_percent_50", |bench| {
        bench.iter(|| Bounds::new(black_box(&source), FuzzyMode::PERCENT_50, false))
    });
}

fn bench_registry_scan(c: &mut Criterion) {
    let mut registry = ItemRegistry::new();
    for id in 256..320 {
        for durability in (0..1561).step_by(13) {
            let _ = registry.add(&record(id, durability), 1);
        }
    }
    let query = record(278, 700);
    c.bench_function("registry_find_fuzzy", |bench| {
        bench.iter(|| registry.find_fuzzy_with(black_box(&query), FuzzyMode::PERCENT_50, false))
    });
}

criterion_group!(benches, bench_compare, bench_bounds, bench_registry_scan);
criterion_main!(benches);
