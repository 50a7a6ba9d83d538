//! # Catalog Benchmarks
//!
//! Performance benchmarks for pokedex-core search and chain resolution.
//!
//! Run with: `cargo bench -p pokedex-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pokedex_core::{Catalog, Entity, EntityId, SearchQuery, filter, resolve_chain};
use std::hint::black_box;

/// Create N entities, each evolving from the previous one.
fn create_linear_catalog(size: usize) -> Vec<Entity> {
    (0..size as i64)
        .map(|i| {
            Entity::new(EntityId(i), format!("Creature{i}"))
                .with_types(["normal"])
                .with_predecessors((i > 0).then_some(i - 1))
                .with_successors([i + 1])
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_catalog_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_build");

    for size in [100, 1000, 10000].iter() {
        let entities = create_linear_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(Catalog::from_entities(entities.clone())));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let query = SearchQuery::new("ture99");

    for size in [100, 1000, 10000].iter() {
        let entities = create_linear_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(filter(&entities, &query)));
        });
    }

    group.finish();
}

fn bench_resolve_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");

    for size in [100, 1000, 10000].iter() {
        let catalog = Catalog::from_entities(create_linear_catalog(*size)).expect("build");
        let middle = catalog
            .get(EntityId((*size / 2) as i64))
            .expect("middle")
            .clone();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(resolve_chain(&catalog, &middle)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_build,
    bench_filter,
    bench_resolve_chain
);
criterion_main!(benches);
