//! Benchmarks for surface extraction and the proximity scan.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use surface_link::extraction::proximity;
use surface_link::{extract, ExtractConfig, KdTree, Mesh, SparseLevelSet, SurfaceExtractor};

/// Sphere of `radius` at the origin, sampled with `grid_delta`.
fn sphere(radius: f64, grid_delta: f64) -> SparseLevelSet<3> {
  let extent = (radius / grid_delta).ceil() as i64 + 3;
  SparseLevelSet::from_sdf([-extent; 3], [extent; 3], grid_delta, 2, |p| {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() - radius
  })
}

/// Extraction of spheres at increasing resolution.
fn bench_extract_sphere(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract_sphere");
  group.sample_size(20);

  for grid_delta in [0.2, 0.1, 0.05] {
    let level_set = sphere(1.0, grid_delta);
    let config = ExtractConfig::default();

    group.bench_with_input(
      BenchmarkId::new("surface_link", format!("dx={}", grid_delta)),
      &grid_delta,
      |b, _| b.iter(|| extract(black_box(&level_set), &config)),
    );
  }

  group.finish();
}

/// Extraction plus the centroid index rebuild.
fn bench_extract_with_index(c: &mut Criterion) {
  let level_set = sphere(1.0, 0.1);
  let mut mesh = Mesh::<3>::new();
  let mut index = KdTree::new();

  c.bench_function("extract + index (dx=0.1)", |b| {
    b.iter(|| {
      let stats = SurfaceExtractor::new()
        .with_level_set(black_box(&level_set))
        .with_mesh(&mut mesh)
        .with_index(&mut index)
        .apply();
      black_box(stats)
    })
  });
}

/// Serial vs sharded proximity scan over a node array with no hit.
fn bench_proximity_scan(c: &mut Criterion) {
  let mut group = c.benchmark_group("proximity_scan");
  let nodes: Vec<[f64; 3]> = (0..100_000)
    .map(|i| [i as f64 * 0.01, (i % 97) as f64, (i % 13) as f64])
    .collect();
  let candidate = [-5.0, -5.0, -5.0];

  for shards in [1, 4, 8] {
    group.bench_with_input(BenchmarkId::new("shards", shards), &shards, |b, &shards| {
      b.iter(|| proximity::find_close_node_sharded(black_box(&nodes), &candidate, 0.01, shards))
    });
  }

  group.finish();
}

criterion_group!(
  benches,
  bench_extract_sphere,
  bench_extract_with_index,
  bench_proximity_scan
);
criterion_main!(benches);
