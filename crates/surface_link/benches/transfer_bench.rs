//! Benchmarks for kd-tree queries and point ↔ element transfer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use surface_link::transfer::{elements_to_points, points_to_elements, smooth_point_values};
use surface_link::{HostBuffer, KdTree, Mesh, ScalarData, SparseLevelSet, SurfaceExtractor, TransferConfig};

struct Fixture {
  grid_delta: f64,
  points: Vec<[f64; 3]>,
  point_index: KdTree,
  mesh: Mesh<3>,
  element_index: KdTree,
}

fn fixture(grid_delta: f64) -> Fixture {
  let extent = (1.0 / grid_delta).ceil() as i64 + 3;
  let level_set = SparseLevelSet::<3>::from_sdf([-extent; 3], [extent; 3], grid_delta, 2, |p| {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() - 1.0
  });

  let mut mesh = Mesh::<3>::new();
  let mut element_index = KdTree::new();
  // Both inputs are set, extraction cannot fail
  let _ = SurfaceExtractor::new()
    .with_level_set(&level_set)
    .with_mesh(&mut mesh)
    .with_index(&mut element_index)
    .apply();

  let points = level_set.points();
  Fixture {
    grid_delta,
    point_index: KdTree::from_points(points.clone()),
    points,
    mesh,
    element_index,
  }
}

fn bench_kd_tree(c: &mut Criterion) {
  let fixture = fixture(0.05);

  c.bench_function("kd_tree build", |b| {
    b.iter(|| KdTree::from_points(black_box(fixture.points.clone())))
  });

  c.bench_function("kd_tree nearest (all points)", |b| {
    b.iter(|| {
      for point in &fixture.points {
        black_box(fixture.element_index.nearest(point));
      }
    })
  });
}

fn bench_transfer(c: &mut Criterion) {
  let fixture = fixture(0.05);
  let material_ids = vec![1.0; fixture.points.len()];
  let mut coverages = ScalarData::new();
  let _ = coverages.insert("coverage", vec![0.5; fixture.points.len()]);
  let radius = TransferConfig::default().radius(fixture.grid_delta);

  let mut buffer = HostBuffer::new();
  let index_map = points_to_elements(
    &material_ids,
    Some(&coverages),
    &fixture.point_index,
    &fixture.mesh,
    &mut buffer,
  );

  c.bench_function("points_to_elements", |b| {
    b.iter(|| {
      let mut buffer = HostBuffer::new();
      points_to_elements(
        black_box(&material_ids),
        Some(&coverages),
        &fixture.point_index,
        &fixture.mesh,
        &mut buffer,
      )
    })
  });

  c.bench_function("elements_to_points", |b| {
    b.iter(|| {
      elements_to_points(
        black_box(&buffer),
        &index_map,
        &fixture.element_index,
        &fixture.points,
        radius,
      )
    })
  });

  c.bench_function("smooth_point_values", |b| {
    let mut values = vec![0.5; fixture.points.len()];
    b.iter(|| smooth_point_values(black_box(&mut values), &fixture.point_index, radius))
  });
}

criterion_group!(benches, bench_kd_tree, bench_transfer);
criterion_main!(benches);
