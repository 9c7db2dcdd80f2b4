//! Per-point smoothing and migration of point data between geometry
//! snapshots.

use rayon::prelude::*;

use super::{radius_mean, ScalarData};
use crate::spatial::KdTree;

/// Replace every value by the mean over the indexed points within `radius`
/// of its point (itself included).
///
/// Panics if `values` does not hold one value per indexed point.
#[tracing::instrument(skip_all, name = "transfer::smooth_point_values")]
pub fn smooth_point_values(values: &mut [f64], point_index: &KdTree, radius: f64) {
  assert_eq!(
    values.len(),
    point_index.len(),
    "values must match the indexed points"
  );

  let source: &[f64] = values;
  let smoothed: Vec<f64> = point_index
    .points()
    .par_iter()
    .map(|point| {
      let close = point_index.within_radius(point, radius);
      radius_mean(close.iter().map(|neighbor| source[neighbor.index]))
    })
    .collect();

  values.copy_from_slice(&smoothed);
  tracing::trace!(points = values.len(), radius, "point values smoothed");
}

/// Carry point data over to a new set of points.
///
/// Every new point takes the values of its nearest old point. Field order is
/// preserved. With no old points every value is 0.
///
/// Panics if a field of `old_data` does not hold one value per old point.
#[tracing::instrument(skip_all, name = "transfer::remap_point_data")]
pub fn remap_point_data(old_index: &KdTree, old_data: &ScalarData, new_points: &[[f64; 3]]) -> ScalarData {
  if let Err(error) = old_data.validate_len(old_index.len()) {
    panic!("point data does not match the old points: {error}");
  }

  let nearest: Vec<Option<usize>> = new_points
    .par_iter()
    .map(|point| old_index.nearest(point).map(|neighbor| neighbor.index))
    .collect();

  let mut new_data = ScalarData::new();
  for (label, old_values) in old_data.iter() {
    let values = nearest
      .par_iter()
      .map(|closest| closest.map_or(0.0, |point| old_values[point]))
      .collect();
    new_data.insert_next(label, values);
  }

  tracing::debug!(
    old_points = old_index.len(),
    new_points = new_points.len(),
    fields = new_data.len(),
    "point data remapped"
  );

  new_data
}

#[cfg(test)]
#[path = "smoothing_test.rs"]
mod smoothing_test;
