//! Level set fixtures shared by unit tests.

use crate::constants::corner_count;
use crate::field::SparseLevelSet;

/// Signed distance to a circle / sphere at the origin.
pub fn sphere_sdf(radius: f64) -> impl Fn([f64; 3]) -> f64 {
  move |p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() - radius
}

/// Sphere (3D) or circle (2D) of `radius` sampled with `grid_delta`.
pub fn sphere_level_set<const D: usize>(
  radius: f64,
  grid_delta: f64,
  width: u32,
) -> SparseLevelSet<D> {
  let extent = (radius / grid_delta).ceil() as i64 + width as i64 + 1;
  SparseLevelSet::from_sdf([-extent; D], [extent; D], grid_delta, width, sphere_sdf(radius))
}

/// Horizontal plane `z = height` over `[-half_extent, half_extent]^2` with a
/// unit grid. Below the plane is negative.
pub fn plane_level_set(height: f64, half_extent: i64, width: u32) -> SparseLevelSet<3> {
  let depth = width as i64 + 2;
  SparseLevelSet::from_sdf(
    [-half_extent, -half_extent, -depth],
    [half_extent, half_extent, depth],
    1.0,
    width,
    move |p| p[2] - height,
  )
}

/// A single unit cell at the origin with `corner0` at corner 0 and `+1`
/// everywhere else.
pub fn single_corner_block<const D: usize>(corner0: f64) -> SparseLevelSet<D> {
  let mut level_set = SparseLevelSet::new(1.0, 2);
  for corner in 0..corner_count(D) {
    let mut index = [0i64; D];
    for (axis, component) in index.iter_mut().enumerate() {
      *component = ((corner >> axis) & 1) as i64;
    }
    level_set.insert(index, if corner == 0 { corner0 } else { 1.0 });
  }
  level_set
}

/// A single unit cell at the origin with the same value at every corner.
pub fn uniform_block<const D: usize>(value: f64) -> SparseLevelSet<D> {
  let mut level_set = single_corner_block::<D>(value);
  for corner in 0..corner_count(D) {
    let mut index = [0i64; D];
    for (axis, component) in index.iter_mut().enumerate() {
      *component = ((corner >> axis) & 1) as i64;
    }
    level_set.insert(index, value);
  }
  level_set
}
