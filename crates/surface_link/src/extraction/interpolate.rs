//! Surface node placement on cell edges.

use crate::constants::corner_offset;
use crate::edge_table::{EDGE_AXIS, EDGE_LOWER_CORNER, EDGE_UPPER_CORNER};
use crate::field::Cell;

/// Fractional zero crossing between a lower corner value `d0` and an upper
/// corner value `d1`, clamped to `[epsilon, 1 - epsilon]`.
///
/// The ratio is taken from the corner with the smaller magnitude.
#[inline]
pub fn crossing(d0: f64, d1: f64, epsilon: f64) -> f64 {
  // Includes d0 == d1 == 0
  let t = if d0 == -d1 {
    0.5
  } else if d0.abs() <= d1.abs() {
    d0 / (d0 - d1)
  } else {
    1.0 - d1 / (d1 - d0)
  };
  t.max(epsilon).min(1.0 - epsilon)
}

/// Physical position of the surface node on `edge` of `cell`.
///
/// Components orthogonal to the edge sit on the lower corner's grid line; the
/// unused component of 2D meshes stays zero.
#[inline]
pub fn node_position<const D: usize>(
  cell: &Cell<D>,
  edge: usize,
  epsilon: f64,
  grid_delta: f64,
) -> [f64; 3] {
  let lower = EDGE_LOWER_CORNER[edge] as usize;
  let upper = EDGE_UPPER_CORNER[edge] as usize;
  let axis = EDGE_AXIS[edge] as usize;

  let mut position = [0.0; 3];
  for (z, coordinate) in position.iter_mut().enumerate().take(D) {
    let grid = if z == axis {
      cell.index[z] as f64 + crossing(cell.corner(lower), cell.corner(upper), epsilon)
    } else {
      (cell.index[z] + corner_offset(lower, z)) as f64
    };
    *coordinate = grid * grid_delta;
  }
  position
}

/// Grid key of an edge: index of its lower corner.
#[inline]
pub fn edge_key<const D: usize>(cell: &Cell<D>, edge: usize) -> [i64; D] {
  cell.corner_index(EDGE_LOWER_CORNER[edge] as usize)
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
