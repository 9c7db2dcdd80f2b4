use super::*;
use crate::constants::{DEFAULT_EPSILON, MAX_CORNERS};

#[test]
fn test_symmetric_values_cross_at_midpoint() {
  assert_eq!(crossing(-1.0, 1.0, DEFAULT_EPSILON), 0.5);
  assert_eq!(crossing(2.5, -2.5, DEFAULT_EPSILON), 0.5);
  // Both zero must not divide by zero
  assert_eq!(crossing(0.0, 0.0, DEFAULT_EPSILON), 0.5);
}

#[test]
fn test_crossing_from_smaller_magnitude() {
  assert!((crossing(-1.0, 3.0, 0.0) - 0.25).abs() < 1e-15);
  assert!((crossing(3.0, -1.0, 0.0) - 0.75).abs() < 1e-15);
  assert!((crossing(0.2, -0.6, 0.0) - 0.25).abs() < 1e-15);
}

#[test]
fn test_crossing_stays_inside_cell() {
  let eps = 1e-6;
  assert_eq!(crossing(0.0, 1.0, eps), eps);
  assert_eq!(crossing(1.0, 0.0, eps), 1.0 - eps);
  assert_eq!(crossing(-0.0, -1.0, eps), eps);

  for (d0, d1) in [(0.0, 1.0), (1.0, 0.0), (-1e-300, 1.0), (1.0, -1e-300)] {
    let t = crossing(d0, d1, DEFAULT_EPSILON);
    assert!(t > 0.0 && t < 1.0, "crossing({}, {}) = {}", d0, d1, t);
  }
}

#[test]
fn test_node_position_on_z_edge() {
  let mut corners = [1.0; MAX_CORNERS];
  corners[3] = -1.0;
  corners[7] = 3.0;
  let cell = Cell::<3> {
    index: [2, 3, 4],
    corners,
  };

  // Edge 10 runs from corner 3 (1,1,0) to corner 7 (1,1,1)
  let position = node_position(&cell, 10, DEFAULT_EPSILON, 0.5);
  assert_eq!(position[0], 1.5);
  assert_eq!(position[1], 2.0);
  assert!((position[2] - 4.25 * 0.5).abs() < 1e-12);
  assert_eq!(edge_key(&cell, 10), [3, 4, 4]);
}

#[test]
fn test_node_position_2d_keeps_z_zero() {
  let mut corners = [0.0; MAX_CORNERS];
  corners[..4].copy_from_slice(&[1.0, 1.0, -1.0, 1.0]);
  let cell = Cell::<2> {
    index: [-1, 5],
    corners,
  };

  // Edge 2 runs from corner 2 (0,1) to corner 3 (1,1)
  let position = node_position(&cell, 2, DEFAULT_EPSILON, 2.0);
  assert_eq!(position, [-1.0, 12.0, 0.0]);
  assert_eq!(edge_key(&cell, 2), [-1, 6]);
}
