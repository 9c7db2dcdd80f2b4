use super::*;

#[test]
fn test_cell_requires_all_corners() {
  let mut level_set = SparseLevelSet::<2>::new(1.0, 2);
  level_set.insert([0, 0], -1.0);
  level_set.insert([1, 0], 1.0);
  level_set.insert([0, 1], 1.0);
  assert!(level_set.cell_at([0, 0]).is_none());

  level_set.insert([1, 1], 1.0);
  let cell = level_set.cell_at([0, 0]).unwrap();
  assert_eq!(cell.index, [0, 0]);
  assert_eq!(&cell.corners[..4], &[-1.0, 1.0, 1.0, 1.0]);
  assert_eq!(level_set.cells().count(), 1);
}

#[test]
fn test_corner_index() {
  let cell = Cell::<3> {
    index: [4, -2, 7],
    corners: [0.0; MAX_CORNERS],
  };
  assert_eq!(cell.corner_index(0), [4, -2, 7]);
  assert_eq!(cell.corner_index(1), [5, -2, 7]);
  assert_eq!(cell.corner_index(6), [4, -1, 8]);
  assert_eq!(cell.corner_index(7), [5, -1, 8]);
}

#[test]
fn test_corner_values_follow_bit_layout() {
  let mut level_set = SparseLevelSet::<3>::new(0.5, 2);
  for corner in 0..8usize {
    let index = [
      (corner & 1) as i64,
      ((corner >> 1) & 1) as i64,
      ((corner >> 2) & 1) as i64,
    ];
    level_set.insert(index, corner as f64);
  }
  let cell = level_set.cell_at([0, 0, 0]).unwrap();
  for corner in 0..8 {
    assert_eq!(cell.corner(corner), corner as f64);
  }
}

#[test]
fn test_cells_sweep_in_ascending_order() {
  let level_set = SparseLevelSet::<3>::from_sdf([-4; 3], [4; 3], 1.0, 2, |p| {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() - 2.5
  });
  let origins: Vec<_> = level_set.cells().map(|cell| cell.index).collect();
  assert!(!origins.is_empty());
  assert!(origins.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_from_sdf_keeps_narrow_band() {
  // Plane x = 0.5 over a 6x6 patch
  let level_set = SparseLevelSet::<2>::from_sdf([-3, -3], [3, 3], 1.0, 1, |p| p[0] - 0.5);
  assert_eq!(level_set.width(), 1);
  // Columns x = 0 and x = 1 (|x - 0.5| <= 1), seven rows each
  assert_eq!(level_set.len(), 14);
  assert_eq!(level_set.value(&[0, 2]), Some(-0.5));
  assert_eq!(level_set.value(&[1, -3]), Some(0.5));
  assert_eq!(level_set.value(&[2, 0]), None);
  // Six cells between the two columns
  assert_eq!(level_set.cells().count(), 6);
}

#[test]
fn test_values_are_in_grid_units() {
  let level_set = SparseLevelSet::<2>::from_sdf([0, 0], [2, 0], 0.5, 4, |p| p[0]);
  assert_eq!(level_set.grid_delta(), 0.5);
  assert_eq!(level_set.value(&[2, 0]), Some(2.0));
  assert_eq!(level_set.points()[1], [0.5, 0.0, 0.0]);
}
