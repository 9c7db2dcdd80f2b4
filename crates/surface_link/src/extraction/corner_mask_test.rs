use super::*;
use crate::constants::MAX_CORNERS;

fn cell3(values: [f64; 8]) -> Cell<3> {
  Cell {
    index: [0; 3],
    corners: values,
  }
}

fn cell2(values: [f64; 4]) -> Cell<2> {
  let mut corners = [f64::NAN; MAX_CORNERS];
  corners[..4].copy_from_slice(&values);
  Cell {
    index: [0; 2],
    corners,
  }
}

#[test]
fn test_all_positive() {
  let mask = build(&cell3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]));
  assert_eq!(mask, 0b11111111);
  assert!(is_homogeneous::<3>(mask));
}

#[test]
fn test_all_negative() {
  let mask = build(&cell3([-1.0; 8]));
  assert_eq!(mask, 0);
  assert!(is_homogeneous::<3>(mask));
}

#[test]
fn test_zero_is_non_negative() {
  let mask = build(&cell3([0.0, -0.0, -1e-9, 1.0, 1.0, 1.0, 1.0, 1.0]));
  // -0.0 >= 0.0 holds in IEEE 754
  assert_eq!(mask, 0b11111011);
}

#[test]
fn test_single_negative_corner() {
  let mask = build(&cell3([-1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]));
  assert_eq!(mask, 0b11111110);
  assert!(!is_homogeneous::<3>(mask));
}

#[test]
fn test_square_ignores_unused_corners() {
  let mask = build(&cell2([1.0, 1.0, 1.0, 1.0]));
  assert_eq!(mask, 0b1111);
  assert!(is_homogeneous::<2>(mask));

  let mask = build(&cell2([-1.0, 1.0, 1.0, -1.0]));
  assert_eq!(mask, 0b0110);
  assert!(!is_homogeneous::<2>(mask));
}

#[test]
fn test_matches_reference() {
  for pattern in 0usize..256 {
    let values: [f64; 8] = std::array::from_fn(|i| if (pattern >> i) & 1 == 1 { 0.5 } else { -0.5 });
    assert_eq!(build(&cell3(values)), pattern, "pattern {:#010b}", pattern);
  }
}
