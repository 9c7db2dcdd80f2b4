//! Corner sign classification.
//!
//! The corner mask has one bit per corner of the cell; a bit is set if the
//! corresponding value is non-negative (zero counts as outside).

use crate::constants::corner_count;
use crate::field::Cell;

/// Build the corner mask of a cell.
///
/// - Bit 0: corner (0,0,0)
/// - Bit 1: corner (1,0,0)
/// - Bit 2: corner (0,1,0)
/// - Bit 3: corner (1,1,0)
/// - Bits 4-7: the same at z = 1 (3D only)
#[inline]
pub fn build<const D: usize>(cell: &Cell<D>) -> usize {
  let mut mask = 0usize;
  for corner in 0..corner_count(D) {
    if cell.corners[corner] >= 0.0 {
      mask |= 1 << corner;
    }
  }
  mask
}

/// True if no interface passes through the cell (all bits equal).
#[inline]
pub fn is_homogeneous<const D: usize>(mask: usize) -> bool {
  mask == 0 || mask == (1 << corner_count(D)) - 1
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
