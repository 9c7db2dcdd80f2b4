//! Sparse level set input: the cell sweep consumed by surface extraction.
//!
//! The extractor only needs three things from a level set: its grid delta,
//! how many layers are defined around the interface, and a sweep over the
//! cells whose corners are all defined.
//!
//! ```text
//!  defined points (·) within `width` of the interface, undefined elsewhere
//!
//!        ·  ·  ·
//!     ·  ·  ·  ·  ·         a cell is active when all 2^D corners
//!   ·  · ─────── ·  ·       are defined; sweep order is ascending
//!   ·  ·/ ·  ·  \·  ·       lexicographic index order, axis 0 most
//!   ·  │  ·  ·  │ ·         significant
//! ```

use std::collections::BTreeMap;

use crate::constants::{corner_count, corner_offset, MAX_CORNERS};

/// One active cell: integer origin plus the values at its `2^D` corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell<const D: usize> {
  /// Grid index of corner 0.
  pub index: [i64; D],

  /// Corner values; only the first `1 << D` entries are meaningful.
  pub corners: [f64; MAX_CORNERS],
}

impl<const D: usize> Cell<D> {
  #[inline(always)]
  pub fn corner(&self, corner: usize) -> f64 {
    self.corners[corner]
  }

  /// Grid index of a corner.
  #[inline]
  pub fn corner_index(&self, corner: usize) -> [i64; D] {
    let mut index = self.index;
    for (axis, component) in index.iter_mut().enumerate() {
      *component += corner_offset(corner, axis);
    }
    index
  }
}

/// Read access to a sparse signed scalar field.
pub trait LevelSet<const D: usize> {
  /// Physical spacing between grid points.
  fn grid_delta(&self) -> f64;

  /// Number of defined layers around the interface.
  fn width(&self) -> u32;

  /// Active cells in ascending lexicographic order of their index.
  ///
  /// Extraction relies on this order to retire edge cache entries.
  fn cells(&self) -> impl Iterator<Item = Cell<D>> + '_;
}

/// Level set stored as an ordered map of defined grid points.
///
/// Values are in grid units (distance / grid delta).
#[derive(Clone, Debug)]
pub struct SparseLevelSet<const D: usize> {
  values: BTreeMap<[i64; D], f64>,
  grid_delta: f64,
  width: u32,
}

impl<const D: usize> SparseLevelSet<D> {
  pub fn new(grid_delta: f64, width: u32) -> Self {
    Self {
      values: BTreeMap::new(),
      grid_delta,
      width,
    }
  }

  /// Sample a signed distance function on the grid points of `[min, max]`,
  /// keeping those within `width` grid units of the interface.
  ///
  /// `sdf` receives physical coordinates (unused components are zero) and
  /// returns a physical distance.
  pub fn from_sdf(
    min: [i64; D],
    max: [i64; D],
    grid_delta: f64,
    width: u32,
    sdf: impl Fn([f64; 3]) -> f64,
  ) -> Self {
    let mut level_set = Self::new(grid_delta, width);
    let mut index = min;

    'sweep: loop {
      let mut position = [0.0; 3];
      for (axis, &component) in index.iter().enumerate() {
        position[axis] = component as f64 * grid_delta;
      }

      let value = sdf(position) / grid_delta;
      if value.abs() <= width as f64 {
        level_set.values.insert(index, value);
      }

      // Odometer increment, last axis fastest
      let mut axis = D;
      loop {
        if axis == 0 {
          break 'sweep;
        }
        axis -= 1;
        if index[axis] < max[axis] {
          index[axis] += 1;
          break;
        }
        index[axis] = min[axis];
      }
    }

    level_set
  }

  /// Define (or overwrite) the value at a grid point.
  pub fn insert(&mut self, index: [i64; D], value: f64) {
    self.values.insert(index, value);
  }

  pub fn value(&self, index: &[i64; D]) -> Option<f64> {
    self.values.get(index).copied()
  }

  /// Number of defined grid points.
  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn set_width(&mut self, width: u32) {
    self.width = width;
  }

  /// Defined grid points in physical coordinates, in index order.
  pub fn points(&self) -> Vec<[f64; 3]> {
    self
      .values
      .keys()
      .map(|index| {
        let mut position = [0.0; 3];
        for (axis, &component) in index.iter().enumerate() {
          position[axis] = component as f64 * self.grid_delta;
        }
        position
      })
      .collect()
  }

  /// Cell with origin `origin`, if all of its corners are defined.
  pub fn cell_at(&self, origin: [i64; D]) -> Option<Cell<D>> {
    let mut cell = Cell {
      index: origin,
      corners: [0.0; MAX_CORNERS],
    };
    for corner in 0..corner_count(D) {
      cell.corners[corner] = *self.values.get(&cell.corner_index(corner))?;
    }
    Some(cell)
  }
}

impl<const D: usize> LevelSet<D> for SparseLevelSet<D> {
  fn grid_delta(&self) -> f64 {
    self.grid_delta
  }

  fn width(&self) -> u32 {
    self.width
  }

  fn cells(&self) -> impl Iterator<Item = Cell<D>> + '_ {
    self
      .values
      .keys()
      .filter_map(move |&origin| self.cell_at(origin))
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
