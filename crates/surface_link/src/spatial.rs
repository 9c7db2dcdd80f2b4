//! Static kd-tree over a point set: nearest and fixed-radius queries.
//!
//! Backed by `kiddo::ImmutableKdTree`. The wrapper keeps the points so that
//! answers can be re-measured exactly and ordered by point index:
//!
//! - `nearest` resolves equidistant candidates to the lowest index
//! - `within_radius` is inclusive and returns neighbors sorted by index
//!
//! Both rules make every query answer a pure function of the input points.

use std::fmt;
use std::sync::Arc;

use glam::DVec3;
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use smallvec::SmallVec;

/// Query result: index into the built point set and Euclidean distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
  pub index: usize,
  pub distance: f64,
}

/// Points within a query radius.
pub type Neighborhood = SmallVec<[Neighbor; 16]>;

/// Balanced static kd-tree. Rebuild whenever the point set changes.
#[derive(Clone, Default)]
pub struct KdTree {
  points: Vec<[f64; 3]>,
  tree: Option<Arc<ImmutableKdTree<f64, 3>>>,
}

impl fmt::Debug for KdTree {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("KdTree")
      .field("len", &self.points.len())
      .finish()
  }
}

impl KdTree {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a tree over `points`.
  pub fn from_points(points: Vec<[f64; 3]>) -> Self {
    let mut tree = Self::new();
    tree.build(points);
    tree
  }

  /// Replace the point set and rebuild from scratch.
  #[tracing::instrument(skip_all, name = "spatial::build")]
  pub fn build(&mut self, points: Vec<[f64; 3]>) {
    self.tree = if points.is_empty() {
      None
    } else {
      Some(Arc::new(ImmutableKdTree::new_from_slice(&points)))
    };

    tracing::trace!(points = points.len(), "kd-tree built");

    self.points = points;
  }

  /// Number of indexed points.
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Point by its index in the built set.
  #[inline]
  pub fn point(&self, index: usize) -> [f64; 3] {
    self.points[index]
  }

  pub fn points(&self) -> &[[f64; 3]] {
    &self.points
  }

  /// Closest point. Equidistant candidates resolve to the lowest index.
  pub fn nearest(&self, query: &[f64; 3]) -> Option<Neighbor> {
    let tree = self.tree.as_ref()?;
    let first = tree.nearest_one::<SquaredEuclidean>(query);

    // Any point tied with the first hit lies inside its (slightly widened)
    // ball, so the lowest index can be picked from that set.
    let origin = DVec3::from_array(*query);
    let mut best = (first.item as usize, self.distance_squared(origin, first.item as usize));
    for candidate in tree.within_unsorted::<SquaredEuclidean>(query, widen(best.1)) {
      let index = candidate.item as usize;
      let distance_sq = self.distance_squared(origin, index);
      if distance_sq < best.1 || (distance_sq == best.1 && index < best.0) {
        best = (index, distance_sq);
      }
    }

    Some(Neighbor {
      index: best.0,
      distance: best.1.sqrt(),
    })
  }

  /// All points with distance `<= radius`, sorted by index.
  pub fn within_radius(&self, query: &[f64; 3], radius: f64) -> Neighborhood {
    let mut found = Neighborhood::new();
    let Some(tree) = self.tree.as_ref() else {
      return found;
    };
    if radius.is_nan() || radius < 0.0 {
      return found;
    }

    let origin = DVec3::from_array(*query);
    let radius_sq = radius * radius;
    for candidate in tree.within_unsorted::<SquaredEuclidean>(query, widen(radius_sq)) {
      let index = candidate.item as usize;
      let distance_sq = self.distance_squared(origin, index);
      if distance_sq <= radius_sq {
        found.push(Neighbor {
          index,
          distance: distance_sq.sqrt(),
        });
      }
    }
    found.sort_unstable_by_key(|neighbor| neighbor.index);
    found
  }

  #[inline]
  fn distance_squared(&self, origin: DVec3, index: usize) -> f64 {
    origin.distance_squared(DVec3::from_array(self.points[index]))
  }
}

/// Squared search radius with room for rounding in the tree's own distance
/// sums. Candidates are re-measured and filtered exactly afterwards.
#[inline]
fn widen(radius_sq: f64) -> f64 {
  radius_sq * (1.0 + 1e-9) + f64::MIN_POSITIVE
}

#[cfg(test)]
#[path = "spatial_test.rs"]
mod spatial_test;
