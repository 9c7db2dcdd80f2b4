//! Core data types for explicit surface meshes.

use glam::DVec3;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f64; 3],
  pub max: [f64; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f64::INFINITY; 3],
      max: [f64::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f64; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Explicit surface mesh: lines in 2D (`D = 2`), triangles in 3D (`D = 3`).
///
/// Nodes always carry three coordinates; the unused one stays zero in 2D.
/// Extents are maintained on insertion and never recomputed by a scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<const D: usize> {
  /// Node coordinates.
  pub nodes: Vec<[f64; 3]>,

  /// Elements as `D` node indices each.
  pub elements: Vec<[u32; D]>,

  /// Bounding box of all inserted nodes.
  pub bounds: MinMaxAABB,
}

impl<const D: usize> Default for Mesh<D> {
  fn default() -> Self {
    Self {
      nodes: Vec::new(),
      elements: Vec::new(),
      bounds: MinMaxAABB::empty(),
    }
  }
}

impl<const D: usize> Mesh<D> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.nodes.clear();
    self.elements.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn element_count(&self) -> usize {
    self.elements.len()
  }

  /// Append a node and grow the extents. Returns its index.
  ///
  /// Node indices are `u32`, so a mesh holds at most `u32::MAX` nodes.
  pub fn insert_node(&mut self, node: [f64; 3]) -> u32 {
    let index = node_index(self.nodes.len());
    self.nodes.push(node);
    self.bounds.encapsulate(node);
    index
  }

  /// Append an element unless two of its node indices coincide.
  ///
  /// Returns false for rejected (degenerate) elements.
  pub fn insert_element(&mut self, element: [u32; D]) -> bool {
    if is_degenerate(&element) {
      return false;
    }
    self.elements.push(element);
    true
  }

  /// Mean of the element's node coordinates.
  #[inline]
  pub fn element_centroid(&self, element: usize) -> [f64; 3] {
    centroid(&self.nodes, &self.elements[element])
  }

  /// Centroids of all elements, in element order.
  pub fn centroids(&self) -> Vec<[f64; 3]> {
    self
      .elements
      .iter()
      .map(|element| centroid(&self.nodes, element))
      .collect()
  }
}

/// Index of the node stored at `len`. Panics in debug builds past `u32`.
#[inline]
fn node_index(len: usize) -> u32 {
  debug_assert!(u32::try_from(len).is_ok(), "node index overflow: {len}");
  len as u32
}

/// True if any two node indices of the element coincide.
#[inline]
pub fn is_degenerate<const D: usize>(element: &[u32; D]) -> bool {
  (0..D).any(|i| (i + 1..D).any(|j| element[i] == element[j]))
}

/// Mean of the given nodes.
#[inline]
pub fn centroid(nodes: &[[f64; 3]], indices: &[u32]) -> [f64; 3] {
  let sum = indices
    .iter()
    .fold(DVec3::ZERO, |acc, &i| acc + DVec3::from_array(nodes[i as usize]));
  (sum / indices.len() as f64).to_array()
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
