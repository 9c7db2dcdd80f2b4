//! Surface extraction: sparse level set → explicit mesh.
//!
//! One sweep over the active cells of the level set, in ascending index
//! order:
//!
//! ```text
//! cell ──► evict dead cache keys ──► corner mask ──► case polygons
//!                                                         │
//!          ┌──────────────────────────────────────────────┘
//!          ▼
//!   per polygon vertex:  edge cache hit? ──► reuse
//!                        close node (L1)? ──► reuse
//!                        otherwise       ──► insert node, cache it
//!          │
//!          ▼
//!   insert element unless degenerate (+ centroid for the index)
//! ```
//!
//! 3D level sets produce triangles whose normals point toward the
//! non-negative side; 2D level sets produce segments with the non-negative
//! side to the right of their direction.

pub mod config;
pub mod corner_mask;
pub mod interpolate;
pub mod node_cache;
pub mod proximity;

pub use config::ExtractConfig;
pub use node_cache::EdgeNodeCache;

use web_time::Instant;

use crate::edge_table::{case_polygons, EDGE_AXIS};
use crate::error::ExtractError;
use crate::field::{Cell, LevelSet};
use crate::spatial::KdTree;
use crate::types::{centroid, Mesh};

/// Counters of one extraction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionStats {
  /// Cells with all corners defined.
  pub cells_visited: usize,

  /// Cells the interface passes through.
  pub cells_active: usize,

  pub nodes: usize,
  pub elements: usize,

  /// Polygons dropped because two vertices resolved to the same node.
  pub degenerate_dropped: usize,

  /// Largest edge cache size seen during the sweep.
  pub peak_cache_len: usize,

  /// Wall time of the pass in microseconds.
  pub timing_us: u64,
}

/// Extracts the zero level set of the last inserted level set into a mesh,
/// optionally indexing the element centroids.
pub struct SurfaceExtractor<'a, F: LevelSet<D>, const D: usize> {
  level_sets: Vec<&'a F>,
  mesh: Option<&'a mut Mesh<D>>,
  index: Option<&'a mut KdTree>,
  config: ExtractConfig,
}

impl<'a, F: LevelSet<D>, const D: usize> Default for SurfaceExtractor<'a, F, D> {
  fn default() -> Self {
    Self {
      level_sets: Vec::new(),
      mesh: None,
      index: None,
      config: ExtractConfig::default(),
    }
  }
}

impl<'a, F: LevelSet<D>, const D: usize> SurfaceExtractor<'a, F, D> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_level_set(mut self, level_set: &'a F) -> Self {
    self.level_sets.push(level_set);
    self
  }

  /// Push a level set on top of the stack. Only the topmost one is
  /// extracted.
  pub fn insert_level_set(&mut self, level_set: &'a F) {
    self.level_sets.push(level_set);
  }

  pub fn with_mesh(mut self, mesh: &'a mut Mesh<D>) -> Self {
    self.mesh = Some(mesh);
    self
  }

  pub fn set_mesh(&mut self, mesh: &'a mut Mesh<D>) {
    self.mesh = Some(mesh);
  }

  /// Rebuild `index` over the element centroids after extraction.
  pub fn with_index(mut self, index: &'a mut KdTree) -> Self {
    self.index = Some(index);
    self
  }

  pub fn set_index(&mut self, index: &'a mut KdTree) {
    self.index = Some(index);
  }

  pub fn with_config(mut self, config: ExtractConfig) -> Self {
    self.config = config;
    self
  }

  pub fn config(&self) -> &ExtractConfig {
    &self.config
  }

  /// Run the extraction.
  ///
  /// Without a level set or a mesh this logs a warning and returns an error
  /// without touching any output.
  #[tracing::instrument(skip_all, name = "extraction::apply")]
  pub fn apply(&mut self) -> Result<ExtractionStats, ExtractError> {
    let Some(&level_set) = self.level_sets.last() else {
      tracing::warn!("no level sets were passed to the surface extractor, not converting");
      return Err(ExtractError::NoLevelSet);
    };
    let Some(mesh) = self.mesh.as_deref_mut() else {
      tracing::warn!("no mesh was passed to the surface extractor, not converting");
      return Err(ExtractError::NoMesh);
    };

    Ok(run(
      level_set,
      mesh,
      self.index.as_deref_mut(),
      &self.config,
    ))
  }
}

/// Extract `level_set` into a fresh mesh.
#[tracing::instrument(skip_all, name = "extraction::extract")]
pub fn extract<F: LevelSet<D>, const D: usize>(level_set: &F, config: &ExtractConfig) -> Mesh<D> {
  let mut mesh = Mesh::new();
  run(level_set, &mut mesh, None, config);
  mesh
}

fn run<F: LevelSet<D>, const D: usize>(
  level_set: &F,
  mesh: &mut Mesh<D>,
  index: Option<&mut KdTree>,
  config: &ExtractConfig,
) -> ExtractionStats {
  let start = Instant::now();
  let mut stats = ExtractionStats::default();

  mesh.clear();

  let width = level_set.width();
  if width < config.min_level_set_width {
    tracing::warn!(
      width,
      required = config.min_level_set_width,
      "level set is too narrow, extracted surface might have holes"
    );
  }

  let grid_delta = level_set.grid_delta();
  let tolerance = config.min_node_distance(grid_delta);
  let collect_centroids = index.is_some();
  let mut centroids = Vec::new();
  let mut cache = EdgeNodeCache::<D>::new();

  for cell in level_set.cells() {
    stats.cells_visited += 1;
    cache.evict_before(&cell.index);

    let mask = corner_mask::build(&cell);
    if corner_mask::is_homogeneous::<D>(mask) {
      continue;
    }
    stats.cells_active += 1;

    for polygon in case_polygons(D, mask) {
      let mut element = [0u32; D];
      for (slot, &edge) in element.iter_mut().zip(polygon) {
        *slot = resolve_node(mesh, &mut cache, &cell, edge as usize, grid_delta, tolerance, config);
      }

      if mesh.insert_element(element) {
        if collect_centroids {
          centroids.push(centroid(&mesh.nodes, &element));
        }
      } else {
        stats.degenerate_dropped += 1;
      }
    }

    stats.peak_cache_len = stats.peak_cache_len.max(cache.len());
  }

  if let Some(index) = index {
    index.build(centroids);
  }

  stats.nodes = mesh.node_count();
  stats.elements = mesh.element_count();
  stats.timing_us = start.elapsed().as_micros() as u64;

  tracing::debug!(
    cells = stats.cells_visited,
    active = stats.cells_active,
    nodes = stats.nodes,
    elements = stats.elements,
    dropped = stats.degenerate_dropped,
    timing_us = stats.timing_us,
    "surface extracted"
  );

  stats
}

/// Node index for the crossing on `edge` of `cell`, creating the node if no
/// cached or nearby node exists.
#[inline]
fn resolve_node<const D: usize>(
  mesh: &mut Mesh<D>,
  cache: &mut EdgeNodeCache<D>,
  cell: &Cell<D>,
  edge: usize,
  grid_delta: f64,
  tolerance: f64,
  config: &ExtractConfig,
) -> u32 {
  let axis = EDGE_AXIS[edge] as usize;
  let key = interpolate::edge_key(cell, edge);
  if let Some(node) = cache.get(axis, &key) {
    return node;
  }

  let position = interpolate::node_position(cell, edge, config.epsilon, grid_delta);
  let node = match proximity::find_close_node(
    &mesh.nodes,
    &position,
    tolerance,
    config.parallel_scan_factor,
  ) {
    Some(existing) => existing as u32,
    None => mesh.insert_node(position),
  };

  // The same edge always resolves to the same node; cache either outcome
  cache.insert(axis, key, node);
  node
}
