//! ExtractConfig - tolerances and scan tuning for surface extraction.

use crate::constants::{
  DEFAULT_EPSILON, MIN_LEVEL_SET_WIDTH, NODE_DISTANCE_DIVISOR, PARALLEL_SCAN_FACTOR,
};

/// Configuration for surface extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfig {
  /// Crossings are clamped to `[epsilon, 1 - epsilon]` of the cell edge.
  pub epsilon: f64,

  /// Nodes closer than `grid_delta / node_distance_divisor` (L1) are merged.
  pub node_distance_divisor: f64,

  /// Level sets narrower than this are extracted with a warning.
  pub min_level_set_width: u32,

  /// The proximity scan runs serially below
  /// `parallel_scan_factor * threads * threads` nodes.
  pub parallel_scan_factor: usize,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      epsilon: DEFAULT_EPSILON,
      node_distance_divisor: NODE_DISTANCE_DIVISOR,
      min_level_set_width: MIN_LEVEL_SET_WIDTH,
      parallel_scan_factor: PARALLEL_SCAN_FACTOR,
    }
  }
}

impl ExtractConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_epsilon(mut self, epsilon: f64) -> Self {
    debug_assert!((0.0..0.5).contains(&epsilon), "epsilon must be in [0, 0.5)");
    self.epsilon = epsilon;
    self
  }

  pub fn with_node_distance_divisor(mut self, divisor: f64) -> Self {
    self.node_distance_divisor = divisor;
    self
  }

  pub fn with_min_level_set_width(mut self, width: u32) -> Self {
    self.min_level_set_width = width;
    self
  }

  pub fn with_parallel_scan_factor(mut self, factor: usize) -> Self {
    self.parallel_scan_factor = factor;
    self
  }

  /// Dedup tolerance in physical units.
  #[inline]
  pub fn min_node_distance(&self, grid_delta: f64) -> f64 {
    grid_delta / self.node_distance_divisor
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
