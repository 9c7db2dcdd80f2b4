//! Metrics collection for extraction passes.
//!
//! Feature-gated and runtime-toggled so that recording costs nothing when
//! disabled.
//!
//! # Usage
//!
//! ```ignore
//! use surface_link::metrics::{SurfaceMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! let stats = extractor.apply()?;
//! metrics.record_extraction(&stats);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::extraction::ExtractionStats;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Fixed-capacity history of recent values.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Oldest to newest.
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
  pub fn sum(&self) -> T {
    self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
  }
}

impl RollingWindow<u64> {
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = self.buffer.iter().min()?;
    let max = self.buffer.iter().max()?;
    Some((*min, *max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128)
  }
}

/// Statistics over recent extraction passes.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMetrics {
  // Last extraction snapshot
  pub nodes: usize,
  pub elements: usize,
  pub degenerate_dropped: usize,
  pub peak_cache_len: usize,

  /// Extraction times in microseconds.
  pub extraction_timings: RollingWindow<u64>,

  pub last_extraction_us: u64,
  /// Total extraction passes recorded (cumulative).
  pub total_extractions: u64,
}

impl SurfaceMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset everything except the cumulative pass count.
  pub fn reset(&mut self) {
    self.nodes = 0;
    self.elements = 0;
    self.degenerate_dropped = 0;
    self.peak_cache_len = 0;
    self.extraction_timings.clear();
    self.last_extraction_us = 0;
  }

  pub fn record_extraction(&mut self, stats: &ExtractionStats) {
    if !is_enabled() {
      return;
    }

    self.nodes = stats.nodes;
    self.elements = stats.elements;
    self.degenerate_dropped = stats.degenerate_dropped;
    self.peak_cache_len = stats.peak_cache_len;
    self.extraction_timings.push(stats.timing_us);
    self.last_extraction_us = stats.timing_us;
    self.total_extractions += 1;
  }

  pub fn avg_extraction_timing_us(&self) -> f64 {
    self.extraction_timings.average()
  }

  /// Approximate mesh memory: 24 bytes per node, 4 per element index.
  pub fn mesh_memory_bytes(&self, dim: usize) -> u64 {
    (self.nodes as u64 * 24) + (self.elements as u64 * dim as u64 * 4)
  }
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
  use super::*;

  #[test]
  fn test_rolling_window() {
    let mut window = RollingWindow::new(3);
    assert!(window.is_empty());
    assert_eq!(window.min_max(), None);

    window.push(10u64);
    window.push(20);
    window.push(30);
    assert_eq!(window.sum(), 60);
    assert_eq!(window.average(), 20.0);

    // Oldest is evicted
    window.push(40);
    assert_eq!(window.len(), 3);
    assert_eq!(window.sum(), 90);
    assert_eq!(window.min_max(), Some((20, 40)));
    assert_eq!(window.last(), Some(&40));
  }

  #[test]
  fn test_record_extraction() {
    let mut metrics = SurfaceMetrics::new();
    let stats = ExtractionStats {
      nodes: 10,
      elements: 16,
      degenerate_dropped: 1,
      timing_us: 500,
      ..Default::default()
    };

    metrics.record_extraction(&stats);
    metrics.record_extraction(&ExtractionStats {
      timing_us: 1500,
      ..stats
    });

    assert_eq!(metrics.elements, 16);
    assert_eq!(metrics.total_extractions, 2);
    assert_eq!(metrics.avg_extraction_timing_us(), 1000.0);
    assert_eq!(metrics.last_extraction_us, 1500);
    assert_eq!(metrics.mesh_memory_bytes(3), 10 * 24 + 16 * 12);

    metrics.reset();
    assert_eq!(metrics.elements, 0);
    assert_eq!(metrics.total_extractions, 2);
  }

  #[test]
  fn test_record_live_extraction() {
    let level_set = crate::test_utils::sphere_level_set::<3>(1.0, 0.25, 2);
    let mut mesh = crate::Mesh::<3>::new();
    let stats = crate::SurfaceExtractor::new()
      .with_level_set(&level_set)
      .with_mesh(&mut mesh)
      .apply()
      .unwrap();

    let mut metrics = SurfaceMetrics::new();
    metrics.record_extraction(&stats);
    assert_eq!(metrics.nodes, mesh.node_count());
    assert_eq!(metrics.elements, mesh.element_count());
    assert_eq!(metrics.extraction_timings.len(), 1);
    assert_eq!(metrics.last_extraction_us, stats.timing_us);
  }
}
