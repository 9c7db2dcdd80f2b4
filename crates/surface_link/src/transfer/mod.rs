//! Field transfer between the point sampling and the element sampling of a
//! surface.
//!
//! ```text
//!   point data ──nearest point per element centroid──► element buffer
//!       ▲                                                   │
//!       │                                           (ray tracing)
//!       │                                                   ▼
//!   point data ◄──mean over elements within radius── element results
//! ```
//!
//! Element buffers are flat: block `k` holds field `k` for every element, so
//! field `k` of element `i` lives at `i + k * element_count`. The block layout
//! is described by an [`IndexMap`]. Uploads from point data always put the
//! material ids in block 0.

pub mod buffer;
pub mod scalar_data;
pub mod smoothing;
pub mod translate;

pub use buffer::{DeviceBuffer, HostBuffer};
pub use scalar_data::{IndexMap, ScalarData};
pub use smoothing::{remap_point_data, smooth_point_values};
pub use translate::{download_element_fields, elements_to_points, points_to_elements};

use crate::constants::DEFAULT_SMOOTHING_FACTOR;

/// Label of the material id block in element buffers.
pub const MATERIAL_LABEL: &str = "Material";

/// Tuning for element → point transfer.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferConfig {
  /// Averaging radius in grid deltas. Larger values smooth stochastic
  /// element data at the cost of locality.
  pub smoothing_factor: f64,
}

impl Default for TransferConfig {
  fn default() -> Self {
    Self {
      smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
    }
  }
}

impl TransferConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_smoothing_factor(mut self, factor: f64) -> Self {
    self.smoothing_factor = factor;
    self
  }

  /// Averaging radius in physical units.
  #[inline]
  pub fn radius(&self, grid_delta: f64) -> f64 {
    self.smoothing_factor * grid_delta
  }
}

/// Mean of the values, except that a single value is used as is and an empty
/// set yields 0.
#[inline]
pub(crate) fn radius_mean(values: impl Iterator<Item = f64>) -> f64 {
  let mut sum = 0.0;
  let mut n = 0usize;
  for value in values {
    sum += value;
    n += 1;
  }
  if n > 1 {
    sum / n as f64
  } else {
    sum
  }
}
