//! Opaque storage for flat element buffers.
//!
//! Element data is handed to the ray tracing stage through a buffer that may
//! live on a device. Transfer routines only upload and download whole slices.

/// Flat `f64` storage that can be filled and read back.
pub trait DeviceBuffer {
  /// Replace the contents with `data`, resizing as needed.
  fn upload(&mut self, data: &[f64]);

  /// Copy the first `target.len()` values into `target`.
  ///
  /// Panics if the buffer holds fewer values.
  fn download(&self, target: &mut [f64]);

  /// Number of values held.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Host memory buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostBuffer {
  data: Vec<f64>,
}

impl HostBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn as_slice(&self) -> &[f64] {
    &self.data
  }

  pub fn into_inner(self) -> Vec<f64> {
    self.data
  }
}

impl From<Vec<f64>> for HostBuffer {
  fn from(data: Vec<f64>) -> Self {
    Self { data }
  }
}

impl DeviceBuffer for HostBuffer {
  fn upload(&mut self, data: &[f64]) {
    self.data.clear();
    self.data.extend_from_slice(data);
  }

  fn download(&self, target: &mut [f64]) {
    assert!(
      target.len() <= self.data.len(),
      "download of {} values from a buffer of {}",
      target.len(),
      self.data.len()
    );
    target.copy_from_slice(&self.data[..target.len()]);
  }

  fn len(&self) -> usize {
    self.data.len()
  }
}

#[cfg(test)]
#[path = "buffer_test.rs"]
mod buffer_test;
