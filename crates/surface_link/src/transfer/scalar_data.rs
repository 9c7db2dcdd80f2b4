//! Named scalar arrays and the block layout of flat buffers.

use crate::error::TransferError;

/// Ordered collection of named scalar arrays.
///
/// Insertion order is the field order: field `i` maps to block `i` of any
/// buffer built from this collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarData {
  labels: Vec<String>,
  values: Vec<Vec<f64>>,
}

impl ScalarData {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of fields.
  pub fn len(&self) -> usize {
    self.labels.len()
  }

  pub fn is_empty(&self) -> bool {
    self.labels.is_empty()
  }

  pub fn clear(&mut self) {
    self.labels.clear();
    self.values.clear();
  }

  /// Append a field without checking the label. Returns its position.
  pub fn insert_next(&mut self, label: impl Into<String>, values: Vec<f64>) -> usize {
    self.labels.push(label.into());
    self.values.push(values);
    self.labels.len() - 1
  }

  /// Append a field with a label not used yet.
  pub fn insert(&mut self, label: impl Into<String>, values: Vec<f64>) -> Result<usize, TransferError> {
    let label = label.into();
    if self.index_of(&label).is_some() {
      return Err(TransferError::DuplicateField(label));
    }
    Ok(self.insert_next(label, values))
  }

  /// Position of the first field named `label`.
  pub fn index_of(&self, label: &str) -> Option<usize> {
    self.labels.iter().position(|l| l == label)
  }

  pub fn label(&self, index: usize) -> Option<&str> {
    self.labels.get(index).map(String::as_str)
  }

  pub fn get(&self, label: &str) -> Option<&[f64]> {
    self.index_of(label).map(|i| self.values[i].as_slice())
  }

  pub fn get_mut(&mut self, label: &str) -> Option<&mut Vec<f64>> {
    let index = self.index_of(label)?;
    Some(&mut self.values[index])
  }

  /// Like [`get`](Self::get), with an error naming the missing field.
  pub fn field(&self, label: &str) -> Result<&[f64], TransferError> {
    self
      .get(label)
      .ok_or_else(|| TransferError::UnknownField(label.to_string()))
  }

  /// Values of field `index`. Panics if out of range.
  #[inline]
  pub fn values(&self, index: usize) -> &[f64] {
    &self.values[index]
  }

  #[inline]
  pub fn values_mut(&mut self, index: usize) -> &mut Vec<f64> {
    &mut self.values[index]
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
    self
      .labels
      .iter()
      .zip(&self.values)
      .map(|(label, values)| (label.as_str(), values.as_slice()))
  }

  /// Check that every field holds `expected` values.
  pub fn validate_len(&self, expected: usize) -> Result<(), TransferError> {
    for (label, values) in self.iter() {
      if values.len() != expected {
        return Err(TransferError::LengthMismatch {
          name: label.to_string(),
          expected,
          actual: values.len(),
        });
      }
    }
    Ok(())
  }

  /// Layout of these fields in a buffer whose first `leading` blocks are
  /// taken by other data.
  pub fn index_map(&self, leading: usize) -> IndexMap {
    IndexMap {
      entries: self
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), leading + i))
        .collect(),
    }
  }
}

/// Ordered label → block offset map describing a flat buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexMap {
  entries: Vec<(String, usize)>,
}

impl IndexMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Map the labels to consecutive blocks starting at 0.
  pub fn from_labels<I, S>(labels: I) -> Result<Self, TransferError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut map = Self::new();
    for (offset, label) in labels.into_iter().enumerate() {
      map.insert(label, offset)?;
    }
    Ok(map)
  }

  pub fn insert(&mut self, label: impl Into<String>, offset: usize) -> Result<(), TransferError> {
    let label = label.into();
    if self.offset_of(&label).is_some() {
      return Err(TransferError::DuplicateField(label));
    }
    self.entries.push((label, offset));
    Ok(())
  }

  pub fn offset_of(&self, label: &str) -> Option<usize> {
    self
      .entries
      .iter()
      .find(|(l, _)| l == label)
      .map(|&(_, offset)| offset)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
    self
      .entries
      .iter()
      .map(|(label, offset)| (label.as_str(), *offset))
  }

  /// Number of blocks a buffer needs to hold every mapped field.
  pub fn block_count(&self) -> usize {
    self
      .entries
      .iter()
      .map(|&(_, offset)| offset + 1)
      .max()
      .unwrap_or(0)
  }

  /// True if entry `i` maps to block `i` for all entries.
  pub fn is_sequential(&self) -> bool {
    self
      .entries
      .iter()
      .enumerate()
      .all(|(i, &(_, offset))| i == offset)
  }
}

#[cfg(test)]
#[path = "scalar_data_test.rs"]
mod scalar_data_test;
