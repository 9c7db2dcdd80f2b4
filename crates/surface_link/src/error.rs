//! Error types for extraction and field transfer.

use thiserror::Error;

/// Configuration errors of a surface extraction pass.
///
/// Both are logged as warnings before being returned; the target mesh is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
  #[error("no level sets were passed to the surface extractor")]
  NoLevelSet,

  #[error("no mesh was passed to the surface extractor")]
  NoMesh,
}

/// Lookup and shape errors of named scalar data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
  #[error("unknown scalar field: {0}")]
  UnknownField(String),

  #[error("scalar field {name} has {actual} values, expected {expected}")]
  LengthMismatch {
    name: String,
    expected: usize,
    actual: usize,
  },

  #[error("scalar field {0} is already present")]
  DuplicateField(String),
}
