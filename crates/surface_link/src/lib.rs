//! surface_link - Level set surface extraction and point/element field
//! transfer
//!
//! This crate turns a sparse signed scalar field into an explicit surface
//! mesh (segments in 2D, triangles in 3D) and moves scalar fields between the
//! grid point sampling of that surface and its element sampling.
//!
//! # Features
//!
//! - **Surface Extraction**: Marching squares / cubes over the active cells
//!   of a sparse level set, with per-axis edge caching and tolerance-based
//!   node merging
//! - **Spatial Index**: Static kd-tree with nearest and fixed-radius queries
//! - **Field Transfer**: Nearest point → element copies and radius-averaged
//!   element → point means over flat, block-laid-out buffers
//!
//! # Example
//!
//! ```ignore
//! use surface_link::{KdTree, Mesh, SparseLevelSet, SurfaceExtractor};
//!
//! let level_set = SparseLevelSet::<3>::from_sdf([-8; 3], [8; 3], 0.25, 2, |p| {
//!   (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() - 1.0
//! });
//!
//! let mut mesh = Mesh::new();
//! let mut element_index = KdTree::new();
//! let stats = SurfaceExtractor::new()
//!   .with_level_set(&level_set)
//!   .with_mesh(&mut mesh)
//!   .with_index(&mut element_index)
//!   .apply()?;
//!
//! println!("Extracted {} nodes, {} triangles", stats.nodes, stats.elements);
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod types;

pub use error::{ExtractError, TransferError};
pub use types::{Mesh, MinMaxAABB};

// Sparse level set input
pub mod field;
pub use field::{Cell, LevelSet, SparseLevelSet};

// Surface extraction
pub mod extraction;
pub use extraction::{extract, ExtractConfig, ExtractionStats, SurfaceExtractor};

// Nearest neighbour index
pub mod spatial;
pub use spatial::{KdTree, Neighbor, Neighborhood};

// Point <-> element field transfer
pub mod transfer;
pub use transfer::{
  DeviceBuffer, HostBuffer, IndexMap, ScalarData, TransferConfig, MATERIAL_LABEL,
};

pub mod metrics;

#[cfg(test)]
pub(crate) mod test_utils;
