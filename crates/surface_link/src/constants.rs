//! Numeric defaults and cell corner layout shared by extraction and transfer.
//!
//! # Cell Corner Layout
//!
//! Corners of a grid cell are numbered by their offset bits, X in bit 0,
//! Y in bit 1, Z in bit 2 (2D cells only use the first four):
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Cell corner indices (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```
//!
//! # Tolerances
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ epsilon            1e-12        keeps crossings off grid     │
//! │                                 lines: t ∈ [eps, 1 - eps]    │
//! │ min node distance  Δx / 5       L1 radius for node reuse     │
//! │ smoothing radius   1.0 · Δx     element → point averaging    │
//! └──────────────────────────────────────────────────────────────┘
//! ```

/// Default clamp epsilon for edge crossings (fraction of a cell).
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Grid delta is divided by this to obtain the node dedup tolerance.
pub const NODE_DISTANCE_DIVISOR: f64 = 5.0;

/// Minimum number of defined layers around the interface.
pub const MIN_LEVEL_SET_WIDTH: u32 = 2;

/// The proximity scan stays serial while
/// `node_count < PARALLEL_SCAN_FACTOR * threads * threads`.
pub const PARALLEL_SCAN_FACTOR: usize = 10;

/// Default radius multiplier (in grid deltas) for element → point transfer.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 1.0;

/// Maximum number of corners of a cell (3D).
pub const MAX_CORNERS: usize = 8;

/// Offset of corner `corner` along `axis` (0 or 1).
#[inline(always)]
pub const fn corner_offset(corner: usize, axis: usize) -> i64 {
  ((corner >> axis) & 1) as i64
}

/// Number of corners of a `D`-dimensional cell.
#[inline(always)]
pub const fn corner_count(dim: usize) -> usize {
  1 << dim
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
