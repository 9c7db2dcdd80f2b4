//! Parallel proximity scan over existing mesh nodes.
//!
//! ```text
//! nodes: [ shard 0 | shard 1 | ... | shard T-1 (+ remainder) ]
//!              │         │                │
//!              ▼         ▼                ▼
//!          first hit  first hit  ...  first hit     ──► lowest wins
//! ```
//!
//! Each shard scans its contiguous range in ascending order and publishes its
//! first hit through a shared atomic minimum. A shard whose range starts above
//! a published hit stops early, since none of its nodes could win. The answer
//! is therefore the lowest matching index for any shard count.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

/// L1 distance test: strictly closer than `tolerance`.
#[inline(always)]
pub fn is_close(a: &[f64; 3], b: &[f64; 3], tolerance: f64) -> bool {
  (a[0] - b[0]).abs() + (a[1] - b[1]).abs() + (a[2] - b[2]).abs() < tolerance
}

/// Number of shards for `node_count` nodes on `threads` workers.
///
/// Small node arrays stay serial so worker startup does not dominate.
#[inline]
pub fn shard_count(node_count: usize, threads: usize, scan_factor: usize) -> usize {
  let threads = threads.max(1);
  if node_count < scan_factor.saturating_mul(threads).saturating_mul(threads) {
    1
  } else {
    threads.min(node_count.max(1))
  }
}

/// Lowest index of a node within `tolerance` (L1) of `candidate`.
pub fn find_close_node(
  nodes: &[[f64; 3]],
  candidate: &[f64; 3],
  tolerance: f64,
  scan_factor: usize,
) -> Option<usize> {
  let shards = shard_count(nodes.len(), rayon::current_num_threads(), scan_factor);
  find_close_node_sharded(nodes, candidate, tolerance, shards)
}

/// [`find_close_node`] with an explicit shard count.
pub fn find_close_node_sharded(
  nodes: &[[f64; 3]],
  candidate: &[f64; 3],
  tolerance: f64,
  shards: usize,
) -> Option<usize> {
  if shards <= 1 {
    return nodes
      .iter()
      .position(|node| is_close(node, candidate, tolerance));
  }

  let share = nodes.len() / shards;
  let first_hit = AtomicUsize::new(usize::MAX);

  (0..shards).into_par_iter().for_each(|shard| {
    let start = shard * share;
    let stop = if shard == shards - 1 {
      nodes.len()
    } else {
      start + share
    };

    for i in start..stop {
      // Read opportunistically; a stale value only costs extra work
      if first_hit.load(Ordering::Relaxed) < start {
        return;
      }
      if is_close(&nodes[i], candidate, tolerance) {
        first_hit.fetch_min(i, Ordering::Relaxed);
        return;
      }
    }
  });

  match first_hit.into_inner() {
    usize::MAX => None,
    index => Some(index),
  }
}

#[cfg(test)]
#[path = "proximity_test.rs"]
mod proximity_test;
