//! Per-axis edge → node cache for one extraction sweep.
//!
//! An edge is keyed by the grid index of its lower corner; one table per axis
//! keeps X, Y and Z edges sharing a corner apart. Because cells arrive in
//! ascending index order and every key a cell can produce is `>=` the cell's
//! own index, keys below the current cell are dead and get evicted, which
//! bounds the cache by the active sweep front.

use std::collections::BTreeMap;

/// Edge → node index tables, one per axis.
#[derive(Debug)]
pub struct EdgeNodeCache<const D: usize> {
  tables: [BTreeMap<[i64; D], u32>; D],
}

impl<const D: usize> Default for EdgeNodeCache<D> {
  fn default() -> Self {
    Self {
      tables: std::array::from_fn(|_| BTreeMap::new()),
    }
  }
}

impl<const D: usize> EdgeNodeCache<D> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drop every entry whose key precedes the sweep position.
  pub fn evict_before(&mut self, sweep: &[i64; D]) {
    for table in &mut self.tables {
      while let Some((key, _)) = table.first_key_value() {
        if key >= sweep {
          break;
        }
        table.pop_first();
      }
    }
  }

  #[inline]
  pub fn get(&self, axis: usize, key: &[i64; D]) -> Option<u32> {
    self.tables[axis].get(key).copied()
  }

  #[inline]
  pub fn insert(&mut self, axis: usize, key: [i64; D], node: u32) {
    self.tables[axis].insert(key, node);
  }

  /// Total entries across all axes.
  pub fn len(&self) -> usize {
    self.tables.iter().map(BTreeMap::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.tables.iter().all(BTreeMap::is_empty)
  }
}

#[cfg(test)]
#[path = "node_cache_test.rs"]
mod node_cache_test;
