use super::*;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_empty_aabb_is_invalid() {
  assert!(!MinMaxAABB::empty().is_valid());
  assert_eq!(MinMaxAABB::default(), MinMaxAABB::empty());
}

#[test]
fn test_insert_node_tracks_bounds() {
  let mut mesh = Mesh::<3>::new();
  assert_eq!(mesh.insert_node([0.5, -1.0, 2.0]), 0);
  assert_eq!(mesh.insert_node([-0.5, 1.0, 0.0]), 1);

  assert_eq!(mesh.bounds.min, [-0.5, -1.0, 0.0]);
  assert_eq!(mesh.bounds.max, [0.5, 1.0, 2.0]);
  assert_eq!(mesh.node_count(), 2);
}

#[test]
fn test_degenerate_elements_rejected() {
  let mut mesh = Mesh::<3>::new();
  for node in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
    mesh.insert_node(node);
  }

  assert!(!mesh.insert_element([0, 0, 1]));
  assert!(!mesh.insert_element([0, 1, 1]));
  assert!(!mesh.insert_element([2, 1, 2]));
  assert!(mesh.insert_element([0, 1, 2]));
  assert_eq!(mesh.element_count(), 1);

  let mut lines = Mesh::<2>::new();
  assert!(!lines.insert_element([3, 3]));
  assert!(lines.insert_element([3, 4]));
}

#[test]
fn test_centroids() {
  let mut mesh = Mesh::<3>::new();
  for node in [[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]] {
    mesh.insert_node(node);
  }
  mesh.insert_element([0, 1, 2]);

  assert_eq!(mesh.element_centroid(0), [1.0, 1.0, 0.0]);
  assert_eq!(mesh.centroids(), vec![[1.0, 1.0, 0.0]]);
}

#[test]
fn test_mesh_clear() {
  let mut mesh = Mesh::<2>::new();
  mesh.insert_node([1.0, 1.0, 0.0]);
  mesh.insert_node([2.0, 1.0, 0.0]);
  mesh.insert_element([0, 1]);
  mesh.clear();

  assert!(mesh.is_empty());
  assert_eq!(mesh.node_count(), 0);
  assert_eq!(mesh.bounds, MinMaxAABB::empty());
}

#[test]
fn test_node_indices_are_sequential() {
  let mut mesh = Mesh::<2>::new();
  for expected in 0..100u32 {
    assert_eq!(mesh.insert_node([expected as f64, 0.0, 0.0]), expected);
  }
  assert_eq!(node_index(u32::MAX as usize), u32::MAX);
}

#[test]
#[cfg(all(debug_assertions, target_pointer_width = "64"))]
#[should_panic(expected = "node index overflow")]
fn test_node_index_past_u32_panics() {
  node_index(u32::MAX as usize + 1);
}
