use super::*;

#[test]
fn test_axes_are_separate() {
  let mut cache = EdgeNodeCache::<3>::new();
  cache.insert(0, [1, 2, 3], 7);
  cache.insert(2, [1, 2, 3], 9);

  assert_eq!(cache.get(0, &[1, 2, 3]), Some(7));
  assert_eq!(cache.get(1, &[1, 2, 3]), None);
  assert_eq!(cache.get(2, &[1, 2, 3]), Some(9));
  assert_eq!(cache.len(), 2);
}

#[test]
fn test_evict_before_sweep() {
  let mut cache = EdgeNodeCache::<2>::new();
  cache.insert(0, [0, 5], 0);
  cache.insert(0, [1, 0], 1);
  cache.insert(1, [1, 1], 2);
  cache.insert(1, [2, -4], 3);

  cache.evict_before(&[1, 1]);

  assert_eq!(cache.get(0, &[0, 5]), None);
  assert_eq!(cache.get(0, &[1, 0]), None);
  // Keys equal to the sweep position stay alive
  assert_eq!(cache.get(1, &[1, 1]), Some(2));
  assert_eq!(cache.get(1, &[2, -4]), Some(3));
  assert_eq!(cache.len(), 2);

  cache.evict_before(&[3, 0]);
  assert!(cache.is_empty());
}
