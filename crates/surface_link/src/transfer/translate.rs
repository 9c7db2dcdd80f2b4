//! Point ↔ element translation of scalar fields.

use rayon::prelude::*;
use web_time::Instant;

use super::{radius_mean, DeviceBuffer, IndexMap, ScalarData, MATERIAL_LABEL};
use crate::spatial::{KdTree, Neighborhood};
use crate::types::{centroid, Mesh};

/// Copy material ids and point fields onto the elements of `mesh`.
///
/// Every element takes the values of the point nearest to its centroid. The
/// uploaded buffer holds `(fields + 1) * element_count` values: material ids
/// in block 0, then field `j` of `point_data` in block `j + 1`. The returned
/// map describes that layout.
///
/// Panics if `material_ids` or any point field does not have one value per
/// indexed point, or if a point field is labelled [`MATERIAL_LABEL`].
#[tracing::instrument(skip_all, name = "transfer::points_to_elements")]
pub fn points_to_elements<const D: usize>(
  material_ids: &[f64],
  point_data: Option<&ScalarData>,
  point_index: &KdTree,
  mesh: &Mesh<D>,
  buffer: &mut impl DeviceBuffer,
) -> IndexMap {
  let start = Instant::now();
  let point_count = point_index.len();
  assert_eq!(
    material_ids.len(),
    point_count,
    "material ids must match the indexed points"
  );
  if let Some(data) = point_data {
    if let Err(error) = data.validate_len(point_count) {
      panic!("point data does not match the indexed points: {error}");
    }
  }

  // Material ids always lead the buffer
  let labels = std::iter::once(MATERIAL_LABEL).chain(
    point_data
      .into_iter()
      .flat_map(|data| data.iter().map(|(label, _)| label)),
  );
  let index_map = match IndexMap::from_labels(labels) {
    Ok(index_map) => index_map,
    Err(error) => panic!("cannot lay out the element buffer: {error}"),
  };

  let field_count = point_data.map_or(0, ScalarData::len);
  let element_count = mesh.element_count();

  let nearest: Vec<Option<usize>> = mesh
    .elements
    .par_iter()
    .map(|element| {
      point_index
        .nearest(&centroid(&mesh.nodes, element))
        .map(|neighbor| neighbor.index)
    })
    .collect();

  let mut element_data = vec![0.0; (field_count + 1) * element_count];
  element_data
    .par_chunks_mut(element_count.max(1))
    .enumerate()
    .for_each(|(block, values)| {
      let source = match (block, point_data) {
        (0, _) => material_ids,
        (_, Some(data)) => data.values(block - 1),
        (_, None) => return,
      };
      for (value, closest) in values.iter_mut().zip(&nearest) {
        if let Some(point) = *closest {
          *value = source[point];
        }
      }
    });

  buffer.upload(&element_data);

  tracing::debug!(
    elements = element_count,
    fields = field_count,
    timing_us = start.elapsed().as_micros() as u64,
    "point data translated to elements"
  );

  index_map
}

/// Average element fields onto points.
///
/// Block `offset` of `buffer` is read for every `(label, offset)` of
/// `index_map`; the result holds one field per entry, in map order. Each point
/// takes the mean over all elements within `radius` of it. Points without
/// any element in range keep 0.
///
/// Panics if the buffer length is not `index_map.len() * element_count` or if
/// the map offsets are not `0, 1, 2, ...` in order.
#[tracing::instrument(skip_all, name = "transfer::elements_to_points")]
pub fn elements_to_points(
  buffer: &impl DeviceBuffer,
  index_map: &IndexMap,
  element_index: &KdTree,
  points: &[[f64; 3]],
  radius: f64,
) -> ScalarData {
  let start = Instant::now();
  let field_count = index_map.len();
  let element_count = element_index.len();
  assert_eq!(
    buffer.len(),
    field_count * element_count,
    "element buffer does not match the index map"
  );

  let mut element_data = vec![0.0; field_count * element_count];
  buffer.download(&mut element_data);

  let mut point_data = ScalarData::new();
  for (label, offset) in index_map.iter() {
    let slot = point_data.insert_next(label, vec![0.0; points.len()]);
    assert_eq!(slot, offset, "index map is out of order at {label}");
  }

  let neighborhoods: Vec<Neighborhood> = points
    .par_iter()
    .map(|point| element_index.within_radius(point, radius))
    .collect();

  for field in 0..field_count {
    let block = &element_data[field * element_count..(field + 1) * element_count];
    point_data
      .values_mut(field)
      .par_iter_mut()
      .zip(&neighborhoods)
      .for_each(|(value, close)| {
        *value = radius_mean(close.iter().map(|neighbor| block[neighbor.index]));
      });
  }

  tracing::debug!(
    points = points.len(),
    fields = field_count,
    timing_us = start.elapsed().as_micros() as u64,
    "element data translated to points"
  );

  point_data
}

/// Unpack element fields from a buffer into `target`.
///
/// Every `(label, offset)` of `index_map` is copied from block `offset`. Fields
/// missing from `target` are appended; existing ones are resized to
/// `element_count` and overwritten.
pub fn download_element_fields(
  buffer: &impl DeviceBuffer,
  index_map: &IndexMap,
  element_count: usize,
  target: &mut ScalarData,
) {
  let mut element_data = vec![0.0; index_map.block_count() * element_count];
  buffer.download(&mut element_data);

  for (label, offset) in index_map.iter() {
    let block = &element_data[offset * element_count..(offset + 1) * element_count];
    match target.get_mut(label) {
      Some(values) => {
        values.clear();
        values.extend_from_slice(block);
      }
      None => {
        target.insert_next(label, block.to_vec());
      }
    }
  }
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod translate_test;
