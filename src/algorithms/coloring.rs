//! Greedy saturation-degree colorings of the mesh and its derived graphs.
use crate::data::{Edge, Point, Triangle};
use crate::Error;

pub mod dsatur;
pub mod graph;
mod palette;

pub use dsatur::dsatur;
pub use graph::{face_graph, line_graph, point_graph, AdjacencyList};
pub use palette::{palette, Palette, Rgb};

/// Color the mesh points so that no mesh edge joins two points of the same
/// color.
///
/// The snapshots must come from the same rebuild; indices are not checked.
pub fn color_points(points: &[Point], edges: &[Edge]) -> Vec<usize> {
  dsatur(&point_graph(points.len(), edges))
}

/// Color the mesh edges so that edges sharing an endpoint differ.
pub fn color_edges(_points: &[Point], edges: &[Edge]) -> Vec<usize> {
  dsatur(&line_graph(edges))
}

/// Color the triangles so that triangles sharing any vertex differ.
pub fn color_faces(points: &[Point], triangles: &[Triangle]) -> Vec<usize> {
  dsatur(&face_graph(points.len(), triangles))
}

/// Check that `colors` assigns one color per vertex and that no two adjacent
/// vertices share a color.
///
/// # Errors
/// [`Error::IndexOutOfRange`] on a length mismatch or a neighbor outside the
/// graph, [`Error::ColorConflict`] on a monochromatic edge.
pub fn validate_coloring(adjacency: &AdjacencyList, colors: &[usize]) -> Result<(), Error> {
  if colors.len() != adjacency.len() {
    return Err(Error::IndexOutOfRange);
  }
  for (u, neighbors) in adjacency.iter().enumerate() {
    for &v in neighbors {
      match colors.get(v) {
        None => return Err(Error::IndexOutOfRange),
        Some(&c) if c == colors[u] => return Err(Error::ColorConflict),
        Some(_) => {}
      }
    }
  }
  Ok(())
}

/// Number of distinct colors.
pub fn count_colors(colors: &[usize]) -> usize {
  let mut distinct = colors.to_vec();
  distinct.sort_unstable();
  distinct.dedup();
  distinct.len()
}
