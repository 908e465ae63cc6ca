// Graph views of a triangulation.
//
// Every builder returns a simple graph: neighbor lists are sorted, contain no
// repeats and never the vertex itself.
use crate::data::{Edge, Triangle};

/// `adjacency[u]` lists the neighbors of `u`.
pub type AdjacencyList = Vec<Vec<usize>>;

fn normalize(mut adjacency: AdjacencyList) -> AdjacencyList {
  for (u, neighbors) in adjacency.iter_mut().enumerate() {
    neighbors.retain(|&v| v != u);
    neighbors.sort_unstable();
    neighbors.dedup();
  }
  adjacency
}

// Connect every pair of members of each group.
fn cliques(n: usize, groups: &[Vec<usize>]) -> AdjacencyList {
  let mut adjacency = vec![Vec::new(); n];
  for group in groups {
    for &a in group {
      adjacency[a].extend(group.iter().copied());
    }
  }
  normalize(adjacency)
}

/// Points joined by a mesh edge are adjacent.
///
/// # Panics
/// If an edge refers to a point `>= n_points`.
pub fn point_graph(n_points: usize, edges: &[Edge]) -> AdjacencyList {
  let mut adjacency = vec![Vec::new(); n_points];
  for edge in edges {
    let [a, b] = edge.endpoints();
    adjacency[a.usize()].push(b.usize());
    adjacency[b.usize()].push(a.usize());
  }
  normalize(adjacency)
}

/// Edges sharing an endpoint are adjacent.
pub fn line_graph(edges: &[Edge]) -> AdjacencyList {
  let n_points = edges.iter().map(|e| e.max.usize() + 1).max().unwrap_or(0);
  let mut incident = vec![Vec::new(); n_points];
  for (idx, edge) in edges.iter().enumerate() {
    for v in edge.endpoints() {
      incident[v.usize()].push(idx);
    }
  }
  cliques(edges.len(), &incident)
}

/// Triangles sharing at least one point are adjacent.
///
/// This is denser than the dual graph: triangles touching at a single corner
/// are neighbors too.
///
/// # Panics
/// If a triangle refers to a point `>= n_points`.
pub fn face_graph(n_points: usize, triangles: &[Triangle]) -> AdjacencyList {
  let mut incident = vec![Vec::new(); n_points];
  for (idx, tri) in triangles.iter().enumerate() {
    for v in tri.vertices {
      incident[v.usize()].push(idx);
    }
  }
  cliques(triangles.len(), &incident)
}
