use super::graph::AdjacencyList;
use std::collections::BinaryHeap;

// Field order is the priority: saturation, then degree, then the larger index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
  saturation: usize,
  degree: usize,
  vertex: usize,
}

// Colors already taken by colored neighbors. Grows on demand.
#[derive(Debug, Clone, Default)]
struct Forbidden {
  bits: Vec<bool>,
}

impl Forbidden {
  fn contains(&self, color: usize) -> bool {
    self.bits.get(color).copied().unwrap_or(false)
  }

  /// Returns true if the color was not forbidden before.
  fn insert(&mut self, color: usize) -> bool {
    if self.bits.len() <= color {
      self.bits.resize(color + 1, false);
    }
    !std::mem::replace(&mut self.bits[color], true)
  }

  fn first_free(&self) -> usize {
    (0..).find(|&c| !self.contains(c)).unwrap_or(0)
  }
}

/// Greedy coloring by saturation degree (Brélaz).
///
/// Repeatedly colors the uncolored vertex with the most distinctly colored
/// neighbors, breaking ties by degree, using the smallest color its neighbors
/// do not use. The result is a proper coloring with at most `max_degree + 1`
/// colors, though not necessarily a minimal one.
///
/// The adjacency must be symmetric.
///
/// ```rust
/// # use rdelaunay::algorithms::coloring::dsatur;
/// // A 5-cycle needs three colors.
/// let cycle = vec![vec![1, 4], vec![0, 2], vec![1, 3], vec![2, 4], vec![3, 0]];
/// let colors = dsatur(&cycle);
/// assert_eq!(colors.iter().max(), Some(&2));
/// ```
pub fn dsatur(adjacency: &AdjacencyList) -> Vec<usize> {
  let n = adjacency.len();
  let mut color: Vec<Option<usize>> = vec![None; n];
  let mut saturation = vec![0; n];
  let mut forbidden = vec![Forbidden::default(); n];

  let mut queue: BinaryHeap<Candidate> = adjacency
    .iter()
    .enumerate()
    .map(|(vertex, neighbors)| Candidate {
      saturation: 0,
      degree: neighbors.len(),
      vertex,
    })
    .collect();

  while let Some(top) = queue.pop() {
    let u = top.vertex;
    // Stale entry: a fresher one was pushed when the saturation grew.
    if color[u].is_some() || top.saturation != saturation[u] {
      continue;
    }
    let c = forbidden[u].first_free();
    color[u] = Some(c);

    for &v in &adjacency[u] {
      if color[v].is_some() || !forbidden[v].insert(c) {
        continue;
      }
      saturation[v] += 1;
      queue.push(Candidate {
        saturation: saturation[v],
        degree: adjacency[v].len(),
        vertex: v,
      });
    }
  }

  let colors: Vec<usize> = color.into_iter().map(|c| c.unwrap_or(0)).collect();
  tracing::debug!(
    vertices = n,
    colors = colors.iter().max().map_or(0, |c| c + 1),
    "dsatur coloring"
  );
  colors
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::coloring::{count_colors, validate_coloring};
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn undirected(n: usize, edges: &[(usize, usize)]) -> AdjacencyList {
    let mut adjacency = vec![Vec::new(); n];
    for &(a, b) in edges {
      if a != b {
        adjacency[a].push(b);
        adjacency[b].push(a);
      }
    }
    for neighbors in adjacency.iter_mut() {
      neighbors.sort_unstable();
      neighbors.dedup();
    }
    adjacency
  }

  #[test]
  fn forbidden_set_grows() {
    let mut forbidden = Forbidden::default();
    assert_eq!(forbidden.first_free(), 0);
    assert!(forbidden.insert(3));
    assert!(!forbidden.insert(3));
    assert!(forbidden.insert(0));
    assert_eq!(forbidden.first_free(), 1);
    assert!(!forbidden.contains(7));
  }

  #[test]
  fn empty_graph() {
    assert!(dsatur(&Vec::new()).is_empty());
  }

  #[test]
  fn independent_vertices_share_color_zero() {
    assert_eq!(dsatur(&vec![vec![]; 4]), vec![0; 4]);
  }

  #[test]
  fn complete_graph_uses_n_colors() {
    let edges: Vec<(usize, usize)> = (0..5)
      .flat_map(|a| (0..5).map(move |b| (a, b)))
      .collect();
    let colors = dsatur(&undirected(5, &edges));
    assert_eq!(count_colors(&colors), 5);
  }

  #[test]
  fn highest_degree_is_colored_first() {
    // A star: the hub has degree 3 and gets color 0.
    let colors = dsatur(&undirected(4, &[(1, 0), (1, 2), (1, 3)]));
    assert_eq!(colors, vec![1, 0, 1, 1]);
  }

  #[test]
  fn even_cycle_is_two_colored() {
    let colors = dsatur(&undirected(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]));
    assert_eq!(count_colors(&colors), 2);
  }

  #[test]
  fn wheel_with_odd_rim() {
    // Hub 0 plus a 5-cycle rim needs four colors.
    let edges: Vec<(usize, usize)> = (1..6)
      .flat_map(|v| [(0, v), (v, v % 5 + 1)])
      .collect();
    let wheel = undirected(6, &edges);
    let colors = dsatur(&wheel);
    assert_eq!(colors[0], 0);
    assert_eq!(count_colors(&colors), 4);
    assert_eq!(validate_coloring(&wheel, &colors), Ok(()));
  }

  #[proptest]
  fn random_graphs_are_properly_colored(
    #[strategy(any_graph(1..30))] graph: (usize, Vec<(usize, usize)>),
  ) {
    let (n, edges) = graph;
    let adjacency = undirected(n, &edges);
    let colors = dsatur(&adjacency);
    prop_assert_eq!(colors.len(), n);
    prop_assert_eq!(validate_coloring(&adjacency, &colors), Ok(()));
    let max_degree = adjacency.iter().map(Vec::len).max().unwrap_or(0);
    prop_assert!(count_colors(&colors) <= max_degree + 1);
    // First fit never skips a color.
    prop_assert_eq!(count_colors(&colors), colors.iter().max().map_or(0, |c| c + 1));
  }
}
