// Lawson's flip algorithm over the whole triangle list.
use crate::data::{Edge, Point, TriIdx, Triangle};
use crate::orientation::in_circumcircle_with;
use crate::{Kernel, Orientation};
use std::collections::HashMap;

/// Undirected edge -> the (at most two) triangles containing it.
#[derive(Debug, Default)]
pub(crate) struct EdgeAdjacency {
  map: HashMap<Edge, [Option<TriIdx>; 2]>,
}

impl EdgeAdjacency {
  pub(crate) fn build(triangles: &[Triangle]) -> EdgeAdjacency {
    let mut adjacency = EdgeAdjacency {
      map: HashMap::with_capacity(triangles.len() * 2),
    };
    for (idx, tri) in triangles.iter().enumerate() {
      adjacency.tag_triangle(tri, TriIdx(idx));
    }
    adjacency
  }

  fn tag(&mut self, edge: Edge, tri: TriIdx) {
    let slots = self.map.entry(edge).or_insert([None, None]);
    if slots[0].is_none() {
      slots[0] = Some(tri);
    } else {
      slots[1] = Some(tri);
    }
  }

  fn detag(&mut self, edge: Edge, tri: TriIdx) {
    if let Some(slots) = self.map.get_mut(&edge) {
      for slot in slots.iter_mut() {
        if *slot == Some(tri) {
          *slot = None;
        }
      }
      if *slots == [None, None] {
        self.map.remove(&edge);
      }
    }
  }

  fn tag_triangle(&mut self, tri: &Triangle, idx: TriIdx) {
    for edge in tri.edges() {
      self.tag(edge, idx);
    }
  }

  fn detag_triangle(&mut self, tri: &Triangle, idx: TriIdx) {
    for edge in tri.edges() {
      self.detag(edge, idx);
    }
  }

  /// Both incident triangles, if the edge is interior.
  pub(crate) fn interior(&self, edge: &Edge) -> Option<(TriIdx, TriIdx)> {
    match self.map.get(edge) {
      Some([Some(t0), Some(t1)]) => Some((*t0, *t1)),
      _ => None,
    }
  }

  /// All interior edges, sorted.
  pub(crate) fn interior_edges(&self) -> Vec<Edge> {
    let mut edges: Vec<Edge> = self
      .map
      .iter()
      .filter(|(_, slots)| slots[0].is_some() && slots[1].is_some())
      .map(|(edge, _)| *edge)
      .collect();
    edges.sort_unstable();
    edges
  }
}

/// Flip illegal edges until every interior edge passes the empty
/// circumcircle test. Returns the number of flips.
///
/// Edges bordering a single triangle, or whose apex cannot be found, are
/// skipped.
pub(crate) fn legalize<K: Kernel>(points: &[Point], triangles: &mut [Triangle]) -> usize {
  let mut adjacency = EdgeAdjacency::build(triangles);
  let mut stack = adjacency.interior_edges();
  let mut flips = 0;

  while let Some(edge) = stack.pop() {
    let (tl, tr) = match adjacency.interior(&edge) {
      Some(pair) => pair,
      None => continue,
    };
    let (left, right) = match (triangles.get(tl.0), triangles.get(tr.0)) {
      (Some(left), Some(right)) => (*left, *right),
      _ => continue,
    };
    let (mut u, mut v) = (edge.min, edge.max);
    let (wl, wr) = match (left.opposite(u, v), right.opposite(u, v)) {
      (Some(wl), Some(wr)) if wl.0 < points.len() && wr.0 < points.len() => (wl, wr),
      _ => continue,
    };

    if !Orientation::with_kernel::<K>(&points[u.0], &points[v.0], &points[wl.0]).is_ccw() {
      std::mem::swap(&mut u, &mut v);
    }
    if !in_circumcircle_with::<K>(&points[u.0], &points[v.0], &points[wl.0], &points[wr.0]) {
      continue;
    }

    //      wl                wl
    //    /    \            /  |  \
    //   u ---- v    =>    u   |   v
    //    \    /            \  |  /
    //      wr                wr
    adjacency.detag_triangle(&left, tl);
    adjacency.detag_triangle(&right, tr);
    triangles[tl.0] = Triangle::new_ccw::<K>(points, wl, wr, u);
    triangles[tr.0] = Triangle::new_ccw::<K>(points, wl, wr, v);
    adjacency.tag_triangle(&triangles[tl.0], tl);
    adjacency.tag_triangle(&triangles[tr.0], tr);
    flips += 1;

    for a in [u, v] {
      for b in [wl, wr] {
        let outer = Edge::new(a, b);
        if adjacency.interior(&outer).is_some() {
          stack.push(outer);
        }
      }
    }
  }
  flips
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::VertIdx;
  use crate::{Inexact, Robust};

  fn tri(a: usize, b: usize, c: usize) -> Triangle {
    Triangle::new_unchecked([VertIdx(a), VertIdx(b), VertIdx(c)])
  }

  #[test]
  fn adjacency_counts_interior_edges() {
    let triangles = vec![tri(0, 1, 2), tri(0, 2, 3)];
    let adjacency = EdgeAdjacency::build(&triangles);
    assert_eq!(adjacency.interior_edges(), vec![Edge::from((0, 2))]);
    assert_eq!(
      adjacency.interior(&Edge::from((2, 0))),
      Some((TriIdx(0), TriIdx(1)))
    );
    assert_eq!(adjacency.interior(&Edge::from((0, 1))), None);
  }

  #[test]
  fn detag_removes_empty_entries() {
    let triangles = vec![tri(0, 1, 2), tri(0, 2, 3)];
    let mut adjacency = EdgeAdjacency::build(&triangles);
    adjacency.detag_triangle(&triangles[1], TriIdx(1));
    assert!(adjacency.interior_edges().is_empty());
    assert!(!adjacency.map.contains_key(&Edge::from((2, 3))));
    assert!(adjacency.map.contains_key(&Edge::from((0, 2))));
  }

  #[test]
  fn flips_thin_diagonal() {
    // A kite that is much wider than tall: the long diagonal 0-2 is illegal.
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, -0.2]),
      Point::new([4.0, 0.0]),
      Point::new([2.0, 0.2]),
    ];
    let mut triangles = vec![tri(0, 1, 2), tri(0, 2, 3)];
    assert_eq!(legalize::<Inexact>(&points, &mut triangles), 1);
    let edges: Vec<Edge> = triangles.iter().flat_map(|t| t.edges()).collect();
    assert!(edges.contains(&Edge::from((1, 3))));
    assert!(!edges.contains(&Edge::from((0, 2))));
    for t in &triangles {
      assert!(t.view(&points).signed_area() > 0.0);
    }
  }

  #[test]
  fn legal_configuration_is_untouched() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([0.0, 1.0]),
    ];
    let mut triangles = vec![tri(0, 1, 2), tri(0, 2, 3)];
    assert_eq!(legalize::<Robust>(&points, &mut triangles), 0);
    assert_eq!(triangles, vec![tri(0, 1, 2), tri(0, 2, 3)]);
  }

  #[test]
  fn missing_apex_is_skipped() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([0.0, 1.0]),
    ];
    // The first triangle has no vertex opposite to 0-1.
    let mut triangles = vec![tri(0, 0, 1), tri(0, 1, 2)];
    assert_eq!(legalize::<Inexact>(&points, &mut triangles), 0);
    assert_eq!(triangles, vec![tri(0, 0, 1), tri(0, 1, 2)]);
  }
}
