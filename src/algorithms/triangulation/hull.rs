use crate::data::{DirectedEdge, VertIdx};
use crate::Error;
use std::collections::HashMap;

/// Boundary of the convex hull as a set of counter-clockwise directed edges.
///
/// Edges live in a dense array; `position` maps each edge to its slot so that
/// removal is a swap-and-pop in O(1). The array order is not the cycle
/// order, use [`Hull::cycle`] for that.
#[derive(Debug, Clone, Default)]
pub struct Hull {
  edges: Vec<DirectedEdge>,
  position: HashMap<DirectedEdge, usize>,
}

impl Hull {
  pub fn new() -> Hull {
    Hull::default()
  }

  pub fn len(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edges.is_empty()
  }

  pub fn contains(&self, edge: &DirectedEdge) -> bool {
    self.position.contains_key(edge)
  }

  /// Edges in storage order.
  pub fn edges(&self) -> &[DirectedEdge] {
    &self.edges
  }

  pub fn iter(&self) -> impl Iterator<Item = &DirectedEdge> + '_ {
    self.edges.iter()
  }

  pub(crate) fn clear(&mut self) {
    self.edges.clear();
    self.position.clear();
  }

  /// Returns false if the edge is already present.
  pub(crate) fn insert(&mut self, edge: DirectedEdge) -> bool {
    if self.position.contains_key(&edge) {
      return false;
    }
    self.position.insert(edge, self.edges.len());
    self.edges.push(edge);
    true
  }

  /// Returns false if the edge is not present.
  pub(crate) fn remove(&mut self, edge: &DirectedEdge) -> bool {
    let idx = match self.position.remove(edge) {
      Some(idx) => idx,
      None => return false,
    };
    self.edges.swap_remove(idx);
    // The former last edge now lives at `idx`.
    if let Some(moved) = self.edges.get(idx) {
      self.position.insert(*moved, idx);
    }
    true
  }

  /// Replace `edge` by the two edges `edge.src -> apex` and `apex -> edge.dst`.
  ///
  /// A candidate whose reverse is already on the hull cancels that reverse
  /// instead: both were produced by neighbouring edges seen from the same
  /// apex, so the segment is now interior.
  pub(crate) fn split(&mut self, edge: DirectedEdge, apex: VertIdx) {
    self.remove(&edge);
    for candidate in [
      DirectedEdge::new(edge.src, apex),
      DirectedEdge::new(apex, edge.dst),
    ] {
      if !self.remove(&candidate.reverse()) {
        self.insert(candidate);
      }
    }
  }

  /// Edges in cyclic order, starting with the edge whose source has the
  /// smallest index.
  ///
  /// # Errors
  /// [`Error::OpenHull`] if the edges do not form exactly one simple cycle.
  pub fn cycle(&self) -> Result<Vec<DirectedEdge>, Error> {
    let mut next: HashMap<VertIdx, DirectedEdge> = HashMap::with_capacity(self.edges.len());
    for edge in &self.edges {
      if next.insert(edge.src, *edge).is_some() {
        return Err(Error::OpenHull);
      }
    }
    let start = match self.edges.iter().min_by_key(|e| e.src) {
      Some(start) => *start,
      None => return Ok(Vec::new()),
    };
    let mut cycle = Vec::with_capacity(self.edges.len());
    let mut cur = start;
    loop {
      cycle.push(cur);
      cur = *next.get(&cur.dst).ok_or(Error::OpenHull)?;
      if cur == start {
        break;
      }
      if cycle.len() == self.edges.len() {
        return Err(Error::OpenHull);
      }
    }
    if cycle.len() != self.edges.len() {
      return Err(Error::OpenHull);
    }
    Ok(cycle)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.position.len() != self.edges.len() {
      return Err(Error::DuplicateHullEdge);
    }
    for (idx, edge) in self.edges.iter().enumerate() {
      if self.position.get(edge) != Some(&idx) {
        return Err(Error::DuplicateHullEdge);
      }
    }
    self.cycle().map(|_| ())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn e(src: usize, dst: usize) -> DirectedEdge {
    DirectedEdge::new(VertIdx(src), VertIdx(dst))
  }

  fn triangle_hull() -> Hull {
    let mut hull = Hull::new();
    assert!(hull.insert(e(0, 1)));
    assert!(hull.insert(e(1, 2)));
    assert!(hull.insert(e(2, 0)));
    hull
  }

  #[test]
  fn insert_is_unique() {
    let mut hull = triangle_hull();
    assert!(!hull.insert(e(1, 2)));
    assert_eq!(hull.len(), 3);
    assert_ok!(hull.validate());
  }

  #[test]
  fn remove_keeps_positions() {
    let mut hull = triangle_hull();
    assert!(hull.remove(&e(0, 1)));
    assert!(!hull.remove(&e(0, 1)));
    assert_eq!(hull.len(), 2);
    assert!(hull.contains(&e(2, 0)));
    assert!(hull.remove(&e(2, 0)));
    assert_eq!(hull.edges(), &[e(1, 2)]);
  }

  #[test]
  fn cycle_order() {
    let hull = triangle_hull();
    assert_eq!(hull.cycle(), Ok(vec![e(0, 1), e(1, 2), e(2, 0)]));
  }

  #[test]
  fn split_single_edge() {
    let mut hull = triangle_hull();
    hull.split(e(1, 2), VertIdx(3));
    assert_eq!(
      hull.cycle(),
      Ok(vec![e(0, 1), e(1, 3), e(3, 2), e(2, 0)])
    );
  }

  #[test]
  fn split_cancels_shared_diagonal() {
    // Both (1,2) and (2,0) are visible from 3: the segment 2-3 becomes interior.
    let mut hull = triangle_hull();
    hull.split(e(1, 2), VertIdx(3));
    hull.split(e(2, 0), VertIdx(3));
    assert!(!hull.contains(&e(2, 3)));
    assert!(!hull.contains(&e(3, 2)));
    assert_eq!(hull.cycle(), Ok(vec![e(0, 1), e(1, 3), e(3, 0)]));
    assert_ok!(hull.validate());
  }

  #[test]
  fn open_hull_is_rejected() {
    let mut hull = triangle_hull();
    hull.remove(&e(2, 0));
    assert_err_eq!(hull.cycle(), Error::OpenHull);

    let mut two_cycles = triangle_hull();
    two_cycles.insert(e(5, 6));
    two_cycles.insert(e(6, 5));
    assert_err_eq!(two_cycles.validate(), Error::OpenHull);
  }

  #[test]
  fn empty_hull_is_valid() {
    assert_eq!(Hull::new().cycle(), Ok(vec![]));
    assert_ok!(Hull::new().validate());
  }
}
