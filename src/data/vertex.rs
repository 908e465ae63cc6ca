/// Stable index of a point inside a mesh.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertIdx(pub usize);

impl std::fmt::Debug for VertIdx {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "v{}", self.0)
  }
}

impl VertIdx {
  pub fn usize(self) -> usize {
    self.0
  }
}

/// Undirected edge, normalized so that `min <= max`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
  pub min: VertIdx,
  pub max: VertIdx,
  _private: (),
}

impl Edge {
  pub fn new(a: VertIdx, b: VertIdx) -> Edge {
    Edge {
      min: std::cmp::min(a, b),
      max: std::cmp::max(a, b),
      _private: (),
    }
  }

  pub fn endpoints(&self) -> [VertIdx; 2] {
    [self.min, self.max]
  }
}

impl std::fmt::Debug for Edge {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Edge")
      .field("min", &self.min)
      .field("max", &self.max)
      .finish()
  }
}

impl From<(usize, usize)> for Edge {
  fn from((a, b): (usize, usize)) -> Edge {
    Edge::new(VertIdx(a), VertIdx(b))
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge {
  pub src: VertIdx,
  pub dst: VertIdx,
}

impl DirectedEdge {
  pub fn new(src: VertIdx, dst: VertIdx) -> DirectedEdge {
    DirectedEdge { src, dst }
  }

  #[must_use]
  pub fn reverse(self) -> DirectedEdge {
    DirectedEdge {
      src: self.dst,
      dst: self.src,
    }
  }
}

impl From<DirectedEdge> for Edge {
  fn from(directed: DirectedEdge) -> Edge {
    Edge::new(directed.src, directed.dst)
  }
}
