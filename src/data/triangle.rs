use super::{Edge, Point, VertIdx};
use crate::{Error, Kernel, Orientation};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TriIdx(pub usize);

impl std::fmt::Debug for TriIdx {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "t{}", self.0)
  }
}

/// Triangle representation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
  /// list of vertex indices, in counterclockwise order
  pub vertices: [VertIdx; 3],
}

impl std::fmt::Debug for Triangle {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    let [v0, v1, v2] = self.vertices;
    write!(fmt, "Tri{{v=({}, {}, {})}}", v0.0, v1.0, v2.0)
  }
}

impl Triangle {
  /// Store the vertices exactly in the given order.
  pub fn new_unchecked(vertices: [VertIdx; 3]) -> Triangle {
    Triangle { vertices }
  }

  /// Build a triangle over `points`, swapping the first two vertices unless
  /// `a -> b -> c` is strictly counter-clockwise. Colinear input stays
  /// degenerate.
  pub fn new_ccw<K: Kernel>(points: &[Point], a: VertIdx, b: VertIdx, c: VertIdx) -> Triangle {
    let orient = Orientation::with_kernel::<K>(&points[a.0], &points[b.0], &points[c.0]);
    if orient.is_ccw() {
      Triangle::new_unchecked([a, b, c])
    } else {
      Triangle::new_unchecked([b, a, c])
    }
  }

  /// The vertex that is neither `u` nor `v`.
  pub fn opposite(&self, u: VertIdx, v: VertIdx) -> Option<VertIdx> {
    self.vertices.iter().copied().find(|&w| w != u && w != v)
  }

  /// Edges `(v0, v1)`, `(v1, v2)`, `(v2, v0)`, undirected.
  pub fn edges(&self) -> [Edge; 3] {
    let [v0, v1, v2] = self.vertices;
    [Edge::new(v0, v1), Edge::new(v1, v2), Edge::new(v2, v0)]
  }

  pub fn view<'a>(&self, points: &'a [Point]) -> TriangleView<'a> {
    let [v0, v1, v2] = self.vertices;
    TriangleView([&points[v0.0], &points[v1.0], &points[v2.0]])
  }
}

pub struct TriangleView<'a>([&'a Point; 3]);

impl<'a> TriangleView<'a> {
  /// Degenerate triangles are accepted, clockwise ones are not.
  pub fn validate<K: Kernel>(&self) -> Result<(), Error> {
    if self.orientation::<K>() == Orientation::ClockWise {
      Err(Error::ClockWiseViolation)
    } else {
      Ok(())
    }
  }

  pub fn orientation<K: Kernel>(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::with_kernel::<K>(a, b, c)
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  pub fn signed_area_2x(&self) -> f64 {
    let [a, b, c] = self.0;
    (*b - *a).cross(&(*c - *a))
  }

  /// True iff `pt` is strictly inside the circumcircle. Assumes the triangle
  /// is counter-clockwise.
  pub fn circumcircle_contains<K: Kernel>(&self, pt: &Point) -> bool {
    let [a, b, c] = self.0;
    crate::orientation::in_circumcircle_with::<K>(a, b, c, pt)
  }
}
