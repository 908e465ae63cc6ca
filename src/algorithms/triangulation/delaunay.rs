// Incremental Delaunay triangulation by sorted insertion.
//
// Points are processed in lexicographic order, so every new point lies on or
// outside the hull of the points before it. Inserting a point only has to fan
// it across the hull edges it can see; Lawson flips then restore the Delaunay
// property.
use super::hull::Hull;
use super::legalize::{legalize, EdgeAdjacency};
use crate::data::{DirectedEdge, Edge, Point, TriIdx, Triangle, VertIdx};
use crate::{DefaultKernel, Error, Kernel, Orientation};
use std::marker::PhantomData;

/// A Delaunay triangulation over a growing point set.
///
/// Insertions are cheap and only mark the triangulation stale; [`rebuild`]
/// recomputes hull and triangles from scratch.
///
/// [`rebuild`]: DelaunayMesh::rebuild
///
/// # Examples
///
/// ```rust
/// # use rdelaunay::algorithms::triangulation::DelaunayMesh;
/// let mut mesh: DelaunayMesh = DelaunayMesh::new();
/// mesh.insert_point(0.0, 0.0);
/// mesh.insert_point(1.0, 0.0);
/// mesh.insert_point(0.0, 1.0);
/// assert!(mesh.triangles().is_empty());
/// mesh.rebuild();
/// assert_eq!(mesh.triangles().len(), 1);
/// assert_eq!(mesh.edges().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DelaunayMesh<K = DefaultKernel> {
  points: Vec<Point>,
  triangles: Vec<Triangle>,
  hull: Hull,
  stale: bool,
  kernel: PhantomData<fn() -> K>,
}

impl<K: Kernel> Default for DelaunayMesh<K> {
  fn default() -> Self {
    DelaunayMesh::new()
  }
}

impl<K: Kernel> DelaunayMesh<K> {
  pub fn new() -> Self {
    DelaunayMesh {
      points: Vec::new(),
      triangles: Vec::new(),
      hull: Hull::new(),
      stale: false,
      kernel: PhantomData,
    }
  }

  /// Append a point. No geometric work is done until [`DelaunayMesh::rebuild`].
  pub fn insert_point(&mut self, x: f64, y: f64) -> VertIdx {
    self.insert(Point::new([x, y]))
  }

  pub fn insert(&mut self, p: Point) -> VertIdx {
    let idx = VertIdx(self.points.len());
    self.points.push(p);
    self.stale = true;
    idx
  }

  /// True if points were inserted since the last rebuild.
  pub fn is_stale(&self) -> bool {
    self.stale
  }

  /// Drop every point, triangle and hull edge. Indices handed out before
  /// are invalidated.
  pub fn clear(&mut self) {
    self.points.clear();
    self.triangles.clear();
    self.hull.clear();
    self.stale = true;
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// Triangles of the last rebuild, all counter-clockwise.
  pub fn triangles(&self) -> &[Triangle] {
    &self.triangles
  }

  pub fn tri(&self, idx: TriIdx) -> &Triangle {
    &self.triangles[idx.0]
  }

  pub fn hull(&self) -> &Hull {
    &self.hull
  }

  /// Hull edges in counter-clockwise cyclic order.
  pub fn hull_cycle(&self) -> Result<Vec<DirectedEdge>, Error> {
    self.hull.cycle()
  }

  /// Every triangle edge exactly once, sorted.
  pub fn edges(&self) -> Vec<Edge> {
    let mut edges: Vec<Edge> = self.triangles.iter().flat_map(|t| t.edges()).collect();
    edges.sort_unstable();
    edges.dedup();
    edges
  }

  /// Recompute the triangulation if points were inserted since the last
  /// call. Fewer than three points give an empty triangulation.
  pub fn rebuild(&mut self) {
    if !self.stale {
      return;
    }
    self.stale = false;
    self.triangles.clear();
    self.hull.clear();
    if self.points.len() < 3 {
      return;
    }

    let mut order: Vec<VertIdx> = (0..self.points.len()).map(VertIdx).collect();
    order.sort_by_key(|v| self.points[v.0].lex_key());

    self.init_hull(order[0], order[1], order[2]);
    for &v in &order[3..] {
      self.expand_hull(v);
      let flips = legalize::<K>(&self.points, &mut self.triangles);
      tracing::trace!(vertex = ?v, flips, "inserted point");
    }

    tracing::debug!(
      points = self.points.len(),
      triangles = self.triangles.len(),
      hull = self.hull.len(),
      "rebuilt triangulation"
    );
  }

  fn add_triangle(&mut self, u: VertIdx, v: VertIdx, w: VertIdx) -> Triangle {
    let tri = Triangle::new_ccw::<K>(&self.points, u, v, w);
    self.triangles.push(tri);
    tri
  }

  // A colinear seed is accepted as a degenerate triangle.
  fn init_hull(&mut self, a: VertIdx, b: VertIdx, c: VertIdx) {
    let [p0, p1, p2] = self.add_triangle(a, b, c).vertices;
    self.hull.insert(DirectedEdge::new(p0, p1));
    self.hull.insert(DirectedEdge::new(p1, p2));
    self.hull.insert(DirectedEdge::new(p2, p0));
  }

  // Fan `p` across every hull edge that does not have `p` strictly on its
  // inner side. A point in line with an edge sees it and yields a degenerate
  // triangle.
  fn expand_hull(&mut self, p: VertIdx) {
    if self.hull.is_empty() {
      return;
    }
    // The hull changes while we scan it.
    let snapshot: Vec<DirectedEdge> = self.hull.edges().to_vec();
    for edge in snapshot {
      if !self.hull.contains(&edge) {
        continue;
      }
      let orient = Orientation::with_kernel::<K>(
        &self.points[edge.src.0],
        &self.points[edge.dst.0],
        &self.points[p.0],
      );
      if !orient.is_ccw() {
        self.hull.split(edge, p);
        self.add_triangle(edge.src, edge.dst, p);
      }
    }
  }

  /// Check that every triangle is counter-clockwise (or degenerate), that the
  /// hull is one simple cycle with every point on its inner side, and that
  /// every interior edge is locally Delaunay.
  ///
  /// # Errors
  /// The first violated property.
  pub fn validate(&self) -> Result<(), Error> {
    for tri in &self.triangles {
      if tri.vertices.iter().any(|v| v.0 >= self.points.len()) {
        return Err(Error::IndexOutOfRange);
      }
      tri.view(&self.points).validate::<K>()?;
    }

    self.hull.validate()?;
    for edge in self.hull.iter() {
      let (a, b) = (&self.points[edge.src.0], &self.points[edge.dst.0]);
      if self
        .points
        .iter()
        .any(|p| Orientation::with_kernel::<K>(a, b, p).is_cw())
      {
        return Err(Error::ConvexViolation);
      }
    }

    let adjacency = EdgeAdjacency::build(&self.triangles);
    for edge in adjacency.interior_edges() {
      let (t0, t1) = match adjacency.interior(&edge) {
        Some(pair) => pair,
        None => continue,
      };
      for (this, other) in [(t0, t1), (t1, t0)] {
        let view = self.tri(this).view(&self.points);
        if !view.orientation::<K>().is_ccw() {
          continue;
        }
        if let Some(apex) = self.tri(other).opposite(edge.min, edge.max) {
          if view.circumcircle_contains::<K>(&self.points[apex.0]) {
            return Err(Error::NonDelaunayEdge);
          }
        }
      }
    }
    Ok(())
  }
}

impl<K: Kernel> Extend<Point> for DelaunayMesh<K> {
  fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
    for p in iter {
      self.insert(p);
    }
  }
}

impl<K: Kernel> FromIterator<Point> for DelaunayMesh<K> {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
    let mut mesh = DelaunayMesh::new();
    mesh.extend(iter);
    mesh
  }
}
