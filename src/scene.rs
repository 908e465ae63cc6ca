//! A mesh together with the coloring shown for it.
//!
//! [`Scene`] is the state an interactive front end keeps between events: the
//! triangulation, which element kind is colored, and the derived statistics.
use crate::algorithms::coloring::{
  color_edges, color_faces, color_points, count_colors, palette, Palette,
};
use crate::algorithms::triangulation::DelaunayMesh;
use crate::data::VertIdx;
use crate::{DefaultKernel, Kernel};
use std::fmt::Write;

/// Which mesh elements get colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
  #[default]
  Off,
  Points,
  Edges,
  Faces,
}

/// Per-element colors of one mode, with their display palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
  pub mode: ColorMode,
  /// Indexed like `points()`, `edges()` or `triangles()` of the mesh.
  pub colors: Vec<usize>,
  pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
  /// Largest number of mesh edges at a single point.
  pub max_degree: usize,
  /// Distinct colors of the current coloring, 0 when coloring is off.
  pub colors_used: usize,
}

/// ```rust
/// # use rdelaunay::scene::{ColorMode, Scene};
/// let mut scene: Scene = Scene::new();
/// scene.insert(0.0, 0.0);
/// scene.insert(1.0, 0.0);
/// scene.insert(0.0, 1.0);
/// scene.set_mode(ColorMode::Points);
/// assert_eq!(scene.stats().colors_used, 3);
/// assert_eq!(scene.edge_dump(), "3 3\n0 1\n0 2\n1 2\n");
/// ```
#[derive(Debug, Clone)]
pub struct Scene<K = DefaultKernel> {
  mesh: DelaunayMesh<K>,
  mode: ColorMode,
}

impl<K: Kernel> Default for Scene<K> {
  fn default() -> Self {
    Scene::new()
  }
}

impl<K: Kernel> Scene<K> {
  pub fn new() -> Self {
    Scene {
      mesh: DelaunayMesh::new(),
      mode: ColorMode::Off,
    }
  }

  /// Add a point and retriangulate.
  pub fn insert(&mut self, x: f64, y: f64) -> VertIdx {
    let idx = self.mesh.insert_point(x, y);
    self.mesh.rebuild();
    idx
  }

  pub fn set_mode(&mut self, mode: ColorMode) {
    self.mode = mode;
  }

  pub fn mode(&self) -> ColorMode {
    self.mode
  }

  /// Remove all points. The color mode is kept.
  pub fn clear(&mut self) {
    self.mesh.clear();
    self.mesh.rebuild();
  }

  pub fn mesh(&self) -> &DelaunayMesh<K> {
    &self.mesh
  }

  /// Colors for the current mode, recomputed on every call.
  pub fn coloring(&self) -> Option<Coloring> {
    let points = self.mesh.points();
    let colors = match self.mode {
      ColorMode::Off => return None,
      ColorMode::Points => color_points(points, &self.mesh.edges()),
      ColorMode::Edges => color_edges(points, &self.mesh.edges()),
      ColorMode::Faces => color_faces(points, self.mesh.triangles()),
    };
    let palette = palette(&colors);
    Some(Coloring {
      mode: self.mode,
      colors,
      palette,
    })
  }

  pub fn stats(&self) -> Stats {
    let mut degree = vec![0; self.mesh.points().len()];
    for edge in self.mesh.edges() {
      for v in edge.endpoints() {
        degree[v.usize()] += 1;
      }
    }
    Stats {
      max_degree: degree.into_iter().max().unwrap_or(0),
      colors_used: self.coloring().map_or(0, |c| count_colors(&c.colors)),
    }
  }

  /// Plain text listing of the mesh edges: a `"N M"` header with the point
  /// and edge counts, then one `"u v"` line per edge.
  pub fn edge_dump(&self) -> String {
    let edges = self.mesh.edges();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{} {}", self.mesh.points().len(), edges.len());
    for edge in edges {
      let _ = writeln!(out, "{} {}", edge.min.usize(), edge.max.usize());
    }
    out
  }
}
