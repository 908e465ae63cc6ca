// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Incremental planar Delaunay triangulation and saturation-degree colorings
//! of the resulting mesh.
//!
//! ```rust
//! use rdelaunay::algorithms::coloring::{color_points, palette};
//! use rdelaunay::algorithms::triangulation::DelaunayMesh;
//!
//! let mut mesh: DelaunayMesh = DelaunayMesh::new();
//! mesh.insert_point(0.0, 0.0);
//! mesh.insert_point(1.0, 0.0);
//! mesh.insert_point(1.0, 1.0);
//! mesh.insert_point(0.0, 1.0);
//! mesh.rebuild();
//! assert_eq!(mesh.triangles().len(), 2);
//!
//! let colors = color_points(mesh.points(), &mesh.edges());
//! assert_eq!(palette(&colors).len(), 3);
//! ```

pub mod algorithms;
pub mod data;
mod orientation;
pub mod scene;

pub use orientation::{in_circumcircle, DefaultKernel, Inexact, Kernel, Orientation, Robust};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A triangle is stored in clockwise order.
  ClockWiseViolation,
  /// The hull edges do not form a single closed cycle.
  OpenHull,
  DuplicateHullEdge,
  /// A point lies outside the hull.
  ConvexViolation,
  /// An interior edge fails the empty circumcircle test.
  NonDelaunayEdge,
  IndexOutOfRange,
  /// Two adjacent vertices share a color.
  ColorConflict,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::OpenHull => write!(f, "Hull edges do not form a single cycle"),
      Error::DuplicateHullEdge => write!(f, "Duplicate hull edge"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::NonDelaunayEdge => write!(f, "Edge violates the empty circumcircle property"),
      Error::IndexOutOfRange => write!(f, "Index out of range"),
      Error::ColorConflict => write!(f, "Adjacent vertices share a color"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
