use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;

/// Distance below which two points compare equal.
pub const EPSILON: f64 = 1e-12;

/// A point (or displacement vector) in the plane.
///
/// Equality is tolerance based: two points are equal when they are closer
/// than [`EPSILON`]. Use [`Point::lex_cmp`] for a total order.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn dot(&self, other: &Point) -> f64 {
    self.array[0] * other.array[0] + self.array[1] * other.array[1]
  }

  /// Z component of the 3D cross product of the two vectors.
  pub fn cross(&self, other: &Point) -> f64 {
    self.array[0] * other.array[1] - self.array[1] * other.array[0]
  }

  pub fn squared_distance(&self, rhs: &Point) -> f64 {
    let diff = *self - *rhs;
    diff.dot(&diff)
  }

  /// Lexicographic order on (x, y). Fixes the processing order of
  /// insertions; it is not consistent with the tolerant `==`.
  pub fn lex_cmp(&self, other: &Point) -> Ordering {
    self.lex_key().cmp(&other.lex_key())
  }

  pub(crate) fn lex_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    (OrderedFloat(self.array[0]), OrderedFloat(self.array[1]))
  }
}

impl PartialEq for Point {
  fn eq(&self, other: &Point) -> bool {
    let [dx, dy] = (*self - *other).array;
    dx.hypot(dy) < EPSILON
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

mod add;
mod sub;
