use super::Point;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;

// point + point = point
impl Add<Point> for Point {
  type Output = Point;

  fn add(self: Point, other: Point) -> Self::Output {
    Point {
      array: [self.array[0] + other.array[0], self.array[1] + other.array[1]],
    }
  }
}

// point * scalar = point
impl Mul<f64> for Point {
  type Output = Point;

  fn mul(self: Point, scale: f64) -> Self::Output {
    Point {
      array: [self.array[0] * scale, self.array[1] * scale],
    }
  }
}

// scalar * point = point
impl Mul<Point> for f64 {
  type Output = Point;

  fn mul(self: f64, point: Point) -> Self::Output {
    point * self
  }
}

impl Neg for Point {
  type Output = Point;

  fn neg(self) -> Self::Output {
    Point {
      array: [-self.array[0], -self.array[1]],
    }
  }
}
