use super::Point;
use std::ops::Sub;

// point - point = point
impl Sub<Point> for Point {
  type Output = Point;

  fn sub(self: Point, other: Point) -> Self::Output {
    Point {
      array: [self.array[0] - other.array[0], self.array[1] - other.array[1]],
    }
  }
}
