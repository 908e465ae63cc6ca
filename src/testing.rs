// Strategies shared by the property tests.
//
// Points are drawn from the unit square. Random floats are in general
// position with overwhelming probability, which keeps the Euler counts exact.
use crate::data::Point;

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;

pub fn any_unit() -> impl Strategy<Value = Point> {
  (0.0f64..1.0, 0.0f64..1.0).prop_map(|(x, y)| Point::new([x, y]))
}

/// Between `size.start` and `size.end - 1` points, pairwise distinct.
pub fn any_point_set(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_unit(), size).prop_filter("duplicate points", |pts| {
    let mut keys: Vec<_> = pts.iter().map(Point::lex_key).collect();
    keys.sort_unstable();
    keys.windows(2).all(|w| w[0] != w[1])
  })
}

/// Edge list over `n` vertices, self loops and repeats included. `n.start`
/// must be positive.
pub fn any_graph(n: Range<usize>) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
  n.prop_flat_map(|n| (Just(n), vec((0..n, 0..n), 0..n * 3)))
}
