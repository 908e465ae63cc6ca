use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`, using plain floating point arithmetic.
  ///
  /// No tolerance is applied: nearly colinear points are classified by the
  /// sign of the rounded cross product.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rdelaunay::data::Point;
  /// # use rdelaunay::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]);
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::with_kernel::<Inexact>(p1, p2, p3)
  }

  /// Same as [`Orientation::new`] but evaluated by the kernel `K`.
  pub fn with_kernel<K: Kernel>(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::from_sign(K::orient2d(p1, p2, p3))
  }

  fn from_sign(det: f64) -> Orientation {
    if det > 0.0 {
      Orientation::CounterClockWise
    } else if det < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// The two geometric predicates the triangulation depends on.
///
/// Both return a determinant whose sign carries the answer; the magnitude is
/// meaningless.
pub trait Kernel {
  /// Positive iff `a -> b -> c` turns counter-clockwise.
  fn orient2d(a: &Point, b: &Point, c: &Point) -> f64;

  /// Positive iff `d` lies strictly inside the circle through the
  /// counter-clockwise triangle `a, b, c`.
  fn incircle(a: &Point, b: &Point, c: &Point, d: &Point) -> f64;
}

/// Plain floating point predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inexact;

impl Kernel for Inexact {
  fn orient2d(a: &Point, b: &Point, c: &Point) -> f64 {
    (*b - *a).cross(&(*c - *a))
  }

  fn incircle(a: &Point, b: &Point, c: &Point, d: &Point) -> f64 {
    let ad = *a - *d;
    let bd = *b - *d;
    let cd = *c - *d;
    ad.dot(&ad) * bd.cross(&cd) + bd.dot(&bd) * cd.cross(&ad) + cd.dot(&cd) * ad.cross(&bd)
  }
}

/// Adaptive exact predicates from `geometry_predicates`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Robust;

impl Kernel for Robust {
  fn orient2d(a: &Point, b: &Point, c: &Point) -> f64 {
    geometry_predicates::predicates::orient2d(a.array, b.array, c.array)
  }

  fn incircle(a: &Point, b: &Point, c: &Point, d: &Point) -> f64 {
    geometry_predicates::predicates::incircle(a.array, b.array, c.array, d.array)
  }
}

#[cfg(not(feature = "robust"))]
pub type DefaultKernel = Inexact;
#[cfg(feature = "robust")]
pub type DefaultKernel = Robust;

/// True iff `p` lies strictly inside the circumcircle of the
/// counter-clockwise triangle `a, b, c`.
pub fn in_circumcircle(a: &Point, b: &Point, c: &Point, p: &Point) -> bool {
  in_circumcircle_with::<Inexact>(a, b, c, p)
}

pub(crate) fn in_circumcircle_with<K: Kernel>(a: &Point, b: &Point, c: &Point, p: &Point) -> bool {
  K::incircle(a, b, c, p) > 0.0
}

#[cfg(test)]
mod tests {
  use super::Orientation::*;
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn pt(x: f64, y: f64) -> Point {
    Point::new([x, y])
  }

  #[test]
  fn test_turns() {
    assert_eq!(Orientation::new(&pt(0., 0.), &pt(1., 1.), &pt(2., 2.)), CoLinear);
    assert_eq!(Orientation::new(&pt(0., 0.), &pt(0., 1.), &pt(2., 2.)), ClockWise);
    assert_eq!(
      Orientation::new(&pt(0., 0.), &pt(0., 1.), &pt(-2., 2.)),
      CounterClockWise
    );
    assert_eq!(Orientation::new(&pt(0., 0.), &pt(0., 0.), &pt(0., 0.)), CoLinear);
  }

  #[test]
  fn kernels_agree_on_simple_input() {
    let (a, b, c) = (pt(0., 0.), pt(1., 0.), pt(0., 1.));
    assert!(Orientation::with_kernel::<Robust>(&a, &b, &c).is_ccw());
    assert!(Orientation::with_kernel::<Inexact>(&a, &b, &c).is_ccw());
    assert!(in_circumcircle_with::<Robust>(&a, &b, &c, &pt(0.5, 0.5)));
    assert!(in_circumcircle(&a, &b, &c, &pt(0.5, 0.5)));
  }

  #[test]
  fn circumcircle_boundary_is_outside() {
    // (1,1) is on the circle through the other three corners of the square.
    let (a, b, c) = (pt(0., 0.), pt(1., 0.), pt(0., 1.));
    assert!(!in_circumcircle(&a, &b, &c, &pt(1., 1.)));
    assert!(!in_circumcircle_with::<Robust>(&a, &b, &c, &pt(1., 1.)));
    assert!(!in_circumcircle(&a, &b, &c, &pt(2., 2.)));
  }

  #[test]
  fn robust_detects_colinear() {
    let a = pt(0.5, 0.5);
    let b = pt(12.0, 12.0);
    let c = pt(24.0, 24.0);
    assert_eq!(Orientation::with_kernel::<Robust>(&a, &b, &c), CoLinear);
  }

  #[proptest]
  fn orientation_reverse(
    #[strategy(any_unit())] p1: Point,
    #[strategy(any_unit())] p2: Point,
    #[strategy(any_unit())] p3: Point,
  ) {
    let abc = Orientation::with_kernel::<Robust>(&p1, &p2, &p3);
    let cba = Orientation::with_kernel::<Robust>(&p3, &p2, &p1);
    prop_assert_eq!(abc, cba.reverse());
  }
}
