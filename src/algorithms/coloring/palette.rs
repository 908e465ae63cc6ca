use std::collections::BTreeMap;
use std::fmt;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Rgb {
  pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
  }

  /// Convert from HSV with `hue` in degrees `[0, 360)` and `saturation`,
  /// `value` in `[0, 1]`.
  pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Rgb {
    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;
    let (r, g, b) = match hue {
      h if h < 60.0 => (c, x, 0.0),
      h if h < 120.0 => (x, c, 0.0),
      h if h < 180.0 => (0.0, c, x),
      h if h < 240.0 => (0.0, x, c),
      h if h < 300.0 => (x, 0.0, c),
      _ => (c, 0.0, x),
    };
    // Float to int casts saturate, so rounding noise cannot wrap.
    let channel = |v: f64| ((v + m) * 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
  }
}

/// CSS notation, e.g. `rgb(255, 0, 0)`.
impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
  }
}

/// Display colors for the distinct indices of a coloring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
  colors: BTreeMap<usize, Rgb>,
}

impl Palette {
  pub fn get(&self, color: usize) -> Option<Rgb> {
    self.colors.get(&color).copied()
  }

  /// Number of distinct colors.
  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  /// Entries in increasing color index.
  pub fn iter(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
    self.colors.iter().map(|(&k, &v)| (k, v))
  }
}

/// Spread the distinct colors of `colors` evenly around the hue circle.
///
/// The color of rank `i` among `k` distinct values gets hue `360 * i / k` at
/// full saturation and value.
///
/// ```rust
/// # use rdelaunay::algorithms::coloring::{palette, Rgb};
/// let palette = palette(&[2, 0, 1, 0]);
/// assert_eq!(palette.get(0), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(palette.get(1), Some(Rgb::new(0, 255, 0)));
/// assert_eq!(palette.get(2), Some(Rgb::new(0, 0, 255)));
/// assert_eq!(palette.get(3), None);
/// ```
pub fn palette(colors: &[usize]) -> Palette {
  let mut distinct = colors.to_vec();
  distinct.sort_unstable();
  distinct.dedup();
  let k = distinct.len() as f64;
  let colors = distinct
    .into_iter()
    .enumerate()
    .map(|(rank, color)| (color, Rgb::from_hsv(360.0 * rank as f64 / k, 1.0, 1.0)))
    .collect();
  Palette { colors }
}
