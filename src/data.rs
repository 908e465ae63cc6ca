pub(crate) mod point;
mod triangle;
mod vertex;

pub use point::{Point, EPSILON};
pub use triangle::*;
pub use vertex::*;
