pub mod delaunay;
pub mod hull;
mod legalize;

pub use delaunay::DelaunayMesh;
pub use hull::Hull;
