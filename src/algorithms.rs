pub mod coloring;
pub mod triangulation;

#[doc(inline)]
pub use coloring::{color_edges, color_faces, color_points, palette};

#[doc(inline)]
pub use triangulation::DelaunayMesh;
