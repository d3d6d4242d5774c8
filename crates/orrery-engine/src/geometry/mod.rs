//! CPU-side geometry for the static shape buffers.
//!
//! Conventions:
//! - positions are unit-radius, centered on the origin, in model space
//! - colors are straight RGB, one entry per position
//! - shapes are authored for GL-style primitive assembly (fans, quads) and
//!   lowered to triangle lists by [`Topology::triangulate`]

mod shapes;
mod topology;
mod transform;

pub use shapes::{IndexRange, ShapeKind, ShapeRange, ShapeSet};
pub use topology::Topology;
pub use transform::ModelMatrix;
