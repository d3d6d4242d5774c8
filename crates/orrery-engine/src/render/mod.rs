//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and build them lazily
//! from the first [`RenderCtx`] they see.
//!
//! Convention:
//! - geometry is in model space; the per-draw model matrix maps it straight to NDC
//! - NDC is `[-1, 1]` on both axes with +Y up

mod common;
mod ctx;
mod shape;

pub use ctx::{RenderCtx, RenderTarget};
pub use shape::{DrawCall, ShapeRenderer};
