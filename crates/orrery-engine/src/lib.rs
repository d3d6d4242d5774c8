//! Orrery engine crate.
//!
//! Platform loop, GPU device, static shape geometry and the shape renderer
//! used by the orrery demo.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod geometry;
pub mod render;
pub mod paint;
