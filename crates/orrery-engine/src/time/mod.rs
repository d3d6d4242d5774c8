//! Frame timing.
//!
//! One `FrameClock` per window; call `tick()` once per redraw to obtain a
//! `FrameTime`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
