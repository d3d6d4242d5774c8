use std::f32::consts::PI;

use orrery_engine::time::FrameTime;

/// Rotation after which every orbit is back at its start.
///
/// Bodies turn at `r`, `r/2`, `r/3` and `r/4`; all of them complete whole
/// turns over `24π`.
pub const ORBIT_PERIOD: f32 = 24.0 * PI;

/// How the orbit rotation advances between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Animation {
    /// Fixed radians per presented frame; speed follows the frame rate.
    PerFrame { step: f32 },
    /// Radians per second of clamped frame time.
    PerSecond { rate: f32 },
}

impl Default for Animation {
    fn default() -> Self {
        Animation::PerFrame { step: 0.001 }
    }
}

impl Animation {
    /// Rotation increment for the frame described by `time`.
    #[inline]
    pub fn increment(self, time: &FrameTime) -> f32 {
        match self {
            Animation::PerFrame { step } => step,
            Animation::PerSecond { rate } => rate * time.dt,
        }
    }
}

/// Animation parameters shared by every body.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OrbitState {
    /// Accumulated rotation in radians, kept in `[0, ORBIT_PERIOD)`.
    pub rotation: f32,
}

impl OrbitState {
    #[inline]
    pub fn new(rotation: f32) -> Self {
        Self { rotation }
    }

    /// Adds `radians`, wrapping at [`ORBIT_PERIOD`] so long runs keep `f32` precision.
    #[inline]
    pub fn advance(&mut self, radians: f32) {
        self.rotation = (self.rotation + radians).rem_euclid(ORBIT_PERIOD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn frame(dt: f32) -> FrameTime {
        FrameTime {
            dt,
            now: Instant::now(),
            frame_index: 0,
        }
    }

    #[test]
    fn per_frame_ignores_dt() {
        let a = Animation::default();
        assert_eq!(a.increment(&frame(0.016)), 0.001);
        assert_eq!(a.increment(&frame(0.25)), 0.001);
    }

    #[test]
    fn per_second_scales_with_dt() {
        let a = Animation::PerSecond { rate: 2.0 };
        assert!((a.increment(&frame(0.5)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn state_accumulates() {
        let mut s = OrbitState::default();
        for _ in 0..1000 {
            s.advance(0.001);
        }
        assert!((s.rotation - 1.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_wraps_at_the_orbit_period() {
        let mut s = OrbitState::new(ORBIT_PERIOD - 0.0005);
        s.advance(0.001);
        assert!((s.rotation - 0.0005).abs() < 1e-4, "rotation {}", s.rotation);
        assert!(s.rotation >= 0.0 && s.rotation < ORBIT_PERIOD);
    }

    #[test]
    fn steps_near_the_period_still_advance() {
        let mut s = OrbitState::new(ORBIT_PERIOD - 1.0);
        let start = s.rotation;
        for _ in 0..500 {
            s.advance(0.001);
        }
        assert!((s.rotation - (start + 0.5)).abs() < 1e-3, "rotation {}", s.rotation);
    }

    #[test]
    fn oversized_rotation_is_brought_into_range() {
        let mut s = OrbitState::new(40_000.0);
        s.advance(0.001);
        assert!(s.rotation >= 0.0 && s.rotation < ORBIT_PERIOD, "rotation {}", s.rotation);
    }
}
