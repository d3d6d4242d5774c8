//! The bodies of the scene and their model matrices.
//!
//! Every orbit hangs off the single `OrbitState::rotation` scalar `r`. The
//! sun sits at the origin; planets orbit it; moons orbit their planet at a
//! fixed distance while the planet travels.

use orrery_engine::geometry::{ModelMatrix, ShapeKind};
use orrery_engine::render::DrawCall;

use crate::animation::OrbitState;

const SUN_SCALE: f32 = 0.125;

const EARTH_ORBIT: f32 = 0.25;
const EARTH_SCALE: f32 = 0.03;
const MOON_ORBIT: f32 = 0.05;
const MOON_SCALE: f32 = 0.01;

const JUPITER_ORBIT: f32 = 0.7;
const JUPITER_SCALE: f32 = 0.05;
const JUPITER_MOONS: usize = 4;

/// One drawn body.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    pub name: &'static str,
    pub shape: ShapeKind,
    pub model: ModelMatrix,
}

impl From<Body> for DrawCall {
    fn from(b: Body) -> Self {
        DrawCall::new(b.shape, b.model)
    }
}

/// Returns every body for the given state, in paint order.
pub fn bodies(state: &OrbitState) -> Vec<Body> {
    let r = state.rotation;
    let mut out = Vec::with_capacity(4 + JUPITER_MOONS);

    out.push(Body {
        name: "sun",
        shape: ShapeKind::Pentagon,
        model: sun(),
    });
    out.push(Body {
        name: "earth",
        shape: ShapeKind::Square,
        model: earth(r),
    });
    out.push(Body {
        name: "moon",
        shape: ShapeKind::Circle,
        model: moon(r),
    });
    out.push(Body {
        name: "jupiter",
        shape: ShapeKind::Triangle,
        model: jupiter(r),
    });
    for (i, name) in JUPITER_MOON_NAMES.into_iter().enumerate() {
        out.push(Body {
            name,
            shape: ShapeKind::Circle,
            model: jupiter_moon(r, i),
        });
    }

    out
}

const JUPITER_MOON_NAMES: [&str; JUPITER_MOONS] = ["io", "europa", "ganymede", "callisto"];

fn sun() -> ModelMatrix {
    ModelMatrix::identity().scale(SUN_SCALE, SUN_SCALE)
}

/// Earth's center, reused as the moon's parent frame.
fn earth_frame(r: f32) -> ModelMatrix {
    ModelMatrix::identity().rotate_z(r / 2.0).translate(EARTH_ORBIT, 0.0)
}

fn earth(r: f32) -> ModelMatrix {
    earth_frame(r)
        .rotate_z(r / 2.0)
        .scale(EARTH_SCALE, EARTH_SCALE)
}

fn moon(r: f32) -> ModelMatrix {
    earth_frame(r)
        .rotate_z(r)
        .translate(MOON_ORBIT, 0.0)
        .rotate_z(r / 2.0)
        .scale(MOON_SCALE, MOON_SCALE)
}

fn jupiter_frame(r: f32) -> ModelMatrix {
    ModelMatrix::identity().rotate_z(r / 3.0).translate(JUPITER_ORBIT, 0.0)
}

fn jupiter(r: f32) -> ModelMatrix {
    jupiter_frame(r)
        .rotate_z(r / 2.0)
        .scale(JUPITER_SCALE, JUPITER_SCALE)
}

/// Moon `i` is slower and farther out the larger `i` is.
fn jupiter_moon(r: f32, i: usize) -> ModelMatrix {
    let n = (i + 1) as f32;
    jupiter_frame(r)
        .rotate_z(r / n)
        .translate(jupiter_moon_orbit(i), 0.0)
        .rotate_z(r / 2.0)
        .scale(MOON_SCALE, MOON_SCALE)
}

#[inline]
fn jupiter_moon_orbit(i: usize) -> f32 {
    0.10 + (i + 1) as f32 * 0.04
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ORBIT_PERIOD;
    use glam::Vec2;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    fn near(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    fn find(bodies: &[Body], name: &str) -> Body {
        *bodies.iter().find(|b| b.name == name).unwrap()
    }

    #[test]
    fn paint_order_and_shapes() {
        let all = bodies(&OrbitState::default());
        let names: Vec<_> = all.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            ["sun", "earth", "moon", "jupiter", "io", "europa", "ganymede", "callisto"]
        );
        assert_eq!(all[0].shape, ShapeKind::Pentagon);
        assert_eq!(all[1].shape, ShapeKind::Square);
        assert_eq!(all[3].shape, ShapeKind::Triangle);
        assert!(all[4..].iter().all(|b| b.shape == ShapeKind::Circle));
    }

    #[test]
    fn sun_never_moves() {
        for r in [0.0, 1.0, 10.0] {
            let sun = find(&bodies(&OrbitState::new(r)), "sun");
            assert_eq!(sun.model, ModelMatrix::identity().scale(0.125, 0.125));
            assert!(near(sun.model.origin(), Vec2::ZERO));
        }
    }

    #[test]
    fn start_positions_lie_on_positive_x() {
        let all = bodies(&OrbitState::default());
        assert!(near(find(&all, "earth").model.origin(), Vec2::new(0.25, 0.0)));
        assert!(near(find(&all, "moon").model.origin(), Vec2::new(0.30, 0.0)));
        assert!(near(find(&all, "jupiter").model.origin(), Vec2::new(0.7, 0.0)));
        assert!(near(find(&all, "io").model.origin(), Vec2::new(0.84, 0.0)));
        assert!(near(find(&all, "callisto").model.origin(), Vec2::new(0.96, 0.0)));
    }

    #[test]
    fn earth_quarter_orbit_at_pi() {
        // Earth's orbit angle is r/2.
        let earth = find(&bodies(&OrbitState::new(PI)), "earth");
        assert!(near(earth.model.origin(), Vec2::new(0.0, 0.25)));
    }

    #[test]
    fn moon_keeps_distance_to_earth() {
        for r in [0.0, 0.3, 1.7, 4.0, 12.5] {
            let all = bodies(&OrbitState::new(r));
            let d = find(&all, "moon").model.origin() - find(&all, "earth").model.origin();
            assert!((d.length() - 0.05).abs() < EPS, "r = {r}");
        }
    }

    #[test]
    fn jupiter_moons_keep_distance_to_jupiter() {
        for r in [0.0, 0.9, 3.3, 7.1] {
            let all = bodies(&OrbitState::new(r));
            let j = find(&all, "jupiter").model.origin();
            for (i, b) in all[4..].iter().enumerate() {
                let d = (b.model.origin() - j).length();
                assert!((d - jupiter_moon_orbit(i)).abs() < EPS, "{} at r = {r}", b.name);
            }
        }
    }

    #[test]
    fn bodies_stay_on_screen() {
        for r in [0.0, 2.0, 5.0, 9.0] {
            for b in bodies(&OrbitState::new(r)) {
                assert!(b.model.origin().length() < 1.0, "{} at r = {r}", b.name);
            }
        }
    }

    #[test]
    fn scene_repeats_every_orbit_period() {
        for r in [0.0, 1.3, 5.0] {
            let a = bodies(&OrbitState::new(r));
            let b = bodies(&OrbitState::new(r + ORBIT_PERIOD));
            for (x, y) in a.iter().zip(&b) {
                let d = (x.model.origin() - y.model.origin()).length();
                assert!(d < 1e-4, "{} drifts by {d} at r = {r}", x.name);
            }
        }
    }

    #[test]
    fn body_converts_to_draw_call() {
        let b = find(&bodies(&OrbitState::new(1.0)), "jupiter");
        let call: DrawCall = b.into();
        assert_eq!(call.shape, ShapeKind::Triangle);
        assert_eq!(call.model, b.model.matrix());
    }
}
