use orrery_engine::core::{App, AppControl, FrameCtx, FrameOutcome};
use orrery_engine::geometry::ShapeSet;
use orrery_engine::paint::Color;
use orrery_engine::render::{DrawCall, ShapeRenderer};
use orrery_engine::time::FrameTime;

use crate::animation::{Animation, OrbitState};
use crate::config::DemoConfig;
use crate::solar_system;

/// Frames between rotation reports at debug level.
const REPORT_EVERY: u64 = 600;

/// Draws the solar system and advances its orbits once per presented frame.
pub struct OrreryApp {
    renderer: ShapeRenderer,
    state: OrbitState,
    animation: Animation,
    clear: Color,
    draws: Vec<DrawCall>,
}

impl OrreryApp {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            renderer: ShapeRenderer::new(ShapeSet::standard()),
            state: OrbitState::default(),
            animation: config.animation,
            clear: config.clear,
            draws: Vec::new(),
        }
    }

    /// Rebuilds this frame's draw list from the current state.
    fn collect_draws(&mut self) {
        self.draws.clear();
        self.draws
            .extend(solar_system::bodies(&self.state).into_iter().map(DrawCall::from));
    }

    /// Advances the orbits after a presented frame; skipped frames leave them as drawn.
    fn finish_frame(&mut self, outcome: FrameOutcome, time: &FrameTime) -> AppControl {
        if outcome.presented() {
            self.state.advance(self.animation.increment(time));
        }

        if time.frame_index % REPORT_EVERY == 0 {
            log::debug!(
                "frame {} ({:?}): rotation {:.3} rad",
                time.frame_index,
                outcome,
                self.state.rotation
            );
        }

        outcome.control()
    }
}

impl App for OrreryApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.collect_draws();

        let renderer = &mut self.renderer;
        let draws = &self.draws;
        let outcome = ctx.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, draws);
        });

        self.finish_frame(outcome, &ctx.time)
    }
}
