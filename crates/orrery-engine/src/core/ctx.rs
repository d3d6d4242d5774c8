use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

/// What happened to the frame handed to [`FrameCtx::render`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// `draw` ran and the frame was presented.
    Presented,
    /// The surface could not be acquired; `draw` did not run.
    Skipped,
    /// The surface failed for good; the app should exit.
    Fatal,
}

impl FrameOutcome {
    /// Outcome of a frame whose surface acquisition failed with `action`.
    pub fn from_surface_error(action: SurfaceErrorAction) -> Self {
        match action {
            SurfaceErrorAction::Fatal => FrameOutcome::Fatal,
            SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                FrameOutcome::Skipped
            }
        }
    }

    #[inline]
    pub fn presented(self) -> bool {
        self == FrameOutcome::Presented
    }

    #[inline]
    pub fn control(self) -> AppControl {
        match self {
            FrameOutcome::Fatal => AppControl::Exit,
            FrameOutcome::Presented | FrameOutcome::Skipped => AppControl::Continue,
        }
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu:    &'a mut Gpu<'w>,
    pub time:   FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// A frame lost to a recoverable surface error is skipped without calling
    /// `draw`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> FrameOutcome
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                return FrameOutcome::from_surface_error(action);
            }
        };

        // Clear pass; dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orrery clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view:           &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(clear.into()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes:         None,
                occlusion_query_set:      None,
                multiview_mask:           None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        FrameOutcome::Presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_surface_errors_skip_the_frame() {
        for action in [SurfaceErrorAction::Reconfigured, SurfaceErrorAction::SkipFrame] {
            let outcome = FrameOutcome::from_surface_error(action);
            assert_eq!(outcome, FrameOutcome::Skipped);
            assert!(!outcome.presented());
            assert_eq!(outcome.control(), AppControl::Continue);
        }
    }

    #[test]
    fn fatal_surface_error_exits() {
        let outcome = FrameOutcome::from_surface_error(SurfaceErrorAction::Fatal);
        assert_eq!(outcome, FrameOutcome::Fatal);
        assert!(!outcome.presented());
        assert_eq!(outcome.control(), AppControl::Exit);
    }

    #[test]
    fn only_presented_frames_count() {
        assert!(FrameOutcome::Presented.presented());
        assert_eq!(FrameOutcome::Presented.control(), AppControl::Continue);
    }
}
