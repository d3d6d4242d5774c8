use orrery_engine::device::GpuInit;
use orrery_engine::paint::Color;
use orrery_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::animation::Animation;

/// Everything the demo needs to open its window and animate.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub clear: Color,
    pub animation: Animation,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            width: 640.0,
            height: 640.0,
            clear: Color::BLACK,
            animation: Animation::default(),
        }
    }
}

impl DemoConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: false,
        }
    }

    /// Vertex colors are written untouched, so a linear (non-sRGB) target is preferred.
    pub fn gpu(&self) -> GpuInit {
        GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_fixed_hello_world() {
        let cfg = DemoConfig::default();
        let rt = cfg.runtime();
        assert_eq!(rt.title, "Hello World");
        assert_eq!(rt.initial_size, LogicalSize::new(640.0, 640.0));
        assert!(!rt.resizable);
    }

    #[test]
    fn gpu_avoids_srgb() {
        assert!(!DemoConfig::default().gpu().prefer_srgb);
    }
}
