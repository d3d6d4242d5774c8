/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// Values are passed to the GPU as-is; whether they are treated as linear or
/// sRGB depends on the surface format chosen by `GpuInit::prefer_srgb`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0.5, 0.4, 0.0).a, 1.0);
        assert_eq!(Color::BLACK, Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });
    }

    #[test]
    fn converts_to_wgpu_color() {
        let c: wgpu::Color = Color::rgb(0.25, 0.5, 1.0).into();
        assert_eq!(c, wgpu::Color { r: 0.25, g: 0.5, b: 1.0, a: 1.0 });
        assert_eq!(wgpu::Color::from(Color::BLACK), wgpu::Color::BLACK);
    }
}
