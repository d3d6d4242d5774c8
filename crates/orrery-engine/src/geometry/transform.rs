use glam::{Mat4, Vec2, Vec3};

/// Model-matrix builder for 2D bodies.
///
/// Each call post-multiplies the current matrix, so the *last* call is the
/// first one applied to a vertex:
///
/// ```
/// use orrery_engine::geometry::ModelMatrix;
///
/// // Scale the unit shape, then move it out along +X, then spin it around the origin.
/// let m = ModelMatrix::identity()
///     .rotate_z(0.5)
///     .translate(0.25, 0.0)
///     .scale(0.03, 0.03)
///     .matrix();
/// # let _ = m;
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelMatrix(Mat4);

impl ModelMatrix {
    #[inline]
    pub const fn identity() -> Self {
        Self(Mat4::IDENTITY)
    }

    /// Rotates about +Z (counter-clockwise, radians).
    #[inline]
    pub fn rotate_z(self, radians: f32) -> Self {
        Self(self.0 * Mat4::from_rotation_z(radians))
    }

    #[inline]
    pub fn translate(self, x: f32, y: f32) -> Self {
        Self(self.0 * Mat4::from_translation(Vec3::new(x, y, 0.0)))
    }

    /// Scales X and Y; Z is left untouched.
    #[inline]
    pub fn scale(self, x: f32, y: f32) -> Self {
        Self(self.0 * Mat4::from_scale(Vec3::new(x, y, 1.0)))
    }

    #[inline]
    pub fn matrix(self) -> Mat4 {
        self.0
    }

    /// Where the model-space origin ends up.
    #[inline]
    pub fn origin(self) -> Vec2 {
        self.0.transform_point3(Vec3::ZERO).truncate()
    }
}

impl Default for ModelMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<ModelMatrix> for Mat4 {
    fn from(m: ModelMatrix) -> Self {
        m.0
    }
}
