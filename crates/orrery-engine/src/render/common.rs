//! GPU types and layout helpers shared by the shape renderer.

use bytemuck::{Pod, Zeroable};

// ── vertex streams ────────────────────────────────────────────────────────

/// Position stream (buffer slot 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct PositionVertex {
    pub pos: [f32; 2],
}

impl PositionVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PositionVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Color stream (buffer slot 1), parallel to the position stream.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ColorVertex {
    pub rgb: [f32; 3],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── model uniform ─────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ModelUniform {
    pub matrix: [[f32; 4]; 4],
}

pub(super) const MODEL_UNIFORM_SIZE: u64 = std::mem::size_of::<ModelUniform>() as u64;

/// Returns the `wgpu` minimum binding size for one model-matrix slot.
pub(super) fn model_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(MODEL_UNIFORM_SIZE)
}

/// Byte distance between two dynamic-offset slots.
///
/// Dynamic offsets must be multiples of the device's
/// `min_uniform_buffer_offset_alignment`.
pub(super) fn slot_stride(alignment: u32) -> u64 {
    let alignment = u64::from(alignment.max(1));
    MODEL_UNIFORM_SIZE.div_ceil(alignment) * alignment
}

/// Capacity (in slots) to allocate for `required` draws.
pub(super) fn slot_capacity(required: usize) -> usize {
    required.next_power_of_two().max(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_uniform_is_one_mat4() {
        assert_eq!(MODEL_UNIFORM_SIZE, 64);
        assert!(model_ubo_min_binding_size().is_some());
    }

    #[test]
    fn stride_rounds_up_to_alignment() {
        assert_eq!(slot_stride(256), 256);
        assert_eq!(slot_stride(64), 64);
        assert_eq!(slot_stride(32), 64);
        assert_eq!(slot_stride(0), 64);
    }

    #[test]
    fn capacity_grows_in_powers_of_two() {
        assert_eq!(slot_capacity(8), 16);
        assert_eq!(slot_capacity(16), 16);
        assert_eq!(slot_capacity(17), 32);
    }

    #[test]
    fn vertex_strides_match_streams() {
        assert_eq!(PositionVertex::layout().array_stride, 8);
        assert_eq!(ColorVertex::layout().array_stride, 12);
    }
}
