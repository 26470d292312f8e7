//! Shared GPU types used by the quad and grid renderers.

use bytemuck::{Pod, Zeroable};

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // clip space
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32) -> QuadVertex {
    QuadVertex { pos: [x, y] }
}

/// The base quad: two packed triangles, no index buffer.
///
/// Twelve floats total; every draw consumes exactly [`QUAD_VERTEX_COUNT`]
/// vertices regardless of instance count.
pub(super) const QUAD_VERTICES: [QuadVertex; 6] = [
    // Triangle 1
    v(-0.8, -0.8),
    v(0.8, -0.8),
    v(0.8, 0.8),
    // Triangle 2
    v(-0.8, -0.8),
    v(0.8, 0.8),
    v(-0.8, 0.8),
];

pub(super) const QUAD_VERTEX_COUNT: u32 = QUAD_VERTICES.len() as u32;

// ── grid uniform ──────────────────────────────────────────────────────────

/// Grid dimensions as read by the vertex stage.
///
/// Payload is the two leading floats (cols, rows); the tail pads the struct
/// to uniform-buffer alignment. Written once, read every draw.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct GridUniform {
    pub dims: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl GridUniform {
    pub(super) fn new(cols: u32, rows: u32) -> Self {
        Self {
            dims: [cols as f32, rows as f32],
            _pad: [0.0; 2],
        }
    }
}

/// Minimum binding size for the grid uniform.
///
/// `GridUniform` is 16 bytes by construction, so the size is always non-zero.
/// Centralized to avoid `.unwrap()` at the pipeline-creation site.
pub(super) fn grid_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<GridUniform>() as u64)
        .expect("GridUniform has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_twelve_floats() {
        assert_eq!(QUAD_VERTEX_COUNT, 6);
        assert_eq!(std::mem::size_of_val(&QUAD_VERTICES), 48);
    }

    #[test]
    fn quad_upload_bytes_round_trip() {
        // The exact bytes handed to the GPU decode back to the same floats.
        let bytes: &[u8] = bytemuck::cast_slice(&QUAD_VERTICES);
        assert_eq!(bytes.len(), 48);

        let decoded: &[QuadVertex] = bytemuck::cast_slice(bytes);
        assert_eq!(decoded, &QUAD_VERTICES);
    }

    #[test]
    fn vertex_stride_matches_two_floats() {
        assert_eq!(QuadVertex::layout().array_stride, 8);
    }

    #[test]
    fn grid_uniform_layout() {
        assert_eq!(std::mem::size_of::<GridUniform>(), 16);

        let u = GridUniform::new(32, 32);
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        // Payload floats sit at the front.
        assert_eq!(&bytes[0..4], &32.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &32.0f32.to_ne_bytes());
    }
}
