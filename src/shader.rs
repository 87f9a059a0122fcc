//! GPU-side data layouts and shader source.

use bytemuck::{Pod, Zeroable};

pub const SHADER_SOURCE: &str = include_str!("field.wgsl");

/// Per-frame uniforms shared by all three passes.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    /// Surface size in physical pixels, for pixel-to-NDC conversion.
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
    /// Translucent trail fill, painted full-surface each frame.
    pub fade_color: [f32; 4],
    /// Connection stroke color; alpha channel unused (per-vertex).
    pub line_color: [f32; 4],
}

/// One particle, instanced over a six-vertex quad.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub size: f32,
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32,
        2 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// One endpoint of a connection segment, drawn as a line list.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub alpha: f32,
    pub _pad: f32,
}

impl LineVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_strides_match_attributes() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 28);
        assert_eq!(std::mem::size_of::<LineVertex>(), 16);
        assert_eq!(std::mem::size_of::<Uniforms>(), 48);
    }
}
