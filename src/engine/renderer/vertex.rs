// Vertex structure for 2D quad rendering

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// Vertex for 2D quad rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in screen pixels
    pub position: [f32; 2],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
    /// Vertex color (RGBA), multiplied with the texture sample
    pub color: [f32; 4],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec2, tex_coords: Vec2, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
            color: color.to_array(),
        }
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_struct() {
        let desc = Vertex::desc();
        assert_eq!(desc.array_stride as usize, std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(desc.attributes[2].offset, 16);
    }
}
