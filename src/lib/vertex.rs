use std::mem;

use crate::{geom, wire};

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[derive(Debug, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub colour: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn description<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }

    // Two vertices per edge, as a line list expects
    pub fn line(edge: wire::Edge, colour: [f32; 3]) -> [Self; 2] {
        [
            Self { pos: edge.a, colour },
            Self { pos: edge.b, colour },
        ]
    }
}

const AXIS_COLOURS: [[f32; 3]; 3] = [
    [0.9, 0.1, 0.1],
    [0.1, 0.7, 0.1],
    [0.1, 0.2, 0.9],
];

// X, Y and Z run from the lower corner of `bounds`
// along each axis for the length of that axis
pub fn axes(bounds: geom::Bounds) -> [Vertex; 6] {
    let bounds = bounds.or_unit();
    let origin = bounds.min;

    let mut vertices = [Vertex { pos: origin, colour: [0.; 3] }; 6];

    for axis in 0..3 {
        let mut tip = origin;
        tip[axis] = bounds.max[axis];

        vertices[axis * 2] = Vertex { pos: origin, colour: AXIS_COLOURS[axis] };
        vertices[axis * 2 + 1] = Vertex { pos: tip, colour: AXIS_COLOURS[axis] };
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_start_at_lower_corner() {
        let bounds = geom::Bounds::new([[1., 2., 3.], [4., 6., 8.]]);
        let axes = axes(bounds);

        assert!(axes.chunks_exact(2).all(|pair| pair[0].pos == [1., 2., 3.]));
        assert_eq!(axes[1].pos, [4., 2., 3.]);
        assert_eq!(axes[3].pos, [1., 6., 3.]);
        assert_eq!(axes[5].pos, [1., 2., 8.]);
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(Vertex::description().array_stride, 24);
    }

    #[test]
    fn colour_follows_position() {
        let attributes = Vertex::description().attributes;

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes[0].shader_location, 0);
        assert_eq!(attributes[1].offset, 12);
        assert_eq!(attributes[1].format, wgpu::VertexFormat::Float32x3);
    }
}
