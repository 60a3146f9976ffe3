use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::{implement_vertex, Display, VertexBuffer};

/// One position attribute at location 0, matching the vertex shader input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleVertex {
    pub position: [f32; 3],
}

implement_vertex!(TriangleVertex, position);

pub const TRIANGLE: [TriangleVertex; 3] = [
    TriangleVertex {
        position: [-0.5, -0.5, 0.0],
    },
    TriangleVertex {
        position: [0.5, -0.5, 0.0],
    },
    TriangleVertex {
        position: [0.0, 0.5, 0.0],
    },
];

/// One-shot upload of static geometry, done before the frame loop starts.
/// The buffer lives for the rest of the process and is freed with the
/// context.
pub fn upload(
    display: &Display<WindowSurface>,
    vertices: &[TriangleVertex],
) -> Result<VertexBuffer<TriangleVertex>> {
    Ok(VertexBuffer::new(display, vertices)?)
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn vertex_layout_is_three_packed_floats() {
        assert_eq!(mem::size_of::<TriangleVertex>(), 3 * mem::size_of::<f32>());
        assert_eq!(mem::offset_of!(TriangleVertex, position), 0);

        let vertex = TriangleVertex {
            position: [0.0; 3],
        };
        assert_eq!(vertex.position.len(), 3);
    }

    #[test]
    fn triangle_matches_the_fixed_vertex_list() {
        let positions: Vec<[f32; 3]> = TRIANGLE.iter().map(|vertex| vertex.position).collect();

        assert_eq!(
            positions,
            vec![[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]]
        );
    }
}
