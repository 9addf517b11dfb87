/// Floats per vertex: position xyz followed by normal xyz.
pub const FLOATS_PER_VERTEX: usize = 6;
pub const CUBE_VERTEX_COUNT: u32 = 36;

const VERTEX_STRIDE: wgpu::BufferAddress =
    (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as wgpu::BufferAddress;

/// Unit cube centred on the origin, two triangles per face, non-indexed.
#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; CUBE_VERTEX_COUNT as usize * FLOATS_PER_VERTEX] = [
    // -Z
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,
     0.5, -0.5, -0.5,  0.0,  0.0, -1.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,
    -0.5,  0.5, -0.5,  0.0,  0.0, -1.0,
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,
    // +Z
    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,
     0.5, -0.5,  0.5,  0.0,  0.0,  1.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,
    -0.5,  0.5,  0.5,  0.0,  0.0,  1.0,
    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,
    // -X
    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,
    -0.5,  0.5, -0.5, -1.0,  0.0,  0.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,
    -0.5, -0.5,  0.5, -1.0,  0.0,  0.0,
    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,
    // +X
     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,
     0.5,  0.5, -0.5,  1.0,  0.0,  0.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,
     0.5, -0.5,  0.5,  1.0,  0.0,  0.0,
     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,
    // -Y
    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,
     0.5, -0.5, -0.5,  0.0, -1.0,  0.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,
    -0.5, -0.5,  0.5,  0.0, -1.0,  0.0,
    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,
    // +Y
    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,
     0.5,  0.5, -0.5,  0.0,  1.0,  0.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,
    -0.5,  0.5,  0.5,  0.0,  1.0,  0.0,
    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,
];

const POSITION_NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
];

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![
    0 => Float32x3,
];

/// Layout for the lit cube: position at location 0, normal at location 1.
pub(crate) fn position_normal_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_NORMAL_ATTRIBUTES,
    }
}

/// Layout for the light indicator: same buffer and stride, normals skipped.
pub(crate) fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRIBUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn vertices() -> impl Iterator<Item = (Vec3, Vec3)> {
        CUBE_VERTICES
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(|v| (Vec3::new(v[0], v[1], v[2]), Vec3::new(v[3], v[4], v[5])))
    }

    #[test]
    fn cube_has_36_vertices() {
        assert_eq!(vertices().count(), CUBE_VERTEX_COUNT as usize);
    }

    #[test]
    fn normals_point_out_of_their_face() {
        for (position, normal) in vertices() {
            assert_eq!(normal.length(), 1.0);
            // every vertex lies on the face plane its normal describes
            assert_eq!(position.dot(normal), 0.5);
            assert!(position.abs().cmpeq(Vec3::splat(0.5)).all());
        }
    }

    #[test]
    fn each_face_has_six_vertices() {
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            for normal in [axis, -axis] {
                let count = vertices().filter(|(_, n)| *n == normal).count();
                assert_eq!(count, 6, "face {normal}");
            }
        }
    }

    #[test]
    fn layouts_share_stride() {
        let lit = position_normal_layout();
        let light = position_layout();
        assert_eq!(lit.array_stride, 24);
        assert_eq!(lit.array_stride, light.array_stride);
        assert_eq!(lit.attributes[1].offset, 12);
        assert_eq!(light.attributes.len(), 1);
    }
}
