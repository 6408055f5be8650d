//! Geometry shared by several demos.

use crate::errors::*;

use super::mesh::{Mesh, MeshParams, Primitive, VertexLayout};

/// A cube spanning `[-1, 1]` on every axis, as 36 vertices of separate
/// triangles. Each vertex is `position (3), normal (3), texcoord (2)`.
#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; 288] = [
    // back face
    -1.0, -1.0, -1.0,  0.0,  0.0, -1.0, 0.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  0.0, -1.0, 1.0, 1.0,
     1.0, -1.0, -1.0,  0.0,  0.0, -1.0, 1.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  0.0, -1.0, 1.0, 1.0,
    -1.0, -1.0, -1.0,  0.0,  0.0, -1.0, 0.0, 0.0,
    -1.0,  1.0, -1.0,  0.0,  0.0, -1.0, 0.0, 1.0,
    // front face
    -1.0, -1.0,  1.0,  0.0,  0.0,  1.0, 0.0, 0.0,
     1.0, -1.0,  1.0,  0.0,  0.0,  1.0, 1.0, 0.0,
     1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 1.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 1.0, 1.0,
    -1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 0.0, 1.0,
    -1.0, -1.0,  1.0,  0.0,  0.0,  1.0, 0.0, 0.0,
    // left face
    -1.0,  1.0,  1.0, -1.0,  0.0,  0.0, 1.0, 0.0,
    -1.0,  1.0, -1.0, -1.0,  0.0,  0.0, 1.0, 1.0,
    -1.0, -1.0, -1.0, -1.0,  0.0,  0.0, 0.0, 1.0,
    -1.0, -1.0, -1.0, -1.0,  0.0,  0.0, 0.0, 1.0,
    -1.0, -1.0,  1.0, -1.0,  0.0,  0.0, 0.0, 0.0,
    -1.0,  1.0,  1.0, -1.0,  0.0,  0.0, 1.0, 0.0,
    // right face
     1.0,  1.0,  1.0,  1.0,  0.0,  0.0, 1.0, 0.0,
     1.0, -1.0, -1.0,  1.0,  0.0,  0.0, 0.0, 1.0,
     1.0,  1.0, -1.0,  1.0,  0.0,  0.0, 1.0, 1.0,
     1.0, -1.0, -1.0,  1.0,  0.0,  0.0, 0.0, 1.0,
     1.0,  1.0,  1.0,  1.0,  0.0,  0.0, 1.0, 0.0,
     1.0, -1.0,  1.0,  1.0,  0.0,  0.0, 0.0, 0.0,
    // bottom face
    -1.0, -1.0, -1.0,  0.0, -1.0,  0.0, 0.0, 1.0,
     1.0, -1.0, -1.0,  0.0, -1.0,  0.0, 1.0, 1.0,
     1.0, -1.0,  1.0,  0.0, -1.0,  0.0, 1.0, 0.0,
     1.0, -1.0,  1.0,  0.0, -1.0,  0.0, 1.0, 0.0,
    -1.0, -1.0,  1.0,  0.0, -1.0,  0.0, 0.0, 0.0,
    -1.0, -1.0, -1.0,  0.0, -1.0,  0.0, 0.0, 1.0,
    // top face
    -1.0,  1.0, -1.0,  0.0,  1.0,  0.0, 0.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  1.0,  0.0, 1.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  1.0,  0.0, 1.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  1.0,  0.0, 1.0, 0.0,
    -1.0,  1.0, -1.0,  0.0,  1.0,  0.0, 0.0, 1.0,
    -1.0,  1.0,  1.0,  0.0,  1.0,  0.0, 0.0, 0.0,
];

/// A full screen quad in normalized device coordinates, drawn as a triangle
/// strip. Each vertex is `position (3), texcoord (2)`.
#[rustfmt::skip]
pub const QUAD_VERTICES: [f32; 20] = [
    -1.0,  1.0, 0.0, 0.0, 1.0,
    -1.0, -1.0, 0.0, 0.0, 0.0,
     1.0,  1.0, 0.0, 1.0, 1.0,
     1.0, -1.0, 0.0, 1.0, 0.0,
];

pub fn cube_params() -> MeshParams {
    MeshParams {
        layout: VertexLayout::build().with(0, 3).with(1, 3).with(2, 2).finish(),
        primitive: Primitive::Triangles,
        ..Default::default()
    }
}

pub fn quad_params() -> MeshParams {
    MeshParams {
        layout: VertexLayout::build().with(0, 3).with(1, 2).finish(),
        primitive: Primitive::TriangleStrip,
        ..Default::default()
    }
}

/// Uploads `CUBE_VERTICES` with attributes at location 0, 1 and 2.
pub fn cube() -> Result<Mesh> {
    Mesh::new(cube_params(), &CUBE_VERTICES, None)
}

/// Uploads `QUAD_VERTICES` with attributes at location 0 and 1.
pub fn quad() -> Result<Mesh> {
    Mesh::new(quad_params(), &QUAD_VERTICES, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_normals_face_outward() {
        assert_eq!(cube_params().validate(&CUBE_VERTICES, None).unwrap(), 36);

        for v in CUBE_VERTICES.chunks(8) {
            // Every normal is a unit axis pointing away from the center.
            let n = [v[3], v[4], v[5]];
            assert_eq!(n.iter().map(|c| c.abs()).sum::<f32>(), 1.0);
            assert_eq!(v[0] * n[0] + v[1] * n[1] + v[2] * n[2], 1.0);
        }
    }

    #[test]
    fn quad_vertices() {
        assert_eq!(quad_params().validate(&QUAD_VERTICES, None).unwrap(), 4);
    }
}
