//! Mesh buffers for chunk surfaces.
//!
//! A `ChunkMesh` is the derived, rebuildable output of the meshing pass:
//! a vertex list plus a triangle-list index buffer. It is never
//! authoritative state; the owning chunk can always reconstruct it from
//! its voxels.

use cgmath::{Point3, Vector3};

use super::vertex::Vertex;

/// UV coordinates assigned to the four corners of every quad, in
/// lower-left, lower-right, upper-right, upper-left corner order.
const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// The renderable triangle data for one chunk.
#[derive(Debug, Clone, Default)]
pub struct ChunkMesh {
    /// The vertex buffer, four vertices per emitted face.
    pub vertices: Vec<Vertex>,
    /// The triangle-list index buffer, six indices per emitted face.
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        ChunkMesh::default()
    }

    /// Discards all vertex and index data, keeping the allocations for
    /// the next rebuild.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Returns whether the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends one quad face: four vertices and two counter-clockwise
    /// triangles.
    ///
    /// # Arguments
    /// * `corners` - The face corners in lower-left, lower-right,
    ///   upper-right, upper-left order
    /// * `normal` - The outward normal shared by all four vertices
    /// * `color` - The flat color shared by all four vertices
    pub fn add_face(&mut self, corners: &[Point3<f32>; 4], normal: Vector3<f32>, color: [f32; 3]) {
        let base_index = self.vertices.len() as u32;

        for (corner, tex_coords) in corners.iter().zip(QUAD_TEX_COORDS) {
            self.vertices
                .push(Vertex::new(*corner, normal, tex_coords, color));
        }

        self.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);
    }
}
