//! # Rendering Interface Module
//!
//! The voxel core issues no graphics-API calls. Instead it exposes plain
//! vertex/index data and consumes the two narrow collaborator interfaces
//! defined here: a renderer that accepts mesh buffers for triangle-list
//! drawing, and a camera exposing position and view/projection data.
//!
//! The actual GPU backend (buffer upload, pipelines, draw submission)
//! lives outside this crate and implements [`ChunkRenderer`].

use cgmath::{Matrix4, Point3, SquareMatrix};

pub mod mesh;
pub mod vertex;

pub use mesh::ChunkMesh;
pub use vertex::Vertex;

/// The draw-call collaborator consumed by chunk rendering.
///
/// Implementations receive a vertex buffer and a triangle-list index
/// buffer for one chunk per call. Buffers are only valid for the duration
/// of the call; a GPU backend is expected to copy them into its own
/// staging memory.
pub trait ChunkRenderer {
    /// Submits one chunk's mesh for drawing.
    fn draw_chunk_mesh(&mut self, vertices: &[Vertex], indices: &[u32]);
}

/// The camera collaborator consumed by chunk rendering.
///
/// Only position and combined view/projection data are exposed. They are
/// reserved for future view-frustum culling; the current scope renders
/// every loaded chunk unconditionally.
pub trait Camera {
    /// The camera's position in world space.
    fn position(&self) -> Point3<f32>;

    /// The combined view and projection matrix.
    fn view_projection(&self) -> Matrix4<f32>;
}

/// A fixed camera with precomputed matrices.
///
/// Sufficient for headless use (the demo binary and tests); interactive
/// applications supply their own [`Camera`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct StaticCamera {
    /// World-space camera position.
    pub position: Point3<f32>,
    /// Combined view/projection matrix.
    pub view_projection: Matrix4<f32>,
}

impl StaticCamera {
    /// Creates a camera at the world origin with an identity
    /// view/projection matrix.
    pub fn at_origin() -> Self {
        StaticCamera {
            position: Point3::new(0.0, 0.0, 0.0),
            view_projection: Matrix4::identity(),
        }
    }
}

impl Camera for StaticCamera {
    fn position(&self) -> Point3<f32> {
        self.position
    }

    fn view_projection(&self) -> Matrix4<f32> {
        self.view_projection
    }
}

/// A [`ChunkRenderer`] that records mesh totals instead of drawing.
///
/// Used by the demo binary to report what a frame would submit, and by
/// tests to observe the render path without a GPU.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeshStatistics {
    /// Number of non-empty chunk meshes submitted.
    pub meshes: usize,
    /// Total vertices across all submitted meshes.
    pub vertices: usize,
    /// Total triangles across all submitted meshes.
    pub triangles: usize,
}

impl MeshStatistics {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        MeshStatistics::default()
    }
}

impl ChunkRenderer for MeshStatistics {
    fn draw_chunk_mesh(&mut self, vertices: &[Vertex], indices: &[u32]) {
        self.meshes += 1;
        self.vertices += vertices.len();
        self.triangles += indices.len() / 3;
    }
}
