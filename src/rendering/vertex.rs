//! Vertex data for voxel surface meshes.
//!
//! This module defines the plain-data vertex format the voxel core emits.
//! The core performs no graphics-API calls itself; a rendering
//! collaborator uploads these buffers however it sees fit.

use cgmath::{Point3, Vector3};

/// A single vertex of a chunk surface mesh.
///
/// Vertices are immutable once emitted into a mesh buffer; regeneration
/// replaces the whole buffer rather than patching it.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
/// - Color: [f32; 3] (12 bytes)
///
/// Total size: 44 bytes. The `#[repr(C)]` layout and bytemuck derives let
/// a renderer treat a `&[Vertex]` as raw bytes for buffer upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in world space.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
    /// UV texture coordinates (normalized 0.0-1.0).
    pub tex_coords: [f32; 2],
    /// Flat per-block RGB color.
    pub color: [f32; 3],
}

impl Vertex {
    /// Creates a new vertex from its components.
    ///
    /// # Arguments
    /// * `position` - World-space position of the vertex
    /// * `normal` - Outward normal of the face this vertex belongs to
    /// * `tex_coords` - UV coordinates within the face
    /// * `color` - Flat color of the owning block
    pub fn new(
        position: Point3<f32>,
        normal: Vector3<f32>,
        tex_coords: [f32; 2],
        color: [f32; 3],
    ) -> Self {
        Vertex {
            position: [position.x, position.y, position.z],
            normal: [normal.x, normal.y, normal.z],
            tex_coords,
            color,
        }
    }
}
