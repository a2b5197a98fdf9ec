//! # Block Side Module
//!
//! This module defines the six faces of a voxel cube along with the
//! geometry tables the mesher uses to emit quads: the face normal, the
//! neighbor offset used for the occlusion test, and the four corner
//! offsets in counter-clockwise winding order.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned a fixed integer value so it can be used to
/// index per-face lookup tables. The order is:
/// [FRONT, BACK, TOP, BOTTOM, RIGHT, LEFT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The top face (facing positive Y)
    TOP = 2,

    /// The bottom face (facing negative Y)
    BOTTOM = 3,

    /// The right face (facing positive X)
    RIGHT = 4,

    /// The left face (facing negative X)
    LEFT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in table order.
    ///
    /// This is useful for iterating over every face of a voxel during
    /// meshing.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::RIGHT,
            BlockSide::LEFT,
        ]
    }

    /// Returns the outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        match self {
            BlockSide::FRONT => Vector3::new(0.0, 0.0, 1.0),
            BlockSide::BACK => Vector3::new(0.0, 0.0, -1.0),
            BlockSide::TOP => Vector3::new(0.0, 1.0, 0.0),
            BlockSide::BOTTOM => Vector3::new(0.0, -1.0, 0.0),
            BlockSide::RIGHT => Vector3::new(1.0, 0.0, 0.0),
            BlockSide::LEFT => Vector3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Returns the integer offset to the neighboring cell across this face.
    ///
    /// The mesher adds this to a voxel's local coordinate to find the
    /// neighbor whose solidity decides whether the face is visible.
    pub fn neighbor_offset(self) -> Vector3<i32> {
        match self {
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
        }
    }

    /// Returns the four corner offsets of this face relative to the
    /// voxel's minimum corner, in counter-clockwise winding order when
    /// viewed from outside the cube.
    ///
    /// The corner order is lower-left, lower-right, upper-right,
    /// upper-left, matching the index pattern `(0,1,2) (0,2,3)` used when
    /// the quad is split into two triangles.
    pub fn corner_offsets(self) -> [Vector3<f32>; 4] {
        match self {
            BlockSide::FRONT => [
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 1.0),
                Vector3::new(1.0, 1.0, 1.0),
                Vector3::new(0.0, 1.0, 1.0),
            ],
            BlockSide::BACK => [
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ],
            BlockSide::TOP => [
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 1.0),
                Vector3::new(0.0, 1.0, 1.0),
            ],
            BlockSide::BOTTOM => [
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 0.0),
            ],
            BlockSide::RIGHT => [
                Vector3::new(1.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 1.0),
            ],
            BlockSide::LEFT => [
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(0.0, 1.0, 1.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BlockSide;
    use cgmath::{InnerSpace, Vector3};

    #[test]
    fn normals_match_neighbor_offsets() {
        for side in BlockSide::all() {
            let offset = side.neighbor_offset();
            let normal = side.normal();
            assert_eq!(
                normal,
                Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
            );
            assert_eq!(normal.magnitude(), 1.0);
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for side in BlockSide::all() {
            let offset = side.neighbor_offset();
            for corner in side.corner_offsets() {
                // On the positive side of an axis the face plane sits at 1,
                // on the negative side at 0.
                if offset.x != 0 {
                    assert_eq!(corner.x, if offset.x > 0 { 1.0 } else { 0.0 });
                }
                if offset.y != 0 {
                    assert_eq!(corner.y, if offset.y > 0 { 1.0 } else { 0.0 });
                }
                if offset.z != 0 {
                    assert_eq!(corner.z, if offset.z > 0 { 1.0 } else { 0.0 });
                }
            }
        }
    }
}
