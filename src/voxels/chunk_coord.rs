//! # Chunk Coordinate Module
//!
//! This module defines `ChunkCoord`, the integer grid position of a chunk.
//! A chunk's world-space origin is its coordinate multiplied by
//! `CHUNK_DIMENSION`, so the mapping from a world voxel coordinate to its
//! owning chunk is a floor division, never a truncating one: world x = -1
//! belongs to chunk x = -1 at local x = 15.

use cgmath::Point3;

use super::chunk::CHUNK_DIMENSION;

/// The integer grid position of a chunk, used as the world index map key.
///
/// This is a pure value type: equality is component-wise and it carries no
/// ownership semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// Chunk grid X coordinate.
    pub x: i32,
    /// Chunk grid Y coordinate.
    pub y: i32,
    /// Chunk grid Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a chunk coordinate from its components.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        ChunkCoord { x, y, z }
    }

    /// Returns the coordinate of the chunk owning the given world voxel
    /// position.
    ///
    /// Uses euclidean (flooring) division so negative world coordinates
    /// map toward negative infinity rather than toward zero.
    pub fn from_world(x: i32, y: i32, z: i32) -> Self {
        ChunkCoord {
            x: x.div_euclid(CHUNK_DIMENSION),
            y: y.div_euclid(CHUNK_DIMENSION),
            z: z.div_euclid(CHUNK_DIMENSION),
        }
    }

    /// Returns the chunk-local coordinate of a world voxel position.
    ///
    /// Each component lands in `[0, CHUNK_DIMENSION)` regardless of sign.
    pub fn local(x: i32, y: i32, z: i32) -> Point3<i32> {
        Point3::new(
            x.rem_euclid(CHUNK_DIMENSION),
            y.rem_euclid(CHUNK_DIMENSION),
            z.rem_euclid(CHUNK_DIMENSION),
        )
    }

    /// Returns the world voxel coordinate of this chunk's minimum corner.
    pub fn world_origin(&self) -> Point3<i32> {
        Point3::new(
            self.x * CHUNK_DIMENSION,
            self.y * CHUNK_DIMENSION,
            self.z * CHUNK_DIMENSION,
        )
    }

    /// Returns the manhattan distance to another chunk coordinate, in
    /// chunks. Used to order diagnostic output by distance from the
    /// world origin.
    pub fn manhattan_distance(&self, other: &Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::ChunkCoord;

    #[test]
    fn negative_world_coordinates_floor() {
        assert_eq!(ChunkCoord::from_world(-1, -1, -1), ChunkCoord::new(-1, -1, -1));
        assert_eq!(ChunkCoord::local(-1, -1, -1), cgmath::Point3::new(15, 15, 15));
    }

    #[test]
    fn positive_world_coordinates_truncate_identically() {
        assert_eq!(ChunkCoord::from_world(0, 15, 16), ChunkCoord::new(0, 0, 1));
        assert_eq!(ChunkCoord::local(0, 15, 16), cgmath::Point3::new(0, 15, 0));
    }

    #[test]
    fn origin_and_local_reassemble_world_position() {
        for world in [-33, -16, -1, 0, 7, 16, 40] {
            let coord = ChunkCoord::from_world(world, world, world);
            let local = ChunkCoord::local(world, world, world);
            let origin = coord.world_origin();
            assert_eq!(origin.x + local.x, world);
            assert_eq!(origin.y + local.y, world);
            assert_eq!(origin.z + local.z, world);
        }
    }

    #[test]
    fn manhattan_distance_sums_axes() {
        let a = ChunkCoord::new(0, 0, 0);
        let b = ChunkCoord::new(2, -1, 3);
        assert_eq!(a.manhattan_distance(&b), 6);
    }
}
