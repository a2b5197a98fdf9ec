//! # Chunk Module
//!
//! This module provides the `Chunk` struct, the fundamental 16x16x16 unit
//! of voxel storage, generation, and meshing.
//!
//! ## Storage
//!
//! A chunk owns a fixed-size linear array of one-byte block cells indexed
//! by `x + y*S + z*S^2`. The array is authoritative state; the chunk's
//! mesh is derived data that can always be rebuilt from it.
//!
//! ## Dirty Tracking
//!
//! Every voxel write marks the chunk's mesh dirty, and the mesh buffers
//! are stale exactly while that flag is set. Regeneration happens lazily
//! on render rather than eagerly on every write, which amortizes the cost
//! of burst edits. A write of the value a cell already holds still dirties
//! the mesh; the flag tracks writes, not changes.
//!
//! ## Failure Semantics
//!
//! No chunk operation can fail. Out-of-range reads return `AIR` and
//! out-of-range writes are silent no-ops, so there is no way to corrupt
//! chunk state through the public interface.

use cgmath::Point3;

use super::block::block_type::BlockType;
use super::block::Block;
use super::chunk_coord::ChunkCoord;
use super::terrain::{TerrainGenerator, TerrainSettings};
use crate::rendering::mesh::ChunkMesh;
use crate::rendering::{Camera, ChunkRenderer};

mod meshing;

/// The dimension (width, height, depth) of a chunk in voxels.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of voxels in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of voxels in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_VOLUME: usize = (CHUNK_PLANE_SIZE * CHUNK_DIMENSION) as usize;

/// A 16x16x16 region of the voxel world.
///
/// Chunks are created by the world index with a fixed coordinate that
/// never changes for the chunk's lifetime. Voxels are mutated through
/// [`Chunk::set_voxel`], and the surface mesh is rebuilt lazily the next
/// time the chunk is rendered.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not voxel
    /// coordinates). Immutable after construction.
    position: ChunkCoord,

    /// The voxel cells in `x + y*S + z*S^2` order.
    voxels: [Block; CHUNK_VOLUME],

    /// The renderable surface mesh derived from `voxels`. Replaced
    /// wholesale on regeneration, never patched.
    mesh: ChunkMesh,

    /// True whenever `voxels` has changed since the mesh was last built.
    mesh_dirty: bool,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all cells are air).
    ///
    /// The fresh chunk starts dirty so its (empty) mesh is built on the
    /// first render.
    pub fn new(position: ChunkCoord) -> Self {
        Chunk {
            position,
            voxels: [Block::new(BlockType::AIR); CHUNK_VOLUME],
            mesh: ChunkMesh::new(),
            mesh_dirty: true,
        }
    }

    /// Creates a chunk completely filled with the given block type
    /// (for testing and diagnostics).
    pub fn solid(position: ChunkCoord, block_type: BlockType) -> Self {
        let mut chunk = Chunk::new(position);
        chunk.voxels = [Block::new(block_type); CHUNK_VOLUME];
        chunk
    }

    /// Creates a chunk with a 3D checkerboard pattern of the given block
    /// type and air (for testing and diagnostics).
    pub fn checkerboard(position: ChunkCoord, block_type: BlockType) -> Self {
        let mut chunk = Chunk::new(position);
        for x in 0..CHUNK_DIMENSION {
            for y in 0..CHUNK_DIMENSION {
                for z in 0..CHUNK_DIMENSION {
                    if (x + y + z) % 2 == 0 {
                        chunk.set_voxel(x, y, z, block_type);
                    }
                }
            }
        }
        chunk
    }

    /// Creates a chunk with sparse random blocks (for testing and
    /// diagnostics).
    pub fn random(position: ChunkCoord) -> Self {
        let sparseness = 0.9;

        let mut chunk = Chunk::new(position);
        for x in 0..CHUNK_DIMENSION {
            for y in 0..CHUNK_DIMENSION {
                for z in 0..CHUNK_DIMENSION {
                    if fastrand::f64() >= sparseness {
                        chunk.set_voxel(x, y, z, BlockType::random_solid());
                    }
                }
            }
        }
        chunk
    }

    /// Returns this chunk's position in the chunk grid.
    pub fn position(&self) -> ChunkCoord {
        self.position
    }

    /// Returns the raw voxel cells in storage order.
    pub fn voxels(&self) -> &[Block; CHUNK_VOLUME] {
        &self.voxels
    }

    /// Returns the current surface mesh. Stale while
    /// [`Chunk::is_mesh_dirty`] reports true.
    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Returns whether the mesh buffers are out of date with respect to
    /// the voxel contents.
    pub fn is_mesh_dirty(&self) -> bool {
        self.mesh_dirty
    }

    /// Writes a block type at a chunk-local coordinate and marks the mesh
    /// dirty.
    ///
    /// Out-of-range coordinates are silently ignored and leave the chunk
    /// untouched, including the dirty flag.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        if Self::in_bounds(x, y, z) {
            self.voxels[Self::voxel_index(x, y, z)] = Block::new(block_type);
            self.mesh_dirty = true;
        }
    }

    /// Reads the block type at a chunk-local coordinate.
    ///
    /// Out-of-range coordinates read as `AIR`.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> BlockType {
        if Self::in_bounds(x, y, z) {
            self.voxels[Self::voxel_index(x, y, z)].block_type()
        } else {
            BlockType::AIR
        }
    }

    /// Checks whether the cell at a chunk-local coordinate is solid.
    ///
    /// Coordinates outside the chunk are treated as non-solid ("assume
    /// air outside chunk"), so faces on chunk borders are always emitted
    /// even when the adjacent chunk has a solid voxel there. Cross-chunk
    /// mesh stitching is a known, deliberate omission in the current
    /// scope.
    pub fn is_voxel_solid(&self, x: i32, y: i32, z: i32) -> bool {
        if !Self::in_bounds(x, y, z) {
            return false;
        }
        self.voxels[Self::voxel_index(x, y, z)].is_solid()
    }

    /// Overwrites this chunk's voxels with height-field terrain for the
    /// given seed, then marks the mesh dirty.
    ///
    /// Deterministic: the same (chunk coordinate, seed) pair always
    /// produces byte-identical voxel contents. Equivalent to running a
    /// [`TerrainGenerator`] with default settings over this chunk.
    pub fn generate_terrain(&mut self, seed: i32) {
        TerrainGenerator::new(seed, TerrainSettings::default()).fill_chunk(self);
    }

    /// Hands this chunk's mesh to the rendering collaborator, rebuilding
    /// it first if the voxels changed since the last build.
    ///
    /// The camera is accepted for future view-frustum culling; the
    /// current scope renders every chunk unconditionally. Empty meshes
    /// are not submitted.
    pub fn render(&mut self, renderer: &mut dyn ChunkRenderer, _camera: &dyn Camera) {
        if self.mesh_dirty {
            self.regenerate_mesh();
        }

        if !self.mesh.is_empty() {
            renderer.draw_chunk_mesh(&self.mesh.vertices, &self.mesh.indices);
        }
    }

    /// Converts a chunk-local coordinate to its index in the voxel array.
    ///
    /// Callers must have bounds-checked the coordinate first.
    fn voxel_index(x: i32, y: i32, z: i32) -> usize {
        (x + y * CHUNK_DIMENSION + z * CHUNK_PLANE_SIZE) as usize
    }

    /// Returns whether a chunk-local coordinate is inside the chunk.
    fn in_bounds(x: i32, y: i32, z: i32) -> bool {
        (0..CHUNK_DIMENSION).contains(&x)
            && (0..CHUNK_DIMENSION).contains(&y)
            && (0..CHUNK_DIMENSION).contains(&z)
    }

    /// Returns the world-space voxel coordinate of a chunk-local cell.
    pub(crate) fn world_position(&self, x: i32, y: i32, z: i32) -> Point3<i32> {
        let origin = self.position.world_origin();
        Point3::new(origin.x + x, origin.y + y, origin.z + z)
    }
}
