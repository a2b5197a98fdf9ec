//! # World Module
//!
//! This module provides the `World` struct, the sparse index from chunk
//! coordinates to chunks. It routes world-space voxel reads and writes to
//! the owning chunk, creating chunks on demand for writes and treating
//! unloaded regions as air for reads.
//!
//! ## Ownership
//!
//! The world is the exclusive owner of every chunk; chunks are never
//! shared. All voxel mutation, terrain generation, and mesh regeneration
//! happen synchronously on the caller's thread. No streaming or eviction
//! policy exists in the current scope; once created, a chunk stays loaded
//! until the next full terrain reset. This is a documented
//! simplification, not an oversight.

use std::collections::HashMap;
use std::time::Instant;

use cgmath::Point3;
use log::{debug, info};

use super::block::block_type::BlockType;
use super::chunk::Chunk;
use super::chunk_coord::ChunkCoord;
use super::terrain::TerrainGenerator;
use crate::config::WorldConfig;
use crate::rendering::{Camera, ChunkRenderer};

/// The sparse voxel world: a map of owned chunks plus the terrain seed.
pub struct World {
    /// All currently loaded chunks, keyed by chunk coordinate.
    chunks: HashMap<ChunkCoord, Chunk>,

    /// The last terrain-generation seed used. Kept so
    /// [`World::initialize`] and future regeneration reuse it.
    seed: i32,

    /// Generation bounds and terrain knobs for bulk generation.
    config: WorldConfig,
}

impl World {
    /// Creates an empty world with the default configuration.
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Creates an empty world with the given configuration.
    ///
    /// No chunks exist until terrain is generated or a voxel write
    /// creates one on demand.
    pub fn with_config(config: WorldConfig) -> Self {
        World {
            chunks: HashMap::new(),
            seed: config.seed,
            config,
        }
    }

    /// Generates the initial terrain using the configured seed.
    pub fn initialize(&mut self) {
        self.generate_terrain(self.seed);
    }

    /// Per-frame update hook.
    ///
    /// Iterates the loaded chunks; with no streaming or eviction policy
    /// in the current scope there is nothing to do per chunk yet, so this
    /// only reports how many meshes the next render will rebuild.
    pub fn update(&mut self, _delta_time: f32) {
        let dirty = self.chunks.values().filter(|c| c.is_mesh_dirty()).count();
        if dirty > 0 {
            debug!("{dirty} of {} chunks need remeshing", self.chunks.len());
        }
    }

    /// Renders every loaded chunk.
    ///
    /// Each chunk lazily rebuilds its mesh first if its voxels changed.
    /// No view-frustum culling is performed in the current scope.
    pub fn render(&mut self, renderer: &mut dyn ChunkRenderer, camera: &dyn Camera) {
        for chunk in self.chunks.values_mut() {
            chunk.render(renderer, camera);
        }
    }

    /// Returns the coordinate of the chunk owning a world voxel position.
    ///
    /// Floor division, so negative coordinates map toward negative
    /// infinity: world x = -1 lands in chunk x = -1.
    pub fn world_to_chunk(x: i32, y: i32, z: i32) -> ChunkCoord {
        ChunkCoord::from_world(x, y, z)
    }

    /// Looks up a chunk without creating it.
    pub fn chunk_at(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Looks up a chunk mutably without creating it.
    pub fn chunk_at_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// Returns the chunk at the given coordinate, creating a new empty
    /// chunk there if none exists.
    ///
    /// This is the only mutation path for the chunk map besides bulk
    /// terrain generation.
    pub fn chunk_at_or_create(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks.entry(coord).or_insert_with(|| Chunk::new(coord))
    }

    /// Writes a block type at a world voxel position, creating the owning
    /// chunk on demand.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        let coord = Self::world_to_chunk(x, y, z);
        let local = ChunkCoord::local(x, y, z);
        self.chunk_at_or_create(coord)
            .set_voxel(local.x, local.y, local.z, block_type);
    }

    /// Reads the block type at a world voxel position.
    ///
    /// Unloaded regions read as `AIR` without allocating a chunk.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> BlockType {
        let coord = Self::world_to_chunk(x, y, z);
        match self.chunk_at(coord) {
            Some(chunk) => {
                let local = ChunkCoord::local(x, y, z);
                chunk.get_voxel(local.x, local.y, local.z)
            }
            None => BlockType::AIR,
        }
    }

    /// Resets the world and generates terrain over the configured
    /// bounding box of chunk coordinates.
    ///
    /// This is a full-world reset, not an incremental operation: the
    /// entire chunk map is cleared first, then every chunk in the box is
    /// instantiated and filled deterministically from the seed.
    pub fn generate_terrain(&mut self, seed: i32) {
        let started = Instant::now();

        self.seed = seed;
        self.chunks.clear();

        let generator = TerrainGenerator::new(seed, self.config.terrain);
        let min = self.config.generate_min;
        let max = self.config.generate_max;

        for cx in min[0]..max[0] {
            for cy in min[1]..max[1] {
                for cz in min[2]..max[2] {
                    let coord = ChunkCoord::new(cx, cy, cz);
                    let mut chunk = Chunk::new(coord);
                    generator.fill_chunk(&mut chunk);
                    self.chunks.insert(coord, chunk);
                }
            }
        }

        info!(
            "generated {} chunks with seed {seed} in {:.1?}",
            self.chunks.len(),
            started.elapsed()
        );
    }

    /// Returns the number of currently loaded chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the seed terrain was last generated with.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Returns the coordinates of all loaded chunks, ordered by
    /// manhattan distance from the world origin chunk. Used for
    /// diagnostic output.
    pub fn loaded_coords(&self) -> Vec<ChunkCoord> {
        let origin = ChunkCoord::new(0, 0, 0);
        let mut coords: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        coords.sort_by_key(|c| (c.manhattan_distance(&origin), c.x, c.y, c.z));
        coords
    }

    /// Returns the world-space voxel position of a chunk-local cell, for
    /// callers translating between the two coordinate spaces.
    pub fn local_to_world(coord: ChunkCoord, local: Point3<i32>) -> Point3<i32> {
        let origin = coord.world_origin();
        Point3::new(origin.x + local.x, origin.y + local.y, origin.z + local.z)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
