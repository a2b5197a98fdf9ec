//! # Voxels Module
//!
//! The voxel core: block types, chunk storage and meshing, terrain
//! generation, and the sparse world index that ties them together.
//!
//! ## Data Flow
//!
//! A caller writes through [`world::World::set_voxel`], which resolves
//! the owning chunk by flooring the world coordinate, creates the chunk
//! on demand, and delegates to [`chunk::Chunk::set_voxel`]. The write
//! marks the chunk's mesh dirty; the next render rebuilds the vertex and
//! index buffers and hands them to the rendering collaborator.

pub mod block;
pub mod chunk;
pub mod chunk_coord;
pub mod terrain;
pub mod world;

pub use block::block_side::BlockSide;
pub use block::block_type::BlockType;
pub use block::Block;
pub use chunk::{Chunk, CHUNK_DIMENSION, CHUNK_PLANE_SIZE, CHUNK_VOLUME};
pub use chunk_coord::ChunkCoord;
pub use terrain::{TerrainGenerator, TerrainSettings};
pub use world::World;
