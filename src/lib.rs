#![warn(missing_docs)]

//! # Voxel World
//!
//! A chunk-based voxel world core: sparse 3D block storage, deterministic
//! terrain generation, and face-culled surface meshing.
//!
//! ## Key Modules
//!
//! * `voxels` - Block types, chunk storage and meshing, terrain
//!   generation, and the sparse world index
//! * `rendering` - The plain-data vertex/mesh types and the narrow
//!   renderer/camera collaborator traits
//! * `config` - World configuration loaded from JSON
//!
//! ## Architecture
//!
//! The crate deliberately stops at the data boundary: it emits vertex and
//! index buffers and consumes opaque renderer/camera handles, but issues
//! no graphics-API calls, opens no windows, and performs no I/O beyond
//! optional config loading. Rendering backends, input, and UI live in the
//! surrounding application.
//!
//! ## Usage
//!
//! ```no_run
//! use voxel_world::{BlockType, World};
//!
//! let mut world = World::new();
//! world.initialize();
//! world.set_voxel(3, 20, -5, BlockType::STONE);
//! assert_eq!(world.get_voxel(3, 20, -5), BlockType::STONE);
//! ```
//!
//! ## Concurrency
//!
//! Execution is single-threaded and synchronous. Each chunk's dirty flag
//! is a plain bool; one logical thread owns the world at a time.

use std::path::Path;

use log::{info, warn};

pub mod config;
pub mod rendering;
pub mod voxels;

pub use config::{ConfigError, WorldConfig};
pub use rendering::{Camera, ChunkMesh, ChunkRenderer, MeshStatistics, StaticCamera, Vertex};
pub use voxels::{Block, BlockSide, BlockType, Chunk, ChunkCoord, TerrainGenerator, World};

/// Config file name the demo binary looks for in the working directory.
const CONFIG_FILE: &str = "voxel-world.json";

/// Runs the headless demo: generates the configured world, meshes every
/// chunk, and logs what a frame would submit to a renderer.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config_path = Path::new(CONFIG_FILE);
    let config = if config_path.exists() {
        match WorldConfig::load(config_path) {
            Ok(config) => {
                info!("Loaded config from {CONFIG_FILE}");
                config
            }
            Err(err) => {
                warn!("{err}; falling back to default config");
                WorldConfig::default()
            }
        }
    } else {
        WorldConfig::default()
    };

    let mut world = World::with_config(config);
    world.initialize();
    world.update(0.0);

    let camera = StaticCamera::at_origin();
    let mut statistics = MeshStatistics::new();
    world.render(&mut statistics, &camera);

    for coord in world.loaded_coords() {
        if let Some(chunk) = world.chunk_at(coord) {
            info!(
                "chunk ({}, {}, {}): {} triangles",
                coord.x,
                coord.y,
                coord.z,
                chunk.mesh().triangle_count()
            );
        }
    }

    info!(
        "frame would submit {} meshes, {} vertices, {} triangles",
        statistics.meshes, statistics.vertices, statistics.triangles
    );
}
