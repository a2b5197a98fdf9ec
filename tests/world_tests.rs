//! Integration tests for the world index: coordinate transforms,
//! on-demand chunk creation, unloaded-region reads, bulk generation, and
//! the render path.

use voxel_world::{
    BlockType, ChunkCoord, MeshStatistics, StaticCamera, World, WorldConfig,
};

#[test]
fn reads_from_an_empty_world_allocate_nothing() {
    let world = World::new();

    for coord in [(0, 0, 0), (1000, -500, 3), (-1, -1, -1)] {
        assert_eq!(
            world.get_voxel(coord.0, coord.1, coord.2),
            BlockType::AIR
        );
    }
    assert_eq!(world.chunk_count(), 0);
}

#[test]
fn a_write_creates_exactly_one_chunk() {
    let mut world = World::new();
    world.set_voxel(100, 20, -40, BlockType::DIRT);

    assert_eq!(world.chunk_count(), 1);
    assert_eq!(world.get_voxel(100, 20, -40), BlockType::DIRT);

    // A second write into the same chunk reuses it.
    world.set_voxel(101, 20, -40, BlockType::STONE);
    assert_eq!(world.chunk_count(), 1);
}

#[test]
fn negative_world_coordinates_floor_to_the_owning_chunk() {
    assert_eq!(World::world_to_chunk(-1, -1, -1), ChunkCoord::new(-1, -1, -1));
    assert_eq!(World::world_to_chunk(-16, 0, 15), ChunkCoord::new(-1, 0, 0));
    assert_eq!(World::world_to_chunk(-17, 31, -33), ChunkCoord::new(-2, 1, -3));

    let mut world = World::new();
    world.set_voxel(-1, -1, -1, BlockType::SAND);

    // The write landed in chunk (-1,-1,-1) at local (15,15,15).
    let chunk = world.chunk_at(ChunkCoord::new(-1, -1, -1)).unwrap();
    assert_eq!(chunk.get_voxel(15, 15, 15), BlockType::SAND);
    assert_eq!(world.get_voxel(-1, -1, -1), BlockType::SAND);
}

#[test]
fn chunk_lookup_never_creates() {
    let world = World::new();
    assert!(world.chunk_at(ChunkCoord::new(0, 0, 0)).is_none());
    assert_eq!(world.chunk_count(), 0);
}

#[test]
fn generate_terrain_instantiates_the_configured_box() {
    let mut world = World::new();
    world.generate_terrain(12345);

    // Default config is the 4x2x4 grid around the origin.
    assert_eq!(world.chunk_count(), 32);
    assert!(world.chunk_at(ChunkCoord::new(-2, -1, -2)).is_some());
    assert!(world.chunk_at(ChunkCoord::new(1, 0, 1)).is_some());
    assert!(world.chunk_at(ChunkCoord::new(2, 0, 0)).is_none());
}

#[test]
fn generate_terrain_is_a_full_reset() {
    let mut world = World::new();
    world.set_voxel(500, 0, 500, BlockType::STONE);
    assert_eq!(world.chunk_count(), 1);

    world.generate_terrain(1);
    // The far-away edit chunk is gone; only the configured box remains.
    assert_eq!(world.chunk_count(), 32);
    assert_eq!(world.get_voxel(500, 0, 500), BlockType::AIR);
    assert_eq!(world.seed(), 1);
}

#[test]
fn worlds_with_the_same_seed_agree_everywhere() {
    let mut first = World::new();
    let mut second = World::new();
    first.generate_terrain(999);
    second.generate_terrain(999);

    for x in -32..32 {
        for z in -32..32 {
            for y in -4..16 {
                assert_eq!(first.get_voxel(x, y, z), second.get_voxel(x, y, z));
            }
        }
    }
}

#[test]
fn initialize_uses_the_configured_seed() {
    let config = WorldConfig {
        seed: 4242,
        generate_min: [0, 0, 0],
        generate_max: [1, 1, 1],
        ..WorldConfig::default()
    };
    let mut world = World::with_config(config);
    world.initialize();

    assert_eq!(world.seed(), 4242);
    assert_eq!(world.chunk_count(), 1);
}

#[test]
fn render_submits_every_non_empty_chunk_once() {
    let config = WorldConfig {
        generate_min: [-1, 0, -1],
        generate_max: [1, 1, 1],
        ..WorldConfig::default()
    };
    let mut world = World::with_config(config);
    world.initialize();

    let camera = StaticCamera::at_origin();
    let mut statistics = MeshStatistics::new();
    world.render(&mut statistics, &camera);

    // Every submitted mesh is a whole number of quads; empty chunks are
    // skipped entirely.
    assert!(statistics.meshes > 0);
    assert!(statistics.meshes <= world.chunk_count());
    assert!(statistics.vertices > 0);
    assert_eq!(statistics.vertices % 4, 0);

    // Rendering again submits the same cached meshes without remeshing.
    let mut second_pass = MeshStatistics::new();
    world.render(&mut second_pass, &camera);
    assert_eq!(second_pass.vertices, statistics.vertices);
    assert_eq!(second_pass.triangles, statistics.triangles);
}

#[test]
fn mutable_lookup_edits_in_place() {
    let mut world = World::new();
    world.set_voxel(0, 0, 0, BlockType::GRASS);

    let chunk = world.chunk_at_mut(ChunkCoord::new(0, 0, 0)).unwrap();
    chunk.set_voxel(0, 0, 0, BlockType::STONE);

    assert_eq!(world.get_voxel(0, 0, 0), BlockType::STONE);
    assert_eq!(world.chunk_count(), 1);
}

#[test]
fn local_to_world_inverts_the_transform() {
    let coord = ChunkCoord::new(-3, 2, 0);
    let world_pos = World::local_to_world(coord, cgmath::Point3::new(5, 0, 15));
    assert_eq!(world_pos, cgmath::Point3::new(-43, 32, 15));
    assert_eq!(
        World::world_to_chunk(world_pos.x, world_pos.y, world_pos.z),
        coord
    );
}
