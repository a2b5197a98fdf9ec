//! # Terrain Generation Module
//!
//! Deterministic procedural terrain for chunks. The height field comes
//! from a seeded value-noise function smoothed by trilinear interpolation;
//! an optional cave pass carves air pockets out of the underground using
//! 3D Perlin noise.
//!
//! Every function here is a pure function of its inputs. There is no RNG
//! state and no dependency on generation order, so chunks can be
//! (re)generated independently and in any order and always produce the
//! same voxel contents for the same (chunk coordinate, seed) pair.

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use super::block::block_type::BlockType;
use super::chunk::{Chunk, CHUNK_DIMENSION};

/// Scaling factor applied to world X/Z coordinates when sampling the
/// height-field noise.
pub const HEIGHT_NOISE_SCALE: f32 = 0.05;

/// Scaling factor applied to world coordinates when sampling cave noise.
pub const CAVE_NOISE_SCALE: f64 = 0.02;

/// Half-width of the noise band that reads as open cave space. A cave
/// sample inside `[-CAVE_NOISE_THRESHOLD, CAVE_NOISE_THRESHOLD]` carves
/// the cell to air.
pub const CAVE_NOISE_THRESHOLD: f64 = 0.2;

/// Deterministic lattice noise in `[-1, 1]`.
///
/// Built from an integer hash of the inputs. Wrapping arithmetic keeps the
/// bit pattern identical on every platform.
pub fn value_noise_3d(x: f32, y: f32, z: f32, seed: i32) -> f32 {
    let n = (x * 57.0 + y * 113.0 + z * 197.0 + seed as f32 * 1019.0) as i32;
    let n = (n << 13) ^ n;
    let hashed = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - hashed as f32 / 1_073_741_824.0
}

/// Smoothed value noise: trilinearly blends the 8 lattice-corner samples
/// around `(x, y, z)` using a smoothstep weight `3t^2 - 2t^3` on each
/// axis's fractional part.
///
/// Output stays within `[-1, 1]` since it is a convex combination of
/// `value_noise_3d` samples.
pub fn perlin_noise_3d(x: f32, y: f32, z: f32, seed: i32) -> f32 {
    let xi = x.floor() as i32;
    let yi = y.floor() as i32;
    let zi = z.floor() as i32;

    let xf = x - xi as f32;
    let yf = y - yi as f32;
    let zf = z - zi as f32;

    // Smoothstep weights
    let u = xf * xf * (3.0 - 2.0 * xf);
    let v = yf * yf * (3.0 - 2.0 * yf);
    let w = zf * zf * (3.0 - 2.0 * zf);

    let corner = |dx: i32, dy: i32, dz: i32| {
        value_noise_3d(
            (xi + dx) as f32,
            (yi + dy) as f32,
            (zi + dz) as f32,
            seed,
        )
    };

    let n000 = corner(0, 0, 0);
    let n100 = corner(1, 0, 0);
    let n010 = corner(0, 1, 0);
    let n110 = corner(1, 1, 0);
    let n001 = corner(0, 0, 1);
    let n101 = corner(1, 0, 1);
    let n011 = corner(0, 1, 1);
    let n111 = corner(1, 1, 1);

    let x00 = n000 * (1.0 - u) + n100 * u;
    let x10 = n010 * (1.0 - u) + n110 * u;
    let x01 = n001 * (1.0 - u) + n101 * u;
    let x11 = n011 * (1.0 - u) + n111 * u;

    let y0 = x00 * (1.0 - v) + x10 * v;
    let y1 = x01 * (1.0 - v) + x11 * v;

    y0 * (1.0 - w) + y1 * w
}

/// Returns the terrain surface height for the world-space column
/// `(world_x, world_z)`, in roughly `[0, 16]`.
pub fn surface_height(world_x: i32, world_z: i32, seed: i32) -> i32 {
    let sample = perlin_noise_3d(
        world_x as f32 * HEIGHT_NOISE_SCALE,
        0.0,
        world_z as f32 * HEIGHT_NOISE_SCALE,
        seed,
    );
    (sample * 8.0).floor() as i32 + 8
}

/// Tunable knobs for terrain generation.
///
/// These are part of the world configuration file, so they derive the
/// serde traits and fall back to defaults field by field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Whether the underground cave pass runs after the height field.
    pub carve_caves: bool,
    /// World-coordinate scale for cave noise sampling.
    pub cave_scale: f64,
    /// Half-width of the cave noise band that carves to air.
    pub cave_threshold: f64,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        TerrainSettings {
            carve_caves: false,
            cave_scale: CAVE_NOISE_SCALE,
            cave_threshold: CAVE_NOISE_THRESHOLD,
        }
    }
}

/// Fills chunks with deterministic terrain for a fixed seed.
///
/// One generator can fill any number of chunks; the output for a chunk
/// depends only on the chunk's coordinate, the seed, and the settings.
pub struct TerrainGenerator {
    seed: i32,
    settings: TerrainSettings,
    cave_noise: Perlin,
}

impl TerrainGenerator {
    /// Creates a generator for the given seed and settings.
    pub fn new(seed: i32, settings: TerrainSettings) -> Self {
        TerrainGenerator {
            seed,
            settings,
            cave_noise: Perlin::new(seed as u32),
        }
    }

    /// Returns the seed this generator was built with.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Overwrites a chunk's voxels with generated terrain.
    ///
    /// For every (x, z) column the surface height is sampled at the
    /// column's world coordinates, then each cell is classified by its
    /// world Y: stone below `height - 3`, dirt up to `height - 1`, grass
    /// at `height - 1`, air at and above `height`. When cave carving is
    /// enabled, underground cells whose cave-noise sample falls inside
    /// the threshold band become air; the surface layer is left intact
    /// so grass tops survive.
    ///
    /// Leaves the chunk's mesh marked dirty.
    pub fn fill_chunk(&self, chunk: &mut Chunk) {
        let origin = chunk.position().world_origin();

        for x in 0..CHUNK_DIMENSION {
            for z in 0..CHUNK_DIMENSION {
                let world_x = origin.x + x;
                let world_z = origin.z + z;
                let height = surface_height(world_x, world_z, self.seed);

                for y in 0..CHUNK_DIMENSION {
                    let world_y = origin.y + y;

                    let mut block = if world_y < height - 3 {
                        BlockType::STONE
                    } else if world_y < height - 1 {
                        BlockType::DIRT
                    } else if world_y < height {
                        BlockType::GRASS
                    } else {
                        BlockType::AIR
                    };

                    // Only carve strictly below the surface layer.
                    if self.settings.carve_caves
                        && block.is_solid()
                        && world_y < height - 1
                        && self.is_cave(world_x, world_y, world_z)
                    {
                        block = BlockType::AIR;
                    }

                    chunk.set_voxel(x, y, z, block);
                }
            }
        }
    }

    fn is_cave(&self, world_x: i32, world_y: i32, world_z: i32) -> bool {
        let sample = self.cave_noise.get([
            world_x as f64 * self.settings.cave_scale,
            world_y as f64 * self.settings.cave_scale,
            world_z as f64 * self.settings.cave_scale,
        ]);
        (-self.settings.cave_threshold..=self.settings.cave_threshold).contains(&sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::chunk_coord::ChunkCoord;

    #[test]
    fn value_noise_is_pure_and_bounded() {
        for i in -50..50 {
            let (x, y, z) = (i as f32 * 0.7, i as f32 * 1.3, i as f32 * -0.4);
            let a = value_noise_3d(x, y, z, 42);
            let b = value_noise_3d(x, y, z, 42);
            assert_eq!(a, b);
            assert!((-1.0..=1.0).contains(&a), "sample {a} out of range");
        }
    }

    #[test]
    fn smoothed_noise_stays_bounded() {
        for i in -40..40 {
            for j in -40..40 {
                let sample = perlin_noise_3d(i as f32 * 0.11, 0.0, j as f32 * 0.17, 7);
                assert!((-1.0..=1.0).contains(&sample));
            }
        }
    }

    #[test]
    fn seeds_change_the_field() {
        let mut differs = false;
        for i in 0..32 {
            let x = i as f32 * 0.3;
            if value_noise_3d(x, 0.0, 0.0, 1) != value_noise_3d(x, 0.0, 0.0, 2) {
                differs = true;
                break;
            }
        }
        assert!(differs, "two seeds produced identical noise everywhere");
    }

    #[test]
    fn surface_height_stays_in_chunk_range() {
        for wx in -64..64 {
            for wz in -64..64 {
                let h = surface_height(wx, wz, 12345);
                assert!((0..=16).contains(&h), "height {h} at ({wx}, {wz})");
            }
        }
    }

    #[test]
    fn cave_carving_is_deterministic() {
        let settings = TerrainSettings {
            carve_caves: true,
            ..TerrainSettings::default()
        };
        let generator_a = TerrainGenerator::new(99, settings);
        let generator_b = TerrainGenerator::new(99, settings);

        let mut chunk_a = Chunk::new(ChunkCoord::new(1, -1, 2));
        let mut chunk_b = Chunk::new(ChunkCoord::new(1, -1, 2));
        generator_a.fill_chunk(&mut chunk_a);
        generator_b.fill_chunk(&mut chunk_b);

        assert_eq!(
            bytemuck::bytes_of(chunk_a.voxels()),
            bytemuck::bytes_of(chunk_b.voxels())
        );
    }
}
