//! Face-culled surface extraction for a single chunk.
//!
//! The mesher walks every cell in the chunk and, for each solid voxel,
//! emits one quad per face whose neighbor is non-solid. Neighbors outside
//! the chunk count as non-solid, so border faces are always emitted; see
//! the note on [`Chunk::is_voxel_solid`].

use cgmath::Point3;

use super::{Chunk, CHUNK_DIMENSION};
use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::Block;

impl Chunk {
    /// Rebuilds this chunk's surface mesh from its current voxel
    /// contents and clears the dirty flag.
    ///
    /// The old vertex and index buffers are discarded entirely; the mesh
    /// is never patched incrementally. Quads are positioned at the
    /// voxel's world coordinates and colored from the per-block palette.
    pub fn regenerate_mesh(&mut self) {
        let mut mesh = std::mem::take(&mut self.mesh);
        mesh.clear();

        for x in 0..CHUNK_DIMENSION {
            for y in 0..CHUNK_DIMENSION {
                for z in 0..CHUNK_DIMENSION {
                    let block_type = self.get_voxel(x, y, z);
                    if !block_type.is_solid() {
                        continue;
                    }

                    let world = self.world_position(x, y, z);
                    let color = Block::color_from_code(block_type.code());

                    for side in BlockSide::all() {
                        let offset = side.neighbor_offset();
                        if !self.is_voxel_solid(x + offset.x, y + offset.y, z + offset.z) {
                            add_face(&mut mesh, world, side, color);
                        }
                    }
                }
            }
        }

        log::trace!(
            "remeshed chunk {:?}: {} vertices, {} indices",
            self.position(),
            mesh.vertices.len(),
            mesh.indices.len()
        );

        self.mesh = mesh;
        self.mesh_dirty = false;
    }
}

/// Appends one quad for the given face of the voxel at `world`.
fn add_face(
    mesh: &mut crate::rendering::mesh::ChunkMesh,
    world: Point3<i32>,
    side: BlockSide,
    color: [f32; 3],
) {
    let base = Point3::new(world.x as f32, world.y as f32, world.z as f32);
    let corners = side.corner_offsets().map(|offset| base + offset);
    mesh.add_face(&corners, side.normal(), color);
}
