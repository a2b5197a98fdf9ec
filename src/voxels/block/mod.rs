//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel
//! core. It includes block type definitions, block face handling, and the
//! compact block representation used by chunk storage.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
/// This is used for efficient storage of voxel data: one byte per cell.
pub type BlockTypeSize = u8;

/// Maps each block type to the flat color its faces are shaded with.
///
/// The array is indexed by the block type's byte code. The `AIR` entry is
/// white; it is never emitted into a mesh but keeps the table dense so a
/// code can index it directly.
pub static BLOCK_TYPE_TO_COLOR: [[f32; 3]; 6] = [
    [1.0, 1.0, 1.0], // AIR (placeholder, never meshed)
    [0.3, 0.8, 0.2], // GRASS
    [0.6, 0.4, 0.2], // DIRT
    [0.5, 0.5, 0.5], // STONE
    [0.9, 0.9, 0.6], // SAND
    [0.2, 0.4, 0.8], // WATER
];

/// Represents a single voxel cell in chunk storage.
///
/// This is a lightweight structure that stores only the block type code.
/// All other block properties are looked up from the type.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute and the bytemuck derives give the block a
/// stable one-byte layout, so a chunk's voxel array can be viewed as a
/// plain byte slice for comparisons and (future) GPU upload.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize`.
    pub code: BlockTypeSize,
}

impl Block {
    /// Creates a new block of the specified type.
    ///
    /// # Arguments
    /// * `block_type` - The type of block to create
    pub fn new(block_type: BlockType) -> Self {
        Block {
            code: block_type.code(),
        }
    }

    /// Returns the rich block type for this cell.
    ///
    /// Unknown codes decode to `AIR`.
    pub fn block_type(self) -> BlockType {
        BlockType::from_code(self.code)
    }

    /// Returns whether this cell holds a solid block.
    pub fn is_solid(self) -> bool {
        self.block_type().is_solid()
    }

    /// Looks up the face color for a block given its type code.
    ///
    /// # Arguments
    /// * `code` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The RGB color from `BLOCK_TYPE_TO_COLOR`, or white for codes with
    /// no table entry.
    pub fn color_from_code(code: BlockTypeSize) -> [f32; 3] {
        BLOCK_TYPE_TO_COLOR
            .get(code as usize)
            .copied()
            .unwrap_or([1.0, 1.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockType};

    #[test]
    fn block_is_one_byte() {
        assert_eq!(std::mem::size_of::<Block>(), 1);
    }

    #[test]
    fn color_lookup_matches_palette() {
        assert_eq!(
            Block::color_from_code(BlockType::GRASS.code()),
            [0.3, 0.8, 0.2]
        );
        assert_eq!(
            Block::color_from_code(BlockType::WATER.code()),
            [0.2, 0.4, 0.8]
        );
        // Codes past the table fall back to white.
        assert_eq!(Block::color_from_code(200), [1.0, 1.0, 1.0]);
    }
}
