//! # Block Type Module
//!
//! This module defines the different materials a voxel can hold.
//! It provides functionality for block type identification and conversion
//! to and from the compact byte codes used by chunk storage.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// Each variant represents a distinct material with its own color and
/// solidity. The `FromPrimitive` derive allows conversion from the byte
/// codes stored inside chunks, which is useful when reading voxel data
/// back out of the packed storage format.
///
/// `AIR` is the designated empty sentinel: every solidity and meshing
/// check keys off `!= AIR`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and never meshed.
    AIR = 0,

    /// A grass block forming the top layer of generated terrain.
    GRASS = 1,

    /// A dirt block, found directly below the grass layer.
    DIRT = 2,

    /// A stone block making up the bulk of generated terrain.
    STONE = 3,

    /// A sand block.
    SAND = 4,

    /// A water block. Treated as solid for meshing purposes in the
    /// current scope (no transparency pass exists).
    WATER = 5,
}

impl BlockType {
    /// Converts a stored byte code back into a `BlockType`.
    ///
    /// Unknown codes decode to `AIR` rather than failing, matching the
    /// lenient error policy of the voxel core: there is no way to make a
    /// chunk read operation fail.
    ///
    /// # Arguments
    /// * `code` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `BlockType::AIR` for codes that
    /// do not name a variant.
    pub fn from_code(code: BlockTypeSize) -> Self {
        let btype_option: Option<BlockType> = num::FromPrimitive::from_u8(code);
        btype_option.unwrap_or(BlockType::AIR)
    }

    /// Returns the byte code used to store this block type inside a chunk.
    pub fn code(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Returns whether this block type occupies its cell.
    ///
    /// Solidity drives face culling during meshing: a face is only
    /// emitted when the neighboring cell is non-solid.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }

    /// Generates a random non-air block type.
    ///
    /// This is primarily used by the diagnostic chunk fills and tests.
    ///
    /// # Returns
    /// A random `BlockType` that is not `BlockType::AIR`.
    pub fn random_solid() -> Self {
        Self::from_code(fastrand::u8(1..6))
    }
}

#[cfg(test)]
mod tests {
    use super::BlockType;

    #[test]
    fn round_trips_through_codes() {
        for btype in [
            BlockType::AIR,
            BlockType::GRASS,
            BlockType::DIRT,
            BlockType::STONE,
            BlockType::SAND,
            BlockType::WATER,
        ] {
            assert_eq!(BlockType::from_code(btype.code()), btype);
        }
    }

    #[test]
    fn unknown_codes_decode_to_air() {
        assert_eq!(BlockType::from_code(6), BlockType::AIR);
        assert_eq!(BlockType::from_code(255), BlockType::AIR);
    }

    #[test]
    fn only_air_is_non_solid() {
        assert!(!BlockType::AIR.is_solid());
        assert!(BlockType::GRASS.is_solid());
        assert!(BlockType::WATER.is_solid());
    }
}
