//! # World Configuration Module
//!
//! Startup configuration for the voxel world: the terrain seed, the
//! bounding box of chunks instantiated by a full terrain generation, and
//! the terrain knobs. Loaded from JSON; every field falls back to its
//! default when absent so a partial file is valid.
//!
//! Config loading is the only fallible surface of the crate. The voxel
//! operations themselves never fail; coordinate errors are absorbed by
//! bounds checks and unloaded regions read as air.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::voxels::terrain::TerrainSettings;

/// Configuration for a [`crate::voxels::World`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Terrain generation seed.
    pub seed: i32,
    /// Inclusive minimum chunk coordinate of the generated box, per axis.
    pub generate_min: [i32; 3],
    /// Exclusive maximum chunk coordinate of the generated box, per axis.
    pub generate_max: [i32; 3],
    /// Terrain generation knobs.
    pub terrain: TerrainSettings,
}

impl Default for WorldConfig {
    /// The default world: seed 12345 over a 4x2x4 grid of chunks
    /// centered on the origin.
    fn default() -> Self {
        WorldConfig {
            seed: 12345,
            generate_min: [-2, -1, -2],
            generate_max: [2, 1, 2],
            terrain: TerrainSettings::default(),
        }
    }
}

impl WorldConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&contents)
    }

    /// Returns the number of chunks a full terrain generation will
    /// instantiate.
    pub fn generated_chunk_count(&self) -> usize {
        (0..3)
            .map(|axis| (self.generate_max[axis] - self.generate_min[axis]).max(0) as usize)
            .product()
    }
}

/// Errors produced while loading a world configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The contents were not valid configuration JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            ConfigError::Parse(err) => write!(f, "failed to parse config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WorldConfig;

    #[test]
    fn defaults_describe_the_standard_grid() {
        let config = WorldConfig::default();
        assert_eq!(config.seed, 12345);
        assert_eq!(config.generated_chunk_count(), 4 * 2 * 4);
        assert!(!config.terrain.carve_caves);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = WorldConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.generate_min, [-2, -1, -2]);
        assert_eq!(config.generate_max, [2, 1, 2]);
    }

    #[test]
    fn full_json_round_trips() {
        let config = WorldConfig::from_json_str(
            r#"{
                "seed": -3,
                "generate_min": [0, 0, 0],
                "generate_max": [1, 1, 1],
                "terrain": { "carve_caves": true, "cave_scale": 0.05, "cave_threshold": 0.1 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.seed, -3);
        assert_eq!(config.generated_chunk_count(), 1);
        assert!(config.terrain.carve_caves);

        let json = serde_json::to_string(&config).unwrap();
        let reparsed = WorldConfig::from_json_str(&json).unwrap();
        assert_eq!(reparsed.generate_max, [1, 1, 1]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WorldConfig::from_json_str("{ seed:").unwrap_err();
        assert!(matches!(err, super::ConfigError::Parse(_)));
    }

    #[test]
    fn inverted_bounds_count_as_empty() {
        let mut config = WorldConfig::default();
        config.generate_min = [2, 0, 0];
        config.generate_max = [-2, 1, 1];
        assert_eq!(config.generated_chunk_count(), 0);
    }
}
