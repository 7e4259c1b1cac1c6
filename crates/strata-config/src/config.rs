//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level world configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Chunk pool and streaming settings.
    pub world: WorldConfig,
    /// Procedural terrain settings.
    pub terrain: TerrainConfig,
    /// Texture atlas layout consumed by the mesher.
    pub render: RenderConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Chunk pool and streaming configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Load radius around the observer, in chunks.
    pub render_distance: u32,
    /// Capacity of the chunk pool.
    pub max_chunks: usize,
    /// Unload radius as a multiple of the load radius (hysteresis band).
    pub unload_distance_factor: f32,
    /// Maximum chunk loads per tick. `0` loads everything in range at once.
    pub max_loads_per_tick: u32,
    /// Initial observer position in world space.
    pub spawn_position: [f32; 3],
}

/// Procedural terrain configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// World seed mixed into every noise hash. `0` is the reference world.
    pub seed: i32,
    /// Frequency of the first height octave.
    pub base_frequency: f64,
    /// Amplitude of the first height octave, in blocks.
    pub amplitude: f64,
    /// Number of height octaves.
    pub octaves: u32,
    /// Water level and height baseline, in blocks.
    pub sea_level: i32,
    /// Coordinate scale of the tree-cluster noise.
    pub tree_noise_scale: f64,
    /// Tree-cluster noise threshold in `[0, 1)`.
    pub tree_noise_threshold: f64,
    /// Fraction of eligible grass columns that grow a tree (0.0 - 1.0).
    pub tree_frequency: f64,
}

/// Texture atlas and mesh buffer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Atlas edge length in pixels.
    pub atlas_size: u32,
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Vertex cap for each of a chunk's two geometry buffers.
    pub max_chunk_vertices: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files (debug builds only).
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            render_distance: 8,
            max_chunks: 256,
            unload_distance_factor: 1.5,
            max_loads_per_tick: 0,
            spawn_position: [0.0, 70.0, 0.0],
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            base_frequency: 0.01,
            amplitude: 32.0,
            octaves: 4,
            sea_level: 62,
            tree_noise_scale: 0.1,
            tree_noise_threshold: 0.85,
            tree_frequency: 0.05,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            atlas_size: 256,
            tile_size: 16,
            max_chunk_vertices: 1 << 20,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for Strata (`<config_dir>/strata`), if the
    /// platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("strata"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read_file(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        log::info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read_file(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("render_distance: 8"));
        assert!(ron_str.contains("max_chunks: 256"));
        assert!(ron_str.contains("sea_level: 62"));
    }

    #[test]
    fn test_defaults_match_reference_world() {
        let config = Config::default();
        assert_eq!(config.world.render_distance, 8);
        assert_eq!(config.world.max_chunks, 256);
        assert_eq!(config.world.spawn_position, [0.0, 70.0, 0.0]);
        assert_eq!(config.terrain.seed, 0);
        assert_eq!(config.terrain.octaves, 4);
        assert!((config.terrain.base_frequency - 0.01).abs() < 1e-12);
        assert!((config.terrain.amplitude - 32.0).abs() < 1e-12);
        assert!((config.terrain.tree_frequency - 0.05).abs() < 1e-12);
        assert_eq!(config.render.max_chunk_vertices, 1_048_576);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.debug.log_dir = Some(PathBuf::from("logs"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        // Config missing the `terrain` section entirely
        let ron_str = "(world: (render_distance: 4), render: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.world.render_distance, 4);
        assert_eq!(config.world.max_chunks, 256);
        assert_eq!(config.terrain, TerrainConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.render_distance = 12;
        config.terrain.seed = 1337;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.world.max_chunks = 64;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().world.max_chunks, 64);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        match result {
            Err(ConfigError::Parse { path, .. }) => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::default().reload(dir.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
