//! Configuration system for the Strata voxel world.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and stay forward/backward compatible thanks to
//! `#[serde(default)]` on every section.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, RenderConfig, TerrainConfig, WorldConfig};
pub use error::ConfigError;
