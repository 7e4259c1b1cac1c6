//! Command-line argument parsing shared by Strata binaries.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Strata voxel world")]
pub struct CliArgs {
    /// Render distance in chunks.
    #[arg(long)]
    pub render_distance: Option<u32>,

    /// Chunk pool capacity.
    #[arg(long)]
    pub max_chunks: Option<usize>,

    /// Maximum chunk loads per tick (0 = unlimited).
    #[arg(long)]
    pub max_loads_per_tick: Option<u32>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<i32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(rd) = args.render_distance {
            self.world.render_distance = rd;
        }
        if let Some(max) = args.max_chunks {
            self.world.max_chunks = max;
        }
        if let Some(budget) = args.max_loads_per_tick {
            self.world.max_loads_per_tick = budget;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
