//! Headless Strata demo.
//!
//! Loads the config, streams a world around an observer flying a scripted
//! path, digs and places a block through a raycast, and logs per-tick
//! statistics along the way.
//!
//! Run with: `cargo run -p strata-demo -- --ticks 120 --render-distance 6`

mod path;

use clap::Parser;
use glam::Vec3;
use strata_config::{CliArgs, Config};
use strata_voxel::Block;
use strata_world::{DEFAULT_REACH, World};
use tracing::{info, warn};

use crate::path::ObserverPath;

/// CLI arguments for the demo binary.
#[derive(Parser, Debug)]
#[command(name = "strata-demo", about = "Headless Strata world demo")]
struct DemoArgs {
    #[command(flatten)]
    common: CliArgs,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 120)]
    ticks: u32,

    /// Observer speed in blocks per tick.
    #[arg(long, default_value_t = 2.0)]
    speed: f32,

    /// Log a summary every this many ticks.
    #[arg(long, default_value_t = 20)]
    report_every: u32,
}

fn main() {
    let args = DemoArgs::parse();

    let config_dir = args.common.config.clone().or_else(Config::default_dir);
    let (mut config, config_error) = match config_dir.as_deref().map(Config::load_or_create) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (Config::default(), Some(e.to_string())),
        None => (Config::default(), None),
    };
    config.apply_cli_overrides(&args.common);

    strata_log::init_logging(
        config.debug.log_dir.as_deref(),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!("Strata demo");
    if let Some(err) = config_error {
        warn!("Failed to load config, using defaults: {err}");
    }
    info!(
        "Render distance: {} chunks | pool: {} | seed: {}",
        config.world.render_distance, config.world.max_chunks, config.terrain.seed
    );

    let mut world = World::new(&config);
    let path = ObserverPath::new(world.spawn(), args.speed);
    let report_every = args.report_every.max(1);

    for tick in 0..args.ticks {
        let observer = path.at(tick);
        let report = world.tick(observer);

        if tick == args.ticks / 2 {
            edit_below(&mut world, observer);
        }

        if tick % report_every == 0 {
            let draw = world.visible_chunks_in_draw_order();
            let triangles: usize = draw
                .items()
                .iter()
                .map(|i| i.opaque.triangle_count() + i.transparent.triangle_count())
                .sum();
            info!(
                tick,
                x = observer.x,
                z = observer.z,
                loaded = report.loaded,
                visible = report.visible,
                streamed_in = report.stream.loaded,
                streamed_out = report.stream.unloaded,
                failed = report.stream.failed,
                meshed = report.meshes.rebuilt,
                triangles,
                "tick"
            );
        }
    }

    let draw = world.visible_chunks_in_draw_order();
    info!(
        "Final frame: {} chunks, {} opaque draws, {} transparent draws",
        draw.len(),
        draw.opaque_pass().count(),
        draw.transparent_pass().count()
    );
}

/// Looks straight down, digs out the surface block and puts glass on the
/// face that was hit.
fn edit_below(world: &mut World, observer: Vec3) {
    // The observer usually flies higher than the reach, so cast from just
    // above the tallest possible surface under it.
    let mut origin = observer;
    origin.y = observer.y.min(127.5);
    let Some(hit) = world.raycast(origin, Vec3::NEG_Y, origin.y) else {
        warn!("Nothing solid below the observer");
        return;
    };
    info!(
        "Hit {:?} at {:?} (distance {:.1}, reach {})",
        hit.block, hit.block_pos, hit.distance, DEFAULT_REACH
    );

    world.set_block(hit.block_pos, Block::Air);
    if world.set_block(hit.adjacent(), Block::Glass) {
        info!("Placed glass at {:?}", hit.adjacent());
    }
}
