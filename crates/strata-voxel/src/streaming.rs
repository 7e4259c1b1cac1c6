//! Chunk streaming around an observer with a hysteresis band and an
//! optional per-tick load budget.
//!
//! Columns whose origin lies within `render_distance * CHUNK_SIZE` blocks
//! (horizontally) of the observer are loaded. Loaded columns farther than
//! `unload_distance_factor` times that radius are unloaded. The gap between
//! the two radii keeps a column at the edge from loading and unloading on
//! alternate ticks.

use glam::Vec3;

use crate::chunk::CHUNK_SIZE;
use crate::chunk_store::ChunkStore;
use crate::coords::{ColumnPos, distance_2d};

/// Configuration for the streaming system.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamConfig {
    /// Load radius in chunks.
    pub render_distance: u32,
    /// Unload radius as a multiple of the load radius. Must be > 1.
    pub unload_distance_factor: f32,
    /// Maximum chunk loads per tick, nearest first. `0` means unlimited.
    pub max_loads_per_tick: u32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            render_distance: 8,
            unload_distance_factor: 1.5,
            max_loads_per_tick: 0,
        }
    }
}

impl StreamConfig {
    /// Load radius in blocks.
    pub fn load_radius(&self) -> f32 {
        (self.render_distance as usize * CHUNK_SIZE) as f32
    }

    /// Unload radius in blocks.
    pub fn unload_radius(&self) -> f32 {
        self.load_radius() * self.unload_distance_factor
    }
}

/// Result of a single streaming tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamTickResult {
    /// Number of chunks loaded this tick.
    pub loaded: u32,
    /// Number of chunks unloaded this tick.
    pub unloaded: u32,
    /// Number of loads refused because the pool was full.
    pub failed: u32,
    /// Number of in-range columns left for a later tick by the load budget.
    pub deferred: u32,
}

/// The streaming controller.
///
/// Call [`ChunkStreamer::tick`] once per frame with the observer position.
#[derive(Debug, Default)]
pub struct ChunkStreamer {
    config: StreamConfig,
}

impl ChunkStreamer {
    pub fn new(config: StreamConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Runs one streaming tick.
    ///
    /// 1. Records the observer on the store.
    /// 2. Unloads every chunk beyond the unload radius.
    /// 3. Loads missing columns within the load radius, nearest first,
    ///    up to `max_loads_per_tick`.
    pub fn tick(&mut self, observer: Vec3, store: &mut ChunkStore) -> StreamTickResult {
        let mut result = StreamTickResult::default();
        store.set_observer(observer);

        // --- Step 1: unload distant chunks ---
        let unload_radius = self.config.unload_radius();
        let unload_candidates: Vec<ColumnPos> = store
            .loaded_columns()
            .filter(|column| distance_2d(observer, column.origin()) > unload_radius)
            .collect();
        for column in unload_candidates {
            if store.unload_chunk(column) {
                result.unloaded += 1;
            }
        }

        // --- Step 2: scan the square around the observer's column ---
        let load_radius = self.config.load_radius();
        let rd = self.config.render_distance as i32;
        let center = ColumnPos::from_world(observer);
        let mut candidates: Vec<(f32, ColumnPos)> = Vec::new();
        for dx in -rd..=rd {
            for dz in -rd..=rd {
                let column = center.offset(dx, dz);
                let distance = distance_2d(observer, column.origin());
                if distance <= load_radius && store.handle_of(column).is_none() {
                    candidates.push((distance, column));
                }
            }
        }
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

        // --- Step 3: load nearest first ---
        let budget = match self.config.max_loads_per_tick {
            0 => usize::MAX,
            n => n as usize,
        };
        for (i, (_, column)) in candidates.iter().enumerate() {
            if i >= budget {
                result.deferred = (candidates.len() - i) as u32;
                break;
            }
            if store.load_chunk(*column).is_some() {
                result.loaded += 1;
            } else {
                result.failed += 1;
            }
        }

        if result.loaded > 0 || result.unloaded > 0 {
            tracing::debug!(
                loaded = result.loaded,
                unloaded = result.unloaded,
                failed = result.failed,
                deferred = result.deferred,
                resident = store.loaded_count(),
                "streaming tick"
            );
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
