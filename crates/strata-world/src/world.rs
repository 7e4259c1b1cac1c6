//! The world facade: streaming, meshing, visibility and block queries behind
//! one owner.
//!
//! A frame calls [`World::tick`] with the observer position and then draws
//! [`World::visible_chunks_in_draw_order`]. Everything is single-threaded;
//! mutation goes through `&mut World`.

use glam::Vec3;
use strata_config::{Config, RenderConfig, TerrainConfig, WorldConfig};
use strata_mesh::{BlockUvTable, FaceDirection, TextureAtlas, build_chunk_geometry_capped};
use strata_terrain::{TerrainGenerator, TerrainParams};
use strata_voxel::{
    Block, BlockAccess, BlockPos, ChunkGenerator, ChunkStore, ChunkStreamer, MESH_DIRTY, Rgba,
    StreamConfig, StreamTickResult,
};

use crate::raycast::{RaycastHit, raycast};
use crate::visibility::{DrawList, update_visibility};

/// Outcome of one mesh refresh pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshRefresh {
    /// Chunks whose geometry was rebuilt.
    pub rebuilt: u32,
    /// Chunks left dirty because their geometry could not be built.
    pub failed: u32,
}

/// Counts reported by one [`World::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    pub stream: StreamTickResult,
    pub meshes: MeshRefresh,
    /// Loaded chunks within render distance after the tick.
    pub visible: usize,
    /// Loaded chunks after the tick.
    pub loaded: usize,
}

/// Generator parameters for the terrain section of the config.
pub fn terrain_params(config: &TerrainConfig) -> TerrainParams {
    TerrainParams {
        seed: config.seed,
        base_frequency: config.base_frequency,
        amplitude: config.amplitude,
        octaves: config.octaves,
        sea_level: config.sea_level,
        tree_noise_scale: config.tree_noise_scale,
        tree_noise_threshold: config.tree_noise_threshold,
        tree_frequency: config.tree_frequency,
    }
}

/// Owns every loaded chunk and drives the per-frame pipeline.
pub struct World {
    store: ChunkStore,
    streamer: ChunkStreamer,
    atlas: TextureAtlas,
    uvs: BlockUvTable,
    max_chunk_vertices: usize,
    observer: Vec3,
    spawn: Vec3,
}

impl World {
    /// Creates a world generated by [`TerrainGenerator`] from `config.terrain`.
    pub fn new(config: &Config) -> Self {
        let generator = TerrainGenerator::new(terrain_params(&config.terrain));
        Self::with_generator(&config.world, &config.render, Box::new(generator))
    }

    /// Creates a world with a custom chunk generator.
    pub fn with_generator(
        world: &WorldConfig,
        render: &RenderConfig,
        generator: Box<dyn ChunkGenerator>,
    ) -> Self {
        let spawn = Vec3::from_array(world.spawn_position);
        let mut store = ChunkStore::new(world.max_chunks, generator);
        store.set_observer(spawn);

        let streamer = ChunkStreamer::new(StreamConfig {
            render_distance: world.render_distance,
            unload_distance_factor: world.unload_distance_factor,
            max_loads_per_tick: world.max_loads_per_tick,
        });

        let atlas = TextureAtlas::for_blocks(render.atlas_size, render.tile_size);
        let uvs = BlockUvTable::new(&atlas);

        tracing::info!(
            capacity = world.max_chunks,
            render_distance = world.render_distance,
            textures = atlas.names().len(),
            "world created"
        );

        Self {
            store,
            streamer,
            atlas,
            uvs,
            max_chunk_vertices: render.max_chunk_vertices,
            observer: spawn,
            spawn,
        }
    }

    // -- Per-tick pipeline --------------------------------------------------

    /// Runs one frame: streaming, mesh refresh and visibility, in that order.
    pub fn tick(&mut self, observer: Vec3) -> TickReport {
        self.observer = observer;
        let stream = self.stream_around_observer();
        let meshes = self.refresh_dirty_meshes();
        let visible = self.update_visibility();

        let report = TickReport {
            stream,
            meshes,
            visible,
            loaded: self.store.loaded_count(),
        };
        tracing::debug!(?report, "world tick");
        report
    }

    /// Unloads chunks that fell out of range and loads missing ones around
    /// the current observer.
    pub fn stream_around_observer(&mut self) -> StreamTickResult {
        self.streamer.tick(self.observer, &mut self.store)
    }

    /// Rebuilds the geometry of every chunk flagged [`MESH_DIRTY`].
    ///
    /// A chunk whose buffers cannot be allocated, or would exceed the vertex
    /// cap, loses its geometry and stays dirty, so the next refresh retries
    /// it. Other chunks are unaffected.
    pub fn refresh_dirty_meshes(&mut self) -> MeshRefresh {
        let mut refresh = MeshRefresh::default();
        for handle in self.store.dirty_handles(MESH_DIRTY) {
            let Some(chunk) = self.store.get(handle) else {
                continue;
            };
            let result = build_chunk_geometry_capped(
                chunk,
                &self.store,
                &self.uvs,
                self.max_chunk_vertices,
            );

            let Some(chunk) = self.store.get_mut(handle) else {
                continue;
            };
            match result {
                Ok(geometry) => {
                    tracing::debug!(
                        column = ?chunk.column(),
                        vertices = geometry.vertex_count(),
                        "chunk mesh rebuilt"
                    );
                    chunk.set_geometry(geometry);
                    chunk.clear_dirty(MESH_DIRTY);
                    refresh.rebuilt += 1;
                }
                Err(err) => {
                    tracing::warn!(column = ?chunk.column(), %err, "chunk mesh rebuild failed");
                    chunk.release_geometry();
                    refresh.failed += 1;
                }
            }
        }
        refresh
    }

    /// Recomputes chunk visibility for the current observer and returns the
    /// visible count.
    pub fn update_visibility(&mut self) -> usize {
        let render_distance = self.streamer.config().render_distance;
        update_visibility(&mut self.store, self.observer, render_distance)
    }

    /// Visible chunks sorted for drawing.
    pub fn visible_chunks_in_draw_order(&self) -> DrawList<'_> {
        DrawList::collect(&self.store, self.observer)
    }

    // -- Block queries ------------------------------------------------------

    /// Block at `pos`. Unloaded columns and heights outside the world read
    /// as air.
    pub fn get_block(&self, pos: BlockPos) -> Block {
        self.store.get_block(pos)
    }

    /// Writes `block` at `pos`, loading the column if needed.
    ///
    /// Returns `false` when `y` is outside the world or the pool is full.
    pub fn set_block(&mut self, pos: BlockPos, block: Block) -> bool {
        self.store.set_block(pos, block)
    }

    /// First solid block along a ray, within `max_distance` blocks.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit> {
        raycast(&self.store, origin, direction, max_distance)
    }

    // -- Metadata -----------------------------------------------------------

    /// Whether `block` occupies its cell (air and liquids do not).
    pub fn is_block_solid(&self, block: Block) -> bool {
        block.is_solid()
    }

    /// Whether faces next to `block` stay visible.
    pub fn is_block_transparent(&self, block: Block) -> bool {
        block.is_transparent()
    }

    pub fn block_display_color(&self, block: Block) -> Rgba {
        block.display_color()
    }

    pub fn block_texture_name_for_face(&self, block: Block, face: FaceDirection) -> &'static str {
        strata_mesh::block_texture_name_for_face(block, face)
    }

    // -- Accessors ----------------------------------------------------------

    pub fn observer(&self) -> Vec3 {
        self.observer
    }

    /// Moves the observer without streaming.
    pub fn set_observer(&mut self, observer: Vec3) {
        self.observer = observer;
    }

    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    pub fn atlas(&self) -> &TextureAtlas {
        &self.atlas
    }

    pub fn stream_config(&self) -> &StreamConfig {
        self.streamer.config()
    }

    /// Unloads every chunk and returns the observer to spawn. Generation is
    /// deterministic, so the next ticks rebuild an identical world minus
    /// any edits.
    pub fn reset(&mut self) {
        let unloaded = self.store.loaded_count();
        self.store.clear();
        self.observer = self.spawn;
        self.store.set_observer(self.spawn);
        tracing::info!(unloaded, "world reset");
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("store", &self.store)
            .field("stream", self.streamer.config())
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}
