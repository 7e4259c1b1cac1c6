//! Chunk terrain generation: layered columns, flooded lowlands and trees.

use strata_voxel::{Block, CHUNK_SIZE, Chunk, ChunkGenerator, WORLD_HEIGHT};

use crate::feature::TreePlacer;
use crate::heightmap::{HeightmapSampler, TerrainParams};

/// Depth of the dirt layer between the surface block and stone.
pub const DIRT_DEPTH: i32 = 3;

/// Deterministic terrain generator.
///
/// Columns are filled in x-major, z-minor order. A tree stamped by an
/// earlier column can therefore be overwritten by the terrain of a later,
/// taller column in the same chunk.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    heights: HeightmapSampler,
    trees: TreePlacer,
    sea_level: i32,
}

impl TerrainGenerator {
    pub fn new(params: TerrainParams) -> Self {
        Self {
            trees: TreePlacer::new(&params),
            sea_level: params.sea_level,
            heights: HeightmapSampler::new(params),
        }
    }

    pub fn params(&self) -> &TerrainParams {
        self.heights.params()
    }

    pub fn heights(&self) -> &HeightmapSampler {
        &self.heights
    }

    pub fn trees(&self) -> &TreePlacer {
        &self.trees
    }

    /// Integer surface height at world column `(wx, wz)`, truncated and
    /// clamped to the world.
    pub fn surface_height(&self, wx: i32, wz: i32) -> i32 {
        (self.heights.column_height(wx, wz) as i32).clamp(0, WORLD_HEIGHT as i32 - 1)
    }

    /// Block at height `y` of a column whose surface is at `height`, before
    /// water and trees.
    pub fn layer_block(&self, y: i32, height: i32) -> Block {
        if y < height - DIRT_DEPTH {
            Block::Stone
        } else if y < height {
            Block::Dirt
        } else if height > self.sea_level {
            Block::Grass
        } else {
            Block::Dirt
        }
    }

    /// Clears `chunk` to air and fills it with terrain for its column.
    pub fn generate_chunk(&self, chunk: &mut Chunk) {
        chunk.fill(Block::Air);
        let column = chunk.column();

        let mut trees = 0u32;
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let world = column.block_at(x, 0, z);
                let height = self.surface_height(world.x, world.z);

                for y in 0..=height {
                    chunk.set(x, y as usize, z, self.layer_block(y, height));
                }

                let water_top = self.sea_level.min(WORLD_HEIGHT as i32 - 1);
                for y in (height + 1)..=water_top {
                    if !chunk.get(x, y as usize, z).is_solid() {
                        chunk.set(x, y as usize, z, Block::Water);
                    }
                }

                let top = chunk.get(x, height as usize, z);
                if height > self.sea_level
                    && top == Block::Grass
                    && self.trees.should_place_tree(world.x, world.z)
                    && self.trees.place_tree(chunk, x, (height + 1) as usize, z)
                {
                    trees += 1;
                }
            }
        }

        tracing::trace!(column = ?column, trees, "terrain generated");
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new(TerrainParams::default())
    }
}

impl ChunkGenerator for TerrainGenerator {
    fn generate(&self, chunk: &mut Chunk) {
        self.generate_chunk(chunk);
    }
}
