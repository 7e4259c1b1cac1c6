//! Tree placement: a clustered noise gate plus a per-column hash gate, and
//! the trunk-and-canopy stamp written into a single chunk.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strata_voxel::{Block, CHUNK_SIZE, Chunk, WORLD_HEIGHT};

use crate::heightmap::TerrainParams;
use crate::noise::{ValueNoise, hash2d};

/// Trunk heights are drawn from this inclusive range.
pub const TRUNK_HEIGHT_RANGE: std::ops::RangeInclusive<usize> = 4..=6;

/// Trees whose base is this close to the world ceiling are skipped.
pub const TREE_CEILING_MARGIN: usize = 6;

/// Canopy cells must be strictly closer than this to the canopy centre.
const CANOPY_RADIUS: f32 = 2.5;

/// Decides where trees grow and stamps them into chunks.
#[derive(Clone, Debug)]
pub struct TreePlacer {
    noise: ValueNoise,
    seed: i32,
    noise_scale: f64,
    noise_threshold: f64,
    frequency: f64,
}

impl TreePlacer {
    pub fn new(params: &TerrainParams) -> Self {
        Self {
            noise: ValueNoise::new(params.seed),
            seed: params.seed,
            noise_scale: params.tree_noise_scale,
            noise_threshold: params.tree_noise_threshold,
            frequency: params.tree_frequency,
        }
    }

    /// Whether a tree grows on world column `(wx, wz)`.
    ///
    /// Both gates must pass: low-frequency noise above the threshold (so
    /// trees cluster into groves) and a hash percentage under
    /// `frequency * 100` (so groves are sparse).
    pub fn should_place_tree(&self, wx: i32, wz: i32) -> bool {
        let cluster = self
            .noise
            .sample(wx as f64 * self.noise_scale, wz as f64 * self.noise_scale);
        if cluster <= self.noise_threshold {
            return false;
        }
        let percent = hash2d(wx, wz, self.seed).rem_euclid(100);
        (percent as f64) < self.frequency * 100.0
    }

    /// Trunk height for the tree rooted on world column `(wx, wz)`.
    pub fn trunk_height(&self, wx: i32, wz: i32) -> usize {
        let mut rng = ChaCha8Rng::seed_from_u64(column_seed(self.seed, wx, wz));
        rng.random_range(TRUNK_HEIGHT_RANGE)
    }

    /// Stamps a tree with its trunk base at local `(lx, base_y, lz)`.
    ///
    /// The trunk is oak log. The canopy is a rough sphere of oak leaves
    /// centred on the block above the trunk. Leaves only fill air and are
    /// clipped at the chunk's horizontal edges. Returns `false` without
    /// writing anything when the tree would poke through the ceiling.
    pub fn place_tree(&self, chunk: &mut Chunk, lx: usize, base_y: usize, lz: usize) -> bool {
        if lx >= CHUNK_SIZE || lz >= CHUNK_SIZE || base_y >= WORLD_HEIGHT - TREE_CEILING_MARGIN {
            return false;
        }

        let world = chunk.column().block_at(lx, base_y, lz);
        let trunk = self.trunk_height(world.x, world.z);
        for y in base_y..base_y + trunk {
            chunk.set(lx, y, lz, Block::OakLog);
        }

        let leaf_y = (base_y + trunk) as i32;
        for dx in -2i32..=2 {
            for dy in -1i32..=2 {
                for dz in -2i32..=2 {
                    let x = lx as i32 + dx;
                    let y = leaf_y + dy;
                    let z = lz as i32 + dz;
                    if !(0..CHUNK_SIZE as i32).contains(&x)
                        || !(0..WORLD_HEIGHT as i32).contains(&y)
                        || !(0..CHUNK_SIZE as i32).contains(&z)
                    {
                        continue;
                    }
                    let dist = ((dx * dx + dy * dy + dz * dz) as f32).sqrt();
                    let (x, y, z) = (x as usize, y as usize, z as usize);
                    if dist < CANOPY_RADIUS && chunk.get(x, y, z).is_air() {
                        chunk.set(x, y, z, Block::OakLeaves);
                    }
                }
            }
        }
        true
    }
}

/// Deterministic RNG seed for one world column.
fn column_seed(seed: i32, wx: i32, wz: i32) -> u64 {
    let packed = ((wx as u32 as u64) << 32) | wz as u32 as u64;
    packed ^ (seed as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_voxel::ColumnPos;

    fn placer() -> TreePlacer {
        TreePlacer::new(&TerrainParams::default())
    }

    fn count(chunk: &Chunk, block: Block) -> usize {
        chunk.blocks().iter().filter(|&&b| b == block).count()
    }

    #[test]
    fn test_trunk_height_in_range_and_deterministic() {
        let p = placer();
        for wx in -20..20 {
            for wz in -20..20 {
                let h = p.trunk_height(wx, wz);
                assert!(TRUNK_HEIGHT_RANGE.contains(&h));
                assert_eq!(h, p.trunk_height(wx, wz));
            }
        }
    }

    #[test]
    fn test_trunk_heights_vary() {
        let p = placer();
        let heights: std::collections::HashSet<usize> =
            (0..200).map(|i| p.trunk_height(i, -i)).collect();
        assert_eq!(heights.len(), 3);
    }

    #[test]
    fn test_tree_in_chunk_centre() {
        let p = placer();
        let mut chunk = Chunk::new(ColumnPos::new(0, 0));
        assert!(p.place_tree(&mut chunk, 8, 70, 8));

        let trunk = p.trunk_height(8, 8);
        for y in 70..70 + trunk {
            assert_eq!(chunk.get(8, y, 8), Block::OakLog);
        }
        assert_eq!(count(&chunk, Block::OakLog), trunk);
        // Canopy centre sits directly above the trunk.
        assert_eq!(chunk.get(8, 70 + trunk, 8), Block::OakLeaves);
        assert!(count(&chunk, Block::OakLeaves) > 20);
        // Nothing below the canopy's lowest layer except the trunk.
        assert_eq!(chunk.get(7, 70, 8), Block::Air);
    }

    #[test]
    fn test_leaves_do_not_replace_solid_blocks() {
        let p = placer();
        let mut chunk = Chunk::new(ColumnPos::new(0, 0));
        let trunk = p.trunk_height(8, 8);
        chunk.set(9, 70 + trunk, 8, Block::Stone);
        p.place_tree(&mut chunk, 8, 70, 8);
        assert_eq!(chunk.get(9, 70 + trunk, 8), Block::Stone);
    }

    #[test]
    fn test_tree_at_edge_is_clipped() {
        let p = placer();
        let mut centre = Chunk::new(ColumnPos::new(0, 0));
        p.place_tree(&mut centre, 8, 70, 8);
        let full = count(&centre, Block::OakLeaves);

        let mut edge = Chunk::new(ColumnPos::new(0, 0));
        assert!(p.place_tree(&mut edge, 0, 70, 0));
        let clipped = count(&edge, Block::OakLeaves);
        assert!(clipped < full, "clipped={clipped} full={full}");
    }

    #[test]
    fn test_tree_near_ceiling_is_skipped() {
        let p = placer();
        let mut chunk = Chunk::new(ColumnPos::new(0, 0));
        assert!(!p.place_tree(&mut chunk, 8, WORLD_HEIGHT - TREE_CEILING_MARGIN, 8));
        assert_eq!(chunk.solid_count(), 0);
        assert!(p.place_tree(&mut chunk, 8, WORLD_HEIGHT - TREE_CEILING_MARGIN - 1, 8));
    }

    #[test]
    fn test_should_place_tree_is_sparse_and_deterministic() {
        let p = placer();
        let mut trees = 0;
        for wx in 0..256 {
            for wz in 0..256 {
                let a = p.should_place_tree(wx, wz);
                assert_eq!(a, p.should_place_tree(wx, wz));
                if a {
                    trees += 1;
                }
            }
        }
        // Well under 5 % of columns once the cluster gate is applied.
        assert!(trees < 256 * 256 / 20, "trees={trees}");
    }

    #[test]
    fn test_zero_frequency_disables_trees() {
        let p = TreePlacer::new(&TerrainParams {
            tree_frequency: 0.0,
            ..Default::default()
        });
        assert!((0..100).all(|i| !p.should_place_tree(i, i * 3)));
    }
}
