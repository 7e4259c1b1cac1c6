//! Procedural terrain generation: hash-based value noise, multi-octave column
//! heights, tree placement and the chunk generator that combines them.

mod feature;
mod generator;
mod heightmap;

pub mod noise;

pub use feature::{TREE_CEILING_MARGIN, TRUNK_HEIGHT_RANGE, TreePlacer};
pub use generator::{DIRT_DEPTH, TerrainGenerator};
pub use heightmap::{HeightmapSampler, TerrainParams};
pub use noise::{ValueNoise, hash2d, lattice_value};
