//! Block types, dense column chunks, the chunk arena and observer-driven streaming.

pub mod block;
pub mod chunk;
pub mod chunk_store;
pub mod coords;
pub mod geometry;
pub mod invalidation;
pub mod streaming;

pub use block::{Block, MaterialClass, Rgba};
pub use chunk::{CHUNK_SIZE, CHUNK_VOLUME, Chunk, MESH_DIRTY, WORLD_HEIGHT, linear_index};
pub use chunk_store::{BlockAccess, ChunkGenerator, ChunkHandle, ChunkStore};
pub use coords::{BlockPos, ColumnPos, distance_2d};
pub use geometry::{ChunkGeometry, MeshBuffer, QUAD_INDICES};
pub use invalidation::MeshInvalidator;
pub use streaming::{ChunkStreamer, StreamConfig, StreamTickResult};
