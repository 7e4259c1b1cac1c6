//! Dense column storage with bounds-checked block access, dirty flags and owned geometry.
//!
//! A [`Chunk`] is a `CHUNK_SIZE × WORLD_HEIGHT × CHUNK_SIZE` grid of
//! [`Block`] values addressed by a flat index (see [`linear_index`]). Reads
//! outside the grid return [`Block::Air`] and writes outside it are ignored,
//! both with a warning log.

use crate::block::Block;
use crate::coords::ColumnPos;
use crate::geometry::ChunkGeometry;

/// Horizontal edge length of a column, in blocks.
pub const CHUNK_SIZE: usize = 16;

/// Fixed vertical extent of the world, in blocks.
pub const WORLD_HEIGHT: usize = 128;

/// Total number of blocks in one chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * WORLD_HEIGHT * CHUNK_SIZE;

/// Dirty-flag bit: chunk mesh needs rebuilding.
pub const MESH_DIRTY: u8 = 0b0000_0001;

/// Converts local `(x, y, z)` to the flat array index.
///
/// Layout is x-major, then y, then z: `((x * WORLD_HEIGHT) + y) * CHUNK_SIZE + z`,
/// so the innermost meshing loop over `z` walks contiguous memory.
#[inline]
pub const fn linear_index(x: usize, y: usize, z: usize) -> usize {
    ((x * WORLD_HEIGHT) + y) * CHUNK_SIZE + z
}

/// One loaded column of blocks.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// Column this chunk covers.
    column: ColumnPos,
    /// Dense block grid of length [`CHUNK_VOLUME`].
    blocks: Box<[Block]>,
    /// Bitfield of dirty flags.
    dirty: u8,
    /// Within render range of the observer (refreshed every tick).
    visible: bool,
    /// Opaque and transparent geometry from the last successful mesh build.
    geometry: ChunkGeometry,
}

impl Chunk {
    /// Creates an all-air chunk for `column`.
    pub fn new(column: ColumnPos) -> Self {
        Self {
            column,
            blocks: vec![Block::Air; CHUNK_VOLUME].into_boxed_slice(),
            dirty: 0,
            visible: false,
            geometry: ChunkGeometry::default(),
        }
    }

    /// The column this chunk covers.
    pub fn column(&self) -> ColumnPos {
        self.column
    }

    /// Returns the block at local `(x, y, z)`.
    ///
    /// Returns [`Block::Air`] if any coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Block {
        if !Self::in_bounds(x, y, z) {
            tracing::warn!("Chunk::get out of bounds: ({}, {}, {})", x, y, z);
            return Block::Air;
        }
        self.blocks[linear_index(x, y, z)]
    }

    /// Sets the block at local `(x, y, z)` and marks the mesh dirty.
    ///
    /// No-op with a warning log if any coordinate is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: Block) {
        if !Self::in_bounds(x, y, z) {
            tracing::warn!("Chunk::set out of bounds: ({}, {}, {})", x, y, z);
            return;
        }
        self.blocks[linear_index(x, y, z)] = block;
        self.dirty |= MESH_DIRTY;
    }

    /// Fills every block with `block` and marks the mesh dirty.
    pub fn fill(&mut self, block: Block) {
        self.blocks.fill(block);
        self.dirty |= MESH_DIRTY;
    }

    /// Read-only view of the dense grid in [`linear_index`] order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns `true` if the specified dirty flag (or combination) is set.
    pub fn is_dirty(&self, flag: u8) -> bool {
        self.dirty & flag == flag
    }

    /// Mark specific dirty flags.
    pub fn mark_dirty(&mut self, flags: u8) {
        self.dirty |= flags;
    }

    /// Clears the specified dirty flag bits.
    pub fn clear_dirty(&mut self, flags: u8) {
        self.dirty &= !flags;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Geometry from the last successful mesh build.
    pub fn geometry(&self) -> &ChunkGeometry {
        &self.geometry
    }

    /// Replaces the chunk's geometry. The previous buffers are released first.
    pub fn set_geometry(&mut self, geometry: ChunkGeometry) {
        self.release_geometry();
        self.geometry = geometry;
    }

    /// Drops both geometry buffers, leaving the chunk with nothing to draw.
    pub fn release_geometry(&mut self) {
        self.geometry = ChunkGeometry::default();
    }

    /// Number of non-air blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_air()).count()
    }

    /// Checks whether `(x, y, z)` lies inside the grid.
    fn in_bounds(x: usize, y: usize, z: usize) -> bool {
        x < CHUNK_SIZE && y < WORLD_HEIGHT && z < CHUNK_SIZE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk() -> Chunk {
        Chunk::new(ColumnPos::new(0, 0))
    }

    #[test]
    fn test_new_chunk_is_air_and_clean() {
        let chunk = chunk();
        assert_eq!(chunk.get(0, 0, 0), Block::Air);
        assert_eq!(chunk.get(15, 127, 15), Block::Air);
        assert_eq!(chunk.solid_count(), 0);
        assert!(!chunk.is_dirty(MESH_DIRTY));
        assert!(!chunk.is_visible());
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let mut chunk = chunk();
        chunk.set(5, 100, 12, Block::Glass);
        assert_eq!(chunk.get(5, 100, 12), Block::Glass);
        // Surrounding blocks remain air.
        assert_eq!(chunk.get(4, 100, 12), Block::Air);
        assert_eq!(chunk.get(5, 99, 12), Block::Air);
        assert_eq!(chunk.get(5, 100, 13), Block::Air);
    }

    #[test]
    fn test_set_marks_mesh_dirty() {
        let mut chunk = chunk();
        chunk.set(1, 1, 1, Block::Stone);
        assert!(chunk.is_dirty(MESH_DIRTY));
        chunk.clear_dirty(MESH_DIRTY);
        assert!(!chunk.is_dirty(MESH_DIRTY));
    }

    #[test]
    fn test_out_of_bounds_is_safe() {
        let mut chunk = chunk();
        chunk.set(16, 0, 0, Block::Stone);
        chunk.set(0, 128, 0, Block::Stone);
        chunk.set(0, 0, 16, Block::Stone);
        assert_eq!(chunk.solid_count(), 0);
        assert!(!chunk.is_dirty(MESH_DIRTY));
        assert_eq!(chunk.get(0, 128, 0), Block::Air);
    }

    #[test]
    fn test_linear_index_layout() {
        assert_eq!(linear_index(0, 0, 0), 0);
        assert_eq!(linear_index(0, 0, 1), 1);
        assert_eq!(linear_index(0, 1, 0), CHUNK_SIZE);
        assert_eq!(linear_index(1, 0, 0), WORLD_HEIGHT * CHUNK_SIZE);
        assert_eq!(linear_index(15, 127, 15), CHUNK_VOLUME - 1);
    }

    #[test]
    fn test_fill() {
        let mut chunk = chunk();
        chunk.fill(Block::Dirt);
        assert_eq!(chunk.solid_count(), CHUNK_VOLUME);
        assert_eq!(chunk.get(7, 64, 7), Block::Dirt);
    }

    #[test]
    fn test_set_geometry_replaces_and_release_clears() {
        use crate::geometry::MeshBuffer;

        let mut chunk = chunk();
        let mut opaque = MeshBuffer::new();
        opaque
            .try_push_quad([[0.0; 3]; 4], [[0.0; 2]; 4])
            .unwrap();
        chunk.set_geometry(ChunkGeometry {
            opaque,
            transparent: MeshBuffer::new(),
        });
        assert_eq!(chunk.geometry().opaque.vertex_count(), 4);

        chunk.release_geometry();
        assert!(chunk.geometry().is_empty());
    }
}
