//! Fixed-capacity arena owning every loaded chunk, keyed by [`ColumnPos`].
//!
//! Slots are recycled through a free list and tagged with a generation
//! counter, so a [`ChunkHandle`] taken before an unload no longer resolves
//! afterwards. A column→handle index gives O(1) lookup. When every slot is
//! occupied new loads fail with `None`; nothing is evicted on demand.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::block::Block;
use crate::chunk::{Chunk, MESH_DIRTY};
use crate::coords::{BlockPos, ColumnPos};
use crate::invalidation::MeshInvalidator;

/// Fills a freshly allocated chunk with its initial contents.
///
/// Called synchronously from [`ChunkStore::load_chunk`]. The chunk is all
/// air on entry.
pub trait ChunkGenerator {
    fn generate(&self, chunk: &mut Chunk);
}

impl<F> ChunkGenerator for F
where
    F: Fn(&mut Chunk),
{
    fn generate(&self, chunk: &mut Chunk) {
        self(chunk)
    }
}

/// Read-only block lookup by world position.
///
/// Implementations return [`Block::Air`] for anything they cannot resolve
/// (unloaded columns, heights outside the world).
pub trait BlockAccess {
    fn get_block(&self, pos: BlockPos) -> Block;
}

/// Stable reference to an occupied slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkHandle {
    index: u32,
    generation: u32,
}

impl ChunkHandle {
    /// Slot index inside the arena.
    pub fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    chunk: Option<Chunk>,
}

/// Owns all loaded chunks and the generator that fills new ones.
pub struct ChunkStore {
    slots: Vec<Slot>,
    /// Indices of unoccupied slots. Popped from the back.
    free: Vec<u32>,
    index: FxHashMap<ColumnPos, ChunkHandle>,
    generator: Box<dyn ChunkGenerator>,
    observer: Vec3,
}

impl ChunkStore {
    /// Creates an empty store with room for `capacity` chunks.
    pub fn new(capacity: usize, generator: Box<dyn ChunkGenerator>) -> Self {
        let slots = (0..capacity).map(|_| Slot::default()).collect();
        // Reversed so the lowest index is handed out first.
        let free = (0..capacity as u32).rev().collect();
        Self {
            slots,
            free,
            index: FxHashMap::default(),
            generator,
            observer: Vec3::ZERO,
        }
    }

    /// Maximum number of chunks that can be loaded at once.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently loaded chunks.
    pub fn loaded_count(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when no free slot remains.
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Last observer position recorded by streaming.
    pub fn observer(&self) -> Vec3 {
        self.observer
    }

    pub fn set_observer(&mut self, observer: Vec3) {
        self.observer = observer;
    }

    /// Handle of the chunk loaded at `column`, if any.
    pub fn handle_of(&self, column: ColumnPos) -> Option<ChunkHandle> {
        self.index.get(&column).copied()
    }

    /// Immutable access to the chunk loaded at `column`.
    pub fn chunk(&self, column: ColumnPos) -> Option<&Chunk> {
        self.handle_of(column).and_then(|handle| self.get(handle))
    }

    /// Mutable access to the chunk loaded at `column`.
    pub fn chunk_mut(&mut self, column: ColumnPos) -> Option<&mut Chunk> {
        let handle = self.handle_of(column)?;
        self.get_mut(handle)
    }

    /// Resolves a handle. Stale handles resolve to `None`.
    pub fn get(&self, handle: ChunkHandle) -> Option<&Chunk> {
        let slot = self.slots.get(handle.index())?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.chunk.as_ref()
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, handle: ChunkHandle) -> Option<&mut Chunk> {
        let slot = self.slots.get_mut(handle.index())?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.chunk.as_mut()
    }

    /// Loads `column`, generating its contents, and returns its handle.
    ///
    /// Returns the existing handle if the column is already loaded, and
    /// `None` if the pool is exhausted.
    pub fn load_chunk(&mut self, column: ColumnPos) -> Option<ChunkHandle> {
        if let Some(handle) = self.handle_of(column) {
            return Some(handle);
        }

        let Some(index) = self.free.pop() else {
            tracing::warn!(
                column = ?column,
                capacity = self.capacity(),
                "chunk pool exhausted, load refused"
            );
            return None;
        };

        let mut chunk = Chunk::new(column);
        self.generator.generate(&mut chunk);
        chunk.mark_dirty(MESH_DIRTY);

        let slot = &mut self.slots[index as usize];
        slot.chunk = Some(chunk);
        let handle = ChunkHandle {
            index,
            generation: slot.generation,
        };
        self.index.insert(column, handle);

        tracing::debug!(column = ?column, slot = index, "chunk loaded");
        Some(handle)
    }

    /// Unloads the chunk at `column`, releasing its geometry and slot.
    ///
    /// Returns `false` if nothing was loaded there.
    pub fn unload_chunk(&mut self, column: ColumnPos) -> bool {
        let Some(handle) = self.index.remove(&column) else {
            return false;
        };

        let slot = &mut self.slots[handle.index()];
        if let Some(mut chunk) = slot.chunk.take() {
            chunk.release_geometry();
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);

        tracing::debug!(column = ?column, slot = handle.index, "chunk unloaded");
        true
    }

    /// Unloads every chunk.
    pub fn clear(&mut self) {
        let columns: Vec<ColumnPos> = self.index.keys().copied().collect();
        for column in columns {
            self.unload_chunk(column);
        }
    }

    /// Writes `block` at `pos`, loading the owning column on demand.
    ///
    /// The owning chunk is marked dirty, as is each loaded neighbour sharing
    /// the edited border. Returns `false` when `y` is outside the world or
    /// the column could not be loaded.
    pub fn set_block(&mut self, pos: BlockPos, block: Block) -> bool {
        if !pos.in_height_bounds() {
            return false;
        }

        let column = pos.column();
        let (lx, lz) = pos.local_xz();
        let Some(handle) = self.load_chunk(column) else {
            return false;
        };
        let Some(chunk) = self.get_mut(handle) else {
            return false;
        };
        chunk.set(lx, pos.y as usize, lz, block);

        for neighbor in MeshInvalidator::invalidate(column, lx, lz) {
            if let Some(chunk) = self.chunk_mut(neighbor) {
                chunk.mark_dirty(MESH_DIRTY);
            }
        }
        true
    }

    /// Iterates over all loaded `(handle, chunk)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ChunkHandle, &Chunk)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.chunk.as_ref().map(|chunk| {
                (
                    ChunkHandle {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    chunk,
                )
            })
        })
    }

    /// Mutable iteration over all loaded chunks in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Chunk> {
        self.slots.iter_mut().filter_map(|slot| slot.chunk.as_mut())
    }

    /// Handles of chunks that have the given dirty flag set.
    pub fn dirty_handles(&self, flag: u8) -> Vec<ChunkHandle> {
        self.iter()
            .filter(|(_, chunk)| chunk.is_dirty(flag))
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Columns of every loaded chunk.
    pub fn loaded_columns(&self) -> impl Iterator<Item = ColumnPos> + '_ {
        self.index.keys().copied()
    }
}

impl BlockAccess for ChunkStore {
    /// Heights outside the world and unloaded columns read as air.
    fn get_block(&self, pos: BlockPos) -> Block {
        if !pos.in_height_bounds() {
            return Block::Air;
        }
        let (lx, lz) = pos.local_xz();
        self.chunk(pos.column())
            .map_or(Block::Air, |chunk| chunk.get(lx, pos.y as usize, lz))
    }
}

impl std::fmt::Debug for ChunkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkStore")
            .field("capacity", &self.capacity())
            .field("loaded", &self.loaded_count())
            .field("observer", &self.observer)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
