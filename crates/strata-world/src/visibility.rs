//! Distance culling and draw ordering for loaded chunks.
//!
//! Culling is cylindrical: only the horizontal distance between the observer
//! and a column's centre is considered. Draw order is by horizontal distance
//! to the column origin, near to far for opaque geometry and far to near for
//! blended geometry.

use glam::{Mat4, Vec3};
use strata_voxel::{CHUNK_SIZE, ChunkStore, ColumnPos, MeshBuffer, distance_2d};

/// Marks each loaded chunk visible or hidden and returns the visible count.
///
/// A chunk is visible when its column centre lies within
/// `render_distance * CHUNK_SIZE` blocks of the observer, horizontally.
pub fn update_visibility(store: &mut ChunkStore, observer: Vec3, render_distance: u32) -> usize {
    let radius = render_distance as f32 * CHUNK_SIZE as f32;
    let mut visible = 0;
    for chunk in store.iter_mut() {
        let is_visible = distance_2d(observer, chunk.column().center()) <= radius;
        chunk.set_visible(is_visible);
        if is_visible {
            visible += 1;
        }
    }
    visible
}

/// One chunk's contribution to a frame.
#[derive(Clone, Copy, Debug)]
pub struct ChunkDrawItem<'a> {
    pub column: ColumnPos,
    /// Model matrix placing chunk-local vertices at the column origin.
    pub transform: Mat4,
    pub opaque: &'a MeshBuffer,
    pub transparent: &'a MeshBuffer,
}

impl ChunkDrawItem<'_> {
    /// Horizontal distance from `observer` to this item's column origin.
    pub fn distance_to(&self, observer: Vec3) -> f32 {
        distance_2d(observer, self.column.origin())
    }
}

/// Stable sort of `items` by horizontal distance to their column origin,
/// nearest first. Equal distances keep their input order.
pub fn sort_by_distance(observer: Vec3, items: &mut [ChunkDrawItem<'_>]) {
    items.sort_by(|a, b| a.distance_to(observer).total_cmp(&b.distance_to(observer)));
}

/// Visible chunks of one frame, sorted near to far.
#[derive(Clone, Debug, Default)]
pub struct DrawList<'a> {
    items: Vec<ChunkDrawItem<'a>>,
}

impl<'a> DrawList<'a> {
    /// Collects the visible chunks of `store` and sorts them for `observer`.
    pub fn collect(store: &'a ChunkStore, observer: Vec3) -> Self {
        let mut items: Vec<ChunkDrawItem<'a>> = store
            .iter()
            .filter(|(_, chunk)| chunk.is_visible())
            .map(|(_, chunk)| {
                let geometry = chunk.geometry();
                ChunkDrawItem {
                    column: chunk.column(),
                    transform: Mat4::from_translation(chunk.column().origin()),
                    opaque: &geometry.opaque,
                    transparent: &geometry.transparent,
                }
            })
            .collect();
        sort_by_distance(observer, &mut items);
        Self { items }
    }

    /// All items, near to far.
    pub fn items(&self) -> &[ChunkDrawItem<'a>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items with opaque geometry, near to far.
    pub fn opaque_pass(&self) -> impl Iterator<Item = &ChunkDrawItem<'a>> {
        self.items.iter().filter(|item| !item.opaque.is_empty())
    }

    /// Items with transparent geometry, far to near.
    ///
    /// Blending is only correct in this order, so the transparent pass must
    /// run after the opaque pass has filled the depth buffer.
    pub fn transparent_pass(&self) -> impl Iterator<Item = &ChunkDrawItem<'a>> {
        self.items
            .iter()
            .rev()
            .filter(|item| !item.transparent.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_voxel::{Block, Chunk, ChunkGeometry};

    fn store(capacity: usize) -> ChunkStore {
        ChunkStore::new(capacity, Box::new(|_: &mut Chunk| {}))
    }

    fn quad(buffer: &mut MeshBuffer) {
        let corners = [[0.0, 0.0, 0.0]; 4];
        let uvs = [[0.0, 0.0]; 4];
        buffer.try_push_quad(corners, uvs).unwrap();
    }

    #[test]
    fn test_visibility_uses_column_centre() {
        let mut store = store(8);
        // Centres at x = 8, 24, 40, 56.
        for x in 0..4 {
            store.load_chunk(ColumnPos::new(x, 0));
        }
        // Observer at (8, _, 8): distances 0, 16, 32, 48. Radius 2 * 16 = 32.
        let visible = update_visibility(&mut store, Vec3::new(8.0, 100.0, 8.0), 2);
        assert_eq!(visible, 3);
        assert!(store.chunk(ColumnPos::new(2, 0)).unwrap().is_visible());
        assert!(!store.chunk(ColumnPos::new(3, 0)).unwrap().is_visible());
    }

    #[test]
    fn test_visibility_ignores_height() {
        let mut store = store(1);
        store.load_chunk(ColumnPos::new(0, 0));
        assert_eq!(update_visibility(&mut store, Vec3::new(8.0, 10_000.0, 8.0), 1), 1);
    }

    #[test]
    fn test_visibility_can_hide_again() {
        let mut store = store(1);
        store.load_chunk(ColumnPos::new(0, 0));
        update_visibility(&mut store, Vec3::ZERO, 4);
        assert!(store.chunk(ColumnPos::new(0, 0)).unwrap().is_visible());
        update_visibility(&mut store, Vec3::new(1000.0, 0.0, 0.0), 4);
        assert!(!store.chunk(ColumnPos::new(0, 0)).unwrap().is_visible());
    }

    #[test]
    fn test_sort_is_near_to_far_and_stable() {
        let empty = MeshBuffer::new();
        let item = |x, z| ChunkDrawItem {
            column: ColumnPos::new(x, z),
            transform: Mat4::IDENTITY,
            opaque: &empty,
            transparent: &empty,
        };
        // (1, 0) and (0, 1) are equidistant from the origin.
        let mut items = vec![item(3, 0), item(1, 0), item(0, 1), item(0, 0)];
        sort_by_distance(Vec3::ZERO, &mut items);
        let order: Vec<ColumnPos> = items.iter().map(|i| i.column).collect();
        assert_eq!(
            order,
            vec![
                ColumnPos::new(0, 0),
                ColumnPos::new(1, 0),
                ColumnPos::new(0, 1),
                ColumnPos::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_draw_list_passes() {
        let mut store = store(4);
        for x in 0..3 {
            let handle = store.load_chunk(ColumnPos::new(x, 0)).unwrap();
            let chunk = store.get_mut(handle).unwrap();
            let mut geometry = ChunkGeometry::default();
            quad(&mut geometry.opaque);
            if x != 1 {
                quad(&mut geometry.transparent);
            }
            chunk.set_geometry(geometry);
        }
        update_visibility(&mut store, Vec3::ZERO, 8);

        let list = DrawList::collect(&store, Vec3::ZERO);
        assert_eq!(list.len(), 3);

        let opaque: Vec<i32> = list.opaque_pass().map(|i| i.column.x).collect();
        assert_eq!(opaque, vec![0, 1, 2]);

        // Column 1 has no blended geometry.
        let transparent: Vec<i32> = list.transparent_pass().map(|i| i.column.x).collect();
        assert_eq!(transparent, vec![2, 0]);
    }

    #[test]
    fn test_draw_list_skips_hidden_chunks() {
        let mut store = store(2);
        store.load_chunk(ColumnPos::new(0, 0));
        store.load_chunk(ColumnPos::new(40, 0));
        store.chunk_mut(ColumnPos::new(0, 0)).unwrap().set(0, 0, 0, Block::Stone);
        update_visibility(&mut store, Vec3::ZERO, 2);

        let list = DrawList::collect(&store, Vec3::ZERO);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].column, ColumnPos::new(0, 0));
    }

    #[test]
    fn test_transform_translates_to_origin() {
        let mut store = store(1);
        store.load_chunk(ColumnPos::new(-2, 3));
        update_visibility(&mut store, Vec3::new(-24.0, 0.0, 56.0), 1);

        let list = DrawList::collect(&store, Vec3::ZERO);
        let item = list.items()[0];
        let p = item.transform.transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vec3::new(-31.0, 2.0, 51.0));
    }
}
