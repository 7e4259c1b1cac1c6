//! World-space block positions and chunk column positions.

use glam::Vec3;

use crate::chunk::{CHUNK_SIZE, WORLD_HEIGHT};

/// Integer position of a single block in world space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The block containing a world-space point.
    pub fn from_world(point: Vec3) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// Returns the position offset by `(dx, dy, dz)`.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Whether `y` lies inside the fixed vertical bound.
    pub const fn in_height_bounds(self) -> bool {
        self.y >= 0 && self.y < WORLD_HEIGHT as i32
    }

    /// The column that owns this block. `y` is never chunked.
    pub const fn column(self) -> ColumnPos {
        ColumnPos {
            x: self.x.div_euclid(CHUNK_SIZE as i32),
            z: self.z.div_euclid(CHUNK_SIZE as i32),
        }
    }

    /// Horizontal coordinates inside the owning column, each in `[0, CHUNK_SIZE)`.
    ///
    /// Euclidean remainder keeps negative world coordinates in range, so
    /// `x = -1` maps to local `15` of column `-1`.
    pub const fn local_xz(self) -> (usize, usize) {
        (
            self.x.rem_euclid(CHUNK_SIZE as i32) as usize,
            self.z.rem_euclid(CHUNK_SIZE as i32) as usize,
        )
    }

    /// Centre of the block in world space.
    pub fn center(self) -> Vec3 {
        Vec3::new(self.x as f32 + 0.5, self.y as f32 + 0.5, self.z as f32 + 0.5)
    }
}

/// Identifies one vertical chunk column on the horizontal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnPos {
    pub x: i32,
    pub z: i32,
}

impl ColumnPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The column containing a world-space point.
    pub fn from_world(point: Vec3) -> Self {
        Self {
            x: (point.x / CHUNK_SIZE as f32).floor() as i32,
            z: (point.z / CHUNK_SIZE as f32).floor() as i32,
        }
    }

    /// Returns the column offset by `(dx, dz)`.
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// World-space corner of the column at `y = 0`.
    pub fn origin(self) -> Vec3 {
        Vec3::new(
            (self.x * CHUNK_SIZE as i32) as f32,
            0.0,
            (self.z * CHUNK_SIZE as i32) as f32,
        )
    }

    /// Horizontal centre of the column (at `y = 0`).
    pub fn center(self) -> Vec3 {
        let half = CHUNK_SIZE as f32 * 0.5;
        self.origin() + Vec3::new(half, 0.0, half)
    }

    /// World position of the block at local `(x, y, z)` in this column.
    pub const fn block_at(self, x: usize, y: usize, z: usize) -> BlockPos {
        BlockPos {
            x: self.x * CHUNK_SIZE as i32 + x as i32,
            y: y as i32,
            z: self.z * CHUNK_SIZE as i32 + z as i32,
        }
    }
}

/// Euclidean distance between two points, ignoring `y`.
#[inline]
pub fn distance_2d(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}
