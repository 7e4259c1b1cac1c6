//! The six block faces and their fixed quad layouts.

/// One of the six cardinal directions a block face can point.
///
/// The `repr(u8)` discriminant is the face's position in the emission order
/// (front, back, left, right, top, bottom) and its column in per-face tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FaceDirection {
    /// +Z (front).
    PosZ = 0,
    /// −Z (back).
    NegZ = 1,
    /// −X (left).
    NegX = 2,
    /// +X (right).
    PosX = 3,
    /// +Y (top).
    PosY = 4,
    /// −Y (bottom).
    NegY = 5,
}

/// Texture coordinates of the four quad corners, in corner order.
pub const FACE_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

impl FaceDirection {
    /// All six directions in emission order.
    pub const ALL: [FaceDirection; 6] = [
        Self::PosZ,
        Self::NegZ,
        Self::NegX,
        Self::PosX,
        Self::PosY,
        Self::NegY,
    ];

    /// Returns the unit normal as `[f32; 3]` for this face direction.
    pub fn normal(self) -> [f32; 3] {
        let (x, y, z) = self.delta();
        [x as f32, y as f32, z as f32]
    }

    /// Unit step towards the neighbour this face looks at.
    pub const fn delta(self) -> (i32, i32, i32) {
        match self {
            Self::PosX => (1, 0, 0),
            Self::NegX => (-1, 0, 0),
            Self::PosY => (0, 1, 0),
            Self::NegY => (0, -1, 0),
            Self::PosZ => (0, 0, 1),
            Self::NegZ => (0, 0, -1),
        }
    }

    /// Returns the neighbor coordinate offset for this direction.
    pub fn offset(self, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
        let (dx, dy, dz) = self.delta();
        (x + dx, y + dy, z + dz)
    }

    /// Returns the opposite face direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Returns the direction index (0–5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the top and bottom faces.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::PosY | Self::NegY)
    }

    /// Unit-cube corners of this face, counter-clockwise seen from outside.
    ///
    /// Corner `i` pairs with `FACE_UVS[i]`, and the quad is split into the
    /// triangles `0-1-2` and `0-2-3`.
    pub const fn corners(self) -> [[f32; 3]; 4] {
        match self {
            Self::PosZ => [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
            Self::NegZ => [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
            Self::NegX => [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
            Self::PosX => [[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]],
            Self::PosY => [[0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            Self::NegY => [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
        }
    }
}
