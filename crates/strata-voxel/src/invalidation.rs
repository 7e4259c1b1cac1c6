//! Determines which columns need remeshing after a block edit.

use crate::chunk::CHUNK_SIZE;
use crate::coords::ColumnPos;

/// Determines which columns need remeshing after a block edit.
pub struct MeshInvalidator;

impl MeshInvalidator {
    /// Returns the columns whose meshes depend on the block at local
    /// `(local_x, local_z)` of `edited`.
    ///
    /// The edited column itself is always first. A horizontal neighbour is
    /// added when the edit sits on the shared border, because that
    /// neighbour's face culling reads the edited block. Columns span the
    /// full world height, so `y` never crosses a chunk boundary.
    pub fn invalidate(edited: ColumnPos, local_x: usize, local_z: usize) -> Vec<ColumnPos> {
        let mut dirty = vec![edited];

        if local_x == 0 {
            dirty.push(edited.offset(-1, 0));
        }
        if local_x == CHUNK_SIZE - 1 {
            dirty.push(edited.offset(1, 0));
        }
        if local_z == 0 {
            dirty.push(edited.offset(0, -1));
        }
        if local_z == CHUNK_SIZE - 1 {
            dirty.push(edited.offset(0, 1));
        }

        dirty
    }
}
