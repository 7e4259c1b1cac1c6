//! Face-culled chunk meshing into separate opaque and transparent buffers.
//!
//! A face is emitted when the block it looks at is transparent. Neighbours
//! across the chunk border are read through [`BlockAccess`], so an unloaded
//! neighbour reads as air and the border face is drawn. Blocks that need
//! alpha blending go to the transparent buffer, everything else to the
//! opaque one.

use std::collections::TryReserveError;

use strata_voxel::{
    Block, BlockAccess, CHUNK_SIZE, Chunk, ChunkGeometry, ColumnPos, MeshBuffer, WORLD_HEIGHT,
    linear_index,
};

use crate::face_direction::{FACE_UVS, FaceDirection};
use crate::texture::BlockUvTable;

/// Default vertex cap for each geometry buffer of a chunk.
///
/// A checkerboard chunk, the worst case, needs 393 216 vertices per buffer.
pub const DEFAULT_MAX_CHUNK_VERTICES: usize = 1 << 20;

/// Errors that can occur while building chunk geometry.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// A geometry buffer could not grow.
    #[error("mesh buffer allocation failed for column {column:?}: {source}")]
    Allocation {
        column: ColumnPos,
        #[source]
        source: TryReserveError,
    },

    /// A geometry buffer would exceed its vertex cap.
    #[error("mesh for column {column:?} exceeds {limit} vertices")]
    VertexLimit { column: ColumnPos, limit: usize },
}

/// Builds both geometry buffers for `chunk` under the default vertex cap.
///
/// Neighbours inside the chunk are read from it directly. Those across a
/// horizontal border go through `world`. Cells above or below the world
/// count as air.
pub fn build_chunk_geometry(
    chunk: &Chunk,
    world: &impl BlockAccess,
    uvs: &BlockUvTable,
) -> Result<ChunkGeometry, MeshError> {
    build_chunk_geometry_capped(chunk, world, uvs, DEFAULT_MAX_CHUNK_VERTICES)
}

/// Like [`build_chunk_geometry`], failing with [`MeshError::VertexLimit`]
/// once either buffer would hold more than `max_vertices` vertices.
pub fn build_chunk_geometry_capped(
    chunk: &Chunk,
    world: &impl BlockAccess,
    uvs: &BlockUvTable,
    max_vertices: usize,
) -> Result<ChunkGeometry, MeshError> {
    let column = chunk.column();
    let blocks = chunk.blocks();
    let mut geometry = ChunkGeometry::default();

    for x in 0..CHUNK_SIZE {
        for y in 0..WORLD_HEIGHT {
            for z in 0..CHUNK_SIZE {
                let block = blocks[linear_index(x, y, z)];
                if block.is_air() {
                    continue;
                }

                let target = if block.needs_alpha_blend() {
                    &mut geometry.transparent
                } else {
                    &mut geometry.opaque
                };

                for face in FaceDirection::ALL {
                    let neighbor = neighbor_block(chunk, world, x, y, z, face);
                    if !neighbor.is_transparent() {
                        continue;
                    }
                    if target.vertex_count() + 4 > max_vertices {
                        return Err(MeshError::VertexLimit {
                            column,
                            limit: max_vertices,
                        });
                    }
                    push_face(target, block, face, x, y, z, uvs)
                        .map_err(|source| MeshError::Allocation { column, source })?;
                }
            }
        }
    }

    tracing::trace!(
        column = ?column,
        opaque_vertices = geometry.opaque.vertex_count(),
        transparent_vertices = geometry.transparent.vertex_count(),
        "chunk meshed"
    );
    Ok(geometry)
}

fn neighbor_block(
    chunk: &Chunk,
    world: &impl BlockAccess,
    x: usize,
    y: usize,
    z: usize,
    face: FaceDirection,
) -> Block {
    let (nx, ny, nz) = face.offset(x as i32, y as i32, z as i32);
    if !(0..WORLD_HEIGHT as i32).contains(&ny) {
        return Block::Air;
    }
    let inside = |c: i32| (0..CHUNK_SIZE as i32).contains(&c);
    if inside(nx) && inside(nz) {
        return chunk.blocks()[linear_index(nx as usize, ny as usize, nz as usize)];
    }
    let pos = chunk.column().block_at(x, y, z);
    let (dx, dy, dz) = face.delta();
    world.get_block(pos.offset(dx, dy, dz))
}

fn push_face(
    buffer: &mut MeshBuffer,
    block: Block,
    face: FaceDirection,
    x: usize,
    y: usize,
    z: usize,
    uvs: &BlockUvTable,
) -> Result<(), TryReserveError> {
    let (fx, fy, fz) = (x as f32, y as f32, z as f32);
    let corners = face.corners().map(|c| [c[0] + fx, c[1] + fy, c[2] + fz]);
    let rect = uvs.get(block, face);
    let tex = FACE_UVS.map(|uv| rect.map(uv));
    buffer.try_push_quad(corners, tex)
}
