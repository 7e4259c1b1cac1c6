//! Per-chunk geometry buffers produced by the mesher and owned by the chunk.

use std::collections::TryReserveError;

/// Triangle indices for one quad, relative to its first vertex.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// One triangle list: positions, texture coordinates and indices.
///
/// Positions are chunk-local; the chunk's world transform places them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex atlas texture coordinates.
    pub uvs: Vec<[f32; 2]>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad (4 vertices, 2 triangles `0-1-2`, `0-2-3`).
    ///
    /// Storage is reserved fallibly so that an allocation failure surfaces
    /// as an error instead of aborting the process. Nothing is written when
    /// the reservation fails.
    pub fn try_push_quad(
        &mut self,
        corners: [[f32; 3]; 4],
        uvs: [[f32; 2]; 4],
    ) -> Result<(), TryReserveError> {
        self.positions.try_reserve(4)?;
        self.uvs.try_reserve(4)?;
        self.indices.try_reserve(6)?;

        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.uvs.extend_from_slice(&uvs);
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads (each quad is 4 vertices).
    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Raw position bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw texture-coordinate bytes for GPU upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Raw index bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// The two independent geometry sets of a chunk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkGeometry {
    /// Depth-tested, depth-written geometry.
    pub opaque: MeshBuffer,
    /// Alpha-blended geometry, drawn back to front after the opaque pass.
    pub transparent: MeshBuffer,
}

impl ChunkGeometry {
    /// Returns `true` if neither buffer has geometry.
    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty() && self.transparent.is_empty()
    }

    /// Total vertices across both buffers.
    pub fn vertex_count(&self) -> usize {
        self.opaque.vertex_count() + self.transparent.vertex_count()
    }
}
