//! Chunk meshing: face directions, per-face texture naming, the texture atlas
//! and the face-culling mesher.

pub mod face_direction;
pub mod mesher;
pub mod texture;

pub use face_direction::{FACE_UVS, FaceDirection};
pub use mesher::{
    DEFAULT_MAX_CHUNK_VERTICES, MeshError, build_chunk_geometry, build_chunk_geometry_capped,
};
pub use texture::{
    BlockUvTable, DEFAULT_ATLAS_SIZE, DEFAULT_TILE_SIZE, FALLBACK_TEXTURE, FaceTextureTable,
    TextureAtlas, UvRect, block_texture_name_for_face,
};
