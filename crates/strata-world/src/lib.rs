//! The Strata world: chunk streaming, meshing and visibility behind a single
//! facade, plus block raycasting.

pub mod raycast;
pub mod visibility;
pub mod world;

pub use raycast::{DEFAULT_REACH, RaycastHit, raycast};
pub use visibility::{ChunkDrawItem, DrawList, sort_by_distance, update_visibility};
pub use world::{MeshRefresh, TickReport, World, terrain_params};
