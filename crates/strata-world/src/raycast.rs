//! Block raycasting using the DDA (Amanatides & Woo) algorithm.
//!
//! Walks the block grid cell by cell along the ray and stops at the first
//! solid block, reporting the face the ray entered through.

use glam::{IVec3, Vec3};
use strata_voxel::{Block, BlockAccess, BlockPos};

/// Default interaction reach, in blocks.
pub const DEFAULT_REACH: f32 = 5.0;

/// Result of a successful raycast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    /// The solid block that was hit.
    pub block_pos: BlockPos,
    /// Its contents.
    pub block: Block,
    /// Outward normal of the entry face. Zero when the ray starts inside
    /// a solid block.
    pub face_normal: IVec3,
    /// Distance from the ray origin to the entry point, in blocks.
    pub distance: f32,
}

impl RaycastHit {
    /// The cell in front of the entry face, where a placed block would go.
    pub fn adjacent(&self) -> BlockPos {
        self.block_pos
            .offset(self.face_normal.x, self.face_normal.y, self.face_normal.z)
    }
}

/// Casts a ray from `origin` along `direction` through `world`.
///
/// Liquids and air are passed through. Returns `None` when nothing solid is
/// found within `max_distance`, the direction is zero, or `max_distance` is
/// not a finite number.
pub fn raycast(
    world: &impl BlockAccess,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<RaycastHit> {
    if !max_distance.is_finite() {
        return None;
    }
    let dir = direction.try_normalize()?;

    let mut voxel = BlockPos::from_world(origin);
    let sub_offset = origin - origin.floor();

    // Step direction per axis: +1 or -1.
    let step = IVec3::new(
        if dir.x >= 0.0 { 1 } else { -1 },
        if dir.y >= 0.0 { 1 } else { -1 },
        if dir.z >= 0.0 { 1 } else { -1 },
    );

    // Distance in t-units to cross one full block on each axis.
    let t_delta = Vec3::new(
        safe_inv(dir.x.abs()),
        safe_inv(dir.y.abs()),
        safe_inv(dir.z.abs()),
    );

    // Distance in t-units to the first block boundary on each axis.
    let mut t_max = Vec3::new(
        initial_t_max(sub_offset.x, dir.x, t_delta.x),
        initial_t_max(sub_offset.y, dir.y, t_delta.y),
        initial_t_max(sub_offset.z, dir.z, t_delta.z),
    );

    let mut last_normal = IVec3::ZERO;
    let mut t = 0.0_f32;

    loop {
        let block = world.get_block(voxel);
        if block.is_solid() {
            return Some(RaycastHit {
                block_pos: voxel,
                block,
                face_normal: last_normal,
                distance: t,
            });
        }

        // Advance along the axis with the smallest t_max.
        if t_max.x < t_max.y && t_max.x < t_max.z {
            t = t_max.x;
            t_max.x += t_delta.x;
            voxel.x += step.x;
            last_normal = IVec3::new(-step.x, 0, 0);
        } else if t_max.y < t_max.z {
            t = t_max.y;
            t_max.y += t_delta.y;
            voxel.y += step.y;
            last_normal = IVec3::new(0, -step.y, 0);
        } else {
            t = t_max.z;
            t_max.z += t_delta.z;
            voxel.z += step.z;
            last_normal = IVec3::new(0, 0, -step.z);
        }

        if t > max_distance {
            return None;
        }
    }
}

/// Safely compute 1.0 / x, clamping to `f32::MAX` when x ≈ 0.
fn safe_inv(x: f32) -> f32 {
    if x.abs() < f32::EPSILON {
        f32::MAX
    } else {
        1.0 / x
    }
}

/// Compute the initial parametric distance to the first block boundary.
fn initial_t_max(sub: f32, dir_component: f32, t_delta: f32) -> f32 {
    if dir_component > 0.0 {
        (1.0 - sub) * t_delta
    } else if dir_component < 0.0 {
        sub * t_delta
    } else {
        f32::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple test world backed by a hash map.
    struct TestWorld {
        blocks: HashMap<BlockPos, Block>,
    }

    impl TestWorld {
        fn new() -> Self {
            Self {
                blocks: HashMap::new(),
            }
        }

        fn set(&mut self, x: i32, y: i32, z: i32, block: Block) {
            self.blocks.insert(BlockPos::new(x, y, z), block);
        }
    }

    impl BlockAccess for TestWorld {
        fn get_block(&self, pos: BlockPos) -> Block {
            self.blocks.get(&pos).copied().unwrap_or(Block::Air)
        }
    }

    #[test]
    fn test_hits_block_straight_ahead() {
        let mut world = TestWorld::new();
        world.set(5, 0, 0, Block::Stone);

        let hit = raycast(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::X, 10.0).unwrap();
        assert_eq!(hit.block_pos, BlockPos::new(5, 0, 0));
        assert_eq!(hit.block, Block::Stone);
        assert_eq!(hit.face_normal, IVec3::new(-1, 0, 0));
        assert!((hit.distance - 4.5).abs() < 1e-5);
        assert_eq!(hit.adjacent(), BlockPos::new(4, 0, 0));
    }

    #[test]
    fn test_looking_down_hits_top_face() {
        let mut world = TestWorld::new();
        world.set(2, 60, -3, Block::Grass);

        let origin = Vec3::new(2.5, 64.2, -2.5);
        let hit = raycast(&world, origin, Vec3::NEG_Y, DEFAULT_REACH).unwrap();
        assert_eq!(hit.block_pos, BlockPos::new(2, 60, -3));
        assert_eq!(hit.face_normal, IVec3::new(0, 1, 0));
        assert_eq!(hit.adjacent(), BlockPos::new(2, 61, -3));
    }

    #[test]
    fn test_out_of_reach_misses() {
        let mut world = TestWorld::new();
        world.set(10, 0, 0, Block::Stone);
        assert!(raycast(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::X, DEFAULT_REACH).is_none());
    }

    #[test]
    fn test_passes_through_water_and_air() {
        let mut world = TestWorld::new();
        world.set(1, 0, 0, Block::Water);
        world.set(2, 0, 0, Block::Water);
        world.set(3, 0, 0, Block::Glass);

        let hit = raycast(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::X, DEFAULT_REACH).unwrap();
        assert_eq!(hit.block, Block::Glass);
    }

    #[test]
    fn test_diagonal_ray_through_negative_coordinates() {
        let mut world = TestWorld::new();
        world.set(-3, 0, -3, Block::Stone);

        let dir = Vec3::new(-1.0, 0.0, -1.0);
        let hit = raycast(&world, Vec3::new(0.5, 0.5, 0.5), dir, 10.0).unwrap();
        assert_eq!(hit.block_pos, BlockPos::new(-3, 0, -3));
        assert!(hit.face_normal == IVec3::new(1, 0, 0) || hit.face_normal == IVec3::new(0, 0, 1));
    }

    #[test]
    fn test_origin_inside_solid_block() {
        let mut world = TestWorld::new();
        world.set(0, 0, 0, Block::Dirt);

        let hit = raycast(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::Y, DEFAULT_REACH).unwrap();
        assert_eq!(hit.block_pos, BlockPos::new(0, 0, 0));
        assert_eq!(hit.face_normal, IVec3::ZERO);
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_zero_direction_returns_none() {
        let world = TestWorld::new();
        assert!(raycast(&world, Vec3::ZERO, Vec3::ZERO, DEFAULT_REACH).is_none());
    }

    #[test]
    fn test_unnormalized_direction_is_normalized() {
        let mut world = TestWorld::new();
        world.set(0, 0, 3, Block::Stone);
        let dir = Vec3::new(0.0, 0.0, 40.0);
        let hit = raycast(&world, Vec3::new(0.5, 0.5, 0.5), dir, DEFAULT_REACH).unwrap();
        assert!((hit.distance - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_unbounded_reach_through_air_returns_none() {
        let world = TestWorld::new();
        let origin = Vec3::new(0.5, 70.0, 0.5);
        assert!(raycast(&world, origin, Vec3::NEG_Y, f32::INFINITY).is_none());
        assert!(raycast(&world, origin, Vec3::X, f32::NAN).is_none());
        assert!(raycast(&world, origin, Vec3::Z, f32::NEG_INFINITY).is_none());
    }

    #[test]
    fn test_negative_reach_only_checks_origin_cell() {
        let mut world = TestWorld::new();
        world.set(0, 69, 0, Block::Stone);
        let origin = Vec3::new(0.5, 70.5, 0.5);
        assert!(raycast(&world, origin, Vec3::NEG_Y, -1.0).is_none());
    }
}
