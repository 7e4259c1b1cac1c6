//! Scripted observer path for the headless demo.

use glam::Vec3;

/// Observer flight along +X with a slow sideways weave.
#[derive(Clone, Copy, Debug)]
pub struct ObserverPath {
    pub start: Vec3,
    /// Blocks travelled per tick.
    pub speed: f32,
    /// Half-width of the weave along Z, in blocks.
    pub weave: f32,
}

impl ObserverPath {
    pub fn new(start: Vec3, speed: f32) -> Self {
        Self {
            start,
            speed,
            weave: 24.0,
        }
    }

    /// Observer position at `tick`.
    pub fn at(&self, tick: u32) -> Vec3 {
        let travelled = tick as f32 * self.speed;
        let z = (travelled / 64.0).sin() * self.weave;
        self.start + Vec3::new(travelled, 0.0, z)
    }
}
