//! Cosmetic motion that is not part of the flight model: clouds turn slowly
//! and bob up and down.

use glam::Vec3;

use crate::config::WorldConfig;
use crate::error::SimResult;
use crate::world::{ObjectHandle, Prop, WorldRecenterer};

#[derive(Debug, Clone)]
pub struct CloudDrift {
    clouds: Vec<ObjectHandle>,
    spin_rate: f32,
    bob_amplitude: f32,
}

impl CloudDrift {
    pub fn new(clouds: Vec<ObjectHandle>, config: &WorldConfig) -> Self {
        Self {
            clouds,
            spin_rate: config.cloud_spin_rate,
            bob_amplitude: config.cloud_bob_amplitude,
        }
    }

    /// Advance every cloud by `ticks` nominal frames at elapsed time `time`.
    pub fn tick(&self, world: &mut WorldRecenterer, time: f32, ticks: f32) -> SimResult<()> {
        for (i, handle) in self.clouds.iter().enumerate() {
            let cloud = world.expect_mut::<Prop>(*handle)?;
            cloud.heading = (cloud.heading + self.spin_rate * ticks) % std::f32::consts::TAU;
            let bob = (time + i as f32).sin() * self.bob_amplitude * ticks;
            cloud.position += Vec3::Y * bob;
        }
        Ok(())
    }
}
