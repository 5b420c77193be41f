use glam::{EulerRot, Quat, Vec3};

use crate::config::AircraftConfig;
use crate::traits::{Controller, Intent};

/// Kinematic aircraft state - the flight integrator
#[derive(Debug, Clone)]
pub struct AircraftState {
    pub speed: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub position: Vec3,
    /// Engine fan angle, for the renderer
    pub engine_angle: f32,
    config: AircraftConfig,
}

/// Render-facing aircraft transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftPose {
    pub position: Vec3,
    pub orientation: Quat,
    pub engine_angle: f32,
}

impl AircraftState {
    pub fn new(config: AircraftConfig) -> Self {
        Self {
            speed: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            position: config.start_position(),
            engine_angle: 0.0,
            config,
        }
    }

    /// Unit heading derived from yaw and pitch. Roll never affects it.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Advance one frame worth `ticks` nominal frames.
    ///
    /// Returns the displacement the aircraft moved by; the world must be
    /// translated by exactly this vector.
    pub fn integrate(&mut self, controls: &dyn Controller, ticks: f32) -> Vec3 {
        let cfg = self.config;

        if controls.is_active(Intent::ThrustUp) {
            self.speed += cfg.acceleration * ticks;
        } else if controls.is_active(Intent::ThrustDown) {
            self.speed -= cfg.deceleration * ticks;
        }
        self.speed = self.speed.clamp(0.0, cfg.max_speed);

        if controls.is_active(Intent::YawLeft) {
            self.yaw += cfg.turn_speed * ticks;
        }
        if controls.is_active(Intent::YawRight) {
            self.yaw -= cfg.turn_speed * ticks;
        }

        let roll_rate = cfg.turn_speed * cfg.roll_factor * ticks;
        if controls.is_active(Intent::RollLeft) {
            self.roll -= roll_rate;
        }
        if controls.is_active(Intent::RollRight) {
            self.roll += roll_rate;
        }

        if controls.is_active(Intent::PitchUp) {
            self.pitch = (self.pitch - cfg.pitch_rate * ticks).max(-cfg.pitch_limit);
        }
        if controls.is_active(Intent::PitchDown) {
            self.pitch = (self.pitch + cfg.pitch_rate * ticks).min(cfg.pitch_limit);
        }

        // Recovery applies even while the intent is held, so sustained input
        // settles at a steady-state angle.
        let decay = decay_factor(cfg.recovery, ticks);
        self.roll *= decay;
        self.pitch *= decay;

        if self.speed > 0.0 {
            self.engine_angle =
                (self.engine_angle + cfg.engine_spin_rate * ticks) % std::f32::consts::TAU;
        }

        let displacement = self.forward() * self.speed * cfg.distance_scale * ticks;
        self.position += displacement;
        displacement
    }

    pub fn pose(&self) -> AircraftPose {
        AircraftPose {
            position: self.position,
            orientation: Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll),
            engine_angle: self.engine_angle,
        }
    }
}

/// `factor^ticks`, exact for the common single-tick case
pub(crate) fn decay_factor(factor: f32, ticks: f32) -> f32 {
    if ticks == 1.0 {
        factor
    } else {
        factor.powf(ticks)
    }
}
