//! Simulation configuration.
//!
//! Every tuning constant lives here with the defaults the loop was tuned
//! with at ~60 Hz. Values are read once at startup; nothing in the frame loop
//! mutates them.

use std::f32::consts::FRAC_PI_6;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Flight model tuning, expressed per nominal frame (tick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub turn_speed: f32,
    /// Roll rate as a multiple of `turn_speed`
    pub roll_factor: f32,
    pub pitch_rate: f32,
    pub pitch_limit: f32,
    /// Per-tick decay applied to roll and pitch
    pub recovery: f32,
    /// Converts speed units into per-tick distance
    pub distance_scale: f32,
    pub start_position: [f32; 3],
    pub engine_spin_rate: f32,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            max_speed: 1000.0,
            acceleration: 0.5,
            deceleration: 0.3,
            turn_speed: 0.02,
            roll_factor: 1.5,
            pitch_rate: 0.01,
            pitch_limit: FRAC_PI_6,
            recovery: 0.96,
            distance_scale: 0.1,
            start_position: [0.0, 200.0, 0.0],
            engine_spin_rate: 0.2,
        }
    }
}

impl AircraftConfig {
    pub fn start_position(&self) -> Vec3 {
        Vec3::from_array(self.start_position)
    }
}

/// Chase and orbit camera tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub chase_radius: f32,
    pub chase_height: f32,
    /// Fraction of the remaining distance covered per tick
    pub smoothing: f32,
    pub orbit_radius: f32,
    pub orbit_height: f32,
    /// Radians per pixel of drag
    pub orbit_sensitivity: f32,
    /// World units of height per radian of vertical drag
    pub orbit_vertical_scale: f32,
    pub start_position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            chase_radius: 50.0,
            chase_height: 25.0,
            smoothing: 0.05,
            orbit_radius: 50.0,
            orbit_height: 25.0,
            orbit_sensitivity: 0.01,
            orbit_vertical_scale: 10.0,
            start_position: [0.0, 10.0, 20.0],
        }
    }
}

/// World extents and scenery layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Wrap half-extent for the terrain and ocean patches
    pub ground_half_extent: f32,
    /// Wrap half-extent for peaks and clouds
    pub scenery_half_extent: f32,
    pub village_half_extent: f32,
    pub ground_level: f32,
    pub ocean_level: f32,
    pub peaks: usize,
    pub villages: usize,
    pub clouds: usize,
    pub seed: u64,
    pub cloud_spin_rate: f32,
    pub cloud_bob_amplitude: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_half_extent: 5000.0,
            scenery_half_extent: 3000.0,
            village_half_extent: 2000.0,
            ground_level: -1000.0,
            ocean_level: -800.0,
            peaks: 10,
            villages: 6,
            clouds: 30,
            seed: 7,
            cloud_spin_rate: 0.001,
            cloud_bob_amplitude: 0.1,
        }
    }
}

/// Ocean grid and wave shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub frequency: f32,
    pub amplitude: f32,
    pub ocean_size: f32,
    pub segments: usize,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            frequency: 0.01,
            amplitude: 5.0,
            ocean_size: 15000.0,
            segments: 50,
        }
    }
}

/// How a frame's measured delta maps onto simulation ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimeStep {
    /// One tick per rendered frame regardless of wall-clock time
    #[default]
    PerFrame,
    /// `delta * reference_hz` ticks, capped at `max_ticks`
    Scaled { reference_hz: f32, max_ticks: f32 },
}

impl TimeStep {
    pub fn scaled() -> Self {
        TimeStep::Scaled {
            reference_hz: 60.0,
            max_ticks: 4.0,
        }
    }

    /// Most ticks a single frame can represent
    pub fn max_ticks(&self) -> f32 {
        match *self {
            TimeStep::PerFrame => 1.0,
            TimeStep::Scaled { max_ticks, .. } => max_ticks,
        }
    }

    /// Number of nominal ticks a frame of `delta` seconds represents
    pub fn ticks(&self, delta: f32) -> f32 {
        match *self {
            TimeStep::PerFrame => 1.0,
            TimeStep::Scaled {
                reference_hz,
                max_ticks,
            } => {
                if delta.is_finite() && delta > 0.0 {
                    (delta * reference_hz).min(max_ticks)
                } else {
                    0.0
                }
            }
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub aircraft: AircraftConfig,
    pub camera: CameraConfig,
    pub world: WorldConfig,
    pub waves: WaveConfig,
    pub time_step: TimeStep,
}

impl SimConfig {
    /// Parses config from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the frame loop cannot run with.
    ///
    /// Every float must be finite (serde_json reads out-of-range literals
    /// such as `1e39` as infinity) and carry the sign its use needs.
    pub fn validate(&self) -> SimResult<()> {
        let a = &self.aircraft;
        positive("aircraft.max_speed", a.max_speed)?;
        non_negative("aircraft.acceleration", a.acceleration)?;
        non_negative("aircraft.deceleration", a.deceleration)?;
        non_negative("aircraft.turn_speed", a.turn_speed)?;
        non_negative("aircraft.roll_factor", a.roll_factor)?;
        non_negative("aircraft.pitch_rate", a.pitch_rate)?;
        within(
            "aircraft.pitch_limit",
            a.pitch_limit,
            a.pitch_limit > 0.0 && a.pitch_limit < std::f32::consts::FRAC_PI_2,
            "(0, pi/2)",
        )?;
        within(
            "aircraft.recovery",
            a.recovery,
            a.recovery > 0.0 && a.recovery <= 1.0,
            "(0, 1]",
        )?;
        positive("aircraft.distance_scale", a.distance_scale)?;
        finite_all("aircraft.start_position", &a.start_position)?;
        finite("aircraft.engine_spin_rate", a.engine_spin_rate)?;

        let c = &self.camera;
        non_negative("camera.chase_radius", c.chase_radius)?;
        finite("camera.chase_height", c.chase_height)?;
        within(
            "camera.smoothing",
            c.smoothing,
            c.smoothing > 0.0 && c.smoothing <= 1.0,
            "(0, 1]",
        )?;
        positive("camera.orbit_radius", c.orbit_radius)?;
        finite("camera.orbit_height", c.orbit_height)?;
        finite("camera.orbit_sensitivity", c.orbit_sensitivity)?;
        finite("camera.orbit_vertical_scale", c.orbit_vertical_scale)?;
        finite_all("camera.start_position", &c.start_position)?;

        let w = &self.world;
        positive("world.ground_half_extent", w.ground_half_extent)?;
        positive("world.scenery_half_extent", w.scenery_half_extent)?;
        positive("world.village_half_extent", w.village_half_extent)?;
        finite("world.ground_level", w.ground_level)?;
        finite("world.ocean_level", w.ocean_level)?;
        finite("world.cloud_spin_rate", w.cloud_spin_rate)?;
        non_negative("world.cloud_bob_amplitude", w.cloud_bob_amplitude)?;

        let v = &self.waves;
        finite("waves.frequency", v.frequency)?;
        non_negative("waves.amplitude", v.amplitude)?;
        positive("waves.ocean_size", v.ocean_size)?;
        require(v.segments > 0, "waves.segments must be at least 1")?;

        if let TimeStep::Scaled {
            reference_hz,
            max_ticks,
        } = self.time_step
        {
            positive("time_step.reference_hz", reference_hz)?;
            positive("time_step.max_ticks", max_ticks)?;
        }

        // One wrap correction of 2D only restores [-D, D] if no frame moves
        // further than 2D.
        let max_step = a.max_speed * a.distance_scale * self.time_step.max_ticks();
        let min_extent = w
            .ground_half_extent
            .min(w.scenery_half_extent)
            .min(w.village_half_extent);
        if !(max_step.is_finite() && max_step <= 2.0 * min_extent) {
            return Err(SimError::InvalidConfig(format!(
                "a frame at max speed moves {max_step} units, more than twice the smallest half extent ({min_extent})"
            )));
        }
        Ok(())
    }
}

fn require(condition: bool, message: &str) -> SimResult<()> {
    if condition {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(message.to_string()))
    }
}

fn finite(name: &str, value: f32) -> SimResult<()> {
    within(name, value, true, "the finite range")
}

fn finite_all(name: &str, values: &[f32]) -> SimResult<()> {
    require(
        values.iter().all(|v| v.is_finite()),
        &format!("{name} must be finite"),
    )
}

fn positive(name: &str, value: f32) -> SimResult<()> {
    within(name, value, value > 0.0, "(0, inf)")
}

fn non_negative(name: &str, value: f32) -> SimResult<()> {
    within(name, value, value >= 0.0, "[0, inf)")
}

fn within(name: &str, value: f32, condition: bool, range: &str) -> SimResult<()> {
    if value.is_finite() && condition {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{name} must be finite and within {range}, got {value}"
        )))
    }
}
