//! Per-frame orchestration.
//!
//! Order within a frame is fixed: integrate the aircraft, slide the world by
//! the same displacement, move the camera, animate the ocean and clouds, then
//! hand the result to the sink. Frame input is checked before any of it runs,
//! so a rejected frame leaves the simulation where it was.

use glam::Vec3;

use crate::aircraft::AircraftState;
use crate::ambient::CloudDrift;
use crate::camera::ChaseCamera;
use crate::config::{SimConfig, TimeStep};
use crate::error::{SimError, SimResult};
use crate::frame::FrameInfo;
use crate::traits::{Controller, FrameSink, FrameView};
use crate::waves::WaveAnimator;
use crate::world::{ObjectHandle, OceanMesh, Prop, Scenery, WorldRecenterer};

/// Rounded telemetry for the UI; the only numbers the loop publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudSnapshot {
    pub speed: i64,
    pub altitude: i64,
}

impl HudSnapshot {
    pub fn from_aircraft(aircraft: &AircraftState) -> Self {
        Self {
            speed: aircraft.speed.round() as i64,
            altitude: aircraft.position.y.round() as i64,
        }
    }
}

impl std::fmt::Display for HudSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Speed: {}  Altitude: {}", self.speed, self.altitude)
    }
}

pub struct FrameDriver {
    aircraft: AircraftState,
    world: WorldRecenterer,
    camera: ChaseCamera,
    waves: WaveAnimator,
    clouds: CloudDrift,
    ocean: ObjectHandle,
    time_step: TimeStep,
    last_displacement: Vec3,
}

impl FrameDriver {
    /// Driver over the default seeded scenery
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let scenery = Scenery::build(config)?;
        Self::with_world(config, scenery.world, scenery.ocean, scenery.clouds)
    }

    /// Driver over a world built elsewhere.
    ///
    /// `ocean` must name an [`OceanMesh`] and every handle in `clouds` a
    /// [`Prop`] registered in `world`.
    pub fn with_world(
        config: &SimConfig,
        world: WorldRecenterer,
        ocean: ObjectHandle,
        clouds: Vec<ObjectHandle>,
    ) -> SimResult<Self> {
        if world.get::<OceanMesh>(ocean).is_none() {
            return Err(SimError::UnknownObject(ocean.index()));
        }
        if let Some(bad) = clouds.iter().find(|h| world.get::<Prop>(**h).is_none()) {
            return Err(SimError::UnknownObject(bad.index()));
        }

        Ok(Self {
            aircraft: AircraftState::new(config.aircraft),
            world,
            camera: ChaseCamera::new(config.camera),
            waves: WaveAnimator::new(&config.waves),
            clouds: CloudDrift::new(clouds, &config.world),
            ocean,
            time_step: config.time_step,
            last_displacement: Vec3::ZERO,
        })
    }

    /// Simulate one frame and present it.
    pub fn step(
        &mut self,
        controls: &dyn Controller,
        frame: FrameInfo,
        sink: &mut dyn FrameSink,
    ) -> SimResult<HudSnapshot> {
        let ticks = self.time_step.ticks(frame.delta);
        if !ticks.is_finite() {
            return Err(SimError::NonFiniteTime(frame.delta));
        }
        let ocean = self
            .world
            .get::<OceanMesh>(self.ocean)
            .ok_or(SimError::UnknownObject(self.ocean.index()))?;
        self.waves.check(ocean, frame.time)?;

        let displacement = self.aircraft.integrate(controls, ticks);
        self.world.apply(displacement);
        self.last_displacement = displacement;

        self.camera.update(&self.aircraft, controls, ticks);

        let ocean = self.world.expect_mut::<OceanMesh>(self.ocean)?;
        self.waves.tick(ocean, frame.time)?;
        self.clouds.tick(&mut self.world, frame.time, ticks)?;

        let hud = HudSnapshot::from_aircraft(&self.aircraft);
        sink.present(&FrameView {
            frame,
            camera: self.camera.pose(),
            aircraft: self.aircraft.pose(),
            hud,
            world: &self.world,
        })?;

        log::trace!(
            "frame {}: ticks {:.2}, displacement {}, {}",
            frame.number,
            ticks,
            displacement,
            hud
        );
        Ok(hud)
    }

    pub fn aircraft(&self) -> &AircraftState {
        &self.aircraft
    }

    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    pub fn world(&self) -> &WorldRecenterer {
        &self.world
    }

    pub fn ocean(&self) -> Option<&OceanMesh> {
        self.world.get::<OceanMesh>(self.ocean)
    }

    /// Displacement applied in the most recent frame
    pub fn last_displacement(&self) -> Vec3 {
        self.last_displacement
    }
}
