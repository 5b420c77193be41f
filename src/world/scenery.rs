use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::error::SimResult;

use super::{ObjectHandle, OceanMesh, Prop, PropKind, WorldRecenterer};

/// The default world: one terrain patch, the ocean, and scattered landmarks.
///
/// Layout is seeded so runs are reproducible.
pub struct Scenery {
    pub world: WorldRecenterer,
    pub terrain: ObjectHandle,
    pub ocean: ObjectHandle,
    pub peaks: Vec<ObjectHandle>,
    pub villages: Vec<ObjectHandle>,
    pub clouds: Vec<ObjectHandle>,
}

impl Scenery {
    pub fn build(config: &SimConfig) -> SimResult<Self> {
        let w = &config.world;
        let mut rng = ChaCha8Rng::seed_from_u64(w.seed);
        let mut world = WorldRecenterer::new();

        let terrain = world.register(
            Prop::new(PropKind::Terrain, Vec3::new(0.0, w.ground_level, 0.0))
                .with_scale(w.ground_half_extent * 2.0),
            w.ground_half_extent,
        )?;

        let ocean = world.register(
            OceanMesh::grid(
                config.waves.ocean_size,
                config.waves.segments,
                Vec3::new(0.0, w.ocean_level, 0.0),
            ),
            w.ground_half_extent,
        )?;

        let spread = w.scenery_half_extent;
        let peaks = (0..w.peaks)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-spread..spread),
                    w.ground_level + rng.gen_range(0.0..300.0),
                    rng.gen_range(-spread..spread),
                );
                let radius = rng.gen_range(200.0..500.0);
                world.register(
                    Prop::new(PropKind::Peak, position).with_scale(radius),
                    w.scenery_half_extent,
                )
            })
            .collect::<SimResult<Vec<_>>>()?;

        let village_spread = w.village_half_extent;
        let villages = (0..w.villages)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-village_spread..village_spread),
                    w.ground_level,
                    rng.gen_range(-village_spread..village_spread),
                );
                world.register(
                    Prop::new(PropKind::Village, position).with_scale(120.0),
                    w.village_half_extent,
                )
            })
            .collect::<SimResult<Vec<_>>>()?;

        let clouds = (0..w.clouds)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-spread..spread),
                    rng.gen_range(300.0..900.0),
                    rng.gen_range(-spread..spread),
                );
                let puffs = rng.gen_range(3..7) as f32;
                world.register(
                    Prop::new(PropKind::Cloud, position).with_scale(puffs),
                    w.scenery_half_extent,
                )
            })
            .collect::<SimResult<Vec<_>>>()?;

        log::info!(
            "scenery built: {} objects ({} peaks, {} villages, {} clouds), seed {}",
            world.len(),
            peaks.len(),
            villages.len(),
            clouds.len(),
            w.seed
        );

        Ok(Self {
            world,
            terrain,
            ocean,
            peaks,
            villages,
            clouds,
        })
    }
}
