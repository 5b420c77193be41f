//! Procedural ocean waves.
//!
//! Heights are a pure function of a vertex's world-space horizontal position
//! and elapsed time, so every tick overwrites them from scratch.

use glam::Vec3;

use crate::config::WaveConfig;
use crate::error::{SimError, SimResult};
use crate::world::OceanMesh;

#[derive(Debug, Clone, Copy)]
pub struct WaveAnimator {
    frequency: f32,
    amplitude: f32,
}

impl WaveAnimator {
    pub fn new(config: &WaveConfig) -> Self {
        Self {
            frequency: config.frequency,
            amplitude: config.amplitude,
        }
    }

    /// Wave height at world-space `(x, z)` and time `t`
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        let k = self.frequency;
        (x * k + t).sin() * (z * k + t).cos() * self.amplitude
    }

    /// Errors `tick` would report for this mesh and time, without writing.
    pub fn check(&self, ocean: &OceanMesh, elapsed: f32) -> SimResult<()> {
        if !elapsed.is_finite() {
            return Err(SimError::NonFiniteTime(elapsed));
        }
        if !ocean.position.is_finite() {
            return Err(SimError::NonFiniteMeshPosition(ocean.position));
        }
        if let Some(index) = ocean
            .vertices()
            .iter()
            .position(|v| !(v.x.is_finite() && v.z.is_finite()))
        {
            return Err(SimError::NonFiniteVertex { index });
        }
        Ok(())
    }

    /// Rewrite every vertex height of `ocean` for `elapsed` seconds.
    ///
    /// Input is validated before anything is written, so a rejected tick
    /// leaves the mesh untouched.
    pub fn tick(&self, ocean: &mut OceanMesh, elapsed: f32) -> SimResult<()> {
        self.check(ocean, elapsed)?;

        let origin = ocean.position;
        for vertex in ocean.vertices_mut() {
            let world = origin + Vec3::new(vertex.x, 0.0, vertex.z);
            vertex.y = self.height(world.x, world.z, elapsed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> WaveAnimator {
        WaveAnimator::new(&WaveConfig::default())
    }

    #[test]
    fn test_height_formula() {
        let waves = animator();
        let expected = (100.0f32 * 0.01 + 2.0).sin() * (50.0f32 * 0.01 + 2.0).cos() * 5.0;
        assert!((waves.height(100.0, 50.0, 2.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_heights_bounded_by_amplitude() {
        let waves = animator();
        let mut ocean = OceanMesh::grid(1000.0, 10, Vec3::ZERO);
        waves.tick(&mut ocean, 3.7).unwrap();
        assert!(ocean.heights().all(|h| h.abs() <= 5.0));
    }

    #[test]
    fn test_rejects_non_finite_time() {
        let mut ocean = OceanMesh::grid(10.0, 1, Vec3::ZERO);
        assert_eq!(
            animator().tick(&mut ocean, f32::INFINITY),
            Err(SimError::NonFiniteTime(f32::INFINITY))
        );
    }

    #[test]
    fn test_rejects_non_finite_vertex_without_writing() {
        let mut vertices = vec![Vec3::new(0.0, 1.0, 0.0); 4];
        vertices[2].x = f32::NAN;
        let mut ocean = OceanMesh::from_vertices(vertices, 2, Vec3::ZERO);

        let result = animator().tick(&mut ocean, 1.0);
        assert_eq!(result, Err(SimError::NonFiniteVertex { index: 2 }));
        assert!(ocean.heights().all(|h| h == 1.0));
    }

    #[test]
    fn test_rejects_non_finite_mesh_position() {
        let origin = Vec3::new(f32::NAN, -800.0, 0.0);
        let mut ocean = OceanMesh::grid(10.0, 1, origin);

        let result = animator().tick(&mut ocean, 1.0);
        assert!(matches!(result, Err(SimError::NonFiniteMeshPosition(p)) if p.x.is_nan()));
        assert!(ocean.heights().all(|h| h == 0.0));
    }

    #[test]
    fn test_samples_world_space_position() {
        let waves = animator();
        let mut ocean = OceanMesh::from_vertices(vec![Vec3::ZERO], 1, Vec3::new(40.0, -800.0, 70.0));
        waves.tick(&mut ocean, 0.5).unwrap();
        assert!((ocean.vertices()[0].y - waves.height(40.0, 70.0, 0.5)).abs() < 1e-6);
    }
}
