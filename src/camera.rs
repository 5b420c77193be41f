use glam::{Mat4, Vec3};

use crate::aircraft::{decay_factor, AircraftState};
use crate::config::CameraConfig;
use crate::traits::Controller;

/// Which controller currently owns the camera position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Smoothed toward a point behind and above the aircraft
    Chase,
    /// Free look around the aircraft, driven by pointer drag
    Orbit {
        /// Accumulated horizontal drag, in radians
        azimuth: f32,
        /// Accumulated vertical drag, in radians
        elevation: f32,
    },
}

/// Render-facing camera transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_target: Vec3,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_target, Vec3::Y)
    }
}

pub struct ChaseCamera {
    pub position: Vec3,
    pub look_target: Vec3,
    mode: CameraMode,
    config: CameraConfig,
}

impl ChaseCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.start_position),
            look_target: Vec3::ZERO,
            mode: CameraMode::Chase,
            config,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Point the chase mode is smoothing toward
    pub fn chase_target(&self, aircraft: &AircraftState) -> Vec3 {
        let r = self.config.chase_radius;
        let offset = Vec3::new(
            -aircraft.yaw.sin() * r,
            self.config.chase_height,
            -aircraft.yaw.cos() * r,
        );
        aircraft.position + offset
    }

    /// Orbit position for the given accumulated angles
    pub fn orbit_position(&self, aircraft: &AircraftState, azimuth: f32, elevation: f32) -> Vec3 {
        let r = self.config.orbit_radius;
        aircraft.position
            + Vec3::new(
                azimuth.sin() * r,
                self.config.orbit_height + elevation * self.config.orbit_vertical_scale,
                azimuth.cos() * r,
            )
    }

    /// Advance the camera one frame worth `ticks` nominal frames.
    ///
    /// A held button alone does not leave chase mode; orbit starts with the
    /// first frame that carries drag movement.
    pub fn update(&mut self, aircraft: &AircraftState, controls: &dyn Controller, ticks: f32) {
        let moved = controls.drag_delta() != (0.0, 0.0);
        self.mode = match (self.mode, controls.is_dragging()) {
            (CameraMode::Chase, true) if moved => {
                log::debug!("camera: chase -> orbit");
                CameraMode::Orbit {
                    azimuth: 0.0,
                    elevation: 0.0,
                }
            }
            (CameraMode::Orbit { .. }, false) => {
                log::debug!("camera: orbit -> chase");
                CameraMode::Chase
            }
            (mode, _) => mode,
        };

        match self.mode {
            CameraMode::Chase => {
                let target = self.chase_target(aircraft);
                let alpha = 1.0 - decay_factor(1.0 - self.config.smoothing, ticks);
                self.position = self.position.lerp(target, alpha);
            }
            CameraMode::Orbit { azimuth, elevation } => {
                let (dx, dy) = controls.drag_delta();
                let azimuth = azimuth + dx * self.config.orbit_sensitivity;
                let elevation = elevation + dy * self.config.orbit_sensitivity;
                self.mode = CameraMode::Orbit { azimuth, elevation };
                self.position = self.orbit_position(aircraft, azimuth, elevation);
            }
        }

        self.look_target = aircraft.position;
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_target: self.look_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AircraftConfig;
    use crate::controls::ControlState;

    fn setup() -> (ChaseCamera, AircraftState) {
        (
            ChaseCamera::new(CameraConfig::default()),
            AircraftState::new(AircraftConfig::default()),
        )
    }

    #[test]
    fn test_chase_target_behind_and_above() {
        let (camera, aircraft) = setup();
        let target = camera.chase_target(&aircraft);
        assert_eq!(target, Vec3::new(0.0, 225.0, -50.0));
    }

    #[test]
    fn test_chase_lerps_by_smoothing_factor() {
        let (mut camera, aircraft) = setup();
        let start = camera.position;
        let target = camera.chase_target(&aircraft);
        camera.update(&aircraft, &ControlState::new(), 1.0);

        let expected = start + (target - start) * 0.05;
        assert!(camera.position.abs_diff_eq(expected, 1e-4));
        assert_eq!(camera.look_target, aircraft.position);
        assert_eq!(camera.mode(), CameraMode::Chase);
    }

    #[test]
    fn test_chase_offset_ignores_pitch_and_roll() {
        let (camera, mut aircraft) = setup();
        let level = camera.chase_target(&aircraft);
        aircraft.pitch = 0.4;
        aircraft.roll = 1.2;
        assert_eq!(camera.chase_target(&aircraft), level);
    }

    #[test]
    fn test_drag_enters_orbit_and_release_returns_to_chase() {
        let (mut camera, aircraft) = setup();
        let mut controls = ControlState::new();

        controls.pointer_down(0.0, 0.0);
        camera.update(&aircraft, &controls, 1.0);
        assert_eq!(camera.mode(), CameraMode::Chase);

        controls.pointer_moved(5.0, 0.0);
        camera.update(&aircraft, &controls, 1.0);
        assert!(matches!(camera.mode(), CameraMode::Orbit { .. }));
        controls.reset_deltas();

        controls.pointer_up();
        camera.update(&aircraft, &controls, 1.0);
        assert_eq!(camera.mode(), CameraMode::Chase);
    }

    #[test]
    fn test_press_without_movement_keeps_chasing() {
        let (mut camera, aircraft) = setup();
        let mut controls = ControlState::new();
        let start = camera.position;
        let target = camera.chase_target(&aircraft);

        controls.pointer_down(300.0, 200.0);
        camera.update(&aircraft, &controls, 1.0);

        assert_eq!(camera.mode(), CameraMode::Chase);
        assert!(camera.position.abs_diff_eq(start.lerp(target, 0.05), 1e-4));
    }

    #[test]
    fn test_orbit_holds_position_without_new_drag() {
        let (mut camera, aircraft) = setup();
        let mut controls = ControlState::new();
        controls.pointer_down(0.0, 0.0);
        controls.pointer_moved(50.0, 20.0);
        camera.update(&aircraft, &controls, 1.0);
        controls.reset_deltas();
        let held = camera.position;

        camera.update(&aircraft, &controls, 1.0);
        assert!(camera.position.abs_diff_eq(held, 1e-5));
    }

    #[test]
    fn test_orbit_vertical_drag_raises_camera() {
        let (mut camera, aircraft) = setup();
        let mut controls = ControlState::new();
        controls.pointer_down(0.0, 0.0);
        controls.pointer_moved(0.0, 100.0);
        camera.update(&aircraft, &controls, 1.0);

        // 100px * 0.01 rad/px * 10 units/rad above the base height
        assert!((camera.position.y - (200.0 + 25.0 + 10.0)).abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let (mut camera, aircraft) = setup();
        camera.update(&aircraft, &ControlState::new(), 1.0);
        let view = camera.pose().view_matrix();
        let target_in_view = view.transform_point3(aircraft.position);
        assert!(target_in_view.x.abs() < 1e-3);
        assert!(target_in_view.y.abs() < 1e-3);
        assert!(target_in_view.z < 0.0);
    }
}
