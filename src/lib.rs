pub mod aircraft;
pub mod ambient;
pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod core;
pub mod driver;
pub mod error;
pub mod frame;
pub mod traits;
pub mod waves;
pub mod window;
pub mod world;

pub use aircraft::{AircraftPose, AircraftState};
pub use camera::{CameraMode, CameraPose, ChaseCamera};
pub use config::{SimConfig, TimeStep};
pub use controls::ControlState;
pub use driver::{FrameDriver, HudSnapshot};
pub use error::{SimError, SimResult};
pub use waves::WaveAnimator;
pub use world::{OceanMesh, WorldRecenterer};
