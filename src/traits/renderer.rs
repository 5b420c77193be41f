use crate::aircraft::AircraftPose;
use crate::camera::CameraPose;
use crate::driver::HudSnapshot;
use crate::error::SimResult;
use crate::frame::FrameInfo;
use crate::world::WorldRecenterer;

/// Everything the renderer may read after a frame has been simulated
pub struct FrameView<'a> {
    pub frame: FrameInfo,
    pub camera: CameraPose,
    pub aircraft: AircraftPose,
    pub hud: HudSnapshot,
    pub world: &'a WorldRecenterer,
}

/// Frame sink - receives the simulated frame for drawing or display
pub trait FrameSink {
    /// Present one simulated frame
    fn present(&mut self, view: &FrameView<'_>) -> SimResult<()>;
}

/// A sink that discards frames, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _view: &FrameView<'_>) -> SimResult<()> {
        Ok(())
    }
}
