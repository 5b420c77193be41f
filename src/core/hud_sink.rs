use crate::driver::HudSnapshot;
use crate::error::SimResult;
use crate::traits::{FrameSink, FrameView};

use super::timer::Throttled;

/// Sink that publishes the HUD: logged at a throttled rate and kept for the
/// window title.
#[derive(Debug)]
pub struct HudSink {
    throttle: Option<Throttled>,
    latest: Option<HudSnapshot>,
    frames: u64,
}

impl HudSink {
    pub fn new(log_interval: f32) -> Self {
        Self {
            throttle: Some(Throttled::new(log_interval)),
            latest: None,
            frames: 0,
        }
    }

    /// Track the HUD without logging it
    pub fn quiet() -> Self {
        Self {
            throttle: None,
            latest: None,
            frames: 0,
        }
    }

    pub fn latest(&self) -> Option<HudSnapshot> {
        self.latest
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for HudSink {
    fn present(&mut self, view: &FrameView<'_>) -> SimResult<()> {
        self.frames += 1;
        self.latest = Some(view.hud);
        let due = match self.throttle.as_mut() {
            Some(throttle) => throttle.try_tick(view.frame.delta),
            None => false,
        };
        if due {
            log::info!(
                "[t={:.1}s] {} | camera {:.0} | {} world objects",
                view.frame.time,
                view.hud,
                view.camera.position,
                view.world.len()
            );
        }
        Ok(())
    }
}
