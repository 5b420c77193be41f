use std::sync::Arc;

use winit::window::Window as WinitWindow;

use crate::driver::HudSnapshot;

const TITLE: &str = "Endless Flight";

/// Wrapper around winit Window; the title bar doubles as the HUD
pub struct Window {
    inner: Arc<WinitWindow>,
    show_hud: bool,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>, show_hud: bool) -> Self {
        Self {
            inner: window,
            show_hud,
        }
    }

    /// Publish the HUD for this frame
    pub fn show(&self, hud: HudSnapshot) {
        if self.show_hud {
            self.inner.set_title(&title_for(hud));
        }
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

pub fn title_for(hud: HudSnapshot) -> String {
    format!("{TITLE} | {hud}")
}
