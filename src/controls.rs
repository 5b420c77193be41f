//! Pilot control state.
//!
//! Written by the input boundary between frames and read once per frame by
//! the simulation. Everything runs on the event-loop thread, so plain fields
//! with last-write-wins semantics are enough.

use crate::traits::{Controller, Intent, IntentFlags};

#[derive(Debug, Clone, Default)]
pub struct ControlState {
    intents: IntentFlags,
    dragging: bool,
    pointer: Option<(f32, f32)>,
    drag_delta: (f32, f32),
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_intent(&mut self, intent: Intent, active: bool) {
        self.intents.set(intent, active);
    }

    /// Start a drag at the given pointer coordinates
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
        self.begin_drag();
    }

    /// Start a drag wherever the pointer is. With no known position the
    /// first move only anchors the pointer and contributes no delta.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Record pointer movement; only accumulates while dragging
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.dragging {
            if let Some((px, py)) = self.pointer {
                self.drag_delta.0 += x - px;
                self.drag_delta.1 += y - py;
            }
        }
        self.pointer = Some((x, y));
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Last known pointer coordinates
    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Reset per-frame state (drag delta)
    /// Call this at the end of each frame after the simulation has read it
    pub fn reset_deltas(&mut self) {
        self.drag_delta = (0.0, 0.0);
    }

    /// Release every held intent, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.intents.clear();
        self.dragging = false;
        self.drag_delta = (0.0, 0.0);
    }
}

impl Controller for ControlState {
    fn is_active(&self, intent: Intent) -> bool {
        self.intents.get(intent)
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn drag_delta(&self) -> (f32, f32) {
        self.drag_delta
    }
}
