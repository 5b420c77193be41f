use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controls::ControlState;
use crate::traits::Intent;

/// Adapter that bridges Winit events to the pilot's ControlState
#[derive(Debug, Default, Clone, Copy)]
pub struct InputAdapter;

/// What a window event meant to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Handled,
    Ignored,
    Quit,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Process a Winit WindowEvent and update `controls`
    pub fn process_event(&self, event: &WindowEvent, controls: &mut ControlState) -> InputOutcome {
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.process_key(code, event.state, controls),
                PhysicalKey::Unidentified(_) => InputOutcome::Ignored,
            },
            WindowEvent::MouseInput { state, button, .. } => {
                self.process_mouse_button(*button, *state, controls)
            }
            WindowEvent::CursorMoved { position, .. } => {
                controls.pointer_moved(position.x as f32, position.y as f32);
                InputOutcome::Handled
            }
            WindowEvent::Focused(false) => {
                controls.release_all();
                InputOutcome::Handled
            }
            _ => InputOutcome::Ignored,
        }
    }

    /// Apply a key press or release
    pub fn process_key(
        &self,
        code: KeyCode,
        state: ElementState,
        controls: &mut ControlState,
    ) -> InputOutcome {
        if code == KeyCode::Escape && state.is_pressed() {
            return InputOutcome::Quit;
        }
        match Self::keycode_to_intent(code) {
            Some(intent) => {
                controls.set_intent(intent, state.is_pressed());
                InputOutcome::Handled
            }
            None => InputOutcome::Ignored,
        }
    }

    /// Apply a mouse button press or release; the left button drags the camera
    pub fn process_mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
        controls: &mut ControlState,
    ) -> InputOutcome {
        if button != MouseButton::Left {
            return InputOutcome::Ignored;
        }
        match state {
            ElementState::Pressed => controls.begin_drag(),
            ElementState::Released => controls.pointer_up(),
        }
        InputOutcome::Handled
    }

    /// Map Winit KeyCode to a pilot intent
    pub fn keycode_to_intent(code: KeyCode) -> Option<Intent> {
        match code {
            KeyCode::KeyW => Some(Intent::ThrustUp),
            KeyCode::KeyS => Some(Intent::ThrustDown),
            KeyCode::KeyA => Some(Intent::YawLeft),
            KeyCode::KeyD => Some(Intent::YawRight),
            KeyCode::KeyQ => Some(Intent::RollLeft),
            KeyCode::KeyE => Some(Intent::RollRight),
            KeyCode::ArrowUp => Some(Intent::PitchUp),
            KeyCode::ArrowDown => Some(Intent::PitchDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Controller;

    // Note: Winit KeyEvent construction requires internal fields that are not publicly accessible
    // These tests drive the adapter through its key/button entry points instead

    #[test]
    fn test_key_press_and_release() {
        let adapter = InputAdapter::new();
        let mut controls = ControlState::new();

        let outcome = adapter.process_key(KeyCode::KeyW, ElementState::Pressed, &mut controls);
        assert_eq!(outcome, InputOutcome::Handled);
        assert!(controls.is_active(Intent::ThrustUp));

        adapter.process_key(KeyCode::KeyW, ElementState::Released, &mut controls);
        assert!(!controls.is_active(Intent::ThrustUp));
    }

    #[test]
    fn test_key_mapping_covers_every_intent() {
        let keys = [
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyQ,
            KeyCode::KeyE,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
        ];
        let mapped: Vec<_> = keys
            .iter()
            .filter_map(|k| InputAdapter::keycode_to_intent(*k))
            .collect();
        assert_eq!(mapped, Intent::ALL.to_vec());
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let mut controls = ControlState::new();
        let outcome = InputAdapter::new().process_key(KeyCode::KeyZ, ElementState::Pressed, &mut controls);
        assert_eq!(outcome, InputOutcome::Ignored);
    }

    #[test]
    fn test_escape_quits() {
        let mut controls = ControlState::new();
        let outcome = InputAdapter::new().process_key(KeyCode::Escape, ElementState::Pressed, &mut controls);
        assert_eq!(outcome, InputOutcome::Quit);
    }

    #[test]
    fn test_left_button_drag() {
        let adapter = InputAdapter::new();
        let mut controls = ControlState::new();
        controls.pointer_moved(100.0, 100.0);

        adapter.process_mouse_button(MouseButton::Left, ElementState::Pressed, &mut controls);
        assert!(controls.is_dragging());
        controls.pointer_moved(120.0, 90.0);
        assert_eq!(controls.drag_delta(), (20.0, -10.0));

        adapter.process_mouse_button(MouseButton::Left, ElementState::Released, &mut controls);
        assert!(!controls.is_dragging());
    }

    #[test]
    fn test_press_before_cursor_known_does_not_jump() {
        let adapter = InputAdapter::new();
        let mut controls = ControlState::new();

        adapter.process_mouse_button(MouseButton::Left, ElementState::Pressed, &mut controls);
        controls.pointer_moved(900.0, 700.0);
        assert_eq!(controls.drag_delta(), (0.0, 0.0));

        controls.pointer_moved(905.0, 700.0);
        assert_eq!(controls.drag_delta(), (5.0, 0.0));
    }

    #[test]
    fn test_right_button_ignored() {
        let mut controls = ControlState::new();
        let outcome = InputAdapter::new().process_mouse_button(
            MouseButton::Right,
            ElementState::Pressed,
            &mut controls,
        );
        assert_eq!(outcome, InputOutcome::Ignored);
        assert!(!controls.is_dragging());
    }
}
