const INTENT_COUNT: usize = 8;

/// Pilot intent identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    ThrustUp,
    ThrustDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    PitchUp,
    PitchDown,
}

impl Intent {
    /// Every intent, in a stable order
    pub const ALL: [Intent; INTENT_COUNT] = [
        Intent::ThrustUp,
        Intent::ThrustDown,
        Intent::YawLeft,
        Intent::YawRight,
        Intent::RollLeft,
        Intent::RollRight,
        Intent::PitchUp,
        Intent::PitchDown,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Controller - read-only view of the pilot's input for one frame
pub trait Controller {
    /// Check if an intent is currently held
    fn is_active(&self, intent: Intent) -> bool;

    /// Whether the pointer is being dragged
    fn is_dragging(&self) -> bool;

    /// Drag movement accumulated since the last frame, in pixels
    fn drag_delta(&self) -> (f32, f32);
}

/// Fixed-size set of intent flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags([bool; INTENT_COUNT]);

impl IntentFlags {
    pub fn set(&mut self, intent: Intent, active: bool) {
        self.0[intent.index()] = active;
    }

    pub fn get(&self, intent: Intent) -> bool {
        self.0[intent.index()]
    }

    /// Iterate over the intents currently held
    pub fn active(&self) -> impl Iterator<Item = Intent> + '_ {
        Intent::ALL.into_iter().filter(|i| self.get(*i))
    }

    pub fn clear(&mut self) {
        self.0 = [false; INTENT_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_intents_unique() {
        let set: HashSet<_> = Intent::ALL.iter().collect();
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_intent_index_matches_all_order() {
        for (i, intent) in Intent::ALL.iter().enumerate() {
            assert_eq!(intent.index(), i);
        }
    }

    #[test]
    fn test_flags_set_and_clear() {
        let mut flags = IntentFlags::default();
        flags.set(Intent::YawLeft, true);
        flags.set(Intent::PitchDown, true);

        assert!(flags.get(Intent::YawLeft));
        assert!(!flags.get(Intent::YawRight));
        assert_eq!(
            flags.active().collect::<Vec<_>>(),
            vec![Intent::YawLeft, Intent::PitchDown]
        );

        flags.set(Intent::YawLeft, false);
        assert!(!flags.get(Intent::YawLeft));

        flags.clear();
        assert_eq!(flags.active().count(), 0);
    }

    // Mock controller for testing trait consumers
    struct MockController {
        held: Vec<Intent>,
    }

    impl Controller for MockController {
        fn is_active(&self, intent: Intent) -> bool {
            self.held.contains(&intent)
        }

        fn is_dragging(&self) -> bool {
            false
        }

        fn drag_delta(&self) -> (f32, f32) {
            (0.0, 0.0)
        }
    }

    #[test]
    fn test_controller_is_active() {
        let controller = MockController {
            held: vec![Intent::ThrustUp, Intent::RollRight],
        };

        assert!(controller.is_active(Intent::ThrustUp));
        assert!(controller.is_active(Intent::RollRight));
        assert!(!controller.is_active(Intent::ThrustDown));
        assert!(!controller.is_dragging());
    }
}
