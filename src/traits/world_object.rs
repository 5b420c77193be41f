use std::any::Any;

use glam::Vec3;

/// Anything placed in the world that slides under the aircraft.
///
/// World objects are never simulated individually; the recenterer moves
/// them as a group through `translate`.
pub trait WorldObject: Any {
    /// Current world-space position
    fn position(&self) -> Vec3;

    /// Move the object by `offset`
    fn translate(&mut self, offset: Vec3);

    /// Short label for logging
    fn label(&self) -> &str {
        "object"
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
