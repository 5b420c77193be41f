use glam::Vec3;

use crate::error::{SimError, SimResult};
use crate::traits::WorldObject;

/// Opaque handle to a registered world object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(usize);

impl ObjectHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

struct Entry {
    object: Box<dyn WorldObject>,
    half_extent: f32,
}

/// Owns every world object and slides them under the aircraft.
///
/// Each frame all objects are translated by the negated aircraft
/// displacement, then wrapped on x and z into `[-D, D]` where D is the
/// half-extent given at registration. The result is a toroidal world of
/// `2D x 2D` per object class, so coordinates never grow without bound.
#[derive(Default)]
pub struct WorldRecenterer {
    entries: Vec<Entry>,
}

impl WorldRecenterer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object that wraps at `half_extent` from the origin.
    pub fn register<T: WorldObject>(
        &mut self,
        object: T,
        half_extent: f32,
    ) -> SimResult<ObjectHandle> {
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(SimError::InvalidRegistration(format!(
                "{}: half extent must be positive, got {half_extent}",
                object.label()
            )));
        }
        if !object.position().is_finite() {
            return Err(SimError::InvalidRegistration(format!(
                "{}: position {} is not finite",
                object.label(),
                object.position()
            )));
        }

        let handle = ObjectHandle(self.entries.len());
        self.entries.push(Entry {
            object: Box::new(object),
            half_extent,
        });
        Ok(handle)
    }

    /// Translate every object by `-displacement`, then wrap.
    pub fn apply(&mut self, displacement: Vec3) {
        for entry in &mut self.entries {
            entry.object.translate(-displacement);

            let position = entry.object.position();
            let offset = Vec3::new(
                wrap_offset(position.x, entry.half_extent),
                0.0,
                wrap_offset(position.z, entry.half_extent),
            );
            if offset != Vec3::ZERO {
                entry.object.translate(offset);
                log::debug!(
                    "wrapped {} from {} to {}",
                    entry.object.label(),
                    position,
                    entry.object.position()
                );
            }
        }
    }

    pub fn get<T: WorldObject>(&self, handle: ObjectHandle) -> Option<&T> {
        self.entries
            .get(handle.0)
            .and_then(|entry| entry.object.as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: WorldObject>(&mut self, handle: ObjectHandle) -> Option<&mut T> {
        self.entries
            .get_mut(handle.0)
            .and_then(|entry| entry.object.as_any_mut().downcast_mut::<T>())
    }

    /// Like `get_mut`, but a missing or mistyped handle is an error
    pub fn expect_mut<T: WorldObject>(&mut self, handle: ObjectHandle) -> SimResult<&mut T> {
        self.get_mut(handle)
            .ok_or(SimError::UnknownObject(handle.0))
    }

    pub fn position(&self, handle: ObjectHandle) -> Option<Vec3> {
        self.entries.get(handle.0).map(|entry| entry.object.position())
    }

    pub fn half_extent(&self, handle: ObjectHandle) -> Option<f32> {
        self.entries.get(handle.0).map(|entry| entry.half_extent)
    }

    /// Objects in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn WorldObject> + '_ {
        self.entries.iter().map(|entry| entry.object.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Correction that brings `value` back inside `[-d, d]`. Exactly `±d` stays.
pub fn wrap_offset(value: f32, d: f32) -> f32 {
    if value > d {
        -2.0 * d
    } else if value < -d {
        2.0 * d
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Prop, PropKind};

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(5001.0, 5000.0), -10000.0);
        assert_eq!(wrap_offset(-5001.0, 5000.0), 10000.0);
        assert_eq!(wrap_offset(5000.0, 5000.0), 0.0);
        assert_eq!(wrap_offset(-5000.0, 5000.0), 0.0);
        assert_eq!(wrap_offset(0.0, 5000.0), 0.0);
    }

    #[test]
    fn test_register_rejects_bad_extent() {
        let mut world = WorldRecenterer::new();
        let result = world.register(Prop::new(PropKind::Peak, Vec3::ZERO), 0.0);
        assert!(matches!(result, Err(SimError::InvalidRegistration(_))));
        assert!(world.is_empty());
    }

    #[test]
    fn test_register_rejects_non_finite_position() {
        let mut world = WorldRecenterer::new();
        let prop = Prop::new(PropKind::Cloud, Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(world.register(prop, 100.0).is_err());
    }

    #[test]
    fn test_handles_follow_registration_order() {
        let mut world = WorldRecenterer::new();
        let a = world.register(Prop::new(PropKind::Peak, Vec3::X), 10.0).unwrap();
        let b = world.register(Prop::new(PropKind::Village, Vec3::Z), 20.0).unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(world.half_extent(b), Some(20.0));
        assert_eq!(world.get::<Prop>(b).map(|p| p.kind), Some(PropKind::Village));
    }

    #[test]
    fn test_expect_mut_unknown_handle() {
        let mut world = WorldRecenterer::new();
        let result = world.expect_mut::<Prop>(ObjectHandle(3));
        assert!(matches!(result, Err(SimError::UnknownObject(3))));
    }
}
