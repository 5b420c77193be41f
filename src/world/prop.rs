use std::any::Any;

use glam::Vec3;

use crate::traits::WorldObject;

/// What a static prop stands for; geometry is built by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    Terrain,
    Peak,
    Village,
    Cloud,
}

impl PropKind {
    pub fn label(&self) -> &'static str {
        match self {
            PropKind::Terrain => "terrain",
            PropKind::Peak => "peak",
            PropKind::Village => "village",
            PropKind::Cloud => "cloud",
        }
    }
}

/// A rigid world object: terrain patch, mountain peak, village or cloud
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians
    pub heading: f32,
    /// Visual size hint (radius or footprint) for the renderer
    pub scale: f32,
}

impl Prop {
    pub fn new(kind: PropKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            heading: 0.0,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl WorldObject for Prop {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    fn label(&self) -> &str {
        self.kind.label()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
