mod ocean;
mod prop;
mod recenter;
mod scenery;

pub use ocean::OceanMesh;
pub use prop::{Prop, PropKind};
pub use recenter::{wrap_offset, ObjectHandle, WorldRecenterer};
pub use scenery::Scenery;
