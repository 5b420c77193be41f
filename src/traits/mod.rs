pub mod controller;
pub mod frame;
pub mod renderer;
pub mod world_object;

pub use controller::*;
pub use frame::*;
pub use renderer::*;
pub use world_object::*;
