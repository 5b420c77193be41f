pub mod hud_sink;
pub mod input_adapter;
pub mod timer;

pub use hud_sink::HudSink;
pub use input_adapter::{InputAdapter, InputOutcome};
pub use timer::Throttled;
