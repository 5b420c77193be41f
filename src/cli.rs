// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::traits::Intent;

#[derive(Parser, Debug, Clone)]
#[command(name = "endless-flight")]
#[command(about = "Arcade flight over an endlessly wrapping world", long_about = None)]
pub struct Cli {
    /// JSON config file; defaults are used for anything it omits
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run without a window for a fixed number of frames
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Frame rate assumed by headless mode
    #[arg(long, default_value_t = 60.0)]
    pub hz: f32,

    /// Intents held for the whole headless run
    #[arg(long, value_enum)]
    pub hold: Vec<HeldIntent>,

    /// Scale per-frame increments by measured frame time
    #[arg(long, default_value = "false")]
    pub scaled: bool,

    /// Override the scenery seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable HUD output in the window title and console
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldIntent {
    ThrustUp,
    ThrustDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    PitchUp,
    PitchDown,
}

impl From<HeldIntent> for Intent {
    fn from(held: HeldIntent) -> Self {
        match held {
            HeldIntent::ThrustUp => Intent::ThrustUp,
            HeldIntent::ThrustDown => Intent::ThrustDown,
            HeldIntent::YawLeft => Intent::YawLeft,
            HeldIntent::YawRight => Intent::YawRight,
            HeldIntent::RollLeft => Intent::RollLeft,
            HeldIntent::RollRight => Intent::RollRight,
            HeldIntent::PitchUp => Intent::PitchUp,
            HeldIntent::PitchDown => Intent::PitchDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headless_run() {
        let cli = Cli::parse_from([
            "endless-flight",
            "--headless",
            "--frames",
            "120",
            "--hold",
            "thrust-up",
            "--hold",
            "yaw-left",
        ]);
        assert!(cli.headless);
        assert_eq!(cli.frames, 120);
        assert_eq!(cli.hold, vec![HeldIntent::ThrustUp, HeldIntent::YawLeft]);
        assert!(!cli.scaled);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["endless-flight"]);
        assert!(!cli.headless);
        assert_eq!(cli.frames, 600);
        assert!(cli.config.is_none());
        assert!(cli.hold.is_empty());
    }
}
