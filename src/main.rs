use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use endless_flight::cli::Cli;
use endless_flight::config::{SimConfig, TimeStep};
use endless_flight::controls::ControlState;
use endless_flight::core::{HudSink, InputAdapter, InputOutcome};
use endless_flight::driver::FrameDriver;
use endless_flight::frame::{FixedFrames, FrameIterator};
use endless_flight::traits::Intent;
use endless_flight::window::Window;

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const HUD_LOG_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    window: Option<Window>,
    driver: FrameDriver,
    controls: ControlState,
    input: InputAdapter,
    frames: FrameIterator,
    sink: HudSink,
    show_hud: bool,
}

impl App {
    fn new(driver: FrameDriver, show_hud: bool) -> Self {
        Self {
            window: None,
            driver,
            controls: ControlState::new(),
            input: InputAdapter::new(),
            frames: FrameIterator::new(),
            sink: if show_hud {
                HudSink::new(HUD_LOG_INTERVAL)
            } else {
                HudSink::quiet()
            },
            show_hud,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frames.next() else {
            return;
        };

        match self.driver.step(&self.controls, frame, &mut self.sink) {
            Ok(hud) => {
                if let Some(window) = &self.window {
                    window.show(hud);
                }
            }
            Err(e) => {
                log::error!("Simulation error: {}", e);
                event_loop.exit();
            }
        }
        self.controls.reset_deltas();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match event_loop.create_window(
                WinitWindow::default_attributes()
                    .with_title("Endless Flight")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => self.window = Some(Window::new(Arc::new(w), self.show_hud)),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if self.input.process_event(&other, &mut self.controls) == InputOutcome::Quit {
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if cli.scaled {
        config.time_step = TimeStep::scaled();
    }
    if let Some(seed) = cli.seed {
        config.world.seed = seed;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run_headless(cli: &Cli, config: &SimConfig) -> Result<()> {
    anyhow::ensure!(cli.hz > 0.0, "--hz must be positive, got {}", cli.hz);
    let mut driver = FrameDriver::new(config)?;
    let mut controls = ControlState::new();
    for held in &cli.hold {
        controls.set_intent(Intent::from(*held), true);
    }
    let mut sink = if cli.no_ui {
        HudSink::quiet()
    } else {
        HudSink::new(HUD_LOG_INTERVAL)
    };

    for frame in FixedFrames::new(cli.hz).take_frames(cli.frames) {
        driver
            .step(&controls, frame, &mut sink)
            .with_context(|| format!("Frame {} failed", frame.number))?;
        controls.reset_deltas();
    }

    if let Some(hud) = sink.latest() {
        log::info!("Headless run finished after {} frames: {}", sink.frames(), hud);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.headless {
        return run_headless(&cli, &config);
    }

    let driver = FrameDriver::new(&config)?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(driver, !cli.no_ui);

    log::info!("Endless Flight - Controls: W/S throttle, A/D yaw, Q/E roll, arrows pitch, drag to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
