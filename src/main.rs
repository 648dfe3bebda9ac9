//! A steerable triangle on an SDL2 canvas.
//!
//! The arrow keys nudge the agent's acceleration, R puts it back where it
//! started and Escape quits. The triangle keeps turning so that its apex
//! points along the direction of travel.

mod render;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::path::{Path, PathBuf};
use std::time::Duration;
use steer::config::SimConfig;
use steer::input::{Command, Direction};
use steer::simulation::Simulation;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Window title displayed in the title bar
const TITLE: &str = "Steering agent";
/// Font used for the HUD when the config does not name one
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";
/// HUD font size in points
const FONT_SIZE: u16 = 16;

#[derive(Parser, Debug)]
#[command(about = "Steer a triangle around with the arrow keys")]
struct Args {
    /// TOML file overriding the default settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quit after this many frames
    #[arg(long)]
    frames: Option<u64>,
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            SimConfig::load(path).with_context(|| format!("could not use {}", path.display()))
        }
        None => {
            info!("using default config");
            Ok(SimConfig::default())
        }
    }
}

/// Maps a pressed key to the command it stands for.
fn command_for_key(keycode: Keycode) -> Option<Command> {
    match keycode {
        Keycode::Up => Some(Command::Thrust(Direction::Up)),
        Keycode::Down => Some(Command::Thrust(Direction::Down)),
        Keycode::Left => Some(Command::Thrust(Direction::Left)),
        Keycode::Right => Some(Command::Thrust(Direction::Right)),
        Keycode::R => Some(Command::Reset),
        _ => None,
    }
}

/// Whether the `--frames` cap has been used up. Checked before each tick.
fn frame_limit_reached(limit: Option<u64>, ticks: u64) -> bool {
    limit.is_some_and(|limit| ticks >= limit)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init().map_err(|e| anyhow!("SDL init failed: {e}"))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!("no video subsystem: {e}"))?;
    let ttf_context = sdl2::ttf::init().map_err(|e| anyhow!("TTF init failed: {e}"))?;

    let window = video_subsystem
        .window(TITLE, config.window_width, config.window_height)
        .position_centered()
        .build()
        .context("could not create window")?;
    let mut canvas = window.into_canvas().build().context("could not create canvas")?;

    let font_path = config.font_path.clone().unwrap_or_else(|| PathBuf::from(FONT_PATH));
    let font = match ttf_context.load_font(&font_path, FONT_SIZE) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!(path = %font_path.display(), error = %e, "HUD disabled, font not loaded");
            None
        }
    };

    let mut simulation = Simulation::from_config(&config);
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!("no event pump: {e}"))?;
    let frame_time = Duration::new(0, 1_000_000_000u32 / config.fps);
    info!(width = config.window_width, height = config.window_height, fps = config.fps, "simulation started");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown { keycode: Some(keycode), .. } => {
                    if let Some(command) = command_for_key(keycode) {
                        simulation.submit(command);
                    }
                }
                _ => {}
            }
        }

        if frame_limit_reached(args.frames, simulation.ticks()) {
            break 'running;
        }
        simulation.tick();

        render::draw_background(&mut canvas);
        if config.show_grid {
            render::draw_grid(&mut canvas, simulation.frame(), config.grid_size);
        }
        render::draw_agent(&mut canvas, simulation.frame(), simulation.agent());
        if let Some(font) = &font {
            render::draw_hud(&mut canvas, font, simulation.agent())?;
        }
        canvas.present();

        // Hold the configured frame rate
        ::std::thread::sleep(frame_time);
    }

    info!(ticks = simulation.ticks(), "simulation stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_thrust() {
        assert_eq!(command_for_key(Keycode::Up), Some(Command::Thrust(Direction::Up)));
        assert_eq!(command_for_key(Keycode::Down), Some(Command::Thrust(Direction::Down)));
        assert_eq!(command_for_key(Keycode::Left), Some(Command::Thrust(Direction::Left)));
        assert_eq!(command_for_key(Keycode::Right), Some(Command::Thrust(Direction::Right)));
    }

    #[test]
    fn r_resets_and_other_keys_are_ignored() {
        assert_eq!(command_for_key(Keycode::R), Some(Command::Reset));
        assert_eq!(command_for_key(Keycode::Space), None);
    }

    #[test]
    fn frame_limit_counts_ticks_already_run() {
        assert!(frame_limit_reached(Some(0), 0));
        assert!(!frame_limit_reached(Some(3), 2));
        assert!(frame_limit_reached(Some(3), 3));
        assert!(!frame_limit_reached(None, u64::MAX));
    }
}
