//! Runtime configuration loaded from TOML.
//!
//! Every field is optional; anything left out falls back to the built-in
//! defaults. Example:
//!
//! ```toml
//! window_width = 1024
//! window_height = 768
//! grid_size = 40.0
//! impulse = 0.06
//! velocity_damping = 0.99
//! max_speed = [3.0, 3.0]
//! vertices = [[0.0, 0.0], [30.0, -80.0], [-30.0, -80.0]]
//! font_path = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"
//! ```

use crate::agent::{ACCELERATION_DAMPING, Agent, MAX_SPEED, Triangle, VELOCITY_DAMPING};
use crate::error::{Error, Result};
use crate::input::IMPULSE;
use crate::library::{Vector2, find_vector, get_magnitude};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Allowed relative difference between the two apex-to-base edges
const SYMMETRY_TOLERANCE: f32 = 1e-3;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub fps: u32,
    pub grid_size: f32,
    pub show_grid: bool,
    pub impulse: f32, // acceleration added per key press
    pub velocity_damping: f32, // (0, 1]
    pub acceleration_damping: f32, // (0, 1]
    pub max_speed: Vector2, // per-axis speed limit
    pub vertices: Triangle, // apex first
    pub font_path: Option<PathBuf>, // HUD font, no HUD when missing
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fps: 60,
            grid_size: 50.0,
            show_grid: true,
            impulse: IMPULSE,
            velocity_damping: VELOCITY_DAMPING,
            acceleration_damping: ACCELERATION_DAMPING,
            max_speed: MAX_SPEED,
            vertices: [[0.0, 0.0], [40.0, -100.0], [-40.0, -100.0]],
            font_path: None,
        }
    }
}

impl SimConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<SimConfig> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        SimConfig::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<SimConfig> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_damping("velocity_damping", self.velocity_damping)?;
        check_damping("acceleration_damping", self.acceleration_damping)?;
        check_positive("impulse", self.impulse)?;
        check_positive("grid_size", self.grid_size)?;
        check_positive("max_speed[0]", self.max_speed[0])?;
        check_positive("max_speed[1]", self.max_speed[1])?;
        if self.fps == 0 {
            return Err(Error::InvalidConfig("fps must be at least 1".into()));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::InvalidConfig("window size must be non-zero".into()));
        }
        if self.vertices.iter().flatten().any(|c| !c.is_finite()) {
            return Err(Error::InvalidConfig("vertices must be finite".into()));
        }
        let [a, b, c] = self.vertices;
        let ab = find_vector(a, b);
        let ac = find_vector(a, c);
        if ab[0] * ac[1] - ab[1] * ac[0] == 0.0 {
            return Err(Error::InvalidConfig("vertices must not be collinear".into()));
        }
        let (right, left) = (get_magnitude(ab), get_magnitude(ac));
        if (right - left).abs() > SYMMETRY_TOLERANCE * right.max(left) {
            return Err(Error::InvalidConfig(
                "base vertices must be symmetric about the apex".into(),
            ));
        }
        Ok(())
    }

    /// Builds a resting agent from the configured shape and physics constants.
    pub fn build_agent(&self) -> Agent {
        Agent::with_params(
            self.vertices,
            self.velocity_damping,
            self.acceleration_damping,
            self.max_speed,
        )
    }
}

fn check_damping(name: &str, value: f32) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be in (0, 1], got {value}")))
    }
}

fn check_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be positive and finite, got {value}")))
    }
}
