//! Configuration types for loading simulation settings from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of the
//! simulation settings. Every field has a default, so an empty file (or no
//! file at all) gives the stock 800-particle setup:
//!
//! - [`EngineConfig`]     – worker pool size, collision passes, gravity toggle, frame rate
//! - [`ParametersConfig`] – physical constants and particle generation
//! - [`WindowConfig`]     – window title, size and diagnostics
//! - [`SimulationConfig`] – top-level wrapper used to load settings from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   workers: 2                 # threads for the force/integration pass
//!   collision_iterations: 10   # collision passes per frame
//!   gravity: true
//!   target_fps: 60.0
//!
//! parameters:
//!   G: 1000.0                  # gravitational constant
//!   softening: 10.0            # added to pair distance
//!   particle_count: 800
//!   particle_radius: 5.0
//!   max_speed: 100             # initial velocity per axis in [-max_speed, max_speed)
//!   seed: 2                    # deterministic seed
//!
//! window:
//!   title: "physics 2D"
//!   width: 1600.0
//!   height: 900.0
//!   log_fps: false
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

/// Runtime engine options
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub workers: usize, // threads used for the parallel force/integration pass
    pub collision_iterations: usize, // fixed number of collision passes per frame, no convergence check
    pub gravity: bool, // `false` leaves only collisions and free motion
    pub target_fps: f64, // frame pacing target
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: 2,
            collision_iterations: 10,
            gravity: true,
            target_fps: 60.0,
        }
    }
}

/// Physical constants and particle generation settings
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,              // gravitational constant
    pub softening: f64,      // added to the pair distance before squaring
    pub particle_count: usize,
    pub particle_radius: f64,
    pub max_speed: i32,      // initial velocity components are drawn from [-max_speed, max_speed)
    pub seed: u64,           // deterministic seed to make runs reproducable
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: 1000.0,
            softening: 10.0,
            particle_count: 800,
            particle_radius: 5.0,
            max_speed: 100,
            seed: 2,
        }
    }
}

/// Window settings, also the size of the wrapped world
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub log_fps: bool, // log frame time diagnostics
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "physics 2D".to_string(),
            width: 1600.0,
            height: 900.0,
            log_fps: false,
        }
    }
}

/// Top-level settings loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub window: WindowConfig,
}

impl SimulationConfig {
    /// Parse and validate settings from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(s).context("invalid simulation config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate settings from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let cfg: Self = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.engine.workers >= 1, "engine.workers must be at least 1");
        ensure!(self.engine.target_fps > 0.0, "engine.target_fps must be positive");
        ensure!(self.parameters.particle_radius > 0.0, "parameters.particle_radius must be positive");
        ensure!(self.parameters.softening > 0.0, "parameters.softening must be positive");
        ensure!(self.parameters.max_speed > 0, "parameters.max_speed must be positive");
        ensure!(
            self.window.width >= 1.0 && self.window.height >= 1.0,
            "window size must be at least 1x1"
        );
        Ok(())
    }
}
