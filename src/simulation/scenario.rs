//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `SimulationConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - the engine (`Engine`, with its worker pool)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with randomized particles at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! step and visualization systems

use anyhow::Result;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ParametersConfig, SimulationConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};

/// Bevy resource representing a fully-initialized simulation
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: &SimulationConfig) -> Result<Self> {
        cfg.validate()?;
        let engine = Engine::new(&cfg.engine)?;

        // Parameters (runtime) from the config sections
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            softening: p_cfg.softening,
            collision_iterations: cfg.engine.collision_iterations,
            width: cfg.window.width,
            height: cfg.window.height,
        };

        let system = System::new(random_particles(p_cfg, parameters.width, parameters.height));

        // Forces: gravity unless switched off
        let mut forces = AccelSet::new();
        if cfg.engine.gravity {
            forces = forces.with(NewtonianGravity {
                G: parameters.G,
                softening: parameters.softening,
            });
        }

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Advance the whole scenario by one frame
    pub fn step(&mut self, dt: f64) {
        let Scenario {
            engine,
            parameters,
            system,
            forces,
        } = self;
        engine.step(system, forces, parameters, dt);
    }
}

/// Generate `cfg.particle_count` particles inside a `width` x `height` viewport
///
/// Positions and velocities are whole numbers. Mass is the radius times a
/// factor in 1..=16 taken from the same draw as the red channel, so redder
/// particles are heavier
pub fn random_particles(cfg: &ParametersConfig, width: f64, height: f64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let w = (width as i64).max(1);
    let h = (height as i64).max(1);

    (0..cfg.particle_count)
        .map(|_| {
            let shade: u8 = rng.random();
            let x = NVec2::new(rng.random_range(0..w) as f64, rng.random_range(0..h) as f64);
            let v = NVec2::new(
                rng.random_range(-cfg.max_speed..cfg.max_speed) as f64,
                rng.random_range(-cfg.max_speed..cfg.max_speed) as f64,
            );
            let m = cfg.particle_radius * f64::from(shade / 16 + 1);

            let mut p = Particle::new(x, v, cfg.particle_radius, m);
            p.color = [shade, rng.random(), rng.random(), 255];
            p
        })
        .collect()
}
