//! High-level runtime engine
//!
//! Owns the worker pool used for the force/integration pass and runs one
//! full frame: integrate, wrap, collide

use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::configuration::config::EngineConfig;
use crate::simulation::boundary::wrap_system;
use crate::simulation::collisions::handle_collisions;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::symplectic_euler_integrator_par;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

pub struct Engine {
    pub workers: usize, // threads in the force/integration pool
    pub target_fps: f64, // frame pacing target
    pool: ThreadPool,
}

impl Engine {
    pub fn new(cfg: &EngineConfig) -> Result<Self> {
        Self::with_workers(cfg.workers, cfg.target_fps)
    }

    pub fn with_workers(workers: usize, target_fps: f64) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("nbody2d-worker-{i}"))
            .build()
            .with_context(|| format!("failed to build a pool of {workers} workers"))?;

        Ok(Self {
            workers,
            target_fps,
            pool,
        })
    }

    /// Advance the system by one frame of length `dt`
    pub fn step(&self, sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
        // Forces + integration for everything not under the pointer
        symplectic_euler_integrator_par(sys, forces, &self.pool, dt);

        // Wrap applies to the dragged particle too
        wrap_system(sys, params.width, params.height);

        handle_collisions(sys, params.collision_iterations);

        sys.t += dt;
    }
}
