//! Core state types for the particle simulation.
//!
//! Defines the 2D particle and the system that owns them:
//! - `Particle` using `NVec2` for position, velocity and acceleration
//! - `System` holding the fixed-size particle list, the dragged index and time
//! - `Source` as the read-only per-frame view used by the force loop

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration, recomputed each frame
    pub radius: f64, // collision radius
    pub m: f64, // mass
    pub color: [u8; 4], // rgba
}

impl Particle {
    /// Particle at rest with white color
    pub fn new(x: NVec2, v: NVec2, radius: f64, m: f64) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            radius,
            m,
            color: [255, 255, 255, 255],
        }
    }

    /// Whether `point` lies on or inside this particle's circle
    pub fn contains(&self, point: NVec2) -> bool {
        (point - self.x).norm() <= self.radius
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

/// Immutable snapshot of what the force loop reads from another particle
#[derive(Debug, Clone, Copy)]
pub struct Source {
    pub x: NVec2,
    pub m: f64,
}

impl From<&Particle> for Source {
    fn from(p: &Particle) -> Self {
        Self { x: p.x, m: p.m }
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub particles: Vec<Particle>, // fixed for the lifetime of the run
    pub dragged: Option<usize>, // index of the particle under the pointer, if any
    pub t: f64, // time
}

impl System {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            dragged: None,
            t: 0.0,
        }
    }

    /// Snapshot positions and masses for one frame of force evaluation
    pub fn sources(&self) -> Vec<Source> {
        self.particles.iter().map(Source::from).collect()
    }

    /// Total linear momentum of the system
    pub fn momentum(&self) -> NVec2 {
        self.particles.iter().map(Particle::momentum).sum()
    }
}
