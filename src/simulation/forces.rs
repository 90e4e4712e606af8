//! Force / acceleration contributors for the particle engine
//!
//! Defines the acceleration trait and direct Newtonian gravity with an
//! additive softening constant. Accelerations are evaluated one particle at a
//! time against a read-only snapshot so the integrator can run them in parallel

use crate::simulation::states::{NVec2, Source};
use crate::simulation::summation::KahanSum2;

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// through one compensated accumulator per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration of particle `i` given the frame snapshot `sources`
    pub fn acceleration_on(&self, i: usize, sources: &[Source]) -> NVec2 {
        let mut sum = KahanSum2::new();
        for term in &self.terms {
            term.acceleration(i, sources, &mut sum);
        }
        sum.sum()
    }
}

/// Trait for acceleration sources
/// Implementations add their contribution on particle `i` into `sum`
pub trait Acceleration {
    fn acceleration(&self, i: usize, sources: &[Source], sum: &mut KahanSum2);
}

/// Newtonian gravity with additive softening
/// The softening constant is added to the separation before squaring, so the
/// denominator never reaches zero
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub softening: f64, // added to the distance
}

impl NewtonianGravity {
    /// Attractive force exerted on `source` by `target`
    pub fn force(&self, source: &Source, target: &Source) -> NVec2 {
        let r = target.x - source.x;
        let distance = r.norm() + self.softening;
        if distance <= 0.0 {
            return NVec2::zeros();
        }
        // coincident centres have no direction; contribute nothing
        let direction = r.try_normalize(0.0).unwrap_or_else(NVec2::zeros);
        let magnitude = self.G * source.m * target.m / (distance * distance);
        direction * magnitude
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, i: usize, sources: &[Source], sum: &mut KahanSum2) {
        let Some(own) = sources.get(i) else {
            return;
        };
        let inv_m = own.m.recip();

        for (j, other) in sources.iter().enumerate() {
            // self-exclusion by index, the snapshot holds copies
            if j == i {
                continue;
            }
            sum.add(self.force(own, other) * inv_m);
        }
    }
}
