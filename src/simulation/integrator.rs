//! Fixed-step time integrator for the particle system
//!
//! Semi-implicit (symplectic) Euler with compensated sums, driven by
//! `AccelSet`. The force and integration pass runs on a rayon pool with the
//! particle slice split into one contiguous index range per worker

use rayon::prelude::*;
use rayon::ThreadPool;

use super::forces::AccelSet;
use super::states::{Particle, Source, System};
use super::summation::KahanSum2;

/// Advance one particle by `dt` using its current acceleration
/// v_n+1 = v_n + a_n dt, then x_n+1 = x_n + v_n+1 dt
pub fn semi_implicit_euler(p: &mut Particle, dt: f64) {
    p.v = KahanSum2::from_terms([p.v, p.a * dt]);
    p.x = KahanSum2::from_terms([p.x, p.v * dt]);
}

/// Recompute acceleration and integrate particle `i` against the snapshot
fn update_particle(i: usize, p: &mut Particle, forces: &AccelSet, sources: &[Source], dt: f64) {
    p.a = forces.acceleration_on(i, sources);
    semi_implicit_euler(p, dt);
}

/// Sequential pass over every particle except `sys.dragged`
pub fn symplectic_euler_integrator(sys: &mut System, forces: &AccelSet, dt: f64) {
    let sources = sys.sources();
    let dragged = sys.dragged;

    for (i, p) in sys.particles.iter_mut().enumerate() {
        if dragged == Some(i) {
            continue;
        }
        update_particle(i, p, forces, &sources, dt);
    }
}

/// Parallel pass over every particle except `sys.dragged`
///
/// All workers read the same snapshot taken before the region starts and
/// write only their own chunk. `install` returns after every chunk is done
pub fn symplectic_euler_integrator_par(
    sys: &mut System,
    forces: &AccelSet,
    pool: &ThreadPool,
    dt: f64,
) {
    let n = sys.particles.len();
    if n == 0 { // no particles, return
        return;
    }

    let sources = sys.sources();
    let dragged = sys.dragged;
    let chunk = n.div_ceil(pool.current_num_threads().max(1));

    pool.install(|| {
        sys.particles
            .par_chunks_mut(chunk)
            .enumerate()
            .for_each(|(c, particles)| {
                let offset = c * chunk;
                for (k, p) in particles.iter_mut().enumerate() {
                    let i = offset + k;
                    if dragged == Some(i) {
                        continue;
                    }
                    update_particle(i, p, forces, &sources, dt);
                }
            });
    });
}

