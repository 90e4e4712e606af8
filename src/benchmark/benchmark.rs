use std::time::Instant;

use anyhow::Result;

use crate::configuration::config::ParametersConfig;
use crate::simulation::collisions::handle_collisions;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::random_particles;
use crate::simulation::states::System;

const DT: f64 = 1.0 / 60.0;

/// Helper to build a seeded System of size `n` over the default viewport
fn make_system(n: usize, params: &Parameters) -> System {
    let cfg = ParametersConfig {
        particle_count: n,
        ..ParametersConfig::default()
    };
    System::new(random_particles(&cfg, params.width, params.height))
}

fn gravity(params: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: params.G,
        softening: params.softening,
    })
}

/// Time a full frame (forces, integration, wrap, collisions) for growing n
/// and worker counts
pub fn bench_step() -> Result<()> {
    let ns = [200, 400, 800, 1600];
    let workers = [1, 2, 4];
    let params = Parameters::default();
    let forces = gravity(&params);

    println!("N,workers,step_ms");
    for n in ns {
        // fewer repeats once a frame gets expensive
        let steps = if n <= 800 { 10 } else { 3 };

        for w in workers {
            let engine = Engine::with_workers(w, 60.0)?;
            let mut sys = make_system(n, &params);

            // Warm up
            engine.step(&mut sys, &forces, &params, DT);

            let t0 = Instant::now();
            for _ in 0..steps {
                engine.step(&mut sys, &forces, &params, DT);
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

            println!("{},{},{:.3}", n, w, ms);
        }
    }
    Ok(())
}

/// Time the collision passes alone
pub fn bench_collisions() {
    let params = Parameters::default();

    println!("N,collisions_ms");
    for n in [200, 400, 800, 1600] {
        let mut sys = make_system(n, &params);

        let t0 = Instant::now();
        handle_collisions(&mut sys, params.collision_iterations);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.3}", n, ms);
    }
}
