//! Circle-circle collision detection and resolution
//!
//! Brute force over all pairs `i < j`, repeated a fixed number of passes per
//! frame. Dense clusters may still overlap after the last pass.

use super::states::{NVec2, Particle, System};

/// Two particles collide when their centres are closer than the sum of radii
pub fn check_collision(a: &Particle, b: &Particle) -> bool {
    (b.x - a.x).norm() < a.radius + b.radius
}

/// Push an overlapping pair apart and exchange an elastic impulse if approaching
///
/// The normal and the approach speed are taken before the positional
/// correction. Each particle moves by the other's share of the total mass
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) {
    let normal = (b.x - a.x).try_normalize(0.0).unwrap_or_else(NVec2::zeros);
    let relative_speed = (b.v - a.v).dot(&normal);
    let total_mass = a.m + b.m;

    let distance = (b.x - a.x).norm();
    let overlap = (a.radius + b.radius) - distance;
    if overlap > 0.0 {
        a.x -= normal * (overlap * b.m / total_mass);
        b.x += normal * (overlap * a.m / total_mass);
    }

    if relative_speed < 0.0 {
        let impulse = 2.0 * relative_speed / total_mass;
        a.v += normal * (impulse * b.m);
        b.v -= normal * (impulse * a.m);
    }
}

/// Resolve every colliding pair, `iterations` times over the whole set
pub fn handle_collisions(sys: &mut System, iterations: usize) {
    let n = sys.particles.len();
    for _ in 0..iterations {
        for i in 0..n {
            // split so both halves can be borrowed mutably
            let (head, tail) = sys.particles.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if check_collision(a, b) {
                    resolve_collision(a, b);
                }
            }
        }
    }
}
