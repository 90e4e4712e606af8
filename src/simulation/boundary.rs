//! Toroidal boundary: a particle leaving one edge re-enters at the opposite one

use super::states::{Particle, System};

/// Wrap one coordinate into `[-radius, max + radius]`
/// Values exactly on either bound are left alone
fn wrap_axis(value: f64, max: f64, radius: f64) -> f64 {
    if value > max + radius {
        -radius
    } else if value < -radius {
        max + radius
    } else {
        value
    }
}

pub fn wrap_particle(p: &mut Particle, width: f64, height: f64) {
    p.x.y = wrap_axis(p.x.y, height, p.radius);
    p.x.x = wrap_axis(p.x.x, width, p.radius);
}

/// Wrap every particle, dragged or not
pub fn wrap_system(sys: &mut System, width: f64, height: f64) {
    for p in sys.particles.iter_mut() {
        wrap_particle(p, width, height);
    }
}
