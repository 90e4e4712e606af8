//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and softening (`G`, `softening`),
//! - number of collision passes per frame,
//! - viewport size used by the boundary wrap

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub softening: f64, // added to pair distance
    pub collision_iterations: usize, // collision passes per frame
    pub width: f64, // viewport width
    pub height: f64, // viewport height
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 1000.0,
            softening: 10.0,
            collision_iterations: 10,
            width: 1600.0,
            height: 900.0,
        }
    }
}
