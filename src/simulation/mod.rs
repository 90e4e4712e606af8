pub mod states;
pub mod params;
pub mod engine;
pub mod summation;
pub mod forces;
pub mod integrator;
pub mod boundary;
pub mod collisions;
pub mod interaction;
pub mod scenario;
