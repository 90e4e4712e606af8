pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, System, Source, NVec2};
pub use simulation::summation::KahanSum2;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{semi_implicit_euler, symplectic_euler_integrator, symplectic_euler_integrator_par};
pub use simulation::boundary::{wrap_particle, wrap_system};
pub use simulation::collisions::{check_collision, resolve_collision, handle_collisions};
pub use simulation::interaction::{apply_pointer, begin_drag, end_drag, follow_pointer, PointerInput};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, random_particles};

pub use configuration::config::{EngineConfig, ParametersConfig, WindowConfig, SimulationConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_collisions};
