mod integrator;

pub use integrator::{integrate, physics_integrator_system};
