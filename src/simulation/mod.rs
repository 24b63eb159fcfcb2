pub mod states;
pub mod params;
pub mod trail;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod scenario;
