pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, BodySpec, NVec2, PointMass, System};
pub use simulation::trail::Trail;
pub use simulation::forces::{AccelerationModel, G_NEWTON};
pub use simulation::integrator::{euler_integrator, verlet_integrator, Integrator};
pub use simulation::engine::{BodyHandle, SimError, Simulation};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ModelConfig, ParametersConfig, ScenarioConfig,
};
