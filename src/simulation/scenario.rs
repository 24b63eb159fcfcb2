//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - the selected acceleration model and integrator
//! - a `Simulation` populated with the configured bodies at t = 0

use crate::configuration::config::{
    BodyConfig, IntegratorConfig, ModelConfig, ScenarioConfig,
};
use crate::simulation::engine::Simulation;
use crate::simulation::forces::{AccelerationModel, G_NEWTON};
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::BodySpec;

/// A fully-initialized simulation ready to be driven by the host loop
pub struct Scenario {
    pub t_end: f64,
    pub simulation: Simulation,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            seed: p_cfg.seed,
            g: p_cfg.g.unwrap_or(G_NEWTON),
            trail_interval: p_cfg.trail_interval.unwrap_or(4),
            trail_capacity: p_cfg.trail_capacity.unwrap_or(2500),
        };

        // Strategy axes from EngineConfig
        let model = match cfg.engine.model {
            ModelConfig::Hooke => AccelerationModel::RestoringForce,
            ModelConfig::Newton => AccelerationModel::PairwiseGravity { g: parameters.g },
        };
        let integrator = match cfg.engine.integrator {
            IntegratorConfig::Euler => Integrator::ExplicitEuler,
            IntegratorConfig::Verlet => Integrator::VelocityVerlet,
        };

        let t_end = parameters.t_end;
        let mut simulation = Simulation::new(parameters, model, integrator);

        // Bodies: map `BodyConfig` -> creation specs, defaults filled in
        for bc in &cfg.bodies {
            simulation.add(body_spec(bc));
        }

        Self { t_end, simulation }
    }
}

fn body_spec(bc: &BodyConfig) -> BodySpec {
    BodySpec {
        x: bc.x[0],
        y: bc.x[1],
        vx: bc.v.first().copied().unwrap_or(0.0),
        vy: bc.v.get(1).copied().unwrap_or(0.0),
        mass: bc.m,
        radius: bc.radius,
        color: bc.color,
        name: bc.name.clone(),
        is_static: bc.is_static,
    }
}
