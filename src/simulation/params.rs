//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - gravitational constant `G`,
//! - trail capture cadence and capacity,
//! - random seed for defaulted body colors

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub seed: u64, // deterministic seed
    pub g: f64, // gravitational constant
    pub trail_interval: u32, // simulation ticks between trail captures
    pub trail_capacity: usize, // retained trail positions per body
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 10.0,
            h0: 0.001,
            seed: 42,
            g: crate::simulation::forces::G_NEWTON,
            trail_interval: 4,
            trail_capacity: 2500,
        }
    }
}
