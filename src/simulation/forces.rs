//! Acceleration models for the simulation kernel
//!
//! Two force laws behind one closed enum, so the inner integration loops
//! dispatch statically:
//! - [`AccelerationModel::RestoringForce`] – Hooke-like pull toward the origin
//! - [`AccelerationModel::PairwiseGravity`] – direct n^2 Newtonian gravity

use crate::simulation::states::{NVec2, PointMass};

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G_NEWTON: f64 = 6.67408e-11;

/// A force law evaluated per body against a pre-step snapshot of the system.
///
/// Both variants are pure: they never mutate body state, and the target's
/// own snapshot entry is excluded by slot index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccelerationModel {
    /// Acceleration = -position. Independent of every other body; ignores
    /// mass. Produces simple harmonic motion with unit angular frequency.
    RestoringForce,

    /// Sum over all other bodies j of `-g * m_j * (x_i - x_j) / |x_i - x_j|^3`.
    /// O(n) per body, O(n^2) per full pass.
    PairwiseGravity { g: f64 },
}

impl AccelerationModel {
    /// Pairwise gravity with the physical gravitational constant
    pub fn newtonian() -> Self {
        Self::PairwiseGravity { g: G_NEWTON }
    }

    /// Instantaneous acceleration on the body in slot `target`, evaluated at
    /// position `x` against the snapshot `others`.
    pub fn acceleration(&self, target: usize, x: NVec2, others: &[PointMass]) -> NVec2 {
        match *self {
            Self::RestoringForce => -x,

            Self::PairwiseGravity { g } => {
                let mut accel = NVec2::zeros();

                for pm in others {
                    if pm.index == target {
                        continue;
                    }

                    // Displacement from the other body toward the target;
                    // the attraction pulls along -r.
                    let r = x - pm.x;

                    // |r|^3 as it appears in a = -g m r / |r|^3
                    let dist3 = r.norm().powi(3);

                    // Coincident bodies would divide by zero here. Skip the
                    // pair instead of softening: zero contribution, and no
                    // NaN/Inf ever enters body state.
                    if dist3 == 0.0 {
                        continue;
                    }

                    accel -= g * pm.m * r / dist3;
                }

                accel
            }
        }
    }
}
