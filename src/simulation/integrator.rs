//! Fixed-step time integrators for the body system
//!
//! Provides semi-implicit Euler and velocity-Verlet passes, both driven by
//! an [`AccelerationModel`] and a fixed step `dt`.
//!
//! Every pass starts by snapshotting the pre-step positions and masses of
//! all live bodies, so the acceleration computed for body `i` never depends
//! on how many bodies were already updated in the same pass. Static bodies
//! are skipped entirely: their position, velocity, and cached acceleration
//! are left untouched.

use super::forces::AccelerationModel;
use super::states::System;

/// Which numerical scheme advances the system each step.
///
/// Switching to Verlet after running Euler must be paired with a cached-
/// acceleration reset (the engine's `set_integrator` does this), otherwise
/// the first Verlet step reads a stale value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrator {
    /// One force evaluation per body per step. Semi-implicit ordering:
    /// position advances with the pre-step velocity, then velocity advances
    /// with the acceleration at the new position.
    ExplicitEuler,

    /// Two force evaluations per body per step amortized to one, via the
    /// per-body cached acceleration. Symplectic; keeps orbits stable over
    /// long runs.
    VelocityVerlet,
}

impl Integrator {
    /// Advance every non-static body by one step of `dt`
    pub fn apply(&self, sys: &mut System, model: &AccelerationModel, dt: f64) {
        match self {
            Self::ExplicitEuler => euler_integrator(sys, model, dt),
            Self::VelocityVerlet => verlet_integrator(sys, model, dt),
        }
    }
}

/// Advance the system by one semi-implicit Euler step.
///
/// Order per body: drift with the pre-step velocity, evaluate acceleration
/// at the drifted position, kick the velocity. Swapping drift and kick would
/// turn this into forward Euler and lose its stability behavior, so the
/// ordering here is deliberate.
pub fn euler_integrator(sys: &mut System, model: &AccelerationModel, dt: f64) {
    // Pre-step positions of every live body, shared by the whole pass
    let snapshot = sys.snapshot();

    for (i, body) in sys.bodies_mut() {
        if body.is_static {
            continue;
        }

        // Drift: x_n+1 = x_n + dt * v_n
        body.x += body.v * dt;

        // Acceleration at the new position, against pre-step neighbors
        let accel = model.acceleration(i, body.x, &snapshot);

        // Kick: v_n+1 = v_n + dt * a(x_n+1)
        body.v += accel * dt;
    }

    sys.t += dt;
}

/// Advance the system by one velocity-Verlet step.
///
/// Uses the acceleration cached on each body from the previous step, so only
/// one fresh force evaluation per body is needed. The cache must hold a
/// meaningful value before the first step (zero at body creation; the first
/// step then degrades to an Euler-like position update, an O(dt^2) one-time
/// error).
pub fn verlet_integrator(sys: &mut System, model: &AccelerationModel, dt: f64) {
    let k1 = 0.5 * dt * dt;
    let k2 = 0.5 * dt;

    // Pre-step positions of every live body, shared by the whole pass
    let snapshot = sys.snapshot();

    for (i, body) in sys.bodies_mut() {
        if body.is_static {
            continue;
        }

        // x_n+1 = x_n + dt v_n + (dt^2 / 2) a_n
        body.x += body.v * dt + body.a * k1;

        // a_n+1 at the new position, against pre-step neighbors
        let accel = model.acceleration(i, body.x, &snapshot);

        // v_n+1 = v_n + (dt / 2) (a_n + a_n+1)
        body.v += (body.a + accel) * k2;

        // Cache a_n+1 for the next step
        body.a = accel;
    }

    sys.t += dt;
}
