use planetsim::{
    AccelerationModel, BodyHandle, BodySpec, Integrator, NVec2, Parameters, PointMass, SimError,
    Simulation,
};

use approx::assert_abs_diff_eq;

/// Default parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.001,
        seed: 42,
        g: 1.0,
        trail_interval: 4,
        trail_capacity: 8,
    }
}

/// Build a simulation with unit-G pairwise gravity and the given integrator
pub fn gravity_sim(integrator: Integrator) -> Simulation {
    Simulation::new(
        test_params(),
        AccelerationModel::PairwiseGravity { g: 1.0 },
        integrator,
    )
}

/// Add two bodies separated by `dist` along the x-axis, at rest
pub fn add_two_bodies(sim: &mut Simulation, dist: f64, m1: f64, m2: f64) -> (BodyHandle, BodyHandle) {
    let h1 = sim.add(BodySpec::at(-dist / 2.0, 0.0).mass(m1));
    let h2 = sim.add(BodySpec::at(dist / 2.0, 0.0).mass(m2));
    (h1, h2)
}

/// Snapshot for driving the acceleration models directly
pub fn pair_snapshot(dist: f64, m1: f64, m2: f64) -> Vec<PointMass> {
    vec![
        PointMass {
            index: 0,
            x: NVec2::new(-dist / 2.0, 0.0),
            m: m1,
        },
        PointMass {
            index: 1,
            x: NVec2::new(dist / 2.0, 0.0),
            m: m2,
        },
    ]
}

/// Total momentum of all live bodies
pub fn momentum(sim: &Simulation) -> NVec2 {
    sim.bodies().map(|(_, b)| b.v * b.m).sum()
}

// ==================================================================================
// Acceleration model tests
// ==================================================================================

#[test]
fn hooke_pulls_toward_origin() {
    let model = AccelerationModel::RestoringForce;
    let a = model.acceleration(0, NVec2::new(3.0, -4.0), &[]);
    assert_eq!(a, NVec2::new(-3.0, 4.0));
}

#[test]
fn gravity_newton_third_law() {
    let model = AccelerationModel::PairwiseGravity { g: 1.0 };
    let snap = pair_snapshot(1.0, 2.0, 3.0);

    let a1 = model.acceleration(0, snap[0].x, &snap);
    let a2 = model.acceleration(1, snap[1].x, &snap);

    let net = a1 * snap[0].m + a2 * snap[1].m;
    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_inverse_square_law() {
    let model = AccelerationModel::PairwiseGravity { g: 1.0 };
    let snap_r = pair_snapshot(1.0, 1.0, 1.0);
    let snap_2r = pair_snapshot(2.0, 1.0, 1.0);

    let a_r = model.acceleration(0, snap_r[0].x, &snap_r);
    let a_2r = model.acceleration(0, snap_2r[0].x, &snap_2r);

    let ratio = a_r.norm() / a_2r.norm();
    assert_abs_diff_eq!(ratio, 4.0, epsilon = 1e-12);
}

#[test]
fn gravity_coincident_pair_contributes_nothing() {
    let model = AccelerationModel::PairwiseGravity { g: 1.0 };
    let x = NVec2::new(0.25, -0.75);
    let snap = vec![
        PointMass { index: 0, x, m: 1.0 },
        PointMass { index: 1, x, m: 1e30 },
    ];

    let a = model.acceleration(0, x, &snap);
    assert_eq!(a, NVec2::zeros());
}

#[test]
fn coincident_bodies_step_stays_finite() {
    let mut sim = gravity_sim(Integrator::VelocityVerlet);
    sim.add(BodySpec::at(1.0, 1.0).mass(5.0));
    sim.add(BodySpec::at(1.0, 1.0).mass(7.0));

    for _ in 0..10 {
        sim.step();
    }

    for (_, body) in sim.bodies() {
        assert!(body.x.x.is_finite() && body.x.y.is_finite(), "position blew up");
        assert!(body.v.x.is_finite() && body.v.y.is_finite(), "velocity blew up");
    }
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn euler_updates_position_before_velocity() {
    let mut params = test_params();
    params.h0 = 0.1;
    let mut sim = Simulation::new(
        params,
        AccelerationModel::RestoringForce,
        Integrator::ExplicitEuler,
    );
    let h = sim.add(BodySpec::at(1.0, 0.0).velocity(0.0, 1.0));

    sim.step();

    // Drift first: x' = x + v dt = (1.0, 0.1)
    // then kick with a(x') = (-1.0, -0.1): v' = (-0.1, 0.99)
    let body = sim.body(h).unwrap();
    assert_abs_diff_eq!(body.x, NVec2::new(1.0, 0.1), epsilon = 1e-15);
    assert_abs_diff_eq!(body.v, NVec2::new(-0.1, 0.99), epsilon = 1e-15);
}

#[test]
fn verlet_harmonic_oscillator_returns_after_one_period() {
    // Hooke's law with unit frequency: period 2 pi
    let mut sim = Simulation::new(
        test_params(),
        AccelerationModel::RestoringForce,
        Integrator::VelocityVerlet,
    );
    let h = sim.add(BodySpec::at(1.0, 0.0));

    let dt = sim.parameters().h0;
    let steps = (std::f64::consts::TAU / dt).round() as usize;
    for _ in 0..steps {
        sim.step();
    }

    let body = sim.body(h).unwrap();
    assert_abs_diff_eq!(body.x, NVec2::new(1.0, 0.0), epsilon = 1e-3);
    assert!(body.v.norm() < 1e-2, "residual velocity {:?}", body.v);
}

#[test]
fn static_bodies_never_move() {
    for integrator in [Integrator::ExplicitEuler, Integrator::VelocityVerlet] {
        let mut sim = gravity_sim(integrator);
        let anchor = sim.add(BodySpec::at(1.0, 2.0).velocity(3.0, 4.0).mass(1e6).fixed());
        sim.add(BodySpec::at(5.0, 0.0).mass(2.0));

        for _ in 0..500 {
            sim.step();
        }

        // Bit-for-bit: the integrator must not touch frozen bodies at all
        let body = sim.body(anchor).unwrap();
        assert_eq!(body.x, NVec2::new(1.0, 2.0));
        assert_eq!(body.v, NVec2::new(3.0, 4.0));
        assert_eq!(body.a, NVec2::zeros());
    }
}

#[test]
fn momentum_exact_for_mirror_symmetric_pair() {
    for integrator in [Integrator::ExplicitEuler, Integrator::VelocityVerlet] {
        let mut sim = gravity_sim(integrator);
        sim.add(BodySpec::at(-0.5, 0.0).velocity(0.0, -0.4).mass(1.0));
        sim.add(BodySpec::at(0.5, 0.0).velocity(0.0, 0.4).mass(1.0));

        for _ in 0..1000 {
            sim.step();
        }

        assert!(momentum(&sim).norm() < 1e-15, "{:?}", momentum(&sim));
    }
}

#[test]
fn momentum_drift_bounded_for_unequal_masses() {
    for integrator in [Integrator::ExplicitEuler, Integrator::VelocityVerlet] {
        let mut params = test_params();
        params.h0 = 1e-4;
        let mut sim = Simulation::new(
            params,
            AccelerationModel::PairwiseGravity { g: 1.0 },
            integrator,
        );
        sim.add(BodySpec::at(-0.5, 0.0).velocity(0.0, 0.3).mass(2.0));
        sim.add(BodySpec::at(0.5, 0.0).velocity(0.0, -0.2).mass(3.0));

        let p0 = momentum(&sim);
        for _ in 0..1000 {
            sim.step();
        }
        let drift = (momentum(&sim) - p0).norm();

        assert!(drift < 1e-4, "momentum drift {} too large", drift);
    }
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_grows_then_saturates_fifo() {
    let mut params = test_params();
    params.h0 = 1.0;
    params.trail_interval = 4;
    params.trail_capacity = 3;
    let mut sim = Simulation::new(
        params,
        AccelerationModel::PairwiseGravity { g: 1.0 },
        Integrator::ExplicitEuler,
    );
    // Lone body, no other attractors: uniform motion x(t) = (t, 0)
    let h = sim.add(BodySpec::at(0.0, 0.0).velocity(1.0, 0.0));

    for _ in 0..8 {
        sim.step();
    }
    assert_eq!(sim.body(h).unwrap().trail.len(), 2);

    for _ in 0..12 {
        sim.step();
    }

    // Captures happened at ticks 4, 8, 12, 16, 20; only the newest 3 remain
    let trail = &sim.body(h).unwrap().trail;
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.newest(), Some(&NVec2::new(20.0, 0.0)));
    assert_eq!(trail.oldest(), Some(&NVec2::new(12.0, 0.0)));
}

#[test]
fn trail_records_static_bodies_too() {
    let mut sim = gravity_sim(Integrator::VelocityVerlet);
    let h = sim.add(BodySpec::at(2.0, 2.0).fixed());

    let interval = sim.parameters().trail_interval;
    for _ in 0..interval {
        sim.step();
    }

    let body = sim.body(h).unwrap();
    assert_eq!(body.trail.len(), 1);
    assert_eq!(body.trail.newest(), Some(&NVec2::new(2.0, 2.0)));
}

// ==================================================================================
// Body lifecycle tests
// ==================================================================================

#[test]
fn remove_leaves_other_bodies_untouched() {
    let mut sim = gravity_sim(Integrator::ExplicitEuler);
    let ha = sim.add(BodySpec::at(1.0, 0.0).mass(1.0).named("a"));
    let hb = sim.add(BodySpec::at(2.0, 0.0).mass(2.0).named("b"));
    let hc = sim.add(BodySpec::at(3.0, 0.0).mass(3.0).named("c"));

    let removed = sim.remove(hb).unwrap();
    assert_eq!(removed.name, "b");
    assert_eq!(removed.m, 2.0);
    assert_eq!(sim.len(), 2);

    // Neighbors keep their slots and their data
    assert_eq!(sim.body(ha).unwrap().x, NVec2::new(1.0, 0.0));
    assert_eq!(sim.body(hc).unwrap().x, NVec2::new(3.0, 0.0));
    assert_eq!(sim.body(hc).unwrap().m, 3.0);

    // The removed slot reports InvalidIndex from now on
    assert_eq!(sim.body(hb).unwrap_err(), SimError::InvalidIndex(1));
    assert_eq!(sim.remove(hb).unwrap_err(), SimError::InvalidIndex(1));
}

#[test]
fn out_of_range_handle_is_invalid() {
    let sim = gravity_sim(Integrator::ExplicitEuler);
    assert_eq!(sim.body(BodyHandle(99)).unwrap_err(), SimError::InvalidIndex(99));
}

#[test]
fn removed_slots_are_not_reused() {
    let mut sim = gravity_sim(Integrator::ExplicitEuler);
    sim.add(BodySpec::at(0.0, 0.0));
    let hb = sim.add(BodySpec::at(1.0, 0.0));
    sim.remove(hb).unwrap();

    let hc = sim.add(BodySpec::at(2.0, 0.0));
    assert_eq!(hc, BodyHandle(2));
    assert_eq!(sim.body(hb).unwrap_err(), SimError::InvalidIndex(1));
}

#[test]
fn step_skips_removed_bodies() {
    let mut sim = gravity_sim(Integrator::VelocityVerlet);
    let (h1, h2) = add_two_bodies(&mut sim, 1.0, 1.0, 1.0);
    sim.remove(h1).unwrap();

    for _ in 0..100 {
        sim.step();
    }

    // The survivor has no attractor left, so it never accelerates
    let body = sim.body(h2).unwrap();
    assert_eq!(body.v, NVec2::zeros());
    assert_eq!(body.x, NVec2::new(0.5, 0.0));
}

// ==================================================================================
// Strategy swap tests
// ==================================================================================

#[test]
fn mid_run_strategy_swap_is_deterministic() {
    let build = || {
        let mut sim = gravity_sim(Integrator::ExplicitEuler);
        sim.add(BodySpec::at(-0.5, 0.0).velocity(0.0, 0.3).mass(2.0));
        sim.add(BodySpec::at(0.5, 0.0).velocity(0.0, -0.2).mass(3.0));
        sim
    };

    let mut a = build();
    let mut b = build();

    for sim in [&mut a, &mut b] {
        for _ in 0..50 {
            sim.step();
        }
        sim.set_model(AccelerationModel::RestoringForce);
        sim.set_integrator(Integrator::VelocityVerlet);
        for _ in 0..50 {
            sim.step();
        }
    }

    for ((_, ba), (_, bb)) in a.bodies().zip(b.bodies()) {
        assert_eq!(ba.x, bb.x);
        assert_eq!(ba.v, bb.v);
        assert_eq!(ba.a, bb.a);
        assert_eq!(ba.color, bb.color); // same seed, same defaulted colors
    }
}

#[test]
fn integrator_swap_resets_cached_acceleration() {
    let mut sim = Simulation::new(
        test_params(),
        AccelerationModel::RestoringForce,
        Integrator::VelocityVerlet,
    );
    let h = sim.add(BodySpec::at(1.0, 0.0));

    for _ in 0..10 {
        sim.step();
    }
    assert!(sim.body(h).unwrap().a.norm() > 0.0);

    sim.set_integrator(Integrator::ExplicitEuler);
    assert_eq!(sim.body(h).unwrap().a, NVec2::zeros());
}
