// Host-side tests for the pure motion functions.

use glam::Vec3;
use orbit_core::*;
use std::f32::consts::{FRAC_PI_2, PI};

fn orbit(offset: f32, index: usize) -> OrbitParams {
    OrbitParams {
        radius: 3.0,
        angular_speed: 0.3,
        offset,
        index,
        bob_amplitude: 0.3,
        spin_rate: 1.2,
    }
}

fn close(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).abs().max_element() < tol
}

#[test]
fn quarter_turn_offsets_at_time_zero() {
    let expected_xz = [(3.0, 0.0), (0.0, 3.0), (-3.0, 0.0), (0.0, -3.0)];
    for (k, (x, z)) in expected_xz.iter().enumerate() {
        let t = MotionSampler::orbit(0.0, &orbit(k as f32 * FRAC_PI_2, k));
        assert!((t.position.x - x).abs() < 1e-5, "entity {k}: x={}", t.position.x);
        assert!((t.position.z - z).abs() < 1e-5, "entity {k}: z={}", t.position.z);
        let bob = 0.3 * (k as f32 * FRAC_PI_2 + k as f32).sin();
        assert!((t.position.y - bob).abs() < 1e-5, "entity {k}: y={}", t.position.y);
    }
}

#[test]
fn orbit_is_deterministic() {
    let p = orbit(1.234, 7);
    for &t in &[0.0, 0.016, 1.5, 42.0, 9_999.25] {
        let a = MotionSampler::orbit(t, &p);
        let b = MotionSampler::orbit(t, &p);
        assert_eq!(a, b);
    }
}

#[test]
fn orbit_is_periodic_in_angular_speed() {
    let p = orbit(PI / 3.0, 4);
    let period = std::f64::consts::TAU / p.angular_speed as f64;
    for &t in &[0.0, 0.7, 3.3, 15.0, 120.5] {
        let a = MotionSampler::orbit(t, &p);
        let b = MotionSampler::orbit(t + period, &p);
        assert!(
            close(a.position, b.position, 1e-4),
            "t={t}: {:?} vs {:?}",
            a.position,
            b.position
        );
    }
}

#[test]
fn orbit_stays_on_its_ring() {
    let p = orbit(0.5, 2);
    for step in 0..600 {
        let t = step as f64 / 60.0;
        let pos = MotionSampler::orbit(t, &p).position;
        let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
        assert!((r - 3.0).abs() < 1e-4);
        assert!(pos.y.abs() <= 0.3 + 1e-6);
    }
}

#[test]
fn orbit_is_continuous_between_frames() {
    let p = orbit(0.0, 0);
    let dt = 1.0 / 120.0;
    // max speed: r·ω horizontally plus 2ω·A vertically
    let max_step = (3.0 * 0.3 + 2.0 * 0.3 * 0.3) * dt as f32 * 1.01;
    let mut prev = MotionSampler::orbit(0.0, &p).position;
    for step in 1..5_000 {
        let pos = MotionSampler::orbit(step as f64 * dt, &p).position;
        assert!(pos.distance(prev) <= max_step, "jump at step {step}");
        prev = pos;
    }
}

#[test]
fn spin_grows_linearly_with_time() {
    let p = orbit(0.0, 0);
    let a = MotionSampler::orbit(1.0, &p).rotation.y;
    let b = MotionSampler::orbit(2.0, &p).rotation.y;
    assert!((a - 1.2).abs() < 1e-6);
    assert!((b - 2.4).abs() < 1e-6);
    assert_eq!(MotionSampler::orbit(2.0, &p).rotation.x, 0.0);
}

#[test]
fn drift_stays_near_rest_point() {
    let p = DriftParams {
        rest: Vec3::new(1.5, -2.0, 0.5),
        drift: 0.06,
        spin_rate: 0.6,
    };
    for step in 0..1_000 {
        let t = step as f64 * 0.05;
        let tr = MotionSampler::drift(t, &p);
        assert_eq!(tr.position.x, 1.5);
        assert_eq!(tr.position.z, 0.5);
        let expected = -2.0 + 0.06 * ((t + 1.5) as f32).sin();
        assert!((tr.position.y - expected).abs() < 1e-5);
    }
}

#[test]
fn drift_is_deterministic() {
    let p = DriftParams {
        rest: Vec3::new(-0.3, 0.2, 4.0),
        drift: 0.06,
        spin_rate: 0.6,
    };
    assert_eq!(MotionSampler::drift(12.5, &p), MotionSampler::drift(12.5, &p));
}
