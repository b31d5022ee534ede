//! Time-parameterised transforms.
//!
//! Everything here is a pure function of elapsed seconds and static
//! per-entity parameters: no state, no randomness, no dependence on how many
//! frames have been rendered. Phases are reduced modulo 2π in f64 before the
//! trig calls so long-running sessions keep full f32 precision.

use glam::Vec3;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
}

/// Static parameters of an entity travelling on a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub radius: f32,
    /// rad/s
    pub angular_speed: f32,
    pub offset: f32,
    /// Catalog index; de-synchronises the bob of neighbours.
    pub index: usize,
    pub bob_amplitude: f32,
    /// Self-rotation about y, rad/s.
    pub spin_rate: f32,
}

/// Static parameters of a galaxy-mode entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftParams {
    pub rest: Vec3,
    pub drift: f32,
    pub spin_rate: f32,
}

#[inline]
fn phase(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

pub struct MotionSampler;

impl MotionSampler {
    /// Ring motion: `x = r·cos(ωt+φ)`, `z = r·sin(ωt+φ)`,
    /// `y = A·sin(2ωt + φ + i)`. Periodic with period `2π/ω`.
    pub fn orbit(t: f64, p: &OrbitParams) -> Transform {
        let orbit_t = p.angular_speed as f64 * t;
        let angle = phase(orbit_t + p.offset as f64);
        let bob = phase(2.0 * orbit_t + p.offset as f64 + p.index as f64);
        Transform {
            position: Vec3::new(
                p.radius * angle.cos(),
                p.bob_amplitude * bob.sin(),
                p.radius * angle.sin(),
            ),
            rotation: Vec3::new(0.0, spin(t, p.spin_rate), 0.0),
        }
    }

    /// Galaxy motion: the rest point plus `Δy = sin(t + x₀)·ε`.
    pub fn drift(t: f64, p: &DriftParams) -> Transform {
        let dy = p.drift * phase(t + p.rest.x as f64).sin();
        Transform {
            position: p.rest + Vec3::new(0.0, dy, 0.0),
            rotation: Vec3::new(0.0, spin(t, p.spin_rate), 0.0),
        }
    }
}

/// Accumulated rotation angle, not wrapped, so consecutive frames never jump.
#[inline]
pub fn spin(t: f64, rate: f32) -> f32 {
    (rate as f64 * t) as f32
}
