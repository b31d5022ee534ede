//! Galaxy-mode placement on a jittered sphere shell.

use crate::config::SphereParams;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// One entity's resting place in galaxy mode. Computed once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    pub position: Vec3,
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

/// Polar and azimuth angles of point `i` of `n` on the golden-angle spiral.
///
/// `phi = acos(-1 + 2i/n)` spaces the points evenly in `cos(phi)` (equal-area
/// bands), `theta = sqrt(n·π)·phi` winds them around the axis.
#[inline]
pub fn spiral_angles(i: usize, n: usize) -> (f32, f32) {
    let n = n.max(1) as f32;
    let phi = (-1.0 + 2.0 * i as f32 / n).clamp(-1.0, 1.0).acos();
    let theta = (n * PI).sqrt() * phi;
    (phi, theta)
}

#[inline]
pub fn spherical_to_cartesian(radius: f32, phi: f32, theta: f32) -> Vec3 {
    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

pub struct SphericalDistribution;

impl SphericalDistribution {
    /// Place `n` points. The jitter for point `i` is the i-th draw from `rng`,
    /// so the same seeded source always yields the same shell.
    pub fn generate<R: Rng + ?Sized>(n: usize, params: &SphereParams, rng: &mut R) -> Vec<SpherePoint> {
        (0..n)
            .map(|i| {
                let (phi, theta) = spiral_angles(i, n);
                let radius = params.base_radius + rng.gen::<f32>() * params.radius_jitter;
                SpherePoint {
                    position: spherical_to_cartesian(radius, phi, theta),
                    radius,
                    phi,
                    theta,
                }
            })
            .collect()
    }
}
