//! Ambient particle cloud.
//!
//! Positions are drawn once from a spherical shell and then rewritten in
//! place every tick; the buffer is never reallocated. The vertical drift is
//! the closed form of integrating `sin(t + k)·drift_speed` over elapsed time,
//! so it stays bounded and does not depend on the frame rate.

use crate::config::ParticleParams;
use crate::sphere::spherical_to_cartesian;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::f64::consts::TAU as TAU64;

pub struct ParticleField {
    params: ParticleParams,
    rest: Vec<Vec3>,
    positions: Vec<Vec3>,
    rotation_y: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(params: ParticleParams, rng: &mut R) -> Self {
        let span = params.max_radius - params.min_radius;
        let rest: Vec<Vec3> = (0..params.count)
            .map(|_| {
                let radius = params.min_radius + rng.gen::<f32>() * span;
                let theta = rng.gen::<f32>() * TAU;
                let phi = rng.gen::<f32>() * PI;
                spherical_to_cartesian(radius, phi, theta)
            })
            .collect();
        let positions = rest.clone();
        Self {
            params,
            rest,
            positions,
            rotation_y: 0.0,
        }
    }

    /// Advance the field to elapsed time `t`.
    pub fn update(&mut self, t: f64) {
        let drift = self.params.drift_speed;
        if drift != 0.0 {
            for (k, (pos, rest)) in self.positions.iter_mut().zip(&self.rest).enumerate() {
                let k = k as f64;
                let now = (t + k).rem_euclid(TAU64) as f32;
                let start = k.rem_euclid(TAU64) as f32;
                pos.y = rest.y + drift * (start.cos() - now.cos());
            }
        }
        self.rotation_y = (self.params.rotation_speed as f64 * t) as f32;
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Flat `[x0, y0, z0, x1, ...]` view for vertex upload.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Azimuth of the whole field, radians.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }
}
