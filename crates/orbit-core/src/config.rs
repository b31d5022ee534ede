//! Engine configuration.
//!
//! Every knob has a default taken from `constants.rs`; hosts override only the
//! fields they care about. `validate` runs once inside `Engine::new`.

use crate::constants::*;
use crate::error::EngineError;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutStrategy {
    /// Concentric orbital rings, one per layer.
    #[default]
    Rings,
    /// Galaxy mode: every entity on one jittered sphere shell.
    Sphere,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingSpec {
    pub id: String,
    pub radius: f32,
    /// Radians of orbit per second of elapsed time.
    pub angular_speed: f32,
}

impl RingSpec {
    pub fn new(id: &str, radius: f32, angular_speed: f32) -> Self {
        Self {
            id: id.to_string(),
            radius,
            angular_speed,
        }
    }
}

pub fn default_rings() -> Vec<RingSpec> {
    [INNER_RING, MIDDLE_RING, OUTER_RING]
        .iter()
        .map(|&(id, radius, speed)| RingSpec::new(id, radius, speed))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub bob_amplitude: f32,
    pub ring_spin_rate: f32,
    pub sphere_drift: f32,
    pub sphere_spin_rate: f32,
    pub anchor_spin_rate: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            bob_amplitude: BOB_AMPLITUDE,
            ring_spin_rate: RING_SPIN_RATE,
            sphere_drift: SPHERE_DRIFT,
            sphere_spin_rate: SPHERE_SPIN_RATE,
            anchor_spin_rate: ANCHOR_SPIN_RATE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereParams {
    pub base_radius: f32,
    pub radius_jitter: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            base_radius: SPHERE_BASE_RADIUS,
            radius_jitter: SPHERE_RADIUS_JITTER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityParams {
    pub distance_threshold: f32,
    pub keep_probability: f32,
}

impl Default for ProximityParams {
    fn default() -> Self {
        Self {
            distance_threshold: EDGE_DISTANCE_THRESHOLD,
            keep_probability: EDGE_KEEP_PROBABILITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Field azimuth rate, rad/s.
    pub rotation_speed: f32,
    pub drift_speed: f32,
}

impl ParticleParams {
    pub fn for_layout(layout: LayoutStrategy) -> Self {
        match layout {
            LayoutStrategy::Rings => Self {
                count: RING_PARTICLE_COUNT,
                min_radius: RING_PARTICLE_MIN_RADIUS,
                max_radius: RING_PARTICLE_MAX_RADIUS,
                rotation_speed: RING_PARTICLE_ROTATION,
                drift_speed: RING_PARTICLE_DRIFT,
            },
            LayoutStrategy::Sphere => Self {
                count: GALAXY_PARTICLE_COUNT,
                min_radius: GALAXY_PARTICLE_MIN_RADIUS,
                max_radius: GALAXY_PARTICLE_MAX_RADIUS,
                rotation_speed: GALAXY_PARTICLE_ROTATION,
                drift_speed: GALAXY_PARTICLE_DRIFT,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmphasisParams {
    /// Glow as `(idle, hovered)`.
    pub ring_glow: (f32, f32),
    pub orb_glow: (f32, f32),
    /// Orb radius as `(idle, hovered)`; its ratio is the galaxy hover scale.
    pub orb_radius: (f32, f32),
    pub idle_tilt: [f32; 2],
    pub hover_tilt: [f32; 2],
}

impl Default for EmphasisParams {
    fn default() -> Self {
        Self {
            ring_glow: RING_GLOW,
            orb_glow: ORB_GLOW,
            orb_radius: ORB_RADIUS,
            idle_tilt: IDLE_TILT,
            hover_tilt: HOVER_TILT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedPolicy {
    Fixed(u64),
    /// Opt-in: a fresh layout on every construction.
    Entropy,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Fixed(DEFAULT_SEED)
    }
}

impl SeedPolicy {
    pub fn resolve(self) -> u64 {
        match self {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Entropy => StdRng::from_entropy().gen(),
        }
    }
}

/// Independent random streams derived from one base seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RngStream {
    SphereJitter = 0,
    EdgeThinning = 1,
    Particles = 2,
}

pub fn stream_rng(seed: u64, stream: RngStream) -> StdRng {
    let mix = seed ^ (stream as u64 + 1).wrapping_mul(SEED_MIX);
    StdRng::seed_from_u64(mix)
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub layout: LayoutStrategy,
    pub rings: Vec<RingSpec>,
    pub motion: MotionParams,
    pub sphere: SphereParams,
    pub graph: ProximityParams,
    /// `None` selects the preset for `layout`.
    pub particles: Option<ParticleParams>,
    pub emphasis: EmphasisParams,
    pub seed: SeedPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: LayoutStrategy::Rings,
            rings: default_rings(),
            motion: MotionParams::default(),
            sphere: SphereParams::default(),
            graph: ProximityParams::default(),
            particles: None,
            emphasis: EmphasisParams::default(),
            seed: SeedPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn rings() -> Self {
        Self::default()
    }

    pub fn galaxy() -> Self {
        Self {
            layout: LayoutStrategy::Sphere,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    pub fn particle_params(&self) -> ParticleParams {
        self.particles
            .unwrap_or_else(|| ParticleParams::for_layout(self.layout))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (i, ring) in self.rings.iter().enumerate() {
            if !ring.radius.is_finite() || ring.radius <= 0.0 {
                return Err(EngineError::InvalidRingRadius {
                    id: ring.id.clone(),
                    radius: ring.radius,
                });
            }
            if !ring.angular_speed.is_finite() {
                return Err(EngineError::InvalidRingSpeed {
                    id: ring.id.clone(),
                    speed: ring.angular_speed,
                });
            }
            if self.rings[..i].iter().any(|r| r.id == ring.id) {
                return Err(EngineError::DuplicateRing(ring.id.clone()));
            }
        }

        let s = &self.sphere;
        if !s.base_radius.is_finite() || s.base_radius <= 0.0 {
            return Err(EngineError::InvalidSphere("base radius must be finite and > 0"));
        }
        if !s.radius_jitter.is_finite() || s.radius_jitter < 0.0 {
            return Err(EngineError::InvalidSphere("radius jitter must be finite and >= 0"));
        }

        let g = &self.graph;
        if !g.distance_threshold.is_finite() || g.distance_threshold <= 0.0 {
            return Err(EngineError::InvalidGraph("distance threshold must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&g.keep_probability) {
            return Err(EngineError::InvalidGraph("keep probability must lie in [0, 1]"));
        }

        let p = self.particle_params();
        if !p.min_radius.is_finite() || !p.max_radius.is_finite() || p.min_radius < 0.0 {
            return Err(EngineError::InvalidParticles("radii must be finite and >= 0"));
        }
        if p.max_radius < p.min_radius {
            return Err(EngineError::InvalidParticles("max radius is below min radius"));
        }
        if !p.rotation_speed.is_finite() || !p.drift_speed.is_finite() {
            return Err(EngineError::InvalidParticles("speeds must be finite"));
        }
        Ok(())
    }
}
