//! One placement abstraction for both visual variants.
//!
//! `RingLayout` and `SphereLayout` each precompute the static motion
//! parameters of every entity; per-frame sampling is then a lookup plus a
//! [`MotionSampler`] call.

use crate::catalog::Catalog;
use crate::config::{stream_rng, EngineConfig, LayoutStrategy, RngStream};
use crate::error::EngineError;
use crate::graph::{Edge, ProximityGraphBuilder};
use crate::motion::{DriftParams, MotionSampler, OrbitParams, Transform};
use crate::rings::RingAssignment;
use crate::sphere::{SpherePoint, SphericalDistribution};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct RingLayout {
    pub assignment: RingAssignment,
    orbits: Vec<OrbitParams>,
}

impl RingLayout {
    pub fn new(catalog: &Catalog, config: &EngineConfig) -> Result<Self, EngineError> {
        let assignment = RingAssignment::new(catalog, &config.rings)?;
        let orbits = catalog
            .entities()
            .iter()
            .map(|e| {
                // every entity was mapped onto a ring above
                let (radius, angular_speed) = assignment
                    .ring_for(e.index)
                    .map(|r| (r.radius, r.angular_speed))
                    .unwrap_or_default();
                OrbitParams {
                    radius,
                    angular_speed,
                    offset: e.offset,
                    index: e.index,
                    bob_amplitude: config.motion.bob_amplitude,
                    spin_rate: config.motion.ring_spin_rate,
                }
            })
            .collect();
        Ok(Self { assignment, orbits })
    }

    pub fn orbit(&self, index: usize) -> Option<&OrbitParams> {
        self.orbits.get(index)
    }
}

#[derive(Clone, Debug)]
pub struct SphereLayout {
    pub points: Vec<SpherePoint>,
    pub edges: Vec<Edge>,
    drifts: Vec<DriftParams>,
}

impl SphereLayout {
    pub fn new(catalog: &Catalog, config: &EngineConfig, seed: u64) -> Self {
        let mut jitter_rng = stream_rng(seed, RngStream::SphereJitter);
        let points = SphericalDistribution::generate(catalog.len(), &config.sphere, &mut jitter_rng);

        let rest: Vec<Vec3> = points.iter().map(|p| p.position).collect();
        let mut edge_rng = stream_rng(seed, RngStream::EdgeThinning);
        let edges = ProximityGraphBuilder::new(config.graph).build(&rest, &mut edge_rng);

        let drifts = rest
            .iter()
            .map(|&rest| DriftParams {
                rest,
                drift: config.motion.sphere_drift,
                spin_rate: config.motion.sphere_spin_rate,
            })
            .collect();
        Self {
            points,
            edges,
            drifts,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Layout {
    Rings(RingLayout),
    Sphere(SphereLayout),
}

impl Layout {
    pub fn build(catalog: &Catalog, config: &EngineConfig, seed: u64) -> Result<Self, EngineError> {
        Ok(match config.layout {
            LayoutStrategy::Rings => Layout::Rings(RingLayout::new(catalog, config)?),
            LayoutStrategy::Sphere => Layout::Sphere(SphereLayout::new(catalog, config, seed)),
        })
    }

    pub fn strategy(&self) -> LayoutStrategy {
        match self {
            Layout::Rings(_) => LayoutStrategy::Rings,
            Layout::Sphere(_) => LayoutStrategy::Sphere,
        }
    }

    /// Transform of catalog entity `index` at elapsed time `t`.
    pub fn sample(&self, index: usize, t: f64) -> Transform {
        match self {
            Layout::Rings(l) => l
                .orbits
                .get(index)
                .map(|p| MotionSampler::orbit(t, p))
                .unwrap_or_default(),
            Layout::Sphere(l) => l
                .drifts
                .get(index)
                .map(|p| MotionSampler::drift(t, p))
                .unwrap_or_default(),
        }
    }

    /// Connection lines; always empty in ring mode.
    pub fn edges(&self) -> &[Edge] {
        match self {
            Layout::Rings(_) => &[],
            Layout::Sphere(l) => &l.edges,
        }
    }

    pub fn ring_assignment(&self) -> Option<&RingAssignment> {
        match self {
            Layout::Rings(l) => Some(&l.assignment),
            Layout::Sphere(_) => None,
        }
    }
}
