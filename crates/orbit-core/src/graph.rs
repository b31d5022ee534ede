//! Connection lines between nearby galaxy points.

use crate::catalog::Catalog;
use crate::config::ProximityParams;
use crate::constants::EDGE_SOFT_LIMIT_POINTS;
use glam::Vec3;
use rand::Rng;

/// Unordered pair of entities, stored as catalog indices with `a < b`.
/// Use [`Edge::ids`] to resolve them against the catalog the layout was
/// built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

impl Edge {
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    pub fn ids<'c>(&self, catalog: &'c Catalog) -> Option<(&'c str, &'c str)> {
        let entities = catalog.entities();
        Some((entities.get(self.a)?.id.as_str(), entities.get(self.b)?.id.as_str()))
    }
}

pub struct ProximityGraphBuilder {
    params: ProximityParams,
}

impl ProximityGraphBuilder {
    pub fn new(params: ProximityParams) -> Self {
        Self { params }
    }

    /// Scan every pair once. A pair closer than the threshold becomes an edge
    /// only if its Bernoulli trial succeeds; one draw is taken per close pair,
    /// in (i, j) order.
    pub fn build<R: Rng + ?Sized>(&self, points: &[Vec3], rng: &mut R) -> Vec<Edge> {
        if points.len() > EDGE_SOFT_LIMIT_POINTS {
            log::warn!(
                "[graph] {} points exceeds the intended size; pair scan is O(n^2)",
                points.len()
            );
        }
        let mut edges = Vec::new();
        for (i, p) in points.iter().enumerate() {
            for (j, q) in points.iter().enumerate().skip(i + 1) {
                let distance = p.distance(*q);
                if distance < self.params.distance_threshold
                    && rng.gen::<f32>() < self.params.keep_probability
                {
                    edges.push(Edge { a: i, b: j, distance });
                }
            }
        }
        log::debug!("[graph] {} edges over {} points", edges.len(), points.len());
        edges
    }
}
