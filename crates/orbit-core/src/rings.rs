//! Layer grouping and stable angular offsets.
//!
//! Offsets depend only on catalog order: the k-th member of a layer with n
//! members sits at `2πk / n`. Re-running the assignment over the same catalog
//! yields bit-identical offsets.

use crate::catalog::{Catalog, Entity};
use crate::config::RingSpec;
use crate::error::EngineError;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[inline]
pub fn angular_offset(layer_index: usize, layer_count: usize) -> f32 {
    if layer_count == 0 {
        return 0.0;
    }
    TAU * layer_index as f32 / layer_count as f32
}

/// Fill `layer_index` and `offset` for every entity, grouping by layer tag in
/// catalog order.
pub fn assign_offsets(entities: &mut [Entity]) {
    let mut counts: FnvHashMap<&str, usize> = FnvHashMap::default();
    let mut slots = Vec::with_capacity(entities.len());
    for e in entities.iter() {
        let n = counts.entry(e.layer.as_str()).or_insert(0);
        slots.push(*n);
        *n += 1;
    }
    let totals: Vec<usize> = entities.iter().map(|e| counts[e.layer.as_str()]).collect();
    for ((e, slot), total) in entities.iter_mut().zip(slots).zip(totals) {
        e.layer_index = slot;
        e.offset = angular_offset(slot, total);
    }
}

#[derive(Clone, Debug)]
pub struct Ring {
    pub id: String,
    pub radius: f32,
    pub angular_speed: f32,
    /// Catalog indices of the members, in catalog order.
    pub members: SmallVec<[usize; 16]>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Seconds for one full revolution, `None` for a stationary ring.
    pub fn period(&self) -> Option<f32> {
        (self.angular_speed != 0.0).then(|| TAU / self.angular_speed.abs())
    }
}

/// Legend row for a ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSummary {
    pub id: String,
    pub radius: f32,
    pub angular_speed: f32,
    pub members: usize,
}

#[derive(Clone, Debug, Default)]
pub struct RingAssignment {
    rings: Vec<Ring>,
    /// Ring index per catalog entity.
    ring_of: Vec<usize>,
}

impl RingAssignment {
    /// Map every entity onto the ring whose id equals its layer tag. Rings keep
    /// configuration order; a ring nobody names stays empty.
    pub fn new(catalog: &Catalog, specs: &[RingSpec]) -> Result<Self, EngineError> {
        let mut rings: Vec<Ring> = specs
            .iter()
            .map(|s| Ring {
                id: s.id.clone(),
                radius: s.radius,
                angular_speed: s.angular_speed,
                members: SmallVec::new(),
            })
            .collect();
        let lookup: FnvHashMap<&str, usize> = specs
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.as_str(), i))
            .collect();

        let mut ring_of = Vec::with_capacity(catalog.len());
        for e in catalog.entities() {
            let ri = *lookup
                .get(e.layer.as_str())
                .ok_or_else(|| EngineError::UnknownLayer {
                    id: e.id.clone(),
                    layer: e.layer.clone(),
                })?;
            rings[ri].members.push(e.index);
            ring_of.push(ri);
        }
        Ok(Self { rings, ring_of })
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn ring_for(&self, entity_index: usize) -> Option<&Ring> {
        self.ring_of.get(entity_index).map(|&ri| &self.rings[ri])
    }

    pub fn summaries(&self) -> Vec<RingSummary> {
        self.rings
            .iter()
            .map(|r| RingSummary {
                id: r.id.clone(),
                radius: r.radius,
                angular_speed: r.angular_speed,
                members: r.len(),
            })
            .collect()
    }
}
