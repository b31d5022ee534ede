//! Per-frame aggregation.
//!
//! The scheduler owns one [`FrameSnapshot`] for its whole life and rewrites
//! it on every tick; consumers borrow it until the next tick.

use crate::catalog::{Catalog, SizeClass};
use crate::config::{EmphasisParams, LayoutStrategy};
use crate::interaction::{Emphasis, InteractionStateTracker};
use crate::layout::Layout;
use crate::motion::{spin, Transform};
use crate::particles::ParticleField;
use bytemuck::{Pod, Zeroable};
use fnv::FnvHashMap;
use glam::Vec3;

/// Packed per-entity record for instance-buffer upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    pub position: [f32; 3],
    pub rotation_y: f32,
    pub scale: f32,
    pub glow: f32,
    pub color: [f32; 3],
    /// 1.0 while hovered.
    pub highlight: f32,
}

#[derive(Clone, Debug)]
pub struct EntityFrame {
    pub id: String,
    pub transform: Transform,
    pub emphasis: Emphasis,
}

/// A connection line with the current positions of both ends. `a` and `b`
/// index `FrameSnapshot::entities`; see [`FrameSnapshot::edge_ids`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFrame {
    pub a: usize,
    pub b: usize,
    pub start: Vec3,
    pub end: Vec3,
}

pub struct FrameSnapshot {
    /// Elapsed seconds this snapshot was sampled at.
    pub time: f64,
    /// Ticks taken so far; informational only.
    pub frame: u64,
    pub entities: Vec<EntityFrame>,
    pub instances: Vec<InstanceRecord>,
    pub edges: Vec<EdgeFrame>,
    /// Rotation of the central anchor (reactor core).
    pub anchor_rotation: Vec3,
    pub particles: ParticleField,
    pub hovered: Option<usize>,
    by_id: FnvHashMap<String, usize>,
}

impl FrameSnapshot {
    pub fn get(&self, id: &str) -> Option<&EntityFrame> {
        self.by_id.get(id).map(|&i| &self.entities[i])
    }

    /// Entity ids at both ends of `edge`.
    pub fn edge_ids(&self, edge: &EdgeFrame) -> Option<(&str, &str)> {
        Some((
            self.entities.get(edge.a)?.id.as_str(),
            self.entities.get(edge.b)?.id.as_str(),
        ))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Instance records as raw bytes.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Instance records as a flat float slice (10 floats per entity).
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

pub struct FrameScheduler {
    layout: Layout,
    emphasis: EmphasisParams,
    anchor_spin_rate: f32,
    sizes: Vec<SizeClass>,
    colors: Vec<[f32; 3]>,
    last_time: Option<f64>,
    snapshot: FrameSnapshot,
}

impl FrameScheduler {
    pub fn new(
        catalog: &Catalog,
        layout: Layout,
        particles: ParticleField,
        emphasis: EmphasisParams,
        anchor_spin_rate: f32,
    ) -> Self {
        let entities = catalog.entities();
        let frames = entities
            .iter()
            .map(|e| EntityFrame {
                id: e.id.clone(),
                transform: Transform::default(),
                emphasis: Emphasis::derive(false, e.size, layout.strategy(), &emphasis),
            })
            .collect();
        let edges = layout
            .edges()
            .iter()
            .map(|e| EdgeFrame {
                a: e.a,
                b: e.b,
                start: Vec3::ZERO,
                end: Vec3::ZERO,
            })
            .collect();
        let snapshot = FrameSnapshot {
            time: 0.0,
            frame: 0,
            entities: frames,
            instances: vec![InstanceRecord::default(); entities.len()],
            edges,
            anchor_rotation: Vec3::ZERO,
            particles,
            hovered: None,
            by_id: entities.iter().map(|e| (e.id.clone(), e.index)).collect(),
        };
        Self {
            layout,
            emphasis,
            anchor_spin_rate,
            sizes: entities.iter().map(|e| e.size).collect(),
            colors: entities.iter().map(|e| e.color_rgb).collect(),
            last_time: None,
            snapshot,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn strategy(&self) -> LayoutStrategy {
        self.layout.strategy()
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    pub fn frames(&self) -> u64 {
        self.snapshot.frame
    }

    /// Sample every entity and the particle field at elapsed time `t`.
    /// A `t` earlier than the previous tick is held at the previous tick.
    pub fn tick(&mut self, t: f64, hover: &InteractionStateTracker) -> &FrameSnapshot {
        let t = self.monotonic(t);
        let strategy = self.layout.strategy();
        let hovered = hover.hovered_index();
        let snap = &mut self.snapshot;

        for (i, ((ef, rec), (&size, &color))) in snap
            .entities
            .iter_mut()
            .zip(snap.instances.iter_mut())
            .zip(self.sizes.iter().zip(&self.colors))
            .enumerate()
        {
            let is_hovered = hovered == Some(i);
            ef.transform = self.layout.sample(i, t);
            ef.emphasis = Emphasis::derive(is_hovered, size, strategy, &self.emphasis);
            *rec = InstanceRecord {
                position: ef.transform.position.to_array(),
                rotation_y: ef.transform.rotation.y,
                scale: ef.emphasis.scale,
                glow: ef.emphasis.glow,
                color,
                highlight: if is_hovered { 1.0 } else { 0.0 },
            };
        }

        for edge in snap.edges.iter_mut() {
            edge.start = snap.entities[edge.a].transform.position;
            edge.end = snap.entities[edge.b].transform.position;
        }

        snap.particles.update(t);
        snap.anchor_rotation = Vec3::new(0.0, spin(t, self.anchor_spin_rate), 0.0);
        snap.hovered = hovered;
        snap.time = t;
        snap.frame += 1;
        &self.snapshot
    }

    fn monotonic(&mut self, t: f64) -> f64 {
        let t = if t.is_finite() { t } else { self.last_time.unwrap_or(0.0) };
        let t = match self.last_time {
            Some(prev) if t < prev => {
                log::warn!("[frame] time went backwards ({:.4} < {:.4}); holding", t, prev);
                prev
            }
            _ => t,
        };
        self.last_time = Some(t);
        t
    }
}
