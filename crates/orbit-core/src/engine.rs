use crate::catalog::{Catalog, EntitySpec, LayerLegend};
use crate::config::{stream_rng, EngineConfig, LayoutStrategy, RngStream};
use crate::error::EngineError;
use crate::frame::{FrameScheduler, FrameSnapshot};
use crate::graph::Edge;
use crate::interaction::{HoverListener, HoverState, InteractionStateTracker, ListenerId};
use crate::layout::Layout;
use crate::particles::ParticleField;
use crate::rings::RingSummary;

/// Totals reported when an engine is torn down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStats {
    pub frames: u64,
    pub last_time: f64,
    pub listeners_detached: usize,
}

/// Owns the validated catalog, the chosen layout, the hover tracker and the
/// frame scheduler. Hosts call `tick` once per rendered frame and forward
/// pointer events to `enter`/`leave`.
pub struct Engine {
    catalog: Catalog,
    seed: u64,
    tracker: InteractionStateTracker,
    scheduler: FrameScheduler,
}

impl Engine {
    pub fn new(specs: &[EntitySpec], config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let catalog = Catalog::from_specs(specs)?;
        let seed = config.seed.resolve();
        let layout = Layout::build(&catalog, &config, seed)?;

        let mut particle_rng = stream_rng(seed, RngStream::Particles);
        let particles = ParticleField::new(config.particle_params(), &mut particle_rng);

        log::info!(
            "[engine] layout={:?} entities={} edges={} particles={} seed={}",
            layout.strategy(),
            catalog.len(),
            layout.edges().len(),
            particles.len(),
            seed
        );

        let tracker = InteractionStateTracker::new(&catalog);
        let scheduler = FrameScheduler::new(
            &catalog,
            layout,
            particles,
            config.emphasis,
            config.motion.anchor_spin_rate,
        );
        Ok(Self {
            catalog,
            seed,
            tracker,
            scheduler,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Seed the layout was built from; replaying it reproduces the layout.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn strategy(&self) -> LayoutStrategy {
        self.scheduler.strategy()
    }

    pub fn layout(&self) -> &Layout {
        self.scheduler.layout()
    }

    pub fn edges(&self) -> &[Edge] {
        self.scheduler.layout().edges()
    }

    /// Ring legend; empty in galaxy mode.
    pub fn rings(&self) -> Vec<RingSummary> {
        self.scheduler
            .layout()
            .ring_assignment()
            .map(|r| r.summaries())
            .unwrap_or_default()
    }

    /// Category legend: one row per layer tag with its color and member count.
    pub fn legend(&self) -> Vec<LayerLegend> {
        self.catalog.legend()
    }

    /// Connection lines as entity id pairs.
    pub fn edge_ids(&self) -> Vec<(&str, &str)> {
        self.edges()
            .iter()
            .filter_map(|e| e.ids(&self.catalog))
            .collect()
    }

    pub fn enter(&mut self, id: &str) -> bool {
        self.tracker.enter(id)
    }

    pub fn leave(&mut self, id: &str) -> bool {
        self.tracker.leave(id)
    }

    pub fn reset_hover(&mut self) -> bool {
        self.tracker.reset()
    }

    pub fn hover_state(&self) -> HoverState {
        self.tracker.state()
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.tracker
            .hovered_index()
            .map(|i| self.catalog.entities()[i].id.as_str())
    }

    pub fn hovered_label(&self) -> Option<&str> {
        self.tracker.hovered_label()
    }

    pub fn subscribe(&mut self, listener: HoverListener) -> ListenerId {
        self.tracker.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.tracker.unsubscribe(id)
    }

    pub fn tick(&mut self, t: f64) -> &FrameSnapshot {
        self.scheduler.tick(t, &self.tracker)
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        self.scheduler.snapshot()
    }

    /// Detach every hover listener and consume the engine.
    pub fn teardown(mut self) -> RunStats {
        let listeners_detached = self.tracker.listener_count();
        self.tracker.detach_all();
        let snap = self.scheduler.snapshot();
        let stats = RunStats {
            frames: snap.frame,
            last_time: snap.time,
            listeners_detached,
        };
        log::info!(
            "[engine] teardown after {} frames ({:.2}s), {} listeners detached",
            stats.frames,
            stats.last_time,
            stats.listeners_detached
        );
        stats
    }
}
