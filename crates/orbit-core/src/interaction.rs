//! Hover state machine and the emphasis it drives.
//!
//! Transitions are idempotent: repeating an `enter` for the hovered entity,
//! a `leave` for anything other than the hovered entity, or any `leave` while
//! idle changes nothing. Listeners hear about real changes only.

use crate::catalog::{Catalog, SizeClass};
use crate::config::{EmphasisParams, LayoutStrategy};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    /// Catalog index of the hovered entity.
    Hovering(usize),
}

/// Visual parameters derived from "is this the hovered entity".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emphasis {
    pub scale: f32,
    pub glow: f32,
    pub tooltip: bool,
    /// Badge tilt about x and y, radians.
    pub tilt: [f32; 2],
}

impl Emphasis {
    pub fn derive(
        hovered: bool,
        size: SizeClass,
        layout: LayoutStrategy,
        params: &EmphasisParams,
    ) -> Self {
        let (scale, (glow_idle, glow_hover)) = match layout {
            LayoutStrategy::Rings => (size.hover_ratio(), params.ring_glow),
            LayoutStrategy::Sphere => {
                let (idle_r, hover_r) = params.orb_radius;
                (hover_r / idle_r, params.orb_glow)
            }
        };
        if hovered {
            Self {
                scale,
                glow: glow_hover,
                tooltip: true,
                tilt: params.hover_tilt,
            }
        } else {
            Self {
                scale: 1.0,
                glow: glow_idle,
                tooltip: false,
                tilt: params.idle_tilt,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Receives the hovered label, or `None` once nothing is hovered.
pub type HoverListener = Box<dyn FnMut(Option<&str>)>;

pub struct InteractionStateTracker {
    index_of: FnvHashMap<String, usize>,
    labels: Vec<String>,
    state: HoverState,
    listeners: Vec<(ListenerId, HoverListener)>,
    next_listener: u64,
}

impl InteractionStateTracker {
    pub fn new(catalog: &Catalog) -> Self {
        let entities = catalog.entities();
        Self {
            index_of: entities.iter().map(|e| (e.id.clone(), e.index)).collect(),
            labels: entities.iter().map(|e| e.label.clone()).collect(),
            state: HoverState::Idle,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn hovered_index(&self) -> Option<usize> {
        match self.state {
            HoverState::Idle => None,
            HoverState::Hovering(i) => Some(i),
        }
    }

    pub fn hovered_label(&self) -> Option<&str> {
        self.hovered_index().map(|i| self.labels[i].as_str())
    }

    #[inline]
    pub fn is_hovered(&self, index: usize) -> bool {
        self.state == HoverState::Hovering(index)
    }

    /// Pointer entered `id`. Last enter wins. Returns whether the state changed.
    pub fn enter(&mut self, id: &str) -> bool {
        let Some(&index) = self.index_of.get(id) else {
            log::debug!("[hover] enter for unknown entity `{}` ignored", id);
            return false;
        };
        self.transition(HoverState::Hovering(index))
    }

    /// Pointer left `id`. Stray leaves for other entities are ignored.
    pub fn leave(&mut self, id: &str) -> bool {
        let Some(&index) = self.index_of.get(id) else {
            log::debug!("[hover] leave for unknown entity `{}` ignored", id);
            return false;
        };
        if self.is_hovered(index) {
            self.transition(HoverState::Idle)
        } else {
            false
        }
    }

    /// Pointer left the whole view.
    pub fn reset(&mut self) -> bool {
        self.transition(HoverState::Idle)
    }

    fn transition(&mut self, next: HoverState) -> bool {
        if next == self.state {
            return false;
        }
        log::debug!("[hover] {:?} -> {:?}", self.state, next);
        self.state = next;
        let label = match next {
            HoverState::Idle => None,
            HoverState::Hovering(i) => Some(self.labels[i].as_str()),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(label);
        }
        true
    }

    pub fn subscribe(&mut self, listener: HoverListener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Drop every listener.
    pub fn detach_all(&mut self) {
        self.listeners.clear();
    }
}
