#![cfg(target_arch = "wasm32")]
use instant::Instant;
use orbit_core::{
    galaxy_catalog, reference_catalog, Engine, EngineConfig, EntitySpec, LayoutStrategy, SeedPolicy, SizeClass,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;

use constants::{DEFAULT_CAPTION_ID, DEFAULT_CONTAINER_ID, EDGE_STRIDE, INSTANCE_STRIDE};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");
    Ok(())
}

/// Entity catalog assembled from JS before the view is built.
#[wasm_bindgen]
#[derive(Default)]
pub struct CatalogBuilder {
    specs: Vec<EntitySpec>,
}

#[wasm_bindgen]
impl CatalogBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The portfolio's technology catalog.
    pub fn reference() -> CatalogBuilder {
        CatalogBuilder {
            specs: reference_catalog(),
        }
    }

    /// Skills grouped by category, for galaxy mode.
    pub fn galaxy() -> CatalogBuilder {
        CatalogBuilder {
            specs: galaxy_catalog(),
        }
    }

    /// Reference catalog matching a layout mode.
    pub fn for_mode(mode: &str) -> CatalogBuilder {
        match mode {
            "galaxy" | "sphere" => Self::galaxy(),
            _ => Self::reference(),
        }
    }

    pub fn push(
        &mut self,
        id: &str,
        label: &str,
        color_hex: &str,
        layer: &str,
        size: &str,
    ) -> Result<(), JsValue> {
        let size: SizeClass = size.parse().map_err(js_err)?;
        self.specs
            .push(EntitySpec::new(id, label, color_hex, layer, size));
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.specs.len()
    }
}

struct ViewState {
    engine: Option<Engine>,
    started_at: Instant,
    on_frame: Option<js_sys::Function>,
}

impl ViewState {
    /// Tick the engine and copy out the buffers for the frame callback. The
    /// callback runs after the state borrow is released so it may call back
    /// into the view.
    fn frame(&mut self) -> Option<(js_sys::Function, js_sys::Float32Array, js_sys::Float32Array)> {
        let engine = self.engine.as_mut()?;
        let t = self.started_at.elapsed().as_secs_f64();
        let snap = engine.tick(t);
        let cb = self.on_frame.clone()?;
        let instances = js_sys::Float32Array::from(snap.instance_floats());
        let particles = js_sys::Float32Array::from(snap.particles.as_flat());
        Some((cb, instances, particles))
    }
}

fn run_frame(state: &Rc<RefCell<ViewState>>) {
    let ready = state.borrow_mut().frame();
    if let Some((cb, instances, particles)) = ready {
        if let Err(e) = cb.call2(&JsValue::NULL, &instances, &particles) {
            log::error!("frame callback error: {:?}", e);
        }
    }
}

/// One mounted orbit visualisation.
///
/// The page's renderer receives per-frame buffers through the callback given
/// to `start`, forwards hit-test results to `pointer_enter`/`pointer_leave`,
/// and calls `dispose` when the view is torn down.
#[wasm_bindgen]
pub struct OrbitView {
    state: Rc<RefCell<ViewState>>,
    frame_loop: Option<frame::FrameLoop>,
    leave_listener: Option<events::ListenerGuard>,
}

#[wasm_bindgen]
impl OrbitView {
    /// `mode` is `"rings"` or `"galaxy"`. Omitting `seed` keeps the default
    /// fixed seed; pass `random = true` for a fresh layout each time.
    #[wasm_bindgen(constructor)]
    pub fn new(
        catalog: &CatalogBuilder,
        mode: &str,
        seed: Option<u32>,
        random: Option<bool>,
        container_id: Option<String>,
        caption_id: Option<String>,
    ) -> Result<OrbitView, JsValue> {
        let mut config = match mode {
            "galaxy" | "sphere" => EngineConfig::galaxy(),
            "rings" | "" => EngineConfig::rings(),
            other => return Err(js_err(format!("unknown layout mode `{other}`"))),
        };
        config.seed = match (random.unwrap_or(false), seed) {
            (true, _) => SeedPolicy::Entropy,
            (false, Some(s)) => SeedPolicy::Fixed(s as u64),
            (false, None) => config.seed,
        };

        let mut engine = Engine::new(&catalog.specs, config).map_err(js_err)?;
        let caption_id = caption_id.unwrap_or_else(|| DEFAULT_CAPTION_ID.to_string());
        if let Some(document) = dom::window_document() {
            dom::set_caption(&document, &caption_id, None);
            engine.subscribe(Box::new(move |label: Option<&str>| {
                dom::set_caption(&document, &caption_id, label);
            }));
        }

        let state = Rc::new(RefCell::new(ViewState {
            engine: Some(engine),
            started_at: Instant::now(),
            on_frame: None,
        }));

        let leave_listener = wire_view_leave(&state, container_id.as_deref());

        Ok(OrbitView {
            state,
            frame_loop: None,
            leave_listener,
        })
    }

    /// Begin ticking once per animation frame, handing
    /// `(instances: Float32Array, particles: Float32Array)` to `on_frame`.
    pub fn start(&mut self, on_frame: Option<js_sys::Function>) {
        self.state.borrow_mut().on_frame = on_frame;
        let frame_loop = self.frame_loop.get_or_insert_with(|| {
            let state = self.state.clone();
            frame::FrameLoop::new(move || run_frame(&state))
        });
        frame_loop.start();
    }

    /// Pause ticking; `start` resumes on the same clock.
    pub fn stop(&mut self) {
        if let Some(l) = &self.frame_loop {
            l.stop();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(|l| l.is_running())
    }

    pub fn pointer_enter(&self, id: &str) -> bool {
        self.with_engine(|e| e.enter(id)).unwrap_or(false)
    }

    pub fn pointer_leave(&self, id: &str) -> bool {
        self.with_engine(|e| e.leave(id)).unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn hovered_label(&self) -> Option<String> {
        self.with_engine(|e| e.hovered_label().map(str::to_string))
            .flatten()
    }

    #[wasm_bindgen(getter)]
    pub fn galaxy(&self) -> bool {
        self.with_engine(|e| e.strategy() == LayoutStrategy::Sphere)
            .unwrap_or(false)
    }

    /// Entity ids in instance-buffer order.
    pub fn entity_ids(&self) -> js_sys::Array {
        let ids = js_sys::Array::new();
        self.with_engine(|e| {
            for entity in e.catalog().entities() {
                ids.push(&JsValue::from_str(&entity.id));
            }
        });
        ids
    }

    /// Connection lines of the latest frame as `[sx, sy, sz, ex, ey, ez, ...]`.
    pub fn edge_buffer(&self) -> js_sys::Float32Array {
        let flat = self
            .with_engine(|e| {
                let snap = e.snapshot();
                let mut flat = Vec::with_capacity(snap.edges.len() * EDGE_STRIDE);
                for edge in &snap.edges {
                    flat.extend_from_slice(&edge.start.to_array());
                    flat.extend_from_slice(&edge.end.to_array());
                }
                flat
            })
            .unwrap_or_default();
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Connection lines as `[[idA, idB], ...]`, in `edge_buffer` order.
    pub fn edge_ids(&self) -> js_sys::Array {
        let pairs = js_sys::Array::new();
        self.with_engine(|e| {
            for (a, b) in e.edge_ids() {
                pairs.push(&js_sys::Array::of2(&JsValue::from_str(a), &JsValue::from_str(b)));
            }
        });
        pairs
    }

    /// Legend rows `{ id, color: [r, g, b], members }`, one per layer tag.
    pub fn legend(&self) -> Result<js_sys::Array, JsValue> {
        let rows = js_sys::Array::new();
        let legend = self.with_engine(|e| e.legend()).unwrap_or_default();
        for row in legend {
            let obj = js_sys::Object::new();
            let color = js_sys::Float32Array::from(row.color_rgb.as_slice());
            js_sys::Reflect::set(&obj, &"id".into(), &JsValue::from_str(&row.id))?;
            js_sys::Reflect::set(&obj, &"color".into(), &color)?;
            js_sys::Reflect::set(&obj, &"members".into(), &JsValue::from(row.members as u32))?;
            rows.push(&obj);
        }
        Ok(rows)
    }

    /// `[anchor_rotation_y, particle_rotation_y]` of the latest frame.
    pub fn rotations(&self) -> Vec<f32> {
        self.with_engine(|e| {
            let snap = e.snapshot();
            vec![snap.anchor_rotation.y, snap.particles.rotation_y()]
        })
        .unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn instance_stride(&self) -> usize {
        INSTANCE_STRIDE
    }

    /// Detach the frame loop and every listener, then release the engine.
    pub fn dispose(mut self) {
        self.frame_loop.take();
        self.leave_listener.take();
        let engine = self.state.borrow_mut().engine.take();
        if let Some(engine) = engine {
            engine.teardown();
        }
    }
}

impl OrbitView {
    fn with_engine<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        let mut state = self.state.borrow_mut();
        state.engine.as_mut().map(f)
    }
}

/// Pointer leaving the whole view clears any hover left behind by a missed
/// per-entity leave.
fn wire_view_leave(
    state: &Rc<RefCell<ViewState>>,
    container_id: Option<&str>,
) -> Option<events::ListenerGuard> {
    let document = dom::window_document()?;
    let container: web::EventTarget = document
        .get_element_by_id(container_id.unwrap_or(DEFAULT_CONTAINER_ID))?
        .into();
    let state = state.clone();
    let guard = events::ListenerGuard::attach(&container, "pointerleave", move |_ev| {
        if let Some(engine) = state.borrow_mut().engine.as_mut() {
            engine.reset_hover();
        }
    });
    match guard {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("pointer wiring error: {:?}", e);
            None
        }
    }
}
