use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be stopped and restarted.
///
/// The tick closure reschedules itself while `running` is set. Dropping the
/// loop cancels the pending frame and releases the closure.
pub struct FrameLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(false));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        let running_clone = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            if !running_clone.get() {
                return;
            }
            on_frame();
            if running_clone.get() {
                handle_clone.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));

        Self {
            tick,
            handle,
            running,
        }
    }

    pub fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        self.handle.set(request_frame(&self.tick));
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
