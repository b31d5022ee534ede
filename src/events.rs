use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached DOM listener. Dropping it removes the listener and frees the
/// closure, so a torn-down view leaves nothing behind on the page.
pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl ListenerGuard {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        log::debug!("[events] detached {} listener", self.kind);
    }
}
