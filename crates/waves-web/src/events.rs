//! Pointer and resize wiring. Handlers only mutate shared state; the frame
//! loop picks the new state up on its next pass, so input rate stays
//! decoupled from render rate.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::WavesApp;

/// An attached DOM listener that detaches itself when dropped, so teardown
/// is just dropping the guards.
pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Like `attach`, but registered with `passive: false` so the handler
    /// may call `prevent_default` (required for touchmove).
    pub fn attach_active(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire mouse, touch, and resize listeners on the window for `app`.
pub fn wire_input(app: &Rc<WavesApp>) -> Vec<ListenerGuard> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let target: &web::EventTarget = window.as_ref();
    let mut guards = Vec::new();

    let a = app.clone();
    guards.extend(ListenerGuard::attach(target, "mousemove", move |ev| {
        if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
            a.pointer_moved(m.page_x() as f64, m.page_y() as f64);
        }
    }));

    let a = app.clone();
    guards.extend(ListenerGuard::attach_active(target, "touchmove", move |ev| {
        if let Some(t) = ev.dyn_ref::<web::TouchEvent>() {
            // The touch list can be empty on some devices; bail quietly.
            if let Some(touch) = t.touches().get(0) {
                ev.prevent_default();
                let (sx, sy) = dom::scroll_offset();
                a.pointer_moved(touch.client_x() as f64 + sx, touch.client_y() as f64 + sy);
            }
        }
    }));

    let a = app.clone();
    guards.extend(ListenerGuard::attach(target, "resize", move |_| {
        a.handle_resize();
    }));

    guards
}
