//! The mounted component and its requestAnimationFrame loop.
//!
//! One callback is in flight at a time; all per-frame work is synchronous
//! inside it. While the document is hidden the loop keeps rescheduling but
//! skips update/render, so resume is instant and no large time delta ever
//! reaches the physics. Teardown cancels the pending frame, flips the
//! lifecycle (making any already-dispatched frame a no-op), detaches the
//! listeners, and releases the loop closure; calling it twice is safe.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use waves_core::{GridParams, Lifecycle, WaveGrid};
use web_sys as web;

use crate::dom;
use crate::events::{self, ListenerGuard};

pub struct WavesApp {
    container: web::HtmlElement,
    svg: web::Element,
    grid: RefCell<WaveGrid>,
    /// One `<path>` element per grid line, rebuilt alongside the grid.
    path_els: RefCell<Vec<web::Element>>,
    listeners: RefCell<Vec<ListenerGuard>>,
    lifecycle: RefCell<Lifecycle>,
    /// The rAF callback owns itself through this slot while the loop runs;
    /// teardown takes it so unmount does not leak the instance.
    frame_closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl WavesApp {
    /// Build the grid against the container's current geometry, wire input,
    /// and start the frame loop. Returns `None` (component stays inert) if
    /// the document or rendering surface cannot be reached.
    pub fn mount(container: web::HtmlElement, seed: f64) -> Option<Rc<Self>> {
        let document = dom::window_document()?;
        let svg = dom::find_or_create_svg(&document, &container)?;
        let app = Rc::new(Self {
            container,
            svg,
            grid: RefCell::new(WaveGrid::new(seed, GridParams::default())),
            path_els: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            lifecycle: RefCell::new(Lifecycle::new()),
            frame_closure: RefCell::new(None),
        });
        app.handle_resize();
        *app.listeners.borrow_mut() = events::wire_input(&app);
        start_loop(app.clone());
        Some(app)
    }

    pub fn pointer_moved(&self, page_x: f64, page_y: f64) {
        if !self.lifecycle.borrow().is_alive() {
            return;
        }
        self.grid.borrow_mut().set_pointer(page_x, page_y);
    }

    /// Rebuild the grid and its path elements for the container's current
    /// size. Runs synchronously inside the resize handler.
    pub fn handle_resize(&self) {
        if !self.lifecycle.borrow().is_alive() {
            return;
        }
        let bounds = dom::container_bounds(&self.container);
        let mut grid = self.grid.borrow_mut();
        grid.rebuild(bounds);
        dom::sync_viewbox(&self.svg, bounds);

        let mut els = self.path_els.borrow_mut();
        for el in els.drain(..) {
            el.remove();
        }
        if let Some(document) = dom::window_document() {
            for _ in 0..grid.line_count() {
                if let Some(el) = dom::create_line_path(&document) {
                    let _ = self.svg.append_child(&el);
                    els.push(el);
                }
            }
        }
    }

    /// One animation frame: advance the simulation, re-serialize the lines,
    /// and push the new path data into the DOM.
    fn frame(&self, time_ms: f64) {
        if dom::page_hidden() {
            return;
        }
        let mut grid = self.grid.borrow_mut();
        grid.tick(time_ms);
        grid.render();

        let els = self.path_els.borrow();
        for (el, d) in els.iter().zip(grid.paths()) {
            let _ = el.set_attribute("d", d);
        }

        // Cosmetic pass-through of the smoothed cursor position.
        let c = grid.smooth_cursor();
        let style = self.container.style();
        let _ = style.set_property("--cursor-x", &format!("{:.1}px", c.x));
        let _ = style.set_property("--cursor-y", &format!("{:.1}px", c.y));
    }

    /// Idempotent: the first call cancels the pending frame, detaches all
    /// listeners, and drops the loop closure; later calls find the
    /// lifecycle already shut down and return immediately.
    pub fn teardown(&self) {
        let pending = {
            let mut lc = self.lifecycle.borrow_mut();
            if !lc.shut_down() {
                return;
            }
            lc.take_pending_frame()
        };
        if let Some(id) = pending {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.listeners.borrow_mut().clear();
        // Dropping the closure breaks its self-reference, so repeated
        // mount/unmount cycles do not accumulate leaked instances.
        self.frame_closure.borrow_mut().take();
        log::info!("[waves] unmounted");
    }
}

/// Self-rescheduling rAF loop. The callback lives in the app's closure slot
/// and checks the lifecycle before doing anything, so a frame dispatched
/// just before teardown wakes nothing.
fn start_loop(app: Rc<WavesApp>) {
    let app_tick = app.clone();
    let closure = Closure::wrap(Box::new(move |time_ms: f64| {
        if !app_tick.lifecycle.borrow().is_alive() {
            return;
        }
        app_tick.frame(time_ms);
        if let Some(w) = web::window() {
            let slot = app_tick.frame_closure.borrow();
            if let Some(cb) = slot.as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    app_tick.lifecycle.borrow_mut().frame_scheduled(id);
                }
            }
        }
    }) as Box<dyn FnMut(f64)>);
    *app.frame_closure.borrow_mut() = Some(closure);
    if let Some(w) = web::window() {
        let slot = app.frame_closure.borrow();
        if let Some(cb) = slot.as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                app.lifecycle.borrow_mut().frame_scheduled(id);
            }
        }
    }
}
