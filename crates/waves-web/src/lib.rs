#![cfg(target_arch = "wasm32")]
//! Web front-end for the waves background. Mounts the grid simulation from
//! `waves-core` against a container element, renders each line into an SVG
//! `<path>`, and drives everything from a requestAnimationFrame loop.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;

use frame::WavesApp;

/// Element id the module auto-mounts against at start.
const CONTAINER_ID: &str = "waves";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("waves-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        // No mount point on this page: stay inert, never surface an error.
        log::warn!("[waves] missing #{CONTAINER_ID} container, staying inert");
        return Ok(());
    };
    let container: web::HtmlElement = container
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    match WavesApp::mount(container, js_sys::Math::random()) {
        Some(_) => log::info!("[waves] mounted on #{CONTAINER_ID}"),
        None => log::warn!("[waves] mount aborted"),
    }
    Ok(())
}

/// Handle returned by [`mount_waves`] so a host script can tear the
/// component down explicitly. Unmounting twice is harmless.
#[wasm_bindgen]
pub struct WavesHandle {
    app: Rc<WavesApp>,
}

#[wasm_bindgen]
impl WavesHandle {
    pub fn unmount(&self) {
        self.app.teardown();
    }
}

/// Mount against an arbitrary container id; `None` if the element is absent
/// or is not an HTML element.
#[wasm_bindgen(js_name = mountWaves)]
pub fn mount_waves(container_id: &str) -> Option<WavesHandle> {
    let container = dom::window_document()?.get_element_by_id(container_id)?;
    let container: web::HtmlElement = container.dyn_into().ok()?;
    WavesApp::mount(container, js_sys::Math::random()).map(|app| WavesHandle { app })
}
