#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod hero;
mod input;
mod loading;
mod transition;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    spawn_local(loading::dismiss_after_load());
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The hero canvas is optional; bursts are only wired when it exists.
    match hero::init(&document) {
        Ok(Some(hero)) => events::wire_cta_bursts(&document, &hero),
        Ok(None) => {}
        Err(e) => log::error!("hero disabled: {:?}", e),
    }

    let page = transition::PageTransition::new(&document)?;
    events::wire_cta_transitions(&document, &page);

    if let Err(e) = cursor::init(&document) {
        log::warn!("cursor disabled: {:?}", e);
    }
    Ok(())
}
