use crate::constants::*;
use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Hide the loading screen a fixed delay after the window has loaded.
pub async fn dismiss_after_load() {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(Some(screen)) = document.query_selector(LOADING_SELECTOR) else {
        return;
    };
    if document.ready_state() != "complete" {
        _ = JsFuture::from(event_once(&window, "load")).await;
    }
    _ = JsFuture::from(sleep_ms(&window, LOADING_HIDE_DELAY_MS)).await;
    _ = screen.class_list().add_1(HIDDEN_CLASS);
    log::info!("[loading] hidden");
}

fn event_once(target: &web::EventTarget, event: &'static str) -> Promise {
    let target = target.clone();
    Promise::new(&mut |resolve, _reject| {
        let once = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = target.add_event_listener_with_callback(event, once.unchecked_ref());
    })
}

fn sleep_ms(window: &web::Window, ms: i32) -> Promise {
    let window = window.clone();
    Promise::new(&mut |resolve, _reject| {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    })
}

