use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `event` on `target`, downcasting the event to `E`.
/// Events of another type are dropped. The listener lives for the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Match the canvas backing store to its laid-out CSS size and return it.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let w_px = canvas.offset_width().max(0) as u32;
    let h_px = canvas.offset_height().max(0) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Vec2::new(w_px as f32, h_px as f32)
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(read(window.inner_width()), read(window.inner_height()))
}
