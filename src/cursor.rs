use crate::constants::*;
use crate::{dom, frame, input};
use ambient_core::{CursorGlow, FrameControl};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Append the glow element and keep it trailing the pointer for the page lifetime.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = el.class_list().add_1(CURSOR_CLASS);
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let glow = Rc::new(RefCell::new(CursorGlow::default()));
    {
        let glow = glow.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            let p = input::pointer_client_px(&ev);
            glow.borrow_mut().on_pointer_move(p.x, p.y);
        });
    }
    for target in dom::query_all(document, CURSOR_INTERACTIVE_SELECTOR) {
        let enter = glow.clone();
        dom::listen(&target, "mouseenter", move |_: web::MouseEvent| {
            enter.borrow_mut().set_hovering(true);
        });
        let leave = glow.clone();
        dom::listen(&target, "mouseleave", move |_: web::MouseEvent| {
            leave.borrow_mut().set_hovering(false);
        });
    }

    frame::request_frames(move || {
        let (pos, scale) = {
            let mut g = glow.borrow_mut();
            (g.tick(), g.scale())
        };
        let style = el.style();
        _ = style.set_property("left", &format!("{}px", pos.x));
        _ = style.set_property("top", &format!("{}px", pos.y));
        _ = style.set_property("transform", &format!("scale({})", scale));
        FrameControl::Continue
    });
    Ok(())
}
