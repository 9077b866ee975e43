use crate::canvas::CanvasSurface;
use crate::constants::*;
use crate::dom;
use crate::frame::{self, FrameClock};
use ambient_core::TransitionOverlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Full-viewport dissolve canvas, attached to `<body>` only while a
/// transition is in flight.
#[derive(Clone)]
pub struct PageTransition {
    canvas: web::HtmlCanvasElement,
    overlay: Rc<RefCell<TransitionOverlay>>,
}

impl PageTransition {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas
            .set_attribute("style", TRANSITION_CANVAS_CSS)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            overlay: Rc::new(RefCell::new(TransitionOverlay::default())),
        })
    }

    /// Dissolve the page, run `on_midpoint` under full cover, then fade out.
    /// Ignored while a previous transition is still running.
    pub fn transition(&self, on_midpoint: impl FnOnce() + 'static) {
        let Some(window) = web::window() else {
            return;
        };
        let Some(body) = window.document().and_then(|d| d.body()) else {
            return;
        };
        let surface = match CanvasSurface::new(self.canvas.clone()) {
            Ok(s) => s,
            Err(e) => {
                log::error!("[transition] {:?}", e);
                return;
            }
        };
        let viewport = dom::viewport_size(&window);
        // The midpoint callback runs inside the frame loop's borrow, so a
        // nested call lands here and must not panic.
        if !TransitionOverlay::try_start(&self.overlay, viewport, on_midpoint) {
            return;
        }
        _ = body.append_child(&self.canvas);
        self.canvas.set_width(viewport.x as u32);
        self.canvas.set_height(viewport.y as u32);

        let canvas = self.canvas.clone();
        frame::start_loop(self.overlay.clone(), surface, FrameClock::start(), move || {
            canvas.remove();
        });
    }
}

/// Scroll the element named by an in-page `href` (`#id`) into view.
pub fn scroll_to_anchor(href: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(Some(target)) = document.query_selector(href) else {
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}
