use crate::canvas::CanvasSurface;
use crate::constants::*;
use crate::frame::{self, FrameClock};
use crate::{dom, input};
use ambient_core::{FieldConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Running hero effect; cloned into input handlers that need to reach it.
#[derive(Clone)]
pub struct Hero {
    pub field: Rc<RefCell<ParticleField>>,
    pub clock: FrameClock,
}

impl Hero {
    /// Queue a staggered ripple burst around the canvas centre.
    pub fn burst(&self) {
        self.field.borrow_mut().queue_burst(self.clock.now_ms());
    }
}

/// Start the blob field on the hero canvas. A page without one gets `Ok(None)`.
pub fn init(document: &web::Document) -> anyhow::Result<Option<Hero>> {
    let Some(el) = document
        .query_selector(HERO_CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
    else {
        log::info!("[hero] no {} on page", HERO_CANVAS_SELECTOR);
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = CanvasSurface::new(canvas.clone())?;

    let mut field = ParticleField::new(read_config(&canvas), read_rng(&canvas))?;
    let size = dom::sync_canvas_backing_size(&canvas);
    field.initialize(size.x, size.y);
    log::info!("[hero] {} blobs on {}x{}", field.blobs().len(), size.x, size.y);

    let hero = Hero {
        field: Rc::new(RefCell::new(field)),
        clock: FrameClock::start(),
    };
    wire_resize(&canvas, &hero.field);
    wire_pointer(&canvas, &hero.field);
    frame::start_loop(hero.field.clone(), surface, hero.clock, || {});
    Ok(Some(hero))
}

fn read_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let base = FieldConfig::default();
    match canvas.get_attribute(ATTR_BLOB_COUNT) {
        Some(raw) => base.clone().with_blob_count_attr(&raw).unwrap_or_else(|e| {
            log::warn!("[hero] ignoring {}: {}", ATTR_BLOB_COUNT, e);
            base
        }),
        None => base,
    }
}

fn read_rng(canvas: &web::HtmlCanvasElement) -> StdRng {
    canvas
        .get_attribute(ATTR_SEED)
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("[hero] ignoring {}={:?}", ATTR_SEED, raw);
                None
            }
        })
        .map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_entropy)
}

fn wire_resize(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let field = field.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let size = dom::sync_canvas_backing_size(&canvas);
        field.borrow_mut().resize(size.x, size.y);
    });
}

fn wire_pointer(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    let target = canvas.clone();
    let field = field.clone();
    dom::listen(canvas, "mousemove", move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_px(&ev, &target);
        field.borrow_mut().on_pointer_move(pos.x, pos.y);
    });
}
