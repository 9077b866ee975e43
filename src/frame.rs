use crate::canvas::CanvasSurface;
use ambient_core::{Animation, FrameControl};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Millisecond timestamps relative to a fixed start, shared by a frame loop
/// and the input handlers that schedule work against it.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

/// Call `step` once per repaint via `requestAnimationFrame` until it returns `Stop`.
pub fn request_frames(mut step: impl FnMut() -> FrameControl + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if step() == FrameControl::Stop {
            // Release our handle so the closure is freed after this call returns.
            _ = tick_clone.borrow_mut().take();
            return;
        }
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `animation` into `surface` every frame; `on_stop` runs once when it finishes.
pub fn start_loop<A>(
    animation: Rc<RefCell<A>>,
    mut surface: CanvasSurface,
    clock: FrameClock,
    on_stop: impl FnOnce() + 'static,
) where
    A: Animation + 'static,
{
    let mut on_stop = Some(on_stop);
    request_frames(move || {
        let control = animation.borrow_mut().frame(clock.now_ms(), &mut surface);
        if control == FrameControl::Stop {
            if let Some(f) = on_stop.take() {
                f();
            }
        }
        control
    });
}
