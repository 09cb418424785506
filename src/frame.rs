use crate::core::{FrameTask, Liveness, TickOutcome};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Clamp for frames delivered after the tab was hidden.
const MAX_FRAME_DT_SEC: f32 = 0.1;

/// Run `body` once per animation frame until `liveness` reports dead.
///
/// The first tick is scheduled for the next frame; nothing runs synchronously.
pub fn start_loop<L, F>(label: &'static str, liveness: L, body: F)
where
    L: Liveness + 'static,
    F: FnMut(f32) + 'static,
{
    let task = Rc::new(RefCell::new(FrameTask::new(liveness, body)));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut last = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(MAX_FRAME_DT_SEC);
        last = now;
        let outcome = task.borrow_mut().tick(dt);
        match outcome {
            TickOutcome::Continue => request_frame(&tick_clone),
            TickOutcome::Stop => {
                log::debug!(
                    "[{}] target detached after {} frames; loop stopped",
                    label,
                    task.borrow().ticks()
                );
                release_after_frame(tick_clone.clone());
            }
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

// The frame closure owns an Rc to its own slot; empty the slot once the
// current callback has returned so the closure can be freed.
fn release_after_frame(tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let cleanup = Closure::once_into_js(move || {
        drop(tick.borrow_mut().take());
    });
    _ = w.set_timeout_with_callback(cleanup.unchecked_ref());
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
