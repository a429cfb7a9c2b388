use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a pending `requestAnimationFrame` callback or frame loop.
///
/// Clones share the same slot, so any of them can cancel or check the
/// scheduled frame. At most one callback is pending per task.
#[derive(Clone, Default)]
pub struct FrameTask {
    handle: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameTask {
    pub fn is_pending(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Cancel the pending frame and release a loop closure, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if let Ok(mut tick) = self.tick.try_borrow_mut() {
            tick.take();
        }
    }

    /// Run `f` on the next frame unless a callback is already pending.
    pub fn request(&self, f: impl FnOnce() + 'static) {
        if self.is_pending() {
            return;
        }
        let handle = self.handle.clone();
        let cb = Closure::once_into_js(move || {
            handle.set(None);
            f();
        });
        if let Some(w) = web::window() {
            self.handle
                .set(w.request_animation_frame(cb.unchecked_ref()).ok());
        }
    }

    /// Like [`request`](Self::request) but replaces any pending callback.
    pub fn restart(&self, f: impl FnOnce() + 'static) {
        self.cancel();
        self.request(f);
    }

    /// Self-chaining frame loop, replacing whatever this task had scheduled.
    /// `step` receives the seconds since the previous frame and returns
    /// `false` to stop; the loop closure is released when it does.
    pub fn run_loop(&self, mut step: impl FnMut(f32) -> bool + 'static) {
        self.cancel();
        let tick_clone = self.tick.clone();
        let handle = self.handle.clone();
        let mut last_instant = Instant::now();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle.set(None);
            let now = Instant::now();
            let dt_sec = (now - last_instant).as_secs_f32();
            last_instant = now;
            if !step(dt_sec) {
                log::debug!("[frame] loop stopped");
                // breaks the closure <-> cell cycle; freed once this call returns
                let _ = tick_clone.borrow_mut().take();
                return;
            }
            if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut()>));
        if let (Some(w), Some(cb)) = (web::window(), self.tick.borrow().as_ref()) {
            self.handle
                .set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }
}
