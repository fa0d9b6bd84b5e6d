use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop with an explicit start/stop lifecycle.
///
/// The tick receives the frame timestamp and returns whether it wants another
/// frame. Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

fn request(callback: &FrameCallback, pending: &Cell<Option<i32>>) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    match w.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => {
            pending.set(Some(id));
            true
        }
        Err(e) => {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            false
        }
    }
}

impl FrameLoop {
    pub fn new<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        // Weak self-reference: the closure must not keep its own cell alive
        let callback_weak: Weak<RefCell<Option<FrameCallback>>> = Rc::downgrade(&callback);
        let pending_tick = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            pending_tick.set(None);
            if !tick(ts) {
                return;
            }
            if let Some(cell) = callback_weak.upgrade() {
                if let Some(cb) = cell.borrow().as_ref() {
                    request(cb, &pending_tick);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        Self { pending, callback }
    }

    /// Schedule the next frame unless one is already pending. Returns `false`
    /// if the loop was running or the host cannot schedule frames.
    pub fn start(&self) -> bool {
        if self.pending.get().is_some() {
            return false;
        }
        match self.callback.borrow().as_ref() {
            Some(cb) => request(cb, &self.pending),
            None => false,
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.callback.borrow_mut().take();
    }
}
