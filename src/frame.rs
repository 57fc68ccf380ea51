use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `requestAnimationFrame` loop owned by an explicit controller, so an
/// effect's lifetime can be bound to whoever holds the handle.
///
/// The tick closure keeps itself alive through an `Rc` cycle, so dropping
/// the handle leaves the loop running (page-lifetime behavior); only
/// `stop` cancels it.
pub struct RenderLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl RenderLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let raf_for_tick = raf_id.clone();
        let stopped_for_tick = stopped.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if stopped_for_tick.get() {
                return;
            }
            frame();
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    raf_for_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(w) = web::window() {
            if let Ok(id) =
                w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                raf_id.set(Some(id));
            }
        }
        Self { raf_id, stopped }
    }

    /// Cancel the pending frame and keep any already-queued tick from
    /// rescheduling itself.
    pub fn stop(&self) {
        self.stopped.set(true);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}
