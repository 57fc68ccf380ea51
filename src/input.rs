use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Latest pointer position in viewport pixel space. Written by the
/// pointermove handler, read by the eye frame step; the cooperative
/// event loop makes the interleaving inherently sequential.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Start at the viewport center so the chain has a sane origin before
    /// the first pointer event arrives.
    pub fn centered(window: &web::Window) -> Self {
        let (w, h) = dom::window_inner_size(window);
        Self {
            x: (w / 2.0) as f32,
            y: (h / 2.0) as f32,
        }
    }
}

pub fn wire_pointermove(window: &web::Window, state: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut s = state.borrow_mut();
        s.x = ev.client_x() as f32;
        s.y = ev.client_y() as f32;
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
