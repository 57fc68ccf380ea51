use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, skipping nodes that are not HTML
/// elements.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn window_inner_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Star coordinates are window pixels, so the backing store tracks the
/// window inner size directly.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let (w, h) = window_inner_size(&window);
        canvas.set_width((w as u32).max(1));
        canvas.set_height((h as u32).max(1));
    }
}

/// One-shot timer; returns the handle, or `None` if scheduling failed.
pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .ok()
}

/// Collapses a burst of calls into a single invocation after a quiet
/// period: each call cancels the previously scheduled one.
pub struct Debounce {
    window: web::Window,
    wait_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
}

impl Debounce {
    pub fn new(window: web::Window, wait_ms: i32) -> Self {
        Self {
            window,
            wait_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        if let Some(handle) = self.pending.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let pending = self.pending.clone();
        let handle = set_timeout(&self.window, self.wait_ms, move || {
            pending.set(None);
            f();
        });
        self.pending.set(handle);
    }
}
