use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{EYE_CONTAINER_HALF_PX, EYE_SPREAD_SCALE};
use crate::core::{EyeState, FollowerChain};
use crate::dom;
use crate::frame::RenderLoop;
use crate::input::PointerState;

// Full three-tomoe iris shown when the chain has settled under the pointer.
const EYE_FULL: &str = r#"url('data:image/svg+xml;utf8,<svg width="80" height="80" xmlns="http://www.w3.org/2000/svg"><circle cx="40" cy="40" r="32" fill="%23ff2222" opacity="0.7"/><circle cx="40" cy="40" r="28" stroke="black" stroke-width="5" fill="none"/><circle cx="40" cy="40" r="8" fill="black"/><g><ellipse cx="40" cy="18" rx="5" ry="8" fill="black" transform="rotate(0 40 40)"/><ellipse cx="62" cy="52" rx="5" ry="8" fill="black" transform="rotate(120 40 40)"/><ellipse cx="18" cy="52" rx="5" ry="8" fill="black" transform="rotate(240 40 40)"/></g></svg>')"#;

// Single-tomoe variants, one fixed orientation per trailing eye.
const EYE_TOMOE: [&str; 3] = [
    r#"url('data:image/svg+xml;utf8,<svg width="80" height="80" xmlns="http://www.w3.org/2000/svg"><circle cx="40" cy="40" r="32" fill="%23ff2222" opacity="0.7"/><circle cx="40" cy="40" r="28" stroke="black" stroke-width="5" fill="none"/><circle cx="40" cy="40" r="8" fill="black"/><ellipse cx="40" cy="18" rx="5" ry="8" fill="black"/></svg>')"#,
    r#"url('data:image/svg+xml;utf8,<svg width="80" height="80" xmlns="http://www.w3.org/2000/svg"><circle cx="40" cy="40" r="32" fill="%23ff2222" opacity="0.7"/><circle cx="40" cy="40" r="28" stroke="black" stroke-width="5" fill="none"/><circle cx="40" cy="40" r="8" fill="black"/><ellipse cx="62" cy="52" rx="5" ry="8" fill="black"/></svg>')"#,
    r#"url('data:image/svg+xml;utf8,<svg width="80" height="80" xmlns="http://www.w3.org/2000/svg"><circle cx="40" cy="40" r="32" fill="%23ff2222" opacity="0.7"/><circle cx="40" cy="40" r="28" stroke="black" stroke-width="5" fill="none"/><circle cx="40" cy="40" r="8" fill="black"/><ellipse cx="18" cy="52" rx="5" ry="8" fill="black"/></svg>')"#,
];

/// Pointer-chasing eye chain. Element handles are resolved once at
/// construction; a missing sub-eye is skipped per frame, and the chain
/// always advances before rendering so the visuals resume seamlessly.
pub struct EyeEffect {
    container: web::HtmlElement,
    eyes: [Option<web::HtmlElement>; 3],
    chain: FollowerChain,
    pointer: Rc<RefCell<PointerState>>,
}

impl EyeEffect {
    /// Resolve the container and start the follow loop. Returns `None`
    /// (with a warning) when the container is not in the page.
    pub fn spawn(
        document: &web::Document,
        pointer: Rc<RefCell<PointerState>>,
    ) -> Option<RenderLoop> {
        let Some(container) = dom::html_element_by_id(document, "sharingan-eye-container") else {
            log::warn!("#sharingan-eye-container missing, eye effect disabled");
            return None;
        };
        let eyes = [1, 2, 3].map(|i| {
            container
                .query_selector(&format!(".sharingan-eye-{i}"))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        });

        let origin = {
            let p = pointer.borrow();
            Vec2::new(p.x, p.y)
        };
        let mut effect = EyeEffect {
            container,
            eyes,
            chain: FollowerChain::new(origin),
            pointer,
        };
        Some(RenderLoop::start(move || effect.frame()))
    }

    fn frame(&mut self) {
        let target = {
            let p = self.pointer.borrow();
            Vec2::new(p.x, p.y)
        };
        self.chain.step(target);

        let anchor = self.chain.anchor();
        dom::set_style(
            &self.container,
            "left",
            &format!("{}px", anchor.x - EYE_CONTAINER_HALF_PX),
        );
        dom::set_style(
            &self.container,
            "top",
            &format!("{}px", anchor.y - EYE_CONTAINER_HALF_PX),
        );

        match self.chain.state(target) {
            EyeState::Converged => {
                for eye in self.eyes.iter().flatten() {
                    set_eye(eye, Vec2::ZERO, 1.0, EYE_FULL);
                }
            }
            EyeState::Spread => {
                for (i, eye) in self.eyes.iter().enumerate() {
                    if let Some(eye) = eye {
                        set_eye(eye, self.chain.link(i) - anchor, EYE_SPREAD_SCALE, EYE_TOMOE[i]);
                    }
                }
            }
        }
    }
}

fn set_eye(eye: &web::HtmlElement, offset: Vec2, scale: f32, bg: &str) {
    dom::set_style(
        eye,
        "transform",
        &format!("translate({}px, {}px) scale({})", offset.x, offset.y, scale),
    );
    dom::set_style(eye, "background", bg);
}
