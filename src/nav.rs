use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::NAV_SCROLL_DEBOUNCE_MS;
use crate::core::constants::NAV_LOOKAHEAD_PX;
use crate::core::nav::active_section;
use crate::dom;

/// Scroll-driven navigation highlighting. Sections and links are resolved
/// once at wiring; the active link tracks the last section whose top has
/// scrolled past the lookahead line.
pub struct Navigation {
    window: web::Window,
    sections: Vec<web::HtmlElement>,
    links: Vec<web::HtmlElement>,
}

impl Navigation {
    pub fn wire(window: &web::Window, document: &web::Document) {
        let sections = dom::query_all(document, "section[id]");
        let links = dom::query_all(document, ".nav-links a");
        if sections.is_empty() || links.is_empty() {
            log::warn!("no sections or nav links, navigation highlighting disabled");
            return;
        }
        let nav = Rc::new(Navigation {
            window: window.clone(),
            sections,
            links,
        });
        nav.update_active_link();
        wire_scroll(&nav);
        wire_link_clicks(&nav, document);
    }

    fn update_active_link(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let tops: Vec<f64> = self.sections.iter().map(|s| s.offset_top() as f64).collect();
        let active_id =
            active_section(scroll_y, &tops, NAV_LOOKAHEAD_PX).map(|i| self.sections[i].id());

        for link in &self.links {
            let classes = link.class_list();
            _ = classes.remove_1("active");
            if let (Some(id), Some(href)) = (active_id.as_deref(), link.get_attribute("href")) {
                if href == format!("#{id}") {
                    _ = classes.add_1("active");
                }
            }
        }
    }
}

fn wire_scroll(nav: &Rc<Navigation>) {
    let window = nav.window.clone();
    let debounce = dom::Debounce::new(window.clone(), NAV_SCROLL_DEBOUNCE_MS);
    let nav_scroll = nav.clone();
    let closure = Closure::wrap(Box::new(move || {
        let nav = nav_scroll.clone();
        debounce.call(move || nav.update_active_link());
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Nav links jump via smooth scrolling instead of the default anchor jump.
fn wire_link_clicks(nav: &Rc<Navigation>, document: &web::Document) {
    for link in &nav.links {
        let document = document.clone();
        let link_for_href = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = link_for_href.get_attribute("href") else {
                return;
            };
            let Some(id) = href.strip_prefix('#') else {
                return;
            };
            if let Some(target) = document.get_element_by_id(id) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
