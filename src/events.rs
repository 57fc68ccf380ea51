use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile menu wiring: the hamburger button toggles the sidebar and
/// Escape closes it. Skipped entirely when there is no sidebar.
pub fn wire_menu(document: &web::Document) {
    let Ok(Some(sidebar)) = document.query_selector(".sidebar") else {
        return;
    };

    if let Ok(Some(toggle)) = document.query_selector(".mobile-menu-toggle") {
        let sidebar_toggle = sidebar.clone();
        let closure = Closure::wrap(Box::new(move || {
            _ = sidebar_toggle.class_list().toggle("active");
        }) as Box<dyn FnMut()>);
        _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            _ = sidebar.class_list().remove_1("active");
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
