use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{FORM_CONFIRM_RESTORE_MS, FORM_ERROR_DISMISS_MS};
use crate::core::form::validate;
use crate::core::ContactFields;
use crate::dom;

const ERROR_STYLE: &str = "color: var(--primary-color); background: rgba(255, 34, 34, 0.1); padding: 0.5rem; border-radius: 4px; margin-bottom: 1rem; border: 1px solid var(--primary-color)";

/// Intercept submits on #contact_form, validate the fields and either
/// flash the confirmation view or surface an inline error. Both target
/// elements are resolved once; wiring is skipped when either is missing.
pub fn wire_contact_form(window: &web::Window, document: &web::Document) {
    let Some(form) = document
        .get_element_by_id("contact_form")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("#contact_form missing, contact form disabled");
        return;
    };
    let Some(confirmation) = dom::html_element_by_id(document, "confirmation") else {
        log::warn!("#confirmation missing, contact form disabled");
        return;
    };

    let window = window.clone();
    let document = document.clone();
    let form_for_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let fields = read_fields(&form_for_submit);
        match validate(&fields) {
            Ok(()) => show_confirmation(&window, &form_for_submit, &confirmation),
            Err(e) => show_error(&window, &document, &form_for_submit, &e.to_string()),
        }
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn read_fields(form: &web::HtmlFormElement) -> ContactFields {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return ContactFields::default();
    };
    ContactFields {
        name: data.get("name").as_string().unwrap_or_default(),
        email: data.get("email").as_string().unwrap_or_default(),
        message: data.get("message").as_string().unwrap_or_default(),
    }
}

/// Swap the form for the confirmation element, then restore and clear the
/// form after the fixed window.
fn show_confirmation(
    window: &web::Window,
    form: &web::HtmlFormElement,
    confirmation: &web::HtmlElement,
) {
    dom::set_style(form, "display", "none");
    dom::set_style(confirmation, "display", "block");

    let form = form.clone();
    let confirmation = confirmation.clone();
    _ = dom::set_timeout(window, FORM_CONFIRM_RESTORE_MS, move || {
        form.reset();
        dom::set_style(&form, "display", "block");
        dom::set_style(&confirmation, "display", "none");
    });
}

/// Show a transient inline error above the form fields. The box is created
/// on first use; a re-submission before dismissal replaces the text.
fn show_error(
    window: &web::Window,
    document: &web::Document,
    form: &web::HtmlFormElement,
    message: &str,
) {
    let error = match document.get_element_by_id("form-error") {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_id("form-error");
            _ = el.set_attribute("style", ERROR_STYLE);
            _ = form.prepend_with_node_1(&el);
            el
        }
    };
    error.set_text_content(Some(message));

    let error_for_timeout = error.clone();
    _ = dom::set_timeout(window, FORM_ERROR_DISMISS_MS, move || {
        error_for_timeout.remove();
    });
}
