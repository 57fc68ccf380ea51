#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod eyes;
mod form;
mod frame;
mod input;
mod nav;
mod starfall;

/// Controllers for the two page-lifetime animation loops, kept so
/// `shutdown` can cancel them.
struct App {
    eyes: Option<frame::RenderLoop>,
    starfall: Option<frame::RenderLoop>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loops. Event wiring stays in place; this only
/// unbinds the per-frame work from the page.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().take() {
            if let Some(l) = &app.eyes {
                l.stop();
            }
            if let Some(l) = &app.starfall {
                l.stop();
            }
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::Navigation::wire(&window, &document);

    let pointer = Rc::new(RefCell::new(input::PointerState::centered(&window)));
    input::wire_pointermove(&window, pointer.clone());

    let eyes = eyes::EyeEffect::spawn(&document, pointer);
    let starfall = starfall::Starfall::spawn(&document);

    form::wire_contact_form(&window, &document);
    events::wire_menu(&document);

    APP.with(|app| *app.borrow_mut() = Some(App { eyes, starfall }));
    log::info!("portfolio initialized");
    Ok(())
}
