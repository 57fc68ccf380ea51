use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{STAR_SHADOW_BLUR, STAR_TRAIL_FADE};
use crate::core::constants::STAR_POOL_SIZE;
use crate::core::{StarField, StarTint};
use crate::dom;
use crate::frame::RenderLoop;

/// Falling-star canvas animation: a fixed pool of gradient streaks redrawn
/// every frame onto a window-sized 2d canvas.
pub struct Starfall {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: StarField,
}

impl Starfall {
    /// Resolve the canvas, size it to the window and start the fall loop.
    /// Returns `None` (with a warning) when the canvas or its 2d context
    /// is unavailable.
    pub fn spawn(document: &web::Document) -> Option<RenderLoop> {
        let Some(canvas) = document
            .get_element_by_id("starfall-canvas")
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            log::warn!("#starfall-canvas missing, starfall disabled");
            return None;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        else {
            log::warn!("2d context unavailable, starfall disabled");
            return None;
        };

        dom::sync_canvas_to_window(&canvas);
        wire_canvas_resize(&canvas);

        let field = StarField::new(STAR_POOL_SIZE, canvas.width() as f32, rand::random());
        let mut starfall = Starfall { canvas, ctx, field };
        Some(RenderLoop::start(move || starfall.frame()))
    }

    fn frame(&mut self) {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        self.field.update(w, h);
        self.draw(w, h);
    }

    fn draw(&self, w: f32, h: f32) {
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        for star in self.field.stars() {
            self.ctx.save();

            let (color, glow) = tint_colors(star.tint);
            let gradient = self.ctx.create_linear_gradient(
                star.x as f64,
                star.y as f64,
                star.x as f64,
                (star.y + star.height) as f64,
            );
            _ = gradient.add_color_stop(0.0, color);
            _ = gradient.add_color_stop(1.0, STAR_TRAIL_FADE);

            self.ctx.set_shadow_blur(STAR_SHADOW_BLUR);
            self.ctx.set_shadow_color(glow);
            self.ctx.set_global_alpha(star.opacity as f64);
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill_rect(
                star.x as f64,
                star.y as f64,
                star.width as f64,
                star.height as f64,
            );

            self.ctx.restore();
        }
    }
}

fn tint_colors(tint: StarTint) -> (&'static str, &'static str) {
    match tint {
        StarTint::White => ("#ffffff", "#ff2222"),
        StarTint::Dark => ("#b30000", "#ff2222"),
        StarTint::Crimson => ("#ff2222", "#ff2222"),
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
