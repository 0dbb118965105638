#![deny(unsafe_code)]
//! Browser bindings: run a lesson on a `<canvas>` through WebGL 1.
//!
//! The page owns the slider widgets. It builds them from [`LessonApp::sliders`]
//! and reports changes through [`LessonApp::set_slider`], which redraws.
#![cfg(target_arch = "wasm32")]

use lessons2d_core::render::{GpuContext, LessonRenderer};
use lessons2d_core::{CanvasSize, Lesson, LessonError};
use lessons2d_lessons::LessonKind;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| js_err("no document"))?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| js_err(format!("no element with id '{canvas_id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_err(format!("'{canvas_id}' is not a canvas")))
}

/// One lesson bound to one canvas.
#[wasm_bindgen]
pub struct LessonApp {
    canvas: HtmlCanvasElement,
    ctx: GpuContext,
    renderer: LessonRenderer,
    lesson: LessonKind,
    size: CanvasSize,
}

#[wasm_bindgen]
impl LessonApp {
    /// Binds `lesson` to the canvas with id `canvas_id`, sizes it and draws.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, lesson: &str, seed: u64) -> Result<LessonApp, JsValue> {
        let canvas = find_canvas(canvas_id)?;
        let webgl = canvas
            .get_context("webgl")?
            .ok_or_else(|| js_err("WebGL is not available"))?
            .dyn_into::<WebGlRenderingContext>()
            .map_err(|_| js_err("unexpected context type"))?;
        let ctx = GpuContext::new(glow::Context::from_webgl1_context(webgl));

        let lesson = LessonKind::from_name(lesson, seed, &serde_json::json!({})).map_err(js_err)?;
        let renderer = LessonRenderer::for_lesson(ctx.gl(), &lesson).map_err(js_err)?;
        let size = CanvasSize::new(canvas.width().max(1), canvas.height().max(1)).map_err(js_err)?;

        let mut app = LessonApp {
            canvas,
            ctx,
            renderer,
            lesson,
            size,
        };
        app.resize()?;
        Ok(app)
    }

    /// Names of all lessons, as a JSON array.
    pub fn lessons() -> String {
        serde_json::to_string(LessonKind::list_lessons()).unwrap_or_else(|_| "[]".into())
    }

    /// Slider descriptions for the current canvas, as a JSON array.
    pub fn sliders(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.lesson.sliders(self.size)).map_err(js_err)
    }

    /// Applies a slider change and redraws. Out-of-range values are
    /// rejected and leave the picture unchanged.
    pub fn set_slider(&mut self, id: &str, value: f32) -> Result<(), JsValue> {
        self.lesson
            .set_slider(self.size, id, value)
            .map_err(js_err)?;
        self.draw()
    }

    /// Matches the drawing buffer to the canvas's CSS size, then redraws.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let width = self.canvas.client_width().max(1) as u32;
        let height = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        self.size = self.checked_size(width, height).map_err(js_err)?;
        log::debug!("canvas resized to {width}x{height}");
        self.draw()
    }

    /// Plans and draws one frame.
    pub fn draw(&mut self) -> Result<(), JsValue> {
        let frame = self.lesson.frame(self.size);
        self.renderer
            .draw(self.ctx.gl(), self.size, &frame)
            .map_err(js_err)
    }
}

impl LessonApp {
    fn checked_size(&self, width: u32, height: u32) -> Result<CanvasSize, LessonError> {
        let size = CanvasSize::new(width, height)?;
        if !self.ctx.fits(size) {
            log::warn!(
                "canvas {width}x{height} exceeds max viewport {:?}",
                self.ctx.max_viewport()
            );
        }
        Ok(size)
    }
}

impl Drop for LessonApp {
    fn drop(&mut self) {
        self.renderer.destroy(self.ctx.gl());
    }
}
