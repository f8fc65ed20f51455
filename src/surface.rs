// Drawing surface the field paints into. The browser implementation wraps a
// 2d canvas context; tests record the operations instead.

use crate::color::Color;
use crate::error::FieldError;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    fn set_size(&mut self, width: u32, height: u32);
    // Composite `color` over the whole surface
    fn fade(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    // Last style handed to the context, so unchanged colors are not re-sent
    fill_style: Option<Color>,
    stroke_style: Option<Color>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, FieldError> {
        let context = canvas
            .get_context("2d")
            .map_err(FieldError::from_js)?
            .ok_or(FieldError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::NoContext)?;
        Ok(CanvasSurface {
            canvas,
            context,
            fill_style: None,
            stroke_style: None,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    #[allow(deprecated)]
    fn use_fill(&mut self, color: Color) {
        if self.fill_style != Some(color) {
            self.context
                .set_fill_style(&JsValue::from_str(&color.to_css()));
            self.fill_style = Some(color);
        }
    }

    #[allow(deprecated)]
    fn use_stroke(&mut self, color: Color) {
        if self.stroke_style != Some(color) {
            self.context
                .set_stroke_style(&JsValue::from_str(&color.to_css()));
            self.stroke_style = Some(color);
        }
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        // Resizing a canvas resets its context state
        self.fill_style = None;
        self.stroke_style = None;
    }

    fn fade(&mut self, color: Color) {
        self.use_fill(color);
        self.context.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.use_fill(color);
        self.context.begin_path();
        // Only fails for a negative radius
        if self.context.arc(center[0], center[1], radius, 0.0, 2.0 * PI).is_ok() {
            self.context.fill();
        }
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color) {
        self.use_stroke(color);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
