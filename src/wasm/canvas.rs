use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::surface::Surface;

use super::page::SetupError;

/// [`Surface`] over a canvas' 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SetupError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SetupError::NoContext2d)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.set_font(font);
        self.ctx.fill_text(text, x, y).ok();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Color) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_string());
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
        self.ctx.close_path();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), line_width: f64, color: &Color) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }
}
