//! Canvas 2d implementation of the core drawing surface

use std::f64::consts::TAU;

use game_core::{Color, Surface, TextStyle};
use glam::Vec2;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Distance from the top of the page, for turning mouse coordinates
    /// into canvas ones
    pub fn offset_top(&self) -> f32 {
        self.canvas.offset_top() as f32
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear(&mut self) {
        // Re-assigning the width wipes pixels and resets context state
        self.canvas.set_width(self.canvas.width());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.set_fill(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.set_fill(color);
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            warn!("arc failed: {:?}", err);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.set_fill(style.color);
        self.ctx.set_font(&style.font());
        self.ctx.set_text_align(style.align.as_css());
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            warn!("fill_text failed: {:?}", err);
        }
    }
}
