//! HTML canvas 2D backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::sim::Bounds;

/// Canvas element plus its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas; `None` if it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Match the canvas backing store to the given size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        log::info!("Canvas resized to {}x{}", width, height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fade(&mut self, color: &str) {
        let size = self.size();
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn draw_disc(&mut self, center: Vec2, radius: f32, fill: &str, stroke: Option<&str>) {
        self.ctx.set_fill_style_str(fill);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            log::debug!("Canvas rejected arc with radius {}", radius);
            return;
        }
        self.ctx.fill();
        if let Some(stroke) = stroke {
            self.ctx.set_stroke_style_str(stroke);
            self.ctx.stroke();
        }
    }

    fn draw_rect(&mut self, pos: Vec2, width: f32, height: f32, fill: &str) {
        self.ctx.set_fill_style_str(fill);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, width as f64, height as f64);
    }
}
