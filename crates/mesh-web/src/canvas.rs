use glam::Vec2;
use mesh_core::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;

/// Canvas-2D backing for the core's drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Find the background canvas and grab its 2d context. None when either
    /// the element or the context is unavailable.
    pub fn acquire(document: &web::Document, width: u32, height: u32) -> Option<Self> {
        let canvas: web::HtmlCanvasElement =
            document.get_element_by_id(CANVAS_ID)?.dyn_into().ok()?;
        let ctx: web::CanvasRenderingContext2d =
            canvas.get_context("2d").ok()??.dyn_into().ok()?;
        let surface = Self { canvas, ctx };
        surface.resize(width, height);
        Some(surface)
    }

    /// Match the canvas backing size to the viewport. Context state resets
    /// with the backing store, so the pens are set again here.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
        self.ctx.set_stroke_style_str(EDGE_COLOR);
        self.ctx.set_fill_style_str(POINT_COLOR);
        self.ctx.set_line_width(EDGE_WIDTH);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }
}
