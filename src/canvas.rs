//! Canvas 2D backend and viewport sizing

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::BackdropError;
use crate::painter::Painter;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(BackdropError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::ContextUnavailable)?;
        Ok(Self { ctx })
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), BackdropError> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_vertical_gradient(
        &mut self,
        width: f64,
        height: f64,
        top: &str,
        bottom: &str,
    ) -> Result<(), BackdropError> {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
        gradient.add_color_stop(0.0, top)?;
        gradient.add_color_stop(1.0, bottom)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        color: &str,
    ) -> Result<(), BackdropError> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.ellipse(x, y, radius_x, radius_y, 0.0, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) -> Result<(), BackdropError> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        line_width: f64,
        color: &str,
    ) -> Result<(), BackdropError> {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
        Ok(())
    }
}

/// Current viewport size in CSS pixels (`innerWidth` x `innerHeight`).
pub fn viewport_size(window: &Window) -> Result<(u32, u32), BackdropError> {
    let read = |v: wasm_bindgen::JsValue| v.as_f64().unwrap_or(0.0).max(0.0) as u32;
    Ok((read(window.inner_width()?), read(window.inner_height()?)))
}

/// Matches the canvas backing store to the viewport, 1:1 with CSS pixels.
/// Assigning a size wipes the canvas; the next frame repaints it.
pub fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> Result<(u32, u32), BackdropError> {
    let (width, height) = viewport_size(window)?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok((width, height))
}
