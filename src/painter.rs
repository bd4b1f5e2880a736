//! Drawing primitives used by the scene

use crate::error::BackdropError;

/// 2D operations a frame needs. Implemented over the browser canvas in
/// [`crate::canvas::CanvasPainter`].
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), BackdropError>;

    /// Fills the whole surface with a top-to-bottom linear gradient.
    fn fill_vertical_gradient(
        &mut self,
        width: f64,
        height: f64,
        top: &str,
        bottom: &str,
    ) -> Result<(), BackdropError>;

    fn fill_ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        color: &str,
    ) -> Result<(), BackdropError>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) -> Result<(), BackdropError>;

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        line_width: f64,
        color: &str,
    ) -> Result<(), BackdropError>;
}
