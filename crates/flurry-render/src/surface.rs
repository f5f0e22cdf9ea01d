//! The drawing surface seam between simulation and backend

use flurry_core::Color;

/// A backend that can fill circles.
///
/// `(x, y)` is the top-left corner of the circle's bounding square,
/// matching the classic fill-ellipse convention, so a flake spawned at
/// y = 0 hangs off the top edge rather than straddling it.
pub trait DrawSurface {
    fn draw_filled_circle(&mut self, color: Color, x: i32, y: i32, diameter: i32);
}
