//! Repaint handler: read the live list, issue draw calls

use crate::surface::DrawSurface;
use flurry_sim::Flake;

/// Draw every live flake onto the surface.
///
/// Pure read-and-draw: takes the flake slice by shared reference, so
/// it cannot mutate simulation state. One circle per flake, sized and
/// colored by its shared descriptor.
pub fn render_flakes<S: DrawSurface>(flakes: &[Flake], surface: &mut S) {
    for flake in flakes {
        let descriptor = &flake.descriptor;
        surface.draw_filled_circle(descriptor.color, flake.x, flake.y, descriptor.size as i32);
    }
}
