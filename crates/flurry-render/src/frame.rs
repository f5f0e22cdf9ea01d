//! CPU framebuffer with a scanline disc fill

use crate::surface::DrawSurface;
use flurry_core::Color;

/// A width x height grid of packed 0RGB pixels.
///
/// Row-major, matching what softbuffer presents. All drawing is
/// bounds-checked, so circles may hang off any edge.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate for a new window size. Contents become undefined
    /// until the next clear.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.resize((width as usize) * (height as usize), 0);
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Read one pixel, if it is in bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }
}

impl DrawSurface for FrameBuffer {
    fn draw_filled_circle(&mut self, color: Color, x: i32, y: i32, diameter: i32) {
        if diameter <= 0 {
            return;
        }
        let pixel = color.to_pixel();
        let radius = diameter as f64 / 2.0;
        let cx = x as f64 + radius;
        let cy = y as f64 + radius;

        // Scan the bounding square clamped to the buffer
        let min_x = x.max(0);
        let max_x = (x + diameter).min(self.width as i32);
        let min_y = y.max(0);
        let max_y = (y + diameter).min(self.height as i32);

        for py in min_y..max_y {
            for px in min_x..max_x {
                // Sample at the pixel center
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.pixels[(py as u32 * self.width + px as u32) as usize] = pixel;
                }
            }
        }
    }
}
