use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

use pixels::Pixels;

/// Headful renderer built on `pixels`.
///
/// The pixel buffer keeps the logical game resolution; `pixels` scales it onto the window surface,
/// so game code always draws in the same coordinate space regardless of DPI.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    buffer_size: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(mut pixels: Pixels, buffer_size: SurfaceSize) -> Result<Self, pixels::Error> {
        pixels.resize_buffer(buffer_size.width, buffer_size.height)?;
        Ok(Self {
            pixels,
            buffer_size,
        })
    }

    /// Tracks a window resize. The logical buffer is left alone.
    pub fn resize_surface(&mut self, size: SurfaceSize) -> Result<(), pixels::Error> {
        if size.is_empty() {
            // Minimised windows report 0x0; keep the previous surface.
            return Ok(());
        }
        self.pixels.resize_surface(size.width, size.height)?;
        Ok(())
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.buffer_size);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
