#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    /// Byte offset of pixel `(x, y)` in an RGBA buffer of this size.
    fn rgba_offset(self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * 4)
    }
}

/// Offscreen RGBA frame of a fixed size, for headless rendering and pixel assertions.
#[derive(Debug, Clone)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBufferSurface {
    /// A transparent black frame.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    pub fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// The RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.size.rgba_offset(x, y)?;
        let px = self.buf.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_zeroed_at_full_length() {
        let surface = RgbaBufferSurface::new(SurfaceSize::new(4, 5));
        assert_eq!(surface.frame().len(), 4 * 5 * 4);
        assert!(surface.frame().iter().all(|&b| b == 0));
    }

    #[test]
    fn pixel_reads_back_written_bytes() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(3, 2));
        let idx = (1 * 3 + 2) * 4;
        surface.frame_mut()[idx..idx + 4].copy_from_slice(&[1, 2, 3, 4]);

        assert_eq!(surface.pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(3, 0), None);
        assert_eq!(surface.pixel(0, 2), None);
    }
}
