use crate::{surface::SurfaceSize, ui::Rect};

pub type Color = [u8; 4];

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r, g, b, 255]
}

// 5x7 block font, one byte per row, low five bits used.
pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;

pub fn glyph_advance_x(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale.max(1)
}

pub fn line_advance_y(scale: u32) -> u32 {
    (GLYPH_H + 2) * scale.max(1)
}

/// Pixel width of a single line of `text` at `scale` (no trailing spacing).
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars
        .saturating_mul(glyph_advance_x(scale))
        .saturating_sub(scale.max(1))
}

/// Unified 2D drawing interface used by game rendering code.
pub trait Renderer2d {
    fn size(&self) -> SurfaceSize;

    /// Opaque fill, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32);

    fn hline(&mut self, x: u32, y: u32, len: u32, color: Color) {
        self.fill_rect(Rect::new(x, y, len, 1), color);
    }

    fn vline(&mut self, x: u32, y: u32, len: u32, color: Color) {
        self.fill_rect(Rect::new(x, y, 1, len), color);
    }

    fn rect_outline(&mut self, rect: Rect, color: Color) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        self.hline(rect.x, rect.y, rect.w, color);
        self.hline(rect.x, rect.bottom().saturating_sub(1), rect.w, color);
        self.vline(rect.x, rect.y, rect.h, color);
        self.vline(rect.right().saturating_sub(1), rect.y, rect.h, color);
    }

    /// Heavier text: the glyphs are drawn twice, one pixel apart.
    fn draw_text_bold(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        self.draw_text_scaled(x, y, text, color, scale);
        self.draw_text_scaled(x.saturating_add(1), y, text, color, scale);
    }

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(Rect::from_size(s.width, s.height), color);
    }
}

/// CPU renderer that draws into a borrowed RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    fn stride(&self) -> usize {
        self.size.width as usize * 4
    }

    fn buffer_matches_size(&self) -> bool {
        self.size.rgba_len() != 0 && self.frame.len() >= self.size.rgba_len()
    }

    fn draw_glyph(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32) {
        for (row, bits) in glyph_rows(ch).into_iter().enumerate() {
            let py = y.saturating_add(row as u32 * scale);
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                let px = x.saturating_add(col * scale);
                self.fill_rect(Rect::new(px, py, scale, scale), color);
            }
        }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !self.buffer_matches_size() {
            return;
        }
        let max_x = rect.right().min(self.size.width);
        let max_y = rect.bottom().min(self.size.height);
        if rect.x >= max_x || rect.y >= max_y {
            return;
        }

        let stride = self.stride();
        let row_bytes = (max_x - rect.x) as usize * 4;
        for y in rect.y..max_y {
            let start = y as usize * stride + rect.x as usize * 4;
            for px in self.frame[start..start + row_bytes].chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let scale = scale.max(1);
        let mut cursor_x = x;
        let mut cursor_y = y;

        for ch in text.chars() {
            if cursor_y >= self.size.height {
                break;
            }
            match ch {
                '\n' => {
                    cursor_x = x;
                    cursor_y = cursor_y.saturating_add(line_advance_y(scale));
                    continue;
                }
                ' ' => {}
                _ if cursor_x < self.size.width => self.draw_glyph(cursor_x, cursor_y, ch, color, scale),
                _ => {}
            }
            cursor_x = cursor_x.saturating_add(glyph_advance_x(scale));
        }
    }
}

fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    match ch.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],

        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],

        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        ' ' => [0x00; GLYPH_H as usize],

        _ => [0x1F; GLYPH_H as usize],
    }
}
