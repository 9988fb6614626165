//! Owned RGBA8 pixel buffers.

use collage_core::Color;

/// An RGBA8 image buffer, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a pixmap filled with a solid color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let data = fill
            .to_array()
            .repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Raw RGB bytes with alpha dropped.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }

    /// Read a pixel. Returns `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let idx = self.index(x, y)?;
        let px = &self.data[idx..idx + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color, 255);
            }
        }
    }

    /// Draw a border of `thickness` pixels just inside the buffer edge.
    pub fn stroke_inset(&mut self, thickness: u32, color: Color) {
        if thickness == 0 {
            return;
        }
        let (w, h) = (self.width, self.height);
        let t = thickness.min(w).min(h);
        self.fill_rect(0, 0, w, t, color);
        self.fill_rect(0, i64::from(h - t), w, t, color);
        self.fill_rect(0, 0, t, h, color);
        self.fill_rect(i64::from(w - t), 0, t, h, color);
    }

    /// Blend `color` onto a pixel with the given coverage (0-255).
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color, coverage: u8) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let alpha = u32::from(color.a) * u32::from(coverage) / 255;
        if alpha == 0 {
            return;
        }
        if alpha == 255 {
            self.data[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
            return;
        }

        // out = src * a + dst * (1 - a)
        let blend = |src: u8, dst: u8| -> u8 {
            ((u32::from(src) * alpha + u32::from(dst) * (255 - alpha) + 127) / 255) as u8
        };
        self.data[idx] = blend(color.r, self.data[idx]);
        self.data[idx + 1] = blend(color.g, self.data[idx + 1]);
        self.data[idx + 2] = blend(color.b, self.data[idx + 2]);
        self.data[idx + 3] = 255;
    }

    /// Paint a coverage mask (one byte per pixel) at an offset.
    pub fn draw_mask(&mut self, mask: &[u8], mask_width: u32, mask_height: u32, x: i64, y: i64, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, mask_width, mask_height) else {
            return;
        };
        for py in y0..y1 {
            let my = (i64::from(py) - y) as usize;
            for px in x0..x1 {
                let mx = (i64::from(px) - x) as usize;
                let coverage = mask[my * mask_width as usize + mx];
                if coverage > 0 {
                    self.blend_pixel(px, py, color, coverage);
                }
            }
        }
    }

    /// Copy `src` onto this pixmap with its top-left corner at `(x, y)`.
    pub fn paste(&mut self, src: &Pixmap, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_w = src.width.min(self.width - x) as usize;
        let copy_h = src.height.min(self.height - y);
        for row in 0..copy_h {
            let src_start = row as usize * src.width as usize * 4;
            let dst_start = ((y + row) as usize * self.width as usize + x as usize) * 4;
            self.data[dst_start..dst_start + copy_w * 4]
                .copy_from_slice(&src.data[src_start..src_start + copy_w * 4]);
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y as usize * self.width as usize + x as usize) * 4)
    }

    /// Intersect a signed rect with the buffer, returning `(x0, y0, x1, y1)`.
    fn clip(&self, x: i64, y: i64, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(width)).min(i64::from(self.width));
        let y1 = (y + i64::from(height)).min(i64::from(self.height));
        (x0 < x1 && y0 < y1).then(|| (x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_clear() {
        let mut pixmap = Pixmap::new(4, 3, Color::WHITE);
        assert_eq!(pixmap.data().len(), 4 * 3 * 4);
        assert_eq!(pixmap.pixel(3, 2), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(4, 0), None);

        pixmap.clear(Color::rgb(255, 0, 0));
        assert_eq!(pixmap.pixel(0, 0), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut pixmap = Pixmap::new(10, 10, Color::WHITE);
        pixmap.fill_rect(-5, 8, 8, 8, Color::BLACK);

        assert_eq!(pixmap.pixel(0, 9), Some(Color::BLACK));
        assert_eq!(pixmap.pixel(2, 8), Some(Color::BLACK));
        assert_eq!(pixmap.pixel(3, 8), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(0, 7), Some(Color::WHITE));
    }

    #[test]
    fn test_stroke_inset() {
        let mut pixmap = Pixmap::new(10, 8, Color::BLACK);
        pixmap.stroke_inset(3, Color::WHITE);

        assert_eq!(pixmap.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(2, 4), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(7, 4), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(5, 5), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(3, 3), Some(Color::BLACK));
        assert_eq!(pixmap.pixel(6, 4), Some(Color::BLACK));
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut pixmap = Pixmap::new(1, 1, Color::WHITE);
        pixmap.blend_pixel(0, 0, Color::rgba(0, 0, 0, 255), 128);
        let px = pixmap.pixel(0, 0).unwrap();
        assert_eq!((px.r, px.a), (127, 255));
    }

    #[test]
    fn test_paste_clipped() {
        let mut canvas = Pixmap::new(6, 4, Color::WHITE);
        let tile = Pixmap::new(4, 4, Color::BLACK);
        canvas.paste(&tile, 4, 2);

        assert_eq!(canvas.pixel(4, 2), Some(Color::BLACK));
        assert_eq!(canvas.pixel(5, 3), Some(Color::BLACK));
        assert_eq!(canvas.pixel(3, 2), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_draw_mask() {
        let mut pixmap = Pixmap::new(4, 4, Color::WHITE);
        let mask = [255, 0, 0, 255];
        pixmap.draw_mask(&mask, 2, 2, 1, 1, Color::BLACK);

        assert_eq!(pixmap.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(pixmap.pixel(2, 1), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(2, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_to_rgb() {
        let pixmap = Pixmap::new(2, 1, Color::rgb(1, 2, 3));
        assert_eq!(pixmap.to_rgb(), vec![1, 2, 3, 1, 2, 3]);
    }
}
