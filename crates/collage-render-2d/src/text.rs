//! Built-in bitmap font for tile labels.
//!
//! Glyphs are 5×7 cells scaled by an integer factor, so labels stay crisp at
//! any tile size without a font file.

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// Blank columns between glyphs, in unscaled cells.
const ADVANCE_GAP: u32 = 1;

/// Rows top to bottom; bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_H as usize];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const SPACE: Glyph = [0; 7];
const UNKNOWN: Glyph = [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04];

fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => &DIGITS[d as usize - '0' as usize],
        l @ 'A'..='Z' => &LETTERS[l as usize - 'A' as usize],
        ' ' => &SPACE,
        _ => &UNKNOWN,
    }
}

/// Rasterizes short labels with the built-in font.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Integer cell scale for a font size (cap height in pixels).
    pub fn scale_for(font_size: u32) -> u32 {
        (font_size / GLYPH_H).max(1)
    }

    /// Size of the rendered text as `(width, height)`.
    pub fn measure(&self, text: &str, font_size: u32) -> (u32, u32) {
        let count = text.chars().count() as u32;
        if count == 0 {
            return (0, 0);
        }
        let scale = Self::scale_for(font_size);
        let width = (count * GLYPH_W + (count - 1) * ADVANCE_GAP) * scale;
        (width, GLYPH_H * scale)
    }

    /// Rasterize text into a coverage mask (0 or 255 per pixel).
    ///
    /// Returns `(mask, width, height)`; the mask is empty for empty text.
    pub fn rasterize(&self, text: &str, font_size: u32) -> (Vec<u8>, u32, u32) {
        let (width, height) = self.measure(text, font_size);
        if width == 0 {
            return (Vec::new(), 0, 0);
        }

        let scale = Self::scale_for(font_size);
        let mut mask = vec![0u8; width as usize * height as usize];

        for (i, c) in text.chars().enumerate() {
            let origin_x = i as u32 * (GLYPH_W + ADVANCE_GAP) * scale;
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (0x10 >> col) == 0 {
                        continue;
                    }
                    let x0 = origin_x + col * scale;
                    let y0 = row as u32 * scale;
                    for y in y0..y0 + scale {
                        let start = (y * width + x0) as usize;
                        mask[start..start + scale as usize].fill(255);
                    }
                }
            }
        }

        (mask, width, height)
    }
}
