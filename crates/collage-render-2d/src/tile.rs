//! Placeholder tiles.

use collage_core::{Color, Orientation, RenderError};

use crate::pixmap::Pixmap;
use crate::text::TextRenderer;

/// Colors and strokes used for placeholder tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Canvas color visible in the gaps between tiles.
    pub background: Color,
    pub landscape_color: Color,
    pub portrait_color: Color,
    pub border_color: Color,
    /// Border thickness drawn inside each tile edge.
    pub border_width: u32,
    pub label_color: Color,
    pub shadow_color: Color,
    /// Shadow offset in pixels, applied on both axes.
    pub shadow_offset: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            landscape_color: Color::CORNFLOWER_BLUE,
            portrait_color: Color::LIGHT_SALMON,
            border_color: Color::WHITE,
            border_width: 3,
            label_color: Color::WHITE,
            shadow_color: Color::BLACK,
            shadow_offset: 2,
        }
    }
}

impl RenderOptions {
    /// Fill color for a tile of the given orientation.
    pub fn fill_for(&self, orientation: Orientation) -> Color {
        match orientation {
            Orientation::Landscape => self.landscape_color,
            Orientation::Portrait => self.portrait_color,
        }
    }
}

/// Label size for a tile: a sixth of its shorter side.
pub fn label_font_size(width: u32, height: u32) -> u32 {
    width.min(height) / 6
}

/// Render one placeholder tile.
///
/// The tile is filled with its orientation color, the label is centered with a
/// drop shadow, and a border is drawn inside the edge.
pub fn render_tile(
    width: u32,
    height: u32,
    label: &str,
    orientation: Orientation,
    options: &RenderOptions,
) -> Result<Pixmap, RenderError> {
    render_tile_with(&TextRenderer::new(), width, height, label, orientation, options)
}

pub(crate) fn render_tile_with(
    text: &TextRenderer,
    width: u32,
    height: u32,
    label: &str,
    orientation: Orientation,
    options: &RenderOptions,
) -> Result<Pixmap, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptySurface {
            what: "tile",
            width,
            height,
        });
    }

    let mut tile = Pixmap::new(width, height, options.fill_for(orientation));

    let (mask, text_w, text_h) = text.rasterize(label, label_font_size(width, height));
    if !mask.is_empty() {
        let x = (i64::from(width) - i64::from(text_w)).div_euclid(2);
        let y = (i64::from(height) - i64::from(text_h)).div_euclid(2);
        let offset = i64::from(options.shadow_offset);

        tile.draw_mask(&mask, text_w, text_h, x + offset, y + offset, options.shadow_color);
        tile.draw_mask(&mask, text_w, text_h, x, y, options.label_color);
    }

    tile.stroke_inset(options.border_width, options.border_color);
    Ok(tile)
}
