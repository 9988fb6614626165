//! 2D rendering for photo collages.
//!
//! This crate provides a software rasterizer that draws one placeholder tile
//! per resolved placement and composites the tiles onto a single canvas.

mod pixmap;
pub mod text;
mod tile;

pub use pixmap::Pixmap;
pub use text::TextRenderer;
pub use tile::{label_font_size, render_tile, RenderOptions};

use collage_core::RenderError;
use collage_layout::ResolvedLayout;
use log::{debug, info, warn};

/// Software compositor for headless rendering.
pub struct SoftwareRenderer {
    canvas: Pixmap,
    text_renderer: TextRenderer,
    options: RenderOptions,
}

impl SoftwareRenderer {
    /// Create a renderer with a canvas of the given dimensions.
    pub fn new(width: u32, height: u32, options: RenderOptions) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptySurface {
                what: "canvas",
                width,
                height,
            });
        }
        Ok(Self {
            canvas: Pixmap::new(width, height, options.background),
            text_renderer: TextRenderer::new(),
            options,
        })
    }

    /// Render every tile of a layout and paste it at its resolved origin.
    pub fn render(&mut self, layout: &ResolvedLayout) -> Result<&[u8], RenderError> {
        self.canvas.clear(self.options.background);

        for tile in &layout.tiles {
            let rect = tile.rect;
            if rect.is_empty() {
                warn!("skipping {}: empty tile {:?}", tile.item.label, rect);
                continue;
            }

            let pixmap = tile::render_tile_with(
                &self.text_renderer,
                rect.width,
                rect.height,
                &tile.item.label,
                tile.item.orientation,
                &self.options,
            )?;
            self.canvas.paste(&pixmap, rect.x, rect.y);
            debug!("pasted {} at ({}, {})", tile.item.label, rect.x, rect.y);
        }

        Ok(self.canvas.data())
    }

    /// Get the canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get the canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Get a reference to the raw RGBA buffer.
    pub fn buffer(&self) -> &[u8] {
        self.canvas.data()
    }

    /// Get the composited canvas.
    pub fn canvas(&self) -> &Pixmap {
        &self.canvas
    }

    /// Consume the renderer, keeping the canvas.
    pub fn into_pixmap(self) -> Pixmap {
        self.canvas
    }
}

/// Render a resolved layout onto a fresh canvas.
pub fn render_collage(layout: &ResolvedLayout, options: &RenderOptions) -> Result<SoftwareRenderer, RenderError> {
    let (width, height) = layout.canvas_size();
    let mut renderer = SoftwareRenderer::new(width, height, options.clone())?;
    renderer.render(layout)?;
    info!("rendered {} tiles onto {}x{} canvas", layout.tiles.len(), width, height);
    Ok(renderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use collage_core::Color;
    use collage_layout::{plan, resolve, CanvasSpec};

    fn layout(landscape: i64, portrait: i64, spec: CanvasSpec) -> ResolvedLayout {
        resolve(&plan(landscape, portrait).unwrap(), &spec).unwrap()
    }

    #[test]
    fn test_software_renderer_new() {
        let renderer = SoftwareRenderer::new(100, 50, RenderOptions::default()).unwrap();
        assert_eq!(renderer.width(), 100);
        assert_eq!(renderer.height(), 50);
        assert_eq!(renderer.buffer().len(), 100 * 50 * 4);
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let result = SoftwareRenderer::new(0, 50, RenderOptions::default());
        assert!(matches!(result, Err(RenderError::EmptySurface { what: "canvas", .. })));
    }

    #[test]
    fn test_render_collage_composites_tiles() {
        let layout = layout(1, 1, CanvasSpec::new(120, 60, 4));
        let renderer = render_collage(&layout, &RenderOptions::default()).unwrap();
        let canvas = renderer.canvas();

        assert_eq!((canvas.width(), canvas.height()), (120, 60));
        // Inside L1 (0..80), clear of border and label.
        assert_eq!(canvas.pixel(5, 5), Some(Color::CORNFLOWER_BLUE));
        // Gap between tiles keeps the background.
        assert_eq!(canvas.pixel(81, 30), Some(Color::WHITE));
        // Inside P1 (84..120).
        assert_eq!(canvas.pixel(88, 5), Some(Color::LIGHT_SALMON));
    }

    #[test]
    fn test_row_gap_is_background() {
        let options = RenderOptions {
            background: Color::BLACK,
            ..RenderOptions::default()
        };
        let layout = layout(2, 0, CanvasSpec::new(50, 20, 6));
        let renderer = render_collage(&layout, &options).unwrap();

        assert_eq!(renderer.canvas().height(), 46);
        assert_eq!(renderer.canvas().pixel(25, 22), Some(Color::BLACK));
        assert_eq!(renderer.canvas().pixel(4, 4), Some(Color::CORNFLOWER_BLUE));
        assert_eq!(renderer.canvas().pixel(4, 30), Some(Color::CORNFLOWER_BLUE));
    }

    #[test]
    fn test_spanning_tile_covers_two_rows() {
        let layout = layout(0, 3, CanvasSpec::new(120, 40, 4));
        let renderer = render_collage(&layout, &RenderOptions::default()).unwrap();

        // P2 spans x 64..120, y 0..84 including the row gap at y 40..44.
        assert_eq!(renderer.canvas().pixel(70, 42), Some(Color::LIGHT_SALMON));
        // Under P1 the row gap stays white.
        assert_eq!(renderer.canvas().pixel(10, 42), Some(Color::WHITE));
    }
}
