//! Export formats for photo collages.
//!
//! Supported formats:
//! - PNG (lossless raster)
//! - JPEG (lossy raster)
//! - SVG (vector, drawn straight from the resolved layout)

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "svg")]
pub mod svg;

use std::fs;
use std::path::Path;

use collage_core::ExportError;
use collage_layout::ResolvedLayout;
use collage_render_2d::{RenderOptions, SoftwareRenderer};
use log::info;

/// Output format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Svg,
}

impl ExportFormat {
    /// Pick a format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "svg" => Ok(Self::Svg),
            _ => Err(ExportError::UnsupportedFormat { extension }),
        }
    }

    /// Whether the format needs a rasterized canvas.
    pub fn is_raster(self) -> bool {
        !matches!(self, Self::Svg)
    }
}

/// Export options for JPEG.
#[derive(Debug, Clone)]
pub struct JpegOptions {
    /// Encoder quality, 1-100.
    pub quality: u8,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self { quality: 95 }
    }
}

/// Export a rendered canvas to PNG.
#[cfg(feature = "png")]
pub fn export_png(renderer: &SoftwareRenderer) -> Vec<u8> {
    png::export(renderer)
}

/// Export a rendered canvas to JPEG. The alpha channel is dropped.
#[cfg(feature = "jpeg")]
pub fn export_jpeg(renderer: &SoftwareRenderer, options: &JpegOptions) -> Result<Vec<u8>, ExportError> {
    use image::codecs::jpeg::JpegEncoder;

    let rgb = renderer.canvas().to_rgb();
    let mut output = Vec::new();
    JpegEncoder::new_with_quality(&mut output, options.quality.clamp(1, 100))
        .encode(&rgb, renderer.width(), renderer.height(), image::ExtendedColorType::Rgb8)
        .map_err(|e| ExportError::EncodeFailed {
            reason: e.to_string(),
        })?;
    Ok(output)
}

/// Export a layout to SVG.
#[cfg(feature = "svg")]
pub fn export_svg(layout: &ResolvedLayout, options: &RenderOptions) -> String {
    svg::export(layout, options)
}

/// Encode a layout in the given format.
pub fn export_bytes(
    format: ExportFormat,
    layout: &ResolvedLayout,
    render: &RenderOptions,
    jpeg: &JpegOptions,
) -> Result<Vec<u8>, ExportError> {
    match format {
        #[cfg(feature = "png")]
        ExportFormat::Png => {
            let renderer = collage_render_2d::render_collage(layout, render)?;
            Ok(export_png(&renderer))
        }
        #[cfg(feature = "jpeg")]
        ExportFormat::Jpeg => {
            let renderer = collage_render_2d::render_collage(layout, render)?;
            export_jpeg(&renderer, jpeg)
        }
        #[cfg(feature = "svg")]
        ExportFormat::Svg => Ok(export_svg(layout, render).into_bytes()),
        #[allow(unreachable_patterns)]
        other => {
            let _ = (layout, render, jpeg);
            Err(ExportError::UnsupportedFormat {
                extension: format!("{other:?}").to_ascii_lowercase(),
            })
        }
    }
}

/// Render (if needed) and write a collage to `path`, choosing the format from
/// the extension.
pub fn save_collage(
    path: &Path,
    layout: &ResolvedLayout,
    render: &RenderOptions,
    jpeg: &JpegOptions,
) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path)?;
    let bytes = export_bytes(format, layout, render, jpeg)?;
    fs::write(path, &bytes)?;
    info!("saved {:?} collage to {} ({} bytes)", format, path.display(), bytes.len());
    Ok(format)
}
