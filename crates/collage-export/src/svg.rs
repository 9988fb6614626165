//! SVG export for resolved layouts.

use std::fmt::Write;

use collage_layout::{ResolvedLayout, ResolvedTile};
use collage_render_2d::{label_font_size, RenderOptions};

/// Export a layout as a standalone SVG document.
pub fn export(layout: &ResolvedLayout, options: &RenderOptions) -> String {
    let (width, height) = layout.canvas_size();
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
        options.background.to_hex()
    );

    for tile in &layout.tiles {
        if tile.rect.is_empty() {
            continue;
        }
        write_tile(&mut svg, tile, options);
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_tile(svg: &mut String, tile: &ResolvedTile, options: &RenderOptions) {
    let rect = tile.rect;
    let label = escape(&tile.item.label);

    let _ = writeln!(svg, r#"  <g id="{label}">"#);
    let _ = writeln!(
        svg,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        options.fill_for(tile.item.orientation).to_hex()
    );

    let font_size = label_font_size(rect.width, rect.height);
    if font_size > 0 {
        let cx = f64::from(rect.x) + f64::from(rect.width) / 2.0;
        let cy = f64::from(rect.y) + f64::from(rect.height) / 2.0;
        let offset = f64::from(options.shadow_offset);
        for (dx, color) in [(offset, options.shadow_color), (0.0, options.label_color)] {
            let _ = writeln!(
                svg,
                r#"    <text x="{}" y="{}" font-family="sans-serif" font-weight="bold" font-size="{font_size}" text-anchor="middle" dominant-baseline="central" fill="{}">{label}</text>"#,
                cx + dx,
                cy + dx,
                color.to_hex()
            );
        }
    }

    if options.border_width > 0 {
        // SVG strokes straddle the path, so inset by half the width.
        let half = f64::from(options.border_width) / 2.0;
        let _ = writeln!(
            svg,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            f64::from(rect.x) + half,
            f64::from(rect.y) + half,
            (f64::from(rect.width) - 2.0 * half).max(0.0),
            (f64::from(rect.height) - 2.0 * half).max(0.0),
            options.border_color.to_hex(),
            options.border_width
        );
    }

    let _ = writeln!(svg, "  </g>");
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use collage_layout::{plan, resolve, CanvasSpec};

    #[test]
    fn test_svg_document() {
        let items = plan(1, 1).unwrap();
        let layout = resolve(&items, &CanvasSpec::default()).unwrap();
        let svg = export(&layout, &RenderOptions::default());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="1200" height="400""#));
        assert!(svg.contains(r##"<rect x="0" y="0" width="800" height="400" fill="#6495ed"/>"##));
        assert!(svg.contains(r##"<rect x="804" y="0" width="396" height="400" fill="#ffa07a"/>"##));
        assert!(svg.contains(">L1</text>"));
        assert!(svg.contains(r#"<g id="P1">"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_border_inset() {
        let items = plan(0, 1).unwrap();
        let layout = resolve(&items, &CanvasSpec::new(100, 50, 0)).unwrap();
        let svg = export(&layout, &RenderOptions::default());

        assert!(svg.contains(r#"x="1.5" y="1.5" width="97" height="47" fill="none""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a&"b">"#), "&lt;a&amp;&quot;b&quot;&gt;");
    }
}
