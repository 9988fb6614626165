use std::path::PathBuf;

use clap::Parser;
use collage_core::Color;
use collage_layout::CanvasSpec;
use collage_render_2d::RenderOptions;

pub const DEFAULT_OUTPUT: &str = "collage.jpg";

#[derive(Parser, Debug)]
#[command(
    name = "collage",
    version,
    about = "Plan and render a placeholder photo collage from landscape and portrait counts"
)]
pub struct Args {
    /// Number of landscape photos (prompted for when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub landscape: Option<i64>,

    /// Number of portrait photos (prompted for when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub portrait: Option<i64>,

    /// Output image; the extension picks png, jpg/jpeg or svg
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Height of one row in pixels
    #[arg(long, default_value_t = 400)]
    pub row_height: u32,

    /// Gap between rows and between paired tiles
    #[arg(long, default_value_t = 4)]
    pub spacing: u32,

    /// Fill for landscape tiles, as #rrggbb
    #[arg(long, value_parser = parse_color)]
    pub landscape_color: Option<Color>,

    /// Fill for portrait tiles, as #rrggbb
    #[arg(long, value_parser = parse_color)]
    pub portrait_color: Option<Color>,

    /// Canvas color showing through the gaps, as #rrggbb
    #[arg(long, value_parser = parse_color)]
    pub background: Option<Color>,

    /// JPEG quality
    #[arg(long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Print the resolved layout as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Plan and resolve without writing an image
    #[arg(long)]
    pub dry_run: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec::new(self.width, self.row_height, self.spacing)
    }

    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            landscape_color: self.landscape_color.unwrap_or(defaults.landscape_color),
            portrait_color: self.portrait_color.unwrap_or(defaults.portrait_color),
            background: self.background.unwrap_or(defaults.background),
            ..defaults
        }
    }

    /// Either count is missing, so the run is interactive.
    pub fn needs_prompt(&self) -> bool {
        self.landscape.is_none() || self.portrait.is_none()
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("expected a hex color like #6495ed, got {s:?}"))
}
