//! `collage` - plan a photo collage and save a placeholder rendering.

mod args;
mod prompt;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use collage_core::CollageError;
use collage_export::{save_collage, JpegOptions};
use collage_layout::{plan, resolve, LayoutReport};
use env_logger::Env;
use log::info;
use thiserror::Error;

use args::{Args, DEFAULT_OUTPUT};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Collage(#[from] CollageError),

    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("failed to encode layout as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, out: &mut W) -> Result<(), CliError> {
    let rule = "=".repeat(RULE_WIDTH);
    if !args.json {
        writeln!(out, "{rule}\nSmart Photo Collage Generator\n{rule}")?;
    }

    let landscape = match args.landscape {
        Some(n) => n,
        None => prompt::read_count(input, out, "\nEnter number of landscape images: ")?,
    };
    let portrait = match args.portrait {
        Some(n) => n,
        None => prompt::read_count(input, out, "Enter number of portrait images: ")?,
    };

    let items = plan(landscape, portrait).map_err(CollageError::from)?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None if args.needs_prompt() => prompt::read_output(input, out)?,
        None => PathBuf::from(DEFAULT_OUTPUT),
    };

    let layout = resolve(&items, &args.canvas()).map_err(CollageError::from)?;
    let (width, height) = layout.canvas_size();
    info!("planned {} placements over {} rows", items.len(), layout.geometry.rows);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&layout)?)?;
    } else {
        writeln!(out, "\nCollage Layout:\n{rule}")?;
        write!(out, "{}", LayoutReport::new(&items))?;
        writeln!(out, "{rule}")?;
    }

    if args.dry_run {
        info!("dry run, not writing {}", output.display());
    } else {
        let jpeg = JpegOptions { quality: args.quality };
        save_collage(&output, &layout, &args.render_options(), &jpeg).map_err(CollageError::from)?;
    }

    if !args.json {
        if !args.dry_run {
            writeln!(out, "\n✓ Collage saved to {}", output.display())?;
        }
        writeln!(out, "✓ Dimensions: {width}x{height}px")?;
        writeln!(out, "✓ Total rows: {}", layout.geometry.rows)?;
        writeln!(out, "✓ Total images: {}", items.len())?;
    }

    Ok(())
}
