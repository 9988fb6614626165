//! Interactive prompts on stdin.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::args::DEFAULT_OUTPUT;
use crate::CliError;

/// Ask for a photo count. Sign is kept so the planner can reject negatives.
pub fn read_count<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<i64, CliError> {
    let line = read_line(input, output, prompt)?;
    line.parse().map_err(|_| CliError::InvalidNumber { input: line })
}

/// Ask for the output filename; an empty answer keeps the default.
pub fn read_output<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf, CliError> {
    let prompt = format!("\nEnter output filename (default: {DEFAULT_OUTPUT}): ");
    let line = read_line(input, output, &prompt)?;
    if line.is_empty() {
        Ok(PathBuf::from(DEFAULT_OUTPUT))
    } else {
        Ok(PathBuf::from(line))
    }
}

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, CliError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::Cancelled);
    }
    Ok(line.trim().to_string())
}
