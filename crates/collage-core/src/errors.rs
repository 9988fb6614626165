//! Error types for the collage engine.

use thiserror::Error;

/// Top-level error type for the collage engine.
#[derive(Debug, Error)]
pub enum CollageError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors while planning placements from photo counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Invalid input: {reason} (landscape = {landscape}, portrait = {portrait})")]
    InvalidInput {
        landscape: i64,
        portrait: i64,
        reason: &'static str,
    },
}

/// Errors while resolving placements into pixel geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Cannot resolve geometry for an empty layout")]
    EmptyLayout,
}

/// Errors during rasterization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Cannot render an empty {what} ({width}x{height})")]
    EmptySurface {
        what: &'static str,
        width: u32,
        height: u32,
    },
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported output format: {extension:?} (expected png, jpg, jpeg or svg)")]
    UnsupportedFormat { extension: String },

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding failed: {reason}")]
    EncodeFailed { reason: String },

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),
}
