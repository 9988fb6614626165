//! Core types and error definitions for the photo collage engine.
//!
//! This crate provides the foundational types used across all other collage crates:
//! - Placement records produced by the layout planner
//! - Pixel geometry (rectangles) and colors
//! - Error types for every pipeline stage

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
