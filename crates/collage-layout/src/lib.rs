//! Layout computation for photo collages.
//!
//! This crate turns photo counts into a row-based collage layout and then
//! into pixel rectangles.
//!
//! # Architecture
//!
//! 1. **Planning**: [`plan`] greedily packs landscapes and portraits into rows
//! 2. **Geometry**: [`resolve`] maps rows and columns onto a fixed-width canvas
//! 3. **Reporting**: [`LayoutReport`] renders a human-readable row listing
//!
//! # Example
//!
//! ```
//! use collage_layout::{plan, resolve, CanvasSpec};
//!
//! let items = plan(1, 1).unwrap();
//! let layout = resolve(&items, &CanvasSpec::default()).unwrap();
//!
//! assert_eq!(layout.geometry.total_height, 400);
//! assert_eq!(layout.tiles[0].rect.width, 800);
//! ```

mod geometry;
mod planner;
mod report;

pub use geometry::{resolve, CanvasGeometry, CanvasSpec, ResolvedLayout, ResolvedTile};
pub use planner::{plan, rows, RowSlots};
pub use report::LayoutReport;
