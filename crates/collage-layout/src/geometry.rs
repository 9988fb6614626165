//! Pixel geometry for planned layouts.
//!
//! Rows have a fixed height and are separated by `spacing`. A row either holds
//! one full-width tile or splits the width between a left and a right tile.
//! The split depends on the left tile: a landscape takes two thirds, a
//! portrait takes half.

use std::collections::HashMap;

use collage_core::{Column, LayoutError, Orientation, PlacementItem, Rect};
use log::debug;

/// Canvas parameters for geometry resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSpec {
    /// Fixed canvas width in pixels.
    pub target_width: u32,
    /// Height of a single row in pixels.
    pub row_height: u32,
    /// Gap between rows and between the two tiles of a row.
    pub spacing: u32,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            target_width: 1200,
            row_height: 400,
            spacing: 4,
        }
    }
}

impl CanvasSpec {
    /// Create a canvas spec.
    pub fn new(target_width: u32, row_height: u32, spacing: u32) -> Self {
        Self {
            target_width,
            row_height,
            spacing,
        }
    }

    /// Set the gap between tiles.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Width of the left tile when its orientation is `left`.
    fn left_width(&self, left: Orientation) -> u32 {
        let width = u64::from(self.target_width);
        let share = match left {
            Orientation::Landscape => width * 2 / 3,
            Orientation::Portrait => width / 2,
        };
        share as u32
    }

    /// Vertical offset of a row.
    fn row_y(&self, row: u32) -> u32 {
        clamp_u32(u64::from(row) * (u64::from(self.row_height) + u64::from(self.spacing)))
    }

    /// Height covered by `rows` consecutive rows including the gaps between them.
    fn span_height(&self, rows: u32) -> u32 {
        let rows = u64::from(rows);
        clamp_u32(
            rows * u64::from(self.row_height) + rows.saturating_sub(1) * u64::from(self.spacing),
        )
    }
}

/// Canvas dimensions derived from a resolved layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasGeometry {
    pub target_width: u32,
    pub row_height: u32,
    pub spacing: u32,
    /// Number of row-heights used (`max(row + row_span)`).
    pub rows: u32,
    pub total_height: u32,
}

/// A placement together with its pixel rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedTile {
    pub item: PlacementItem,
    pub rect: Rect,
}

/// Output of [`resolve`]: one tile per placement, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedLayout {
    pub tiles: Vec<ResolvedTile>,
    pub geometry: CanvasGeometry,
}

impl ResolvedLayout {
    /// Canvas size as `(width, height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.geometry.target_width, self.geometry.total_height)
    }

    /// Find the tile with the given label.
    pub fn tile(&self, label: &str) -> Option<&ResolvedTile> {
        self.tiles.iter().find(|t| t.item.label == label)
    }
}

/// Resolve placements into pixel rectangles on a canvas.
///
/// A right tile is split against the left tile of the same row, looked up in a
/// row index built once per call. A right tile without a left partner is
/// treated like one beside a portrait.
pub fn resolve(items: &[PlacementItem], canvas: &CanvasSpec) -> Result<ResolvedLayout, LayoutError> {
    if items.is_empty() {
        return Err(LayoutError::EmptyLayout);
    }

    let left_by_row: HashMap<u32, Orientation> = items
        .iter()
        .filter(|item| item.column == Column::Left)
        .map(|item| (item.row, item.orientation))
        .collect();

    let tiles: Vec<ResolvedTile> = items
        .iter()
        .map(|item| {
            let y = canvas.row_y(item.row);
            let height = canvas.span_height(item.row_span);

            let (x, width) = match item.column {
                Column::Full => (0, canvas.target_width),
                Column::Left => (0, canvas.left_width(item.orientation)),
                Column::Right => {
                    let partner = left_by_row
                        .get(&item.row)
                        .copied()
                        .unwrap_or(Orientation::Portrait);
                    let x = canvas
                        .left_width(partner)
                        .saturating_add(canvas.spacing)
                        .min(canvas.target_width);
                    (x, canvas.target_width - x)
                }
            };

            let rect = Rect::new(x, y, width, height);
            debug!("{} -> {:?}", item.label, rect);
            ResolvedTile {
                item: item.clone(),
                rect,
            }
        })
        .collect();

    let rows = items.iter().map(PlacementItem::row_end).max().unwrap_or(0);
    let geometry = CanvasGeometry {
        target_width: canvas.target_width,
        row_height: canvas.row_height,
        spacing: canvas.spacing,
        rows,
        total_height: canvas.span_height(rows),
    };

    Ok(ResolvedLayout { tiles, geometry })
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
