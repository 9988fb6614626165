//! Core value types for collage layouts.

use std::fmt;

/// Orientation class of a photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide.
    Portrait,
}

impl Orientation {
    /// Single-letter prefix used in placement labels.
    pub const fn prefix(self) -> char {
        match self {
            Orientation::Landscape => 'L',
            Orientation::Portrait => 'P',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => f.write_str("landscape"),
            Orientation::Portrait => f.write_str("portrait"),
        }
    }
}

/// Horizontal slot a placement occupies within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Column {
    /// The whole row width.
    Full,
    /// The left share of a two-item row.
    Left,
    /// The right share of a two-item row.
    Right,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Full => f.write_str("full"),
            Column::Left => f.write_str("left"),
            Column::Right => f.write_str("right"),
        }
    }
}

/// One slot assignment for one input photograph.
///
/// Placements are immutable values; the planner creates them through
/// [`PlacementItem::new`], which derives the label from the orientation
/// and its 1-based per-orientation index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementItem {
    /// `L1`, `P3`, ...; unique within a layout.
    pub label: String,
    pub orientation: Orientation,
    /// Zero-based row index.
    pub row: u32,
    pub column: Column,
    /// Number of row-heights the tile covers (1 or 2).
    pub row_span: u32,
}

impl PlacementItem {
    /// Create a placement for the `index`-th (1-based) photo of an orientation.
    pub fn new(orientation: Orientation, index: u32, row: u32, column: Column, row_span: u32) -> Self {
        Self {
            label: format!("{}{}", orientation.prefix(), index),
            orientation,
            row,
            column,
            row_span,
        }
    }

    /// First row index below this item (`row + row_span`).
    pub fn row_end(&self) -> u32 {
        self.row + self.row_span
    }

    /// Whether the tile extends over more than one row.
    pub fn is_spanning(&self) -> bool {
        self.row_span > 1
    }
}

/// Axis-aligned rectangle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a rect from origin and size.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the rect covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether two rects share any pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from hex string (e.g., "#6495ED" or "6495EDFF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form (alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an RGBA array.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Tile fill for landscape placeholders.
    pub const CORNFLOWER_BLUE: Self = Self::rgb(100, 149, 237);
    /// Tile fill for portrait placeholders.
    pub const LIGHT_SALMON: Self = Self::rgb(255, 160, 122);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_label() {
        let item = PlacementItem::new(Orientation::Portrait, 3, 1, Column::Right, 2);
        assert_eq!(item.label, "P3");
        assert_eq!(item.row_end(), 3);
        assert!(item.is_spanning());

        let item = PlacementItem::new(Orientation::Landscape, 12, 0, Column::Full, 1);
        assert_eq!(item.label, "L12");
        assert!(!item.is_spanning());
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0, 0, 800, 400);
        let b = Rect::new(804, 0, 396, 400);
        let c = Rect::new(600, 200, 400, 400);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
        assert!(Rect::new(5, 5, 0, 10).is_empty());
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#6495ED"), Some(Color::CORNFLOWER_BLUE));
        assert_eq!(Color::from_hex("ffa07a"), Some(Color::LIGHT_SALMON));
        assert_eq!(Color::from_hex("#00000080"), Some(Color::rgba(0, 0, 0, 128)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
        assert_eq!(Color::LIGHT_SALMON.to_hex(), "#ffa07a");
    }
}
