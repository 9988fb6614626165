//! Human-readable layout listing.

use std::fmt;

use collage_core::{Column, PlacementItem};

/// Row-by-row description of a plan, one line per placement.
///
/// ```text
/// Row 1: L1 (left)
///          P1 (right)
/// Row 2: P2 (left)
///          P3 (right, spans 2 rows)
/// Row 3: P4 (left)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutReport<'a> {
    items: &'a [PlacementItem],
}

impl<'a> LayoutReport<'a> {
    pub fn new(items: &'a [PlacementItem]) -> Self {
        Self { items }
    }

    /// Report lines in placement order.
    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(describe).collect()
    }
}

impl fmt::Display for LayoutReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn describe(item: &PlacementItem) -> String {
    let span = if item.is_spanning() {
        format!(", spans {} rows", item.row_span)
    } else {
        String::new()
    };

    match item.column {
        Column::Full => format!("Row {}: {} (full width)", item.row + 1, item.label),
        Column::Left => format!("Row {}: {} (left{span})", item.row + 1, item.label),
        // Right tiles share the row heading printed for their left partner.
        Column::Right => format!("         {} (right{span})", item.label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan;

    #[test]
    fn test_report_cluster() {
        let items = plan(1, 4).unwrap();
        let report = LayoutReport::new(&items);
        assert_eq!(
            report.lines(),
            vec![
                "Row 1: L1 (left)",
                "         P1 (right)",
                "Row 2: P2 (left)",
                "         P3 (right, spans 2 rows)",
                "Row 3: P4 (left)",
            ]
        );
    }

    #[test]
    fn test_report_full_rows() {
        let items = plan(2, 0).unwrap();
        assert_eq!(
            LayoutReport::new(&items).to_string(),
            "Row 1: L1 (full width)\nRow 2: L2 (full width)\n"
        );
    }
}
