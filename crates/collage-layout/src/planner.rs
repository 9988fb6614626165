//! Greedy row planner.
//!
//! Packs landscapes and portraits into rows in three phases:
//!
//! 1. **Pairing**: one landscape (left) beside one portrait (right) per row
//! 2. **Portraits**: leftover portraits two per row; a residue of exactly
//!    three becomes a cluster where the right tile spans two rows
//! 3. **Landscapes**: leftover landscapes one per row at full width
//!
//! ```text
//!     pairing         portrait pair     3-cluster        landscape
//!     ┌──────┬───┐    ┌─────┬─────┐    ┌─────┬─────┐    ┌──────────┐
//!     │  L1  │P1 │    │ P2  │ P3  │    │ P2  │     │    │    L2    │
//!     └──────┴───┘    └─────┴─────┘    ├─────┤ P3  │    └──────────┘
//!                                      │ P4  │     │
//!                                      └─────┴─────┘
//! ```

use std::collections::BTreeMap;

use collage_core::{Column, Orientation, PlacementItem, PlanError};
use log::debug;
use smallvec::SmallVec;

/// Items sharing one row index, in emission order.
pub type RowSlots<'a> = SmallVec<[&'a PlacementItem; 2]>;

/// Plan placements for the given photo counts.
///
/// Returns one [`PlacementItem`] per photo, ordered left-to-right and
/// top-to-bottom. Fails with [`PlanError::InvalidInput`] when either count is
/// negative or both are zero.
pub fn plan(num_landscape: i64, num_portrait: i64) -> Result<Vec<PlacementItem>, PlanError> {
    let (landscape, portrait) = validate_counts(num_landscape, num_portrait)?;

    // A lone portrait gets the whole row rather than half of an empty pair.
    if landscape == 0 && portrait == 1 {
        debug!("single portrait, using a full-width row");
        return Ok(vec![PlacementItem::new(
            Orientation::Portrait,
            1,
            0,
            Column::Full,
            1,
        )]);
    }

    let mut state = PlanState::new(landscape, portrait);
    state.pair_mixed();
    state.pack_portraits();
    state.stack_landscapes();

    debug!(
        "planned {} items over {} rows ({} landscape, {} portrait)",
        state.items.len(),
        state.row,
        landscape,
        portrait
    );

    Ok(state.items)
}

/// Group items by row index.
///
/// A span-2 tile is listed only under the row it starts in.
pub fn rows(items: &[PlacementItem]) -> BTreeMap<u32, RowSlots<'_>> {
    let mut rows: BTreeMap<u32, RowSlots<'_>> = BTreeMap::new();
    for item in items {
        rows.entry(item.row).or_default().push(item);
    }
    rows
}

fn validate_counts(landscape: i64, portrait: i64) -> Result<(u32, u32), PlanError> {
    let invalid = |reason| PlanError::InvalidInput {
        landscape,
        portrait,
        reason,
    };

    if landscape < 0 || portrait < 0 {
        return Err(invalid("counts must be non-negative"));
    }
    if landscape == 0 && portrait == 0 {
        return Err(invalid("at least one image is required"));
    }

    let landscape = u32::try_from(landscape).map_err(|_| invalid("count too large"))?;
    let portrait = u32::try_from(portrait).map_err(|_| invalid("count too large"))?;
    Ok((landscape, portrait))
}

/// Accumulator threaded through the planning phases of a single call.
struct PlanState {
    items: Vec<PlacementItem>,
    remaining_landscape: u32,
    remaining_portrait: u32,
    /// 1-based index of the next landscape label.
    next_landscape: u32,
    /// 1-based index of the next portrait label.
    next_portrait: u32,
    /// Next free row.
    row: u32,
}

impl PlanState {
    fn new(landscape: u32, portrait: u32) -> Self {
        Self {
            items: Vec::with_capacity(landscape as usize + portrait as usize),
            remaining_landscape: landscape,
            remaining_portrait: portrait,
            next_landscape: 1,
            next_portrait: 1,
            row: 0,
        }
    }

    fn take_landscape(&mut self, row: u32, column: Column) {
        self.items.push(PlacementItem::new(
            Orientation::Landscape,
            self.next_landscape,
            row,
            column,
            1,
        ));
        self.next_landscape += 1;
        self.remaining_landscape -= 1;
    }

    fn take_portrait(&mut self, row: u32, column: Column, row_span: u32) {
        self.items.push(PlacementItem::new(
            Orientation::Portrait,
            self.next_portrait,
            row,
            column,
            row_span,
        ));
        self.next_portrait += 1;
        self.remaining_portrait -= 1;
    }

    fn pair_mixed(&mut self) {
        while self.remaining_landscape > 0 && self.remaining_portrait > 0 {
            let row = self.row;
            self.take_landscape(row, Column::Left);
            self.take_portrait(row, Column::Right, 1);
            self.row += 1;
        }
    }

    fn pack_portraits(&mut self) {
        while self.remaining_portrait >= 2 {
            let row = self.row;
            if self.remaining_portrait == 3 {
                debug!("row {row}: three portraits left, spanning the right tile");
                self.take_portrait(row, Column::Left, 1);
                self.take_portrait(row, Column::Right, 2);
                self.take_portrait(row + 1, Column::Left, 1);
                self.row += 2;
            } else {
                self.take_portrait(row, Column::Left, 1);
                self.take_portrait(row, Column::Right, 1);
                self.row += 1;
            }
        }

        if self.remaining_portrait == 1 {
            let row = self.row;
            self.take_portrait(row, Column::Left, 1);
            self.row += 1;
        }
    }

    fn stack_landscapes(&mut self) {
        while self.remaining_landscape > 0 {
            let row = self.row;
            self.take_landscape(row, Column::Full);
            self.row += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(orientation: Orientation, index: u32, row: u32, column: Column, span: u32) -> PlacementItem {
        PlacementItem::new(orientation, index, row, column, span)
    }

    fn max_row_extent(items: &[PlacementItem]) -> u32 {
        items.iter().map(PlacementItem::row_end).max().unwrap_or(0)
    }

    #[test]
    fn test_single_portrait_is_full_width() {
        let items = plan(0, 1).unwrap();
        assert_eq!(items, vec![item(Orientation::Portrait, 1, 0, Column::Full, 1)]);
    }

    #[test]
    fn test_rejects_empty_and_negative() {
        assert!(matches!(plan(0, 0), Err(PlanError::InvalidInput { .. })));
        assert!(matches!(plan(-1, 2), Err(PlanError::InvalidInput { .. })));
        assert!(matches!(plan(3, -4), Err(PlanError::InvalidInput { .. })));
        assert!(matches!(
            plan(i64::from(u32::MAX) + 1, 0),
            Err(PlanError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_one_of_each() {
        let items = plan(1, 1).unwrap();
        assert_eq!(
            items,
            vec![
                item(Orientation::Landscape, 1, 0, Column::Left, 1),
                item(Orientation::Portrait, 1, 0, Column::Right, 1),
            ]
        );
    }

    #[test]
    fn test_three_portraits_cluster() {
        let items = plan(0, 3).unwrap();
        assert_eq!(
            items,
            vec![
                item(Orientation::Portrait, 1, 0, Column::Left, 1),
                item(Orientation::Portrait, 2, 0, Column::Right, 2),
                item(Orientation::Portrait, 3, 1, Column::Left, 1),
            ]
        );
        assert_eq!(max_row_extent(&items), 2);
    }

    #[test]
    fn test_landscapes_only() {
        let items = plan(2, 0).unwrap();
        assert_eq!(
            items,
            vec![
                item(Orientation::Landscape, 1, 0, Column::Full, 1),
                item(Orientation::Landscape, 2, 1, Column::Full, 1),
            ]
        );
    }

    #[test]
    fn test_pairing_then_cluster() {
        let items = plan(1, 4).unwrap();
        assert_eq!(
            items,
            vec![
                item(Orientation::Landscape, 1, 0, Column::Left, 1),
                item(Orientation::Portrait, 1, 0, Column::Right, 1),
                item(Orientation::Portrait, 2, 1, Column::Left, 1),
                item(Orientation::Portrait, 3, 1, Column::Right, 2),
                item(Orientation::Portrait, 4, 2, Column::Left, 1),
            ]
        );
        assert_eq!(max_row_extent(&items), 3);
    }

    #[test]
    fn test_five_portraits_pair_then_cluster() {
        // 5 -> pair (3 left at batch start) -> cluster.
        let items = plan(0, 5).unwrap();
        let spans: Vec<_> = items.iter().map(|i| (i.row, i.column, i.row_span)).collect();
        assert_eq!(
            spans,
            vec![
                (0, Column::Left, 1),
                (0, Column::Right, 1),
                (1, Column::Left, 1),
                (1, Column::Right, 2),
                (2, Column::Left, 1),
            ]
        );
    }

    #[test]
    fn test_two_portraits_no_cluster() {
        let items = plan(0, 2).unwrap();
        assert!(items.iter().all(|i| i.row == 0 && i.row_span == 1));
    }

    #[test]
    fn test_lonely_portrait_after_pairing() {
        // Pairing consumes 2 of each, leaving a single portrait.
        let items = plan(2, 3).unwrap();
        let last = items.last().unwrap();
        assert_eq!(last, &item(Orientation::Portrait, 3, 2, Column::Left, 1));
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_landscape_residue_after_pairing() {
        let items = plan(3, 1).unwrap();
        assert_eq!(items[2], item(Orientation::Landscape, 2, 1, Column::Full, 1));
        assert_eq!(items[3], item(Orientation::Landscape, 3, 2, Column::Full, 1));
    }

    #[test]
    fn test_rows_grouping() {
        let items = plan(1, 4).unwrap();
        let rows = rows(&items);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[&0].len(), 2);
        assert_eq!(rows[&1].len(), 2);
        assert_eq!(rows[&2].len(), 1);
        assert_eq!(rows[&2][0].label, "P4");
    }

    #[test]
    fn test_plan_is_repeatable() {
        assert_eq!(plan(4, 7).unwrap(), plan(4, 7).unwrap());
    }
}
