mod support;

use slotboard::errors::LayoutError;
use slotboard::layout::{SideColumn, SlotGrid};

use crate::support::approx_eq;

#[test]
fn grid_tiles_two_rows_in_reading_order() {
    // the 10in x 7in lettered-panel container
    let grid = SlotGrid::new(13, 242.0, 62.175, 3.0).unwrap();
    assert!(approx_eq(grid.slot_width(), 206.0 / 13.0, 1e-12));
    assert!(approx_eq(grid.slot_height(), 29.5875, 1e-12));

    let slots = grid.place(6.0, -6.0);
    assert_eq!(slots.len(), 26);
    for (i, slot) in slots.iter().enumerate() {
        assert_eq!(slot.index, i);
    }

    // first row at the anchor, second row one slot height plus spacing below
    for slot in &slots[..13] {
        assert!(approx_eq(slot.y, -6.0, 1e-12));
    }
    let second_row_y = -6.0 - (grid.slot_height() + 3.0);
    for slot in &slots[13..] {
        assert!(approx_eq(slot.y, second_row_y, 1e-12));
    }

    // consecutive offsets differ by slot width plus spacing
    for row in [&slots[..13], &slots[13..]] {
        for pair in row.windows(2) {
            let dx = pair[1].x - pair[0].x;
            assert!(approx_eq(dx, grid.slot_width() + 3.0, 1e-9));
        }
    }
    assert!(approx_eq(slots[0].x, 6.0, 1e-12));
    assert!(approx_eq(slots[13].x, 6.0, 1e-12));
}

#[test]
fn grid_with_one_slot_per_row_spans_the_container() {
    let grid = SlotGrid::new(1, 242.0, 165.8, 3.0).unwrap();
    assert!(approx_eq(grid.slot_width(), 242.0, 1e-12));
    let slots = grid.place(6.0, -6.0);
    assert_eq!(slots.len(), 2);
    assert!(approx_eq(slots[0].width, 242.0, 1e-12));
    assert!(approx_eq(slots[1].width, 242.0, 1e-12));
}

#[test]
fn grid_rejects_zero_count() {
    let err = SlotGrid::new(0, 242.0, 62.0, 3.0).unwrap_err();
    assert!(matches!(err, LayoutError::CountTooSmall { .. }));
}

#[test]
fn grid_rejects_counts_that_leave_no_slot_width() {
    let err = SlotGrid::new(40, 100.0, 62.0, 3.0).unwrap_err();
    assert!(matches!(err, LayoutError::NonPositiveSlotWidth { count: 40, .. }));
}

#[test]
fn grid_rejects_containers_too_flat_for_two_rows() {
    let err = SlotGrid::new(4, 100.0, 3.0, 3.0).unwrap_err();
    assert!(matches!(err, LayoutError::NonPositiveSlotHeight { .. }));
}

#[test]
fn side_column_stacks_split_then_full_rows() {
    // the 10in x 7in side-column region
    let column = SideColumn::new(3, 1, 47.2, 100.625, 3.0).unwrap();
    assert!(approx_eq(column.row_height(), 94.625 / 3.0, 1e-12));
    assert!(approx_eq(column.split_width(), 22.1, 1e-12));

    let bays = column.place(6.0, -71.175);
    assert_eq!(bays.len(), 4);

    // split row: two half-width bays sharing a y
    assert!(approx_eq(bays[0].x, 6.0, 1e-12));
    assert!(approx_eq(bays[1].x, 6.0 + 22.1 + 3.0, 1e-12));
    assert!(approx_eq(bays[0].y, bays[1].y, 1e-12));
    assert!(approx_eq(bays[0].width, 22.1, 1e-12));

    // the remaining rows are full width, stepping down one row each
    let step = column.row_height() + 3.0;
    assert!(approx_eq(bays[2].width, 47.2, 1e-12));
    assert!(approx_eq(bays[3].width, 47.2, 1e-12));
    assert!(approx_eq(bays[2].y, -71.175 - step, 1e-9));
    assert!(approx_eq(bays[3].y, -71.175 - 2.0 * step, 1e-9));
}

#[test]
fn side_column_with_all_rows_split_has_no_full_rows() {
    let column = SideColumn::new(2, 2, 40.0, 80.0, 3.0).unwrap();
    let bays = column.place(0.0, 0.0);
    assert_eq!(bays.len(), 4);
    for bay in &bays {
        assert!(approx_eq(bay.width, (40.0 - 3.0) / 2.0, 1e-12));
    }
}

#[test]
fn side_column_with_no_split_rows_is_all_full_width() {
    let column = SideColumn::new(3, 0, 40.0, 80.0, 3.0).unwrap();
    let bays = column.place(0.0, 0.0);
    assert_eq!(bays.len(), 3);
    for bay in &bays {
        assert!(approx_eq(bay.width, 40.0, 1e-12));
    }
}

#[test]
fn side_column_rejects_more_splits_than_rows() {
    let err = SideColumn::new(3, 5, 40.0, 80.0, 3.0).unwrap_err();
    assert_eq!(
        err,
        LayoutError::SplitRowsExceedRows {
            split_rows: 5,
            rows: 3
        }
    );
}

#[test]
fn side_column_rejects_zero_rows() {
    let err = SideColumn::new(0, 0, 40.0, 80.0, 3.0).unwrap_err();
    assert!(matches!(err, LayoutError::CountTooSmall { .. }));
}

#[test]
fn side_column_rejects_rows_that_leave_no_height() {
    let err = SideColumn::new(30, 0, 40.0, 60.0, 3.0).unwrap_err();
    assert!(matches!(err, LayoutError::NonPositiveRowHeight { rows: 30, .. }));
}
