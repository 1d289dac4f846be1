//! Slot boundary outlines.
//!
//! Two cut-out shapes appear on the panels: the lettered slot, a capsule
//! with an angled top edge, and the plain rounded rectangle used by the
//! side-column bays. Both are anchored by their top-left corner in a Y-down
//! frame: `offset_y` is the top edge, `offset_y - height` the bottom.

use super::path::PathBuilder;
use crate::float_types::{FRAC_PI_2, PI, Real};

/// Fillet and bevel radius shared by every slot corner.
pub const CORNER_RADIUS: Real = 2.0;

/// Sample count per corner arc.
pub const ARC_SEGMENTS: usize = 8;

/// An ordered, closed boundary of one slot cut-out.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotOutline {
    /// Ring points; the last point equals the first.
    pub points: Vec<[Real; 2]>,
    /// Segment groups the boundary was assembled from.
    pub segments: usize,
}

/// Boundary of a lettered slot.
///
/// Eight segments in fixed traversal order: the top-left bevel arc
/// (135°→180°), the left wall, the bottom-left fillet (180°→270°), the
/// bottom wall, the bottom-right fillet (270°→360°), the right wall, the
/// top-right fillet (0°→90°), and the top-right bevel arc (90°→135°). The
/// closing edge from the last bevel back to the first is the angled top of
/// the slot. The angle ranges and their order are what make the fillets
/// meet into a closed, non-self-intersecting ring; do not reorder them.
///
/// Dimensions below 4x [`CORNER_RADIUS`] produce a degenerate,
/// self-intersecting ring. The grid and column constructors reject layouts
/// that small before any outline is drawn.
pub fn slot_outline(width: Real, height: Real, offset_x: Real, offset_y: Real) -> SlotOutline {
    let r = CORNER_RADIUS;
    let x_l = offset_x;
    let x_r = offset_x + width;
    let y_top = offset_y;
    let y_mid = offset_y - height / 2.0;
    let y_bot = offset_y - height;

    let mut path = PathBuilder::new();
    path.arc([x_l + r, y_mid - r], r, PI * 0.75, PI, ARC_SEGMENTS)
        .line([x_l, y_mid - r], [x_l, y_bot + r])
        .arc([x_l + r, y_bot + r], r, PI, PI * 1.5, ARC_SEGMENTS)
        .line([x_l + r, y_bot], [x_r - r, y_bot])
        .arc([x_r - r, y_bot + r], r, PI * 1.5, 0.0, ARC_SEGMENTS)
        .line([x_r, y_bot + r], [x_r, y_top - r])
        .arc([x_r - r, y_top - r], r, 0.0, FRAC_PI_2, ARC_SEGMENTS)
        .arc([x_r - 2.0 * r, y_top - r], r, FRAC_PI_2, PI * 0.75, ARC_SEGMENTS);

    let segments = path.segment_count();
    SlotOutline {
        points: path.close(),
        segments,
    }
}

/// Boundary of a side-column bay: a rounded rectangle with four quarter
/// fillets of [`CORNER_RADIUS`].
pub fn rounded_rect_outline(
    width: Real,
    height: Real,
    offset_x: Real,
    offset_y: Real,
) -> SlotOutline {
    let r = CORNER_RADIUS;
    let x_l = offset_x;
    let x_r = offset_x + width;
    let y_top = offset_y;
    let y_bot = offset_y - height;

    let mut path = PathBuilder::new();
    path.line([x_l, y_top - r], [x_l, y_bot + r])
        .arc([x_l + r, y_bot + r], r, PI, PI * 1.5, ARC_SEGMENTS)
        .line([x_l + r, y_bot], [x_r - r, y_bot])
        .arc([x_r - r, y_bot + r], r, PI * 1.5, 0.0, ARC_SEGMENTS)
        .line([x_r, y_bot + r], [x_r, y_top - r])
        .arc([x_r - r, y_top - r], r, 0.0, FRAC_PI_2, ARC_SEGMENTS)
        .line([x_r - r, y_top], [x_l + r, y_top])
        .arc([x_l + r, y_top - r], r, FRAC_PI_2, PI, ARC_SEGMENTS);

    let segments = path.segment_count();
    SlotOutline {
        points: path.close(),
        segments,
    }
}
