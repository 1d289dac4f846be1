//! Validation errors
//!
//! The original generators let degenerate layouts flow straight into the
//! boolean stage and surface only as malformed geometry. Here every derived
//! dimension is checked when a grid, column, or panel is constructed.

use crate::float_types::Real;
use thiserror::Error;

/// All the possible layout issues we might encounter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The outer border consumes the whole panel.
    #[error("a {width} x {height} mm panel cannot fit a {border} mm outer border")]
    BorderExceedsPanel {
        width: Real,
        height: Real,
        border: Real,
    },
    /// Slot width came out non-positive for the requested count per row.
    #[error(
        "{count} slots per row leave {computed} mm of slot width in a {container} mm wide container"
    )]
    NonPositiveSlotWidth {
        count: u32,
        computed: Real,
        container: Real,
    },
    /// Slot height came out non-positive for a two-row grid.
    #[error("slot height computes to {computed} mm in a {container} mm tall container")]
    NonPositiveSlotHeight { computed: Real, container: Real },
    /// Side-column row height came out non-positive.
    #[error("{rows} rows leave {computed} mm of row height in a {container} mm tall column")]
    NonPositiveRowHeight {
        rows: u32,
        computed: Real,
        container: Real,
    },
    /// More split rows than rows in a side column.
    #[error("{split_rows} split rows exceed the {rows} total rows")]
    SplitRowsExceedRows { split_rows: u32, rows: u32 },
    /// A count parameter must be at least one.
    #[error("at least one {what} is required")]
    CountTooSmall { what: &'static str },
}

/// Failures at the host parameter boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// The host supplied a name that no parameter definition declares.
    #[error("unknown parameter {name:?}")]
    UnknownParameter { name: String },
    /// NaN or infinite input.
    #[error("parameter {name:?} is not finite")]
    NonFiniteValue { name: &'static str },
    /// An int-typed parameter received a fractional value.
    #[error("parameter {name:?} expects an integer, got {value}")]
    NotAnInteger { name: &'static str, value: Real },
    /// A count parameter received a negative or oversized value.
    #[error("parameter {name:?} is out of range: {value}")]
    OutOfRange { name: &'static str, value: Real },
}
