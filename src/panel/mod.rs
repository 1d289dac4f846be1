//! Panel generators.
//!
//! Two variants share the same slot machinery: the lettered panel (two rows
//! of labeled slots over a pair of side columns) and the bead panel (two
//! plain rows filling the whole inner area). Each generator derives its
//! dimensions, lays out cut-outs in the Y-down panel frame, subtracts them
//! from the plate face, and hands back one green solid centered on the XY
//! origin with z in `[0, thickness]`.

pub mod bead;
pub mod lettered;

use crate::errors::LayoutError;
use crate::float_types::Real;
use crate::mesh::{self, Solid};
use crate::sketch::Face;

/// Styling knobs that were module-level constants in earlier revisions of
/// these generators; passed explicitly so every component stays pure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    /// Solid margin kept around the panel edge, millimeters.
    pub outer_border: Real,
    /// Gap between neighboring slots and bays, millimeters.
    pub slot_spacing: Real,
    /// Share of the inner height given to the lettered slot grid.
    pub lettered_height_fraction: Real,
    /// Share of the inner width given to each side column.
    pub side_column_width_fraction: Real,
    /// Engraved label channel width, millimeters.
    pub label_stroke_width: Real,
    /// Label cap height as a fraction of slot height (divisor).
    pub label_cap_divisor: Real,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            outer_border: 6.0,
            slot_spacing: 3.0,
            lettered_height_fraction: 0.375,
            side_column_width_fraction: 0.2,
            label_stroke_width: 1.0,
            label_cap_divisor: 9.0,
        }
    }
}

/// The single output color of both panels.
pub const PANEL_GREEN: [Real; 3] = [0.0, 0.5, 0.0];

/// A panel reduced to its 2D faces, before extrusion: the through-cut face
/// and the label engraving region, both still in the panel frame (top-left
/// of the plate at the origin, y down).
#[derive(Debug, Clone)]
pub struct PanelFaces {
    pub face: Face,
    pub engraving: Face,
    pub width: Real,
    pub height: Real,
    pub thickness: Real,
}

/// Extrude, engrave to half depth, recenter on the XY origin, colorize.
pub fn colorized_solid(name: &str, sheet: &PanelFaces) -> Solid {
    let mesh = mesh::engraved_plate(
        &sheet.face,
        &sheet.engraving,
        sheet.thickness,
        sheet.thickness / 2.0,
    )
    .translate(-sheet.width / 2.0, sheet.height / 2.0, 0.0);
    Solid::new(name, PANEL_GREEN, mesh)
}

fn require_border_fits(width: Real, height: Real, border: Real) -> Result<(), LayoutError> {
    if width <= border * 2.0 || height <= border * 2.0 {
        return Err(LayoutError::BorderExceedsPanel {
            width,
            height,
            border,
        });
    }
    Ok(())
}
