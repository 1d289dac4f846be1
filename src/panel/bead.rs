//! The bead organizer panel: two unlabeled slot rows filling the whole
//! inner area.

use super::{PanelFaces, PanelStyle, colorized_solid, require_border_fits};
use crate::errors::LayoutError;
use crate::layout::SlotGrid;
use crate::mesh::Solid;
use crate::params::BeadPanelParams;
use crate::sketch::{Face, outline};

/// Lay out the panel's 2D faces.
pub fn faces(params: &BeadPanelParams, style: &PanelStyle) -> Result<PanelFaces, LayoutError> {
    let width = params.width_mm;
    let height = params.height_mm;
    let border = style.outer_border;
    require_border_fits(width, height, border)?;

    let container_w = width - border * 2.0;
    let container_h = height - border * 2.0;
    let grid = SlotGrid::new(
        params.slots_per_row,
        container_w,
        container_h,
        style.slot_spacing,
    )?;

    let mut cuts = Face::empty();
    for slot in grid.place(border, -border) {
        let ring = outline::slot_outline(slot.width, slot.height, slot.x, slot.y);
        cuts = cuts.union(&Face::from_ring(&ring.points));
    }

    let plate = Face::rectangle(width, height, 0.0, 0.0);
    Ok(PanelFaces {
        face: plate.subtract(&cuts),
        engraving: Face::empty(),
        width,
        height,
        thickness: params.thickness,
    })
}

/// Generation entry point: one green solid, centered on the XY origin.
pub fn generate(params: &BeadPanelParams, style: &PanelStyle) -> Result<Vec<Solid>, LayoutError> {
    let sheet = faces(params, style)?;
    Ok(vec![colorized_solid("bead_panel", &sheet)])
}
