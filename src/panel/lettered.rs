//! The lettered organizer panel: a two-row grid of labeled slots across the
//! top, two columns of bays along the bottom edges.

use super::{PanelFaces, PanelStyle, colorized_solid, require_border_fits};
use crate::errors::LayoutError;
use crate::layout::{SideColumn, SlotGrid};
use crate::mesh::Solid;
use crate::params::LetteredPanelParams;
use crate::sketch::{Face, glyphs, outline};

/// Lay out the panel's 2D faces.
pub fn faces(params: &LetteredPanelParams, style: &PanelStyle) -> Result<PanelFaces, LayoutError> {
    let width = params.width_mm;
    let height = params.height_mm;
    let border = style.outer_border;
    let spacing = style.slot_spacing;
    require_border_fits(width, height, border)?;

    let lettered_w = width - border * 2.0;
    let lettered_h = style.lettered_height_fraction * (height - border * 2.0);
    let grid = SlotGrid::new(
        params.lettered_slots_per_row,
        lettered_w,
        lettered_h,
        spacing,
    )?;

    let mut cuts = Face::empty();
    let mut engraving = Face::empty();
    for slot in grid.place(border, -border) {
        let ring = outline::slot_outline(slot.width, slot.height, slot.x, slot.y);
        cuts = cuts.union(&Face::from_ring(&ring.points));

        let label = glyphs::label_strokes(
            slot.index,
            slot.height / style.label_cap_divisor,
            slot.x,
            slot.y,
        );
        engraving = engraving.union(&glyphs::stroke_face(&label.strokes, style.label_stroke_width));
    }

    let column_w = (width - (border * 2.0 + spacing * 2.0)) * style.side_column_width_fraction;
    let columns_h = height - (border * 2.0 + lettered_h + spacing);
    let columns_y = -height + border + columns_h;
    let column = SideColumn::new(
        params.side_column_rows,
        params.side_column_split_rows,
        column_w,
        columns_h,
        spacing,
    )?;
    for x in [border, width - border - column_w] {
        for bay in column.place(x, columns_y) {
            let ring = outline::rounded_rect_outline(bay.width, bay.height, bay.x, bay.y);
            cuts = cuts.union(&Face::from_ring(&ring.points));
        }
    }

    let plate = Face::rectangle(width, height, 0.0, 0.0);
    Ok(PanelFaces {
        face: plate.subtract(&cuts),
        engraving,
        width,
        height,
        thickness: params.thickness,
    })
}

/// Generation entry point: one green solid, centered on the XY origin.
pub fn generate(
    params: &LetteredPanelParams,
    style: &PanelStyle,
) -> Result<Vec<Solid>, LayoutError> {
    let sheet = faces(params, style)?;
    Ok(vec![colorized_solid("lettered_panel", &sheet)])
}
