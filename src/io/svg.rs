//! Top-view SVG export of a panel face.
//!
//! The panel frame keeps y at or below zero going down the plate; SVG's y
//! axis grows downward from the top, so points map through `y -> -y`.

use crate::float_types::Real;
use crate::sketch::Face;
use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

/// Render the face as a filled drawing, holes punched via the even-odd
/// fill rule.
pub fn face_to_svg(face: &Face, margin: Real) -> Document {
    let mut min_x = Real::MAX;
    let mut min_y = Real::MAX;
    let mut max_x = Real::MIN;
    let mut max_y = Real::MIN;

    let mut data = Data::new();
    for polygon in &face.0.0 {
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors().iter()) {
            let coords = &ring.0;
            if coords.len() < 3 {
                continue;
            }
            for c in coords {
                min_x = min_x.min(c.x);
                max_x = max_x.max(c.x);
                min_y = min_y.min(-c.y);
                max_y = max_y.max(-c.y);
            }
            data = data.move_to((coords[0].x, -coords[0].y));
            // rings are closed; the duplicate final point becomes `z`
            for c in &coords[1..coords.len() - 1] {
                data = data.line_to((c.x, -c.y));
            }
            data = data.close();
        }
    }

    if min_x > max_x {
        return Document::new().set("viewBox", "0 0 1 1");
    }

    let path = Path::new()
        .set("d", data)
        .set("fill", "#2e8b57")
        .set("fill-rule", "evenodd")
        .set("stroke", "none");

    Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                min_x - margin,
                min_y - margin,
                (max_x - min_x) + margin * 2.0,
                (max_y - min_y) + margin * 2.0
            ),
        )
        .add(path)
}
