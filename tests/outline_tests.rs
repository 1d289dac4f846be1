mod support;

use slotboard::float_types::{EPSILON, Real};
use slotboard::sketch::outline::{CORNER_RADIUS, rounded_rect_outline, slot_outline};

use crate::support::{approx_eq, signed_area};

#[test]
fn slot_outline_is_closed() {
    let outline = slot_outline(20.0, 12.0, 0.0, 0.0);
    let first = outline.points[0];
    let last = outline.points[outline.points.len() - 1];
    assert_eq!(first, last, "ring must end where it starts");
}

#[test]
fn slot_outline_has_no_duplicate_neighbors() {
    let outline = slot_outline(20.0, 12.0, 5.0, -3.0);
    for pair in outline.points.windows(2) {
        let dx = pair[1][0] - pair[0][0];
        let dy = pair[1][1] - pair[0][1];
        assert!(
            dx.abs() > EPSILON || dy.abs() > EPSILON,
            "consecutive points must not coincide: {:?}",
            pair
        );
    }
}

#[test]
fn slot_outline_has_eight_segment_groups() {
    let outline = slot_outline(20.0, 12.0, 0.0, 0.0);
    assert_eq!(outline.segments, 8);
    // 4 fillets and 2 bevel arcs at 9 samples each, 3 walls, shared
    // endpoints collapsed, plus the closing point
    assert_eq!(outline.points.len(), 46);
}

#[test]
fn slot_outline_winds_counter_clockwise() {
    let outline = slot_outline(20.0, 12.0, 0.0, 0.0);
    assert!(signed_area(&outline.points) > 0.0);
}

#[test]
fn slot_outline_stays_inside_its_anchor_box() {
    let (w, h, ox, oy) = (18.0, 11.0, 7.0, -6.0);
    let outline = slot_outline(w, h, ox, oy);
    for p in &outline.points {
        assert!(p[0] >= ox - 1e-12 && p[0] <= ox + w + 1e-12, "x out of box: {p:?}");
        assert!(p[1] >= oy - h - 1e-12 && p[1] <= oy + 1e-12, "y out of box: {p:?}");
    }
}

#[test]
fn slot_outline_starts_on_the_left_bevel() {
    // first sample is the 135° point of the arc centered one radius inside
    // the left-middle corner
    let (w, h, ox, oy) = (20.0, 12.0, 0.0, 0.0);
    let outline = slot_outline(w, h, ox, oy);
    let r = CORNER_RADIUS;
    let half = (2.0 as Real).sqrt() / 2.0;
    let expected_x = ox + r - r * half;
    let expected_y = (oy - h / 2.0 - r) + r * half;
    assert!(approx_eq(outline.points[0][0], expected_x, 1e-9));
    assert!(approx_eq(outline.points[0][1], expected_y, 1e-9));
}

#[test]
fn slot_outline_area_is_close_to_its_box() {
    // capsule area: the box minus the corner material removed by the four
    // fillets, the two bevel arcs, and the angled top
    let (w, h) = (20.0, 12.0);
    let outline = slot_outline(w, h, 0.0, 0.0);
    let area = signed_area(&outline.points);
    assert!(area > 0.7 * w * h && area < w * h, "area {area}");
}

#[test]
fn rounded_rect_outline_is_closed_with_eight_segments() {
    let outline = rounded_rect_outline(22.1, 31.5, 6.0, -71.0);
    assert_eq!(outline.segments, 8);
    let first = outline.points[0];
    let last = outline.points[outline.points.len() - 1];
    assert_eq!(first, last);
    for pair in outline.points.windows(2) {
        let dx = pair[1][0] - pair[0][0];
        let dy = pair[1][1] - pair[0][1];
        assert!(dx.abs() > EPSILON || dy.abs() > EPSILON);
    }
}

#[test]
fn rounded_rect_outline_area_loses_only_the_corners() {
    let (w, h) = (20.0, 10.0);
    let outline = rounded_rect_outline(w, h, 0.0, 0.0);
    let area = signed_area(&outline.points);
    let r = CORNER_RADIUS;
    let exact = w * h - (4.0 - std::f64::consts::PI) * r * r;
    // discretized fillets sit slightly inside the true arcs
    assert!(area <= exact + 1e-9, "area {area} vs exact {exact}");
    assert!(area > exact - 0.2, "area {area} vs exact {exact}");
}
