//! Vector letter labels.
//!
//! Labels are engraved as single-stroke letters, the style plotter fonts
//! use: each glyph is a handful of open polylines, widened into a channel
//! and subtracted from the top of the plate. The glyph table lives here, on
//! a unit cap-height box (x right, y up, baseline at 0), the way the
//! original modeling stack embeds its own vector font.

use super::Face;
use crate::float_types::{EPSILON, Real};

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Map a zero-based slot index onto the label alphabet; indices wrap, so 26
/// renders 'A' again.
pub fn letter_for_index(index: usize) -> char {
    let bytes = ALPHABET.as_bytes();
    bytes[index % bytes.len()] as char
}

/// One glyph: stroke polylines on the unit box plus its advance width.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub strokes: Vec<Vec<[Real; 2]>>,
    pub advance: Real,
}

/// A letter positioned next to its slot, still as raw stroke polylines.
#[derive(Debug, Clone)]
pub struct LabelGlyph {
    pub letter: char,
    pub strokes: Vec<Vec<[Real; 2]>>,
}

/// Elliptical arc sampled linearly from `start_deg` to `end_deg`; the sweep
/// may run clockwise.
fn sweep(
    center: [Real; 2],
    radii: [Real; 2],
    start_deg: Real,
    end_deg: Real,
    segments: usize,
) -> Vec<[Real; 2]> {
    (0..=segments)
        .map(|i| {
            let t = start_deg + (end_deg - start_deg) * (i as Real) / (segments as Real);
            let theta = t.to_radians();
            [
                center[0] + radii[0] * theta.cos(),
                center[1] + radii[1] * theta.sin(),
            ]
        })
        .collect()
}

/// Concatenate polyline parts, collapsing coincident junction points.
fn joined(parts: &[Vec<[Real; 2]>]) -> Vec<[Real; 2]> {
    let mut out: Vec<[Real; 2]> = Vec::new();
    for part in parts {
        for &point in part {
            if let Some(last) = out.last() {
                if (last[0] - point[0]).abs() <= EPSILON && (last[1] - point[1]).abs() <= EPSILON {
                    continue;
                }
            }
            out.push(point);
        }
    }
    out
}

fn pts(points: &[[Real; 2]]) -> Vec<[Real; 2]> {
    points.to_vec()
}

/// Stroke table for `'A'..='Z'`.
pub fn glyph(letter: char) -> Glyph {
    let (strokes, advance) = match letter {
        'A' => (
            vec![
                pts(&[[0.0, 0.0], [0.35, 1.0], [0.7, 0.0]]),
                pts(&[[0.14, 0.4], [0.56, 0.4]]),
            ],
            0.7,
        ),
        'B' => (
            vec![
                pts(&[[0.0, 0.0], [0.0, 1.0]]),
                joined(&[
                    pts(&[[0.0, 1.0]]),
                    sweep([0.38, 0.775], [0.25, 0.225], 90.0, -90.0, 6),
                    pts(&[[0.0, 0.55]]),
                ]),
                joined(&[
                    pts(&[[0.0, 0.55]]),
                    sweep([0.4, 0.275], [0.3, 0.275], 90.0, -90.0, 6),
                    pts(&[[0.0, 0.0]]),
                ]),
            ],
            0.7,
        ),
        'C' => (
            vec![sweep([0.375, 0.5], [0.375, 0.5], 45.0, 315.0, 10)],
            0.75,
        ),
        'D' => (
            vec![
                pts(&[[0.0, 0.0], [0.0, 1.0]]),
                joined(&[
                    pts(&[[0.0, 1.0]]),
                    sweep([0.3, 0.5], [0.4, 0.5], 90.0, -90.0, 10),
                    pts(&[[0.0, 0.0]]),
                ]),
            ],
            0.7,
        ),
        'E' => (
            vec![
                pts(&[[0.6, 1.0], [0.0, 1.0], [0.0, 0.0], [0.6, 0.0]]),
                pts(&[[0.0, 0.55], [0.45, 0.55]]),
            ],
            0.6,
        ),
        'F' => (
            vec![
                pts(&[[0.6, 1.0], [0.0, 1.0], [0.0, 0.0]]),
                pts(&[[0.0, 0.55], [0.45, 0.55]]),
            ],
            0.6,
        ),
        'G' => (
            vec![joined(&[
                sweep([0.375, 0.5], [0.375, 0.5], 45.0, 360.0, 12),
                pts(&[[0.45, 0.5]]),
            ])],
            0.75,
        ),
        'H' => (
            vec![
                pts(&[[0.0, 0.0], [0.0, 1.0]]),
                pts(&[[0.7, 0.0], [0.7, 1.0]]),
                pts(&[[0.0, 0.5], [0.7, 0.5]]),
            ],
            0.7,
        ),
        'I' => (
            vec![
                pts(&[[0.15, 0.0], [0.15, 1.0]]),
                pts(&[[0.0, 1.0], [0.3, 1.0]]),
                pts(&[[0.0, 0.0], [0.3, 0.0]]),
            ],
            0.3,
        ),
        'J' => (
            vec![joined(&[
                pts(&[[0.55, 1.0]]),
                sweep([0.3, 0.25], [0.25, 0.25], 0.0, -180.0, 8),
            ])],
            0.6,
        ),
        'K' => (
            vec![
                pts(&[[0.0, 0.0], [0.0, 1.0]]),
                pts(&[[0.65, 1.0], [0.0, 0.45]]),
                pts(&[[0.2, 0.62], [0.65, 0.0]]),
            ],
            0.65,
        ),
        'L' => (vec![pts(&[[0.0, 1.0], [0.0, 0.0], [0.55, 0.0]])], 0.55),
        'M' => (
            vec![pts(&[
                [0.0, 0.0],
                [0.0, 1.0],
                [0.425, 0.35],
                [0.85, 1.0],
                [0.85, 0.0],
            ])],
            0.85,
        ),
        'N' => (
            vec![pts(&[[0.0, 0.0], [0.0, 1.0], [0.7, 0.0], [0.7, 1.0]])],
            0.7,
        ),
        'O' => (
            vec![sweep([0.375, 0.5], [0.375, 0.5], 0.0, 360.0, 16)],
            0.75,
        ),
        'P' => (
            vec![
                pts(&[[0.0, 0.0], [0.0, 1.0]]),
                joined(&[
                    pts(&[[0.0, 1.0]]),
                    sweep([0.36, 0.75], [0.29, 0.25], 90.0, -90.0, 8),
                    pts(&[[0.0, 0.5]]),
                ]),
            ],
            0.68,
        ),
        'Q' => (
            vec![
                sweep([0.375, 0.5], [0.375, 0.5], 0.0, 360.0, 16),
                pts(&[[0.5, 0.22], [0.78, -0.06]]),
            ],
            0.78,
        ),
        'R' => (
            vec![
                pts(&[[0.0, 0.0], [0.0, 1.0]]),
                joined(&[
                    pts(&[[0.0, 1.0]]),
                    sweep([0.36, 0.75], [0.29, 0.25], 90.0, -90.0, 8),
                    pts(&[[0.0, 0.5]]),
                ]),
                pts(&[[0.3, 0.5], [0.68, 0.0]]),
            ],
            0.68,
        ),
        'S' => (
            vec![joined(&[
                sweep([0.35, 0.75], [0.3, 0.25], 30.0, 270.0, 8),
                sweep([0.35, 0.25], [0.3, 0.25], 90.0, -150.0, 8),
            ])],
            0.65,
        ),
        'T' => (
            vec![
                pts(&[[0.0, 1.0], [0.7, 1.0]]),
                pts(&[[0.35, 1.0], [0.35, 0.0]]),
            ],
            0.7,
        ),
        'U' => (
            vec![joined(&[
                pts(&[[0.0, 1.0]]),
                sweep([0.35, 0.3], [0.35, 0.3], 180.0, 360.0, 10),
                pts(&[[0.7, 1.0]]),
            ])],
            0.7,
        ),
        'V' => (vec![pts(&[[0.0, 1.0], [0.35, 0.0], [0.7, 1.0]])], 0.7),
        'W' => (
            vec![pts(&[
                [0.0, 1.0],
                [0.2375, 0.0],
                [0.475, 0.65],
                [0.7125, 0.0],
                [0.95, 1.0],
            ])],
            0.95,
        ),
        'X' => (
            vec![
                pts(&[[0.0, 0.0], [0.7, 1.0]]),
                pts(&[[0.0, 1.0], [0.7, 0.0]]),
            ],
            0.7,
        ),
        'Y' => (
            vec![
                pts(&[[0.0, 1.0], [0.35, 0.45], [0.35, 0.0]]),
                pts(&[[0.7, 1.0], [0.35, 0.45]]),
            ],
            0.7,
        ),
        'Z' => (
            vec![pts(&[[0.0, 1.0], [0.65, 1.0], [0.0, 0.0], [0.65, 0.0]])],
            0.65,
        ),
        _ => (Vec::new(), 0.0),
    };
    Glyph { strokes, advance }
}

/// Strokes for the label of slot `index`, scaled to `cap_height` and
/// anchored at the slot's top-left corner `(offset_x, offset_y)`.
///
/// The letter band sits one cap height below the slot's top edge, spanning
/// `y ∈ [offset_y - 2*cap_height, offset_y - cap_height]`. Every call
/// rebuilds the glyph from the table; repeated letters are not cached,
/// since generation is single-pass.
pub fn label_strokes(
    index: usize,
    cap_height: Real,
    offset_x: Real,
    offset_y: Real,
) -> LabelGlyph {
    let letter = letter_for_index(index);
    let table = glyph(letter);
    let strokes = table
        .strokes
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .map(|&[x, y]| {
                    [
                        offset_x + cap_height * x,
                        offset_y - 2.0 * cap_height + cap_height * y,
                    ]
                })
                .collect()
        })
        .collect();
    LabelGlyph { letter, strokes }
}

/// Sample count for stroke joints and caps.
const JOINT_SEGMENTS: usize = 16;

/// Widen stroke polylines into a region `stroke_width` across: one quad per
/// segment plus a round joint at every vertex, unioned together.
pub fn stroke_face(strokes: &[Vec<[Real; 2]>], stroke_width: Real) -> Face {
    let half = stroke_width / 2.0;
    let mut face = Face::empty();
    for stroke in strokes {
        for pair in stroke.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dx = b[0] - a[0];
            let dy = b[1] - a[1];
            let length = (dx * dx + dy * dy).sqrt();
            if length <= EPSILON {
                continue;
            }
            let nx = -dy / length * half;
            let ny = dx / length * half;
            face = face.union(&Face::from_ring(&[
                [a[0] + nx, a[1] + ny],
                [b[0] + nx, b[1] + ny],
                [b[0] - nx, b[1] - ny],
                [a[0] - nx, a[1] - ny],
            ]));
        }
        for &point in stroke {
            face = face.union(&Face::circle(point, half, JOINT_SEGMENTS));
        }
    }
    face
}
