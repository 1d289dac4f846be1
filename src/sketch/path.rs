//! Closed-boundary assembly from straight and arc segments.
//!
//! Slot boundaries are built the way a 2D drafting layer builds them: a
//! sequence of line and arc segments appended in traversal order, then
//! closed into a ring. Arc sampling runs counter-clockwise; an end angle at
//! or below the start angle is normalized up by a full turn, so a fillet
//! from 270° to 0° sweeps the expected quarter circle.

use crate::float_types::{EPSILON, Real, TAU};

/// Sample an arc into `segments + 1` points, counter-clockwise from
/// `start_angle` to `end_angle` (radians).
pub fn arc_points(
    center: [Real; 2],
    radius: Real,
    start_angle: Real,
    end_angle: Real,
    segments: usize,
) -> Vec<[Real; 2]> {
    let mut end = end_angle;
    while end <= start_angle {
        end += TAU;
    }
    (0..=segments)
        .map(|i| {
            let theta = start_angle + (end - start_angle) * (i as Real) / (segments as Real);
            [
                center[0] + radius * theta.cos(),
                center[1] + radius * theta.sin(),
            ]
        })
        .collect()
}

/// Accumulates boundary segments and closes them into a polygon ring.
///
/// Consecutive coincident points (shared segment endpoints) collapse on
/// append, so the finished ring has no duplicate neighbors. Closing appends
/// the first point again; when the last appended point does not already
/// coincide with the first, that closure edge is a real straight segment of
/// the boundary.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    points: Vec<[Real; 2]>,
    segments: usize,
}

impl PathBuilder {
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            segments: 0,
        }
    }

    /// Append a counter-clockwise arc segment.
    pub fn arc(
        &mut self,
        center: [Real; 2],
        radius: Real,
        start_angle: Real,
        end_angle: Real,
        segments: usize,
    ) -> &mut Self {
        let samples = arc_points(center, radius, start_angle, end_angle, segments);
        self.append(&samples);
        self.segments += 1;
        self
    }

    /// Append a straight segment from `a` to `b`.
    pub fn line(&mut self, a: [Real; 2], b: [Real; 2]) -> &mut Self {
        self.append(&[a, b]);
        self.segments += 1;
        self
    }

    /// Number of segment groups appended so far.
    pub const fn segment_count(&self) -> usize {
        self.segments
    }

    fn append(&mut self, samples: &[[Real; 2]]) {
        for &point in samples {
            if let Some(last) = self.points.last() {
                if coincident(*last, point) {
                    continue;
                }
            }
            self.points.push(point);
        }
    }

    /// Close the boundary into a ring whose last point equals its first.
    pub fn close(mut self) -> Vec<[Real; 2]> {
        let count = self.points.len();
        if count > 0 {
            let first = self.points[0];
            if coincident(first, self.points[count - 1]) {
                // snap the wrap-around point onto the start exactly
                self.points[count - 1] = first;
            } else {
                self.points.push(first);
            }
        }
        self.points
    }
}

fn coincident(a: [Real; 2], b: [Real; 2]) -> bool {
    (a[0] - b[0]).abs() <= EPSILON && (a[1] - b[1]).abs() <= EPSILON
}
