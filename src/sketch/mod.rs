//! 2D sketch layer: boundary paths, slot outlines, label glyphs, and the
//! boolean region algebra the panel faces are assembled with.
//!
//! Boolean work is delegated to `geo` ([`BooleanOps`]); this module only
//! wraps it in a [`Face`] type normalized to exterior-CCW / hole-CW
//! orientation so the mesh layer can read winding off the rings directly.

pub mod glyphs;
pub mod outline;
pub mod path;

use crate::float_types::{Real, TAU};
use geo::orient::Direction;
use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Orient, Polygon};

/// A planar region: zero or more polygons with holes.
#[derive(Debug, Clone)]
pub struct Face(pub MultiPolygon<Real>);

impl Face {
    pub fn empty() -> Self {
        Face(MultiPolygon(Vec::new()))
    }

    /// Region enclosed by a single ring of points.
    pub fn from_ring(points: &[[Real; 2]]) -> Self {
        let coords: Vec<Coord<Real>> = points.iter().map(|&[x, y]| Coord { x, y }).collect();
        let polygon = Polygon::new(LineString::new(coords), vec![]);
        Face(MultiPolygon(vec![polygon]).orient(Direction::Default))
    }

    /// Axis-aligned rectangle anchored by its top-left corner in the Y-down
    /// panel frame.
    pub fn rectangle(width: Real, height: Real, offset_x: Real, offset_y: Real) -> Self {
        Self::from_ring(&[
            [offset_x, offset_y - height],
            [offset_x + width, offset_y - height],
            [offset_x + width, offset_y],
            [offset_x, offset_y],
        ])
    }

    /// Discretized circle.
    pub fn circle(center: [Real; 2], radius: Real, segments: usize) -> Self {
        let points: Vec<[Real; 2]> = (0..segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (segments as Real);
                [
                    center[0] + radius * theta.cos(),
                    center[1] + radius * theta.sin(),
                ]
            })
            .collect();
        Self::from_ring(&points)
    }

    pub fn union(&self, other: &Face) -> Face {
        if self.0.0.is_empty() {
            return other.clone();
        }
        if other.0.0.is_empty() {
            return self.clone();
        }
        Face(self.0.union(&other.0).orient(Direction::Default))
    }

    pub fn subtract(&self, other: &Face) -> Face {
        if self.0.0.is_empty() || other.0.0.is_empty() {
            return self.clone();
        }
        Face(self.0.difference(&other.0).orient(Direction::Default))
    }

    pub fn intersect(&self, other: &Face) -> Face {
        if self.0.0.is_empty() || other.0.0.is_empty() {
            return Face::empty();
        }
        Face(self.0.intersection(&other.0).orient(Direction::Default))
    }

    pub fn is_empty(&self) -> bool {
        self.0.0.is_empty()
    }

    pub fn area(&self) -> Real {
        self.0.unsigned_area()
    }
}
