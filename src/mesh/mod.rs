//! Triangle-mesh assembly for extruded panel solids.
//!
//! Every cut in a panel is a Z-aligned prism, so the booleans all happen in
//! 2D on the panel face and the solid is assembled from slabs afterwards:
//! caps are ear-cut triangulations of the face, walls are quads along the
//! face rings. Rings arrive oriented exterior-CCW / hole-CW (the [`Face`]
//! invariant), which puts a wall's outward normal 90° to the right of its
//! ring's travel direction.

use crate::float_types::{EPSILON, Real};
use crate::sketch::Face;
use geo::{LineString, MultiPolygon, TriangulateEarcut};
use nalgebra::Point3;

pub type Triangle = [Point3<Real>; 3];

/// A solid as a bag of triangles, ready for STL encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    pub triangles: Vec<Triangle>,
}

impl TriMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn extend(&mut self, other: TriMesh) {
        self.triangles.extend(other.triangles);
    }

    /// Returns a new mesh translated by x, y, and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> TriMesh {
        let triangles = self
            .triangles
            .iter()
            .map(|tri| tri.map(|p| Point3::new(p.x + x, p.y + y, p.z + z)))
            .collect();
        TriMesh { triangles }
    }

    /// Axis-aligned bounds as `([min_x, min_y, min_z], [max_x, max_y, max_z])`.
    pub fn bounding_box(&self) -> ([Real; 3], [Real; 3]) {
        let mut mins = [Real::MAX; 3];
        let mut maxs = [Real::MIN; 3];
        for tri in &self.triangles {
            for p in tri {
                let coords = [p.x, p.y, p.z];
                for axis in 0..3 {
                    if coords[axis] < mins[axis] {
                        mins[axis] = coords[axis];
                    }
                    if coords[axis] > maxs[axis] {
                        maxs[axis] = coords[axis];
                    }
                }
            }
        }
        (mins, maxs)
    }

    /// Signed enclosed volume; positive when triangles wind outward.
    pub fn volume(&self) -> Real {
        self.triangles
            .iter()
            .map(|[a, b, c]| {
                let u = b - a;
                let v = c - a;
                a.coords.dot(&u.cross(&v)) / 6.0
            })
            .sum()
    }
}

/// Ear-cut one face into cap triangles at height `z`, winding them so the
/// facet normal points up when `upward` and down otherwise.
fn cap_triangles(region: &MultiPolygon<Real>, z: Real, upward: bool) -> Vec<Triangle> {
    let mut out = Vec::new();
    for polygon in &region.0 {
        let triangulation = polygon.earcut_triangles_raw();
        let vertices = triangulation.vertices;
        for tri in triangulation.triangle_indices.chunks_exact(3) {
            let mut points = [
                Point3::new(vertices[2 * tri[0]], vertices[2 * tri[0] + 1], z),
                Point3::new(vertices[2 * tri[1]], vertices[2 * tri[1] + 1], z),
                Point3::new(vertices[2 * tri[2]], vertices[2 * tri[2] + 1], z),
            ];
            let ux = points[1].x - points[0].x;
            let uy = points[1].y - points[0].y;
            let vx = points[2].x - points[0].x;
            let vy = points[2].y - points[0].y;
            let cross = ux * vy - uy * vx;
            if cross.abs() <= EPSILON {
                continue;
            }
            if (cross > 0.0) != upward {
                points.swap(1, 2);
            }
            out.push(points);
        }
    }
    out
}

fn ring_walls(ring: &LineString<Real>, z0: Real, z1: Real, out: &mut Vec<Triangle>) {
    for pair in ring.0.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if (a.x - b.x).abs() <= EPSILON && (a.y - b.y).abs() <= EPSILON {
            continue;
        }
        let a0 = Point3::new(a.x, a.y, z0);
        let b0 = Point3::new(b.x, b.y, z0);
        let b1 = Point3::new(b.x, b.y, z1);
        let a1 = Point3::new(a.x, a.y, z1);
        out.push([a0, b0, b1]);
        out.push([a0, b1, a1]);
    }
}

/// Wall quads along every ring of the region, spanning `z0..z1`.
fn wall_triangles(region: &MultiPolygon<Real>, z0: Real, z1: Real) -> Vec<Triangle> {
    let mut out = Vec::new();
    for polygon in &region.0 {
        ring_walls(polygon.exterior(), z0, z1, &mut out);
        for hole in polygon.interiors() {
            ring_walls(hole, z0, z1, &mut out);
        }
    }
    out
}

/// Extrude a face straight up into a closed prism between `z0` and `z1`.
pub fn prism(face: &Face, z0: Real, z1: Real) -> TriMesh {
    let mut mesh = TriMesh::new();
    mesh.triangles.extend(cap_triangles(&face.0, z0, false));
    mesh.triangles.extend(cap_triangles(&face.0, z1, true));
    mesh.triangles.extend(wall_triangles(&face.0, z0, z1));
    mesh
}

/// A plate of `thickness` over `face`, with `engraving` sunk `depth` into
/// its top.
///
/// Assembled as two stacked slabs sharing the rim at `thickness - depth`: a
/// lower slab over the whole face, an upper slab over `face ∖ engraving`,
/// and an upward cap over `face ∩ engraving` forming the channel floors.
/// Watertight without any 3D boolean, because every cut is vertical.
pub fn engraved_plate(face: &Face, engraving: &Face, thickness: Real, depth: Real) -> TriMesh {
    if engraving.is_empty() {
        return prism(face, 0.0, thickness);
    }
    let z_rim = thickness - depth;
    let upper = face.subtract(engraving);
    let floor = face.intersect(engraving);

    let mut mesh = TriMesh::new();
    mesh.triangles.extend(cap_triangles(&face.0, 0.0, false));
    mesh.triangles.extend(wall_triangles(&face.0, 0.0, z_rim));
    mesh.triangles
        .extend(cap_triangles(&upper.0, thickness, true));
    mesh.triangles
        .extend(wall_triangles(&upper.0, z_rim, thickness));
    mesh.triangles.extend(cap_triangles(&floor.0, z_rim, true));
    mesh
}

/// One colorized output solid, the unit the generators hand back to their
/// host.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub name: String,
    pub color: [Real; 3],
    pub mesh: TriMesh,
}

impl Solid {
    pub fn new(name: impl Into<String>, color: [Real; 3], mesh: TriMesh) -> Self {
        Self {
            name: name.into(),
            color,
            mesh,
        }
    }
}
