use crate::float_types::{EPSILON, Real};
use crate::mesh::{Solid, TriMesh, Triangle};
use nalgebra::Vector3;
use std::io::Cursor;

fn facet_normal(tri: &Triangle) -> Vector3<Real> {
    let u = tri[1] - tri[0];
    let v = tri[2] - tri[0];
    let n = u.cross(&v);
    if n.norm() <= EPSILON {
        Vector3::zeros()
    } else {
        n.normalize()
    }
}

/// Export to ASCII STL
///
/// Convert a mesh to an **ASCII STL** string with the given `name`.
pub fn to_stl_ascii(mesh: &TriMesh, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for tri in &mesh.triangles {
        let n = facet_normal(tri);
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for p in tri {
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Convert a mesh to a **binary STL** byte vector with the given `name`.
///
/// The resulting `Vec<u8>` can then be written to a file or handled in
/// memory.
pub fn to_stl_binary(mesh: &TriMesh, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex, write_stl};

    let triangles: Vec<StlTriangle> = mesh
        .triangles
        .iter()
        .map(|tri| {
            let n = facet_normal(tri);
            StlTriangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            }
        })
        .collect();

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl TriMesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}

impl Solid {
    pub fn to_stl_ascii(&self) -> String {
        self::to_stl_ascii(&self.mesh, &self.name)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(&self.mesh, &self.name)
    }
}
