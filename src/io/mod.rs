//! Geometry export: STL solids and SVG face drawings.

pub mod stl;
pub mod svg;
