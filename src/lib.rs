//! Parametric organizer/pegboard panel models.
//!
//! Two generators built on a shared slot-layout core: a **lettered panel**
//! (two rows of rounded slots, each engraved with a letter, over two side
//! columns of bays) and a **bead panel** (two plain slot rows). Each takes
//! a host-supplied parameter mapping and returns colorized solids ready
//! for STL export.
//!
//! Heavy geometry is delegated: 2D polygon booleans and ear-cut
//! triangulation to [`geo`], points and vectors to [`nalgebra`], STL
//! encoding to [`stl_io`], drawings to [`svg`]. What lives here is the
//! layout math (slot grids, side columns, the eight-segment slot boundary)
//! and the slab assembly that turns a subtracted face into a watertight
//! solid.
//!
//! ```
//! use slotboard::panel::{PanelStyle, lettered};
//! use slotboard::params::{LetteredPanelParams, ParamValues};
//!
//! let mut values = ParamValues::new();
//! values.set("letteredSlotsPerRow", 4.0);
//! let params = LetteredPanelParams::from_values(&values).unwrap();
//! let solids = lettered::generate(&params, &PanelStyle::default()).unwrap();
//! assert_eq!(solids.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod layout;
pub mod mesh;
pub mod panel;
pub mod params;
pub mod sketch;

pub use errors::{LayoutError, ParamError};
pub use mesh::{Solid, TriMesh};
pub use sketch::Face;
