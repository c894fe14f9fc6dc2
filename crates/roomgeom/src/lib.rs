//! 2D polygon geometry for a room and furniture layout editor.
//!
//! Overview
//! - `units`: validated `Centimeter`, `Length`, `Degree` newtypes.
//! - `shape`: `Point`, `Edge`, `Triangle`, `Polygon`, the `Shape` sum and the
//!   incremental `Builder`.
//! - `predicates`: exact integer orientation and segment intersection.
//! - `triangulate`: ear clipping.
//! - `edit`: pure editing operations used by the interactive editor.
//! - `placement`, `catalog`: placed shapes, rooms, walls and doors, furniture templates.
//! - `rand`: seeded random simple polygons for tests and benches.
//!
//! All values are immutable; edits return new polygons. Coordinates are whole
//! centimeters and every predicate is exact.

pub mod api;
pub mod catalog;
pub mod edit;
pub mod error;
pub mod placement;
pub mod predicates;
pub mod rand;
pub mod shape;
pub mod triangulate;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeometryError, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::edit::EditCfg;
    pub use crate::error::{GeometryError, Result};
    pub use crate::predicates::edges_intersect;
    pub use crate::rand::{random_simple_polygon, RandomPolygonCfg, VertexCount};
    pub use crate::shape::{Builder, Edge, Point, Polygon, Shape, Triangle};
    pub use crate::triangulate::{triangulate, try_triangulate};
    pub use crate::units::{Centimeter, Degree, Length};
}
