//! Curated surface for callers (CLI, rendering and hit-testing collaborators).
//!
//! Re-exports only; everything here is also reachable through its module.

// Units and values
pub use crate::shape::{Builder, Edge, Point, Polygon, Shape, Triangle};
pub use crate::units::{Centimeter, Degree, Length};
// Queries
pub use crate::predicates::{cross_product, edges_cross, edges_intersect};
pub use crate::triangulate::{triangulate, try_triangulate};
// Editing
pub use crate::edit::{
    adjust_angle_local, adjust_edge_length, apply_similarity, auto_close, distance,
    distance_to_segment, edge_lengths, gap_distance, interior_angle, interior_angles, is_closed,
    move_vertex, nearest_edge, nearest_vertex, EditCfg,
};
// Floor-plan records
pub use crate::catalog::{
    Furniture, FurnitureCategory, FurnitureTemplate, Room, RoomShapeElement, RoomShapeType,
};
pub use crate::placement::{PlacedShape, DEFAULT_COLOR};
// Errors
pub use crate::error::{GeometryError, Result};
