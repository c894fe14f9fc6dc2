//! Shape model: value types and the incremental polygon builder.
//!
//! Purpose
//! - Hold the immutable geometry values the rest of the crate consumes
//!   (`Point`, `Edge`, `Triangle`, `Polygon`, `Shape`).
//! - Provide `Builder`, the only mutable piece, for free-hand drawing with a
//!   self-intersection pre-flight check before each new point.
//!
//! Code cross-refs: `predicates::{cross_product, edges_intersect}`,
//! `triangulate::triangulate`, `edit`

mod builder;
mod types;

pub use builder::Builder;
pub use types::{Edge, Point, Polygon, Shape, Triangle};
