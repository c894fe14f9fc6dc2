//! Pure polygon editing operations for the interactive editor.
//!
//! Purpose
//! - Answer the editor's queries: distances, edge lengths, interior angles,
//!   the vertex or edge under the cursor, how far a drawn outline is from
//!   closing.
//! - Apply the editor's intents as `&Polygon -> Result<Polygon>` functions.
//!   Inputs are never mutated.
//!
//! Local edits (`adjust_edge_length`, `adjust_angle_local`, `move_vertex`)
//! touch exactly one vertex and may leave the outline open or self-crossing.
//! Nothing here repairs that; callers check with `is_closed` / `auto_close`
//! or re-run `Builder::can_add` as needed. `apply_similarity` scales the whole
//! outline and keeps its shape.
//!
//! Floating intermediates are rounded (halves upward) back to whole
//! centimeters and re-validated, so every returned `Polygon` is in range.
//!
//! Code cross-refs: `EditCfg`, `shape::Polygon`, `units::{Length, Degree}`

mod adjust;
mod cfg;
mod close;
mod measure;
mod pick;

pub use adjust::{adjust_angle_local, adjust_edge_length, apply_similarity, move_vertex};
pub use cfg::EditCfg;
pub use close::{auto_close, gap_distance, is_closed};
pub use measure::{distance, distance_to_segment, edge_lengths, interior_angle, interior_angles};
pub use pick::{nearest_edge, nearest_vertex};

#[cfg(test)]
mod tests;
