/// Editor tolerances, in centimeters.
///
/// - `pick_threshold`: how far from a vertex or edge a tap may land and still
///   select it (`nearest_vertex`, `nearest_edge`).
/// - `close_tolerance`: largest first-to-last gap still treated as a closed
///   outline (`is_closed`, `auto_close`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditCfg {
    pub pick_threshold: f64,
    pub close_tolerance: f64,
}

impl Default for EditCfg {
    fn default() -> Self {
        Self {
            pick_threshold: 20.0,
            close_tolerance: 1.0,
        }
    }
}
