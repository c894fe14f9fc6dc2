use anyhow::{Context, Result};
use roomgeom::api::Polygon;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a polygon from `{"points":[{"x":..,"y":..},...]}`.
///
/// Goes through the validating deserializer, so fewer than three points or
/// out-of-range coordinates are rejected here.
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon from {}", path.display()))
}

/// Pretty-print `value` to `out`, or to stdout when no path is given.
pub fn emit(value: &Value, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    let Some(path) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, text + "\n").with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote result");
    Ok(())
}
