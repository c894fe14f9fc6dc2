use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use roomgeom::api::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect and edit room polygons (JSON in, JSON out)")]
struct Cmd {
    /// Pick radius in cm for `pick` (default 20)
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Largest first-to-last gap in cm still treated as closed (default 1)
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Write the JSON result to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Source {
    /// Polygon file: {"points":[{"x":..,"y":..},...]}
    #[arg(long)]
    input: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Vertex count, area, edge lengths, interior angles, closure
    Info {
        #[command(flatten)]
        src: Source,
    },
    /// Ear-clip into triangles
    Triangulate {
        #[command(flatten)]
        src: Source,
        /// Fail instead of returning a partial result when no ear is found
        #[arg(long)]
        strict: bool,
    },
    /// Scale the whole outline so one edge gets the given length
    Scale {
        #[command(flatten)]
        src: Source,
        #[arg(long)]
        edge: usize,
        #[arg(long)]
        length: i32,
    },
    /// Set one edge length by moving only its end vertex
    SetEdge {
        #[command(flatten)]
        src: Source,
        #[arg(long)]
        edge: usize,
        #[arg(long)]
        length: i32,
    },
    /// Set the interior angle at a vertex by rotating the next vertex
    SetAngle {
        #[command(flatten)]
        src: Source,
        #[arg(long)]
        vertex: usize,
        #[arg(long)]
        degrees: f64,
    },
    /// Move one vertex
    MoveVertex {
        #[command(flatten)]
        src: Source,
        #[arg(long)]
        vertex: usize,
        #[arg(long, allow_negative_numbers = true)]
        x: i32,
        #[arg(long, allow_negative_numbers = true)]
        y: i32,
    },
    /// Drop a trailing near-duplicate of the first point
    Close {
        #[command(flatten)]
        src: Source,
    },
    /// Point-in-polygon test (boundary counts as inside)
    Contains {
        #[command(flatten)]
        src: Source,
        #[arg(long, allow_negative_numbers = true)]
        x: i32,
        #[arg(long, allow_negative_numbers = true)]
        y: i32,
    },
    /// Nearest vertex and edge within the pick threshold
    Pick {
        #[command(flatten)]
        src: Source,
        #[arg(long, allow_negative_numbers = true)]
        x: i32,
        #[arg(long, allow_negative_numbers = true)]
        y: i32,
    },
    /// List the built-in furniture templates
    Presets,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let defaults = EditCfg::default();
    let cfg = EditCfg {
        pick_threshold: cmd.threshold.unwrap_or(defaults.pick_threshold),
        close_tolerance: cmd.tolerance.unwrap_or(defaults.close_tolerance),
    };
    let value = execute(cmd.action, cfg)?;
    io::emit(&value, cmd.out.as_deref())
}

fn execute(action: Action, cfg: EditCfg) -> Result<Value> {
    match action {
        Action::Info { src } => info(&io::read_polygon(&src.input)?, cfg),
        Action::Triangulate { src, strict } => {
            let poly = io::read_polygon(&src.input)?;
            let tris = if strict {
                try_triangulate(&poly)?
            } else {
                triangulate(&Shape::Polygon(poly))
            };
            tracing::info!(triangles = tris.len(), strict, "triangulate");
            Ok(json!({ "triangles": tris }))
        }
        Action::Scale { src, edge, length } => {
            let poly = io::read_polygon(&src.input)?;
            let scaled = apply_similarity(&poly, edge, Length::new(length)?)?;
            Ok(serde_json::to_value(scaled)?)
        }
        Action::SetEdge { src, edge, length } => {
            let poly = io::read_polygon(&src.input)?;
            let adjusted = adjust_edge_length(&poly, edge, Length::new(length)?)?;
            Ok(serde_json::to_value(adjusted)?)
        }
        Action::SetAngle {
            src,
            vertex,
            degrees,
        } => {
            let poly = io::read_polygon(&src.input)?;
            let adjusted = adjust_angle_local(&poly, vertex, Degree::new(degrees)?)?;
            Ok(json!({
                "polygon": adjusted,
                "closed": is_closed(&adjusted, cfg.close_tolerance),
            }))
        }
        Action::MoveVertex { src, vertex, x, y } => {
            let poly = io::read_polygon(&src.input)?;
            let moved = move_vertex(&poly, vertex, Point::from_xy(x, y)?)?;
            Ok(serde_json::to_value(moved)?)
        }
        Action::Close { src } => {
            let poly = io::read_polygon(&src.input)?;
            let closed = auto_close(&poly, cfg.close_tolerance)?;
            Ok(serde_json::to_value(closed)?)
        }
        Action::Contains { src, x, y } => {
            let poly = io::read_polygon(&src.input)?;
            Ok(json!({ "contains": poly.contains(Point::from_xy(x, y)?) }))
        }
        Action::Pick { src, x, y } => {
            let poly = io::read_polygon(&src.input)?;
            let at = Point::from_xy(x, y)?;
            Ok(json!({
                "vertex": nearest_vertex(at, &poly, cfg.pick_threshold),
                "edge": nearest_edge(at, &poly, cfg.pick_threshold),
            }))
        }
        Action::Presets => Ok(serde_json::to_value(FurnitureTemplate::presets())?),
    }
}

fn info(poly: &Polygon, cfg: EditCfg) -> Result<Value> {
    let angles: Vec<f64> = interior_angles(poly)?
        .into_iter()
        .map(Degree::value)
        .collect();
    Ok(json!({
        "vertices": poly.vertex_count(),
        "area": poly.area(),
        "counter_clockwise": poly.is_counter_clockwise(),
        "edge_lengths": edge_lengths(poly),
        "interior_angles": angles,
        "closed": is_closed(poly, cfg.close_tolerance),
        "gap": gap_distance(poly),
    }))
}
