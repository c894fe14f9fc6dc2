//! Walk through a typical editing session on the console.
//!
//! Usage:
//!   cargo run -p roomgeom --example edit_session
//!
//! Draws an L-shaped room point by point (refusing a crossing stroke), closes
//! it, fixes the first wall to 400 cm by similarity, tweaks a corner, then
//! places a furniture preset and checks that it fits.

use roomgeom::api::*;

fn main() -> Result<()> {
    let strokes = [
        (0, 0),
        (300, 0),
        (300, 150),
        (150, 150),
        (150, 300),
        (0, 300),
        (200, -50), // crosses the first wall
        (0, 1),     // lands next to the start: closes the outline
    ];
    let mut builder = Builder::new();
    for (x, y) in strokes {
        let p = Point::from_xy(x, y)?;
        if builder.can_add(p) {
            builder.add(p);
        } else {
            println!("refused {p}: would cross an existing wall");
        }
    }
    let drawn = builder.build()?;
    let cfg = EditCfg::default();
    println!("drawn: {drawn}  gap={:.1}cm", gap_distance(&drawn));

    println!("closed within tolerance: {}", is_closed(&drawn, cfg.close_tolerance));
    // The final tap duplicates the start; a zero tolerance drops it.
    let room = auto_close(&drawn, 0.0)?;
    println!("room: {room}");

    let scaled = apply_similarity(&room, 0, Length::new(400)?)?;
    println!("scaled: edges={:?}", edge_lengths(&scaled));
    let angles: Vec<String> = interior_angles(&scaled)?
        .iter()
        .map(|a| format!("{:.0}", a.value()))
        .collect();
    println!("angles: [{}]", angles.join(", "));
    println!("triangles: {}", triangulate(&Shape::Polygon(scaled.clone())).len());

    let room = Room::new("living", scaled);
    let sofa = FurnitureTemplate::presets()
        .into_iter()
        .find(|t| t.category == FurnitureCategory::Living)
        .map(|t| t.to_furniture())
        .transpose()?;
    if let Some(sofa) = sofa {
        for pos in [(120, 80), (300, 300)] {
            let placed = sofa.place(Point::from_xy(pos.0, pos.1)?);
            println!("{} at {:?}: fits={}", sofa.name, pos, room.fits(&placed)?);
        }
    }
    Ok(())
}
