//! Rooms, structural room elements, furniture, and the built-in furniture templates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::placement::PlacedShape;
use crate::predicates::{edges_cross, on_segment};
use crate::shape::{Edge, Point, Polygon};
use crate::units::{Centimeter, Degree, Length};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub shape: Polygon,
}

impl Room {
    pub fn new(name: impl Into<String>, shape: Polygon) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Whether a placed outline lies inside this room.
    ///
    /// Conservative test for simple outlines: every placed vertex is inside or
    /// on the walls, no placed edge properly crosses a wall, and no room corner
    /// pokes strictly into the placed outline. Flush contact with a wall fits.
    pub fn fits(&self, placed: &PlacedShape) -> Result<bool> {
        let outline = placed.world_polygon()?;
        if !outline.points().iter().all(|&v| self.shape.contains(v)) {
            return Ok(false);
        }
        let walls = proper_edges(&self.shape);
        let sides = proper_edges(&outline);
        if walls
            .iter()
            .any(|w| sides.iter().any(|s| edges_cross(w, s)))
        {
            return Ok(false);
        }
        let pokes_in = self.shape.points().iter().any(|&corner| {
            outline.contains(corner) && !outline.edges().any(|(a, b)| on_segment(a, corner, b))
        });
        Ok(!pokes_in)
    }
}

fn proper_edges(poly: &Polygon) -> Vec<Edge> {
    poly.edges()
        .filter_map(|(a, b)| Edge::new(a, b).ok())
        .collect()
}

pub const DEFAULT_WALL_WIDTH_CM: i32 = 10;
pub const DEFAULT_DOOR_WIDTH_CM: i32 = 80;
pub const DEFAULT_DOOR_SWING_DEG: f64 = 90.0;

/// Arc segments in a door fan; the fan has `DOOR_ARC_STEPS + 2` points.
const DOOR_ARC_STEPS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomShapeType {
    Wall,
    Door,
    Window,
}

impl fmt::Display for RoomShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoomShapeType::Wall => "wall",
            RoomShapeType::Door => "door",
            RoomShapeType::Window => "window",
        };
        f.write_str(s)
    }
}

/// Structural element drawn along a room outline.
///
/// Walls and windows are thick segments. A door is the fan its leaf sweeps:
/// the hinge followed by the arc points at radius `width`.
#[derive(Clone, Debug, PartialEq)]
pub enum RoomShapeElement {
    Wall { edge: Edge, width: Length },
    Window { edge: Edge, width: Length },
    Door { shape: Polygon, width: Length },
}

impl RoomShapeElement {
    pub fn wall(start: Point, end: Point, width: Length) -> Result<Self> {
        Ok(RoomShapeElement::Wall {
            edge: thick_edge(start, end, width)?,
            width,
        })
    }

    /// Wall of the default thickness.
    pub fn default_wall(start: Point, end: Point) -> Result<Self> {
        Self::wall(start, end, Length::new(DEFAULT_WALL_WIDTH_CM)?)
    }

    pub fn window(start: Point, end: Point, width: Length) -> Result<Self> {
        Ok(RoomShapeElement::Window {
            edge: thick_edge(start, end, width)?,
            width,
        })
    }

    /// Door swinging counter-clockwise from the +x axis by `swing`.
    ///
    /// Arc offsets are truncated toward zero, so arc points sit at most one
    /// centimeter per axis inside the true radius.
    pub fn door(hinge: Point, width: Length, swing: Degree) -> Result<Self> {
        if width.is_zero() {
            return Err(GeometryError::NonPositiveLength);
        }
        let r = width.value() as f64;
        let mut points = Vec::with_capacity(DOOR_ARC_STEPS as usize + 2);
        points.push(hinge);
        for i in 0..=DOOR_ARC_STEPS {
            let th = swing.to_radians() * i as f64 / DOOR_ARC_STEPS as f64;
            let dx = (r * th.cos()).trunc() as i64;
            let dy = (r * th.sin()).trunc() as i64;
            points.push(Point::new(
                Centimeter::from_i64(hinge.x.value() as i64 + dx)?,
                Centimeter::from_i64(hinge.y.value() as i64 + dy)?,
            ));
        }
        Ok(RoomShapeElement::Door {
            shape: Polygon::new(points)?,
            width,
        })
    }

    /// Door of the default width and swing.
    pub fn default_door(hinge: Point) -> Result<Self> {
        Self::door(
            hinge,
            Length::new(DEFAULT_DOOR_WIDTH_CM)?,
            Degree::new(DEFAULT_DOOR_SWING_DEG)?,
        )
    }

    pub fn kind(&self) -> RoomShapeType {
        match self {
            RoomShapeElement::Wall { .. } => RoomShapeType::Wall,
            RoomShapeElement::Window { .. } => RoomShapeType::Window,
            RoomShapeElement::Door { .. } => RoomShapeType::Door,
        }
    }

    pub fn width(&self) -> Length {
        match self {
            RoomShapeElement::Wall { width, .. }
            | RoomShapeElement::Window { width, .. }
            | RoomShapeElement::Door { width, .. } => *width,
        }
    }
}

fn thick_edge(start: Point, end: Point, width: Length) -> Result<Edge> {
    if width.is_zero() {
        return Err(GeometryError::NonPositiveLength);
    }
    Edge::new(start, end)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Furniture {
    pub name: String,
    pub shape: Polygon,
}

impl Furniture {
    /// Place at `position` with no rotation, carrying the furniture's name.
    pub fn place(&self, position: Point) -> PlacedShape {
        PlacedShape::new(self.shape.clone(), position).with_name(self.name.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureCategory {
    Living,
    Bedroom,
    Kitchen,
    Dining,
    Bathroom,
    Office,
    Custom,
}

impl fmt::Display for FurnitureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FurnitureCategory::Living => "living",
            FurnitureCategory::Bedroom => "bedroom",
            FurnitureCategory::Kitchen => "kitchen",
            FurnitureCategory::Dining => "dining",
            FurnitureCategory::Bathroom => "bathroom",
            FurnitureCategory::Office => "office",
            FurnitureCategory::Custom => "custom",
        };
        f.write_str(s)
    }
}

/// Rectangular furniture described by its footprint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureTemplate {
    pub name: String,
    pub category: FurnitureCategory,
    pub width: Length,
    pub depth: Length,
}

impl FurnitureTemplate {
    pub fn new(
        name: impl Into<String>,
        category: FurnitureCategory,
        width: Length,
        depth: Length,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            width,
            depth,
        }
    }

    /// Axis-aligned `width × depth` rectangle with its first corner at the origin.
    pub fn to_furniture(&self) -> Result<Furniture> {
        if self.width.is_zero() || self.depth.is_zero() {
            return Err(GeometryError::NonPositiveLength);
        }
        let (w, d) = (Centimeter::from(self.width), Centimeter::from(self.depth));
        let o = Centimeter::ZERO;
        let shape = Polygon::new(vec![
            Point::new(o, o),
            Point::new(w, o),
            Point::new(w, d),
            Point::new(o, d),
        ])?;
        Ok(Furniture {
            name: self.name.clone(),
            shape,
        })
    }

    /// Built-in presets, grouped by category.
    pub fn presets() -> Vec<FurnitureTemplate> {
        use FurnitureCategory::*;
        const PRESETS: &[(&str, FurnitureCategory, i32, i32)] = &[
            ("Sofa (2-seat)", Living, 150, 80),
            ("Sofa (3-seat)", Living, 200, 90),
            ("Coffee table", Living, 120, 60),
            ("TV board", Living, 180, 40),
            ("Single bed", Bedroom, 100, 200),
            ("Semi-double bed", Bedroom, 120, 200),
            ("Double bed", Bedroom, 140, 200),
            ("Wardrobe", Bedroom, 120, 60),
            ("Dining table (4 seats)", Dining, 150, 85),
            ("Dining table (6 seats)", Dining, 180, 90),
            ("Dining chair", Dining, 45, 50),
            ("Refrigerator", Kitchen, 60, 70),
            ("Cupboard", Kitchen, 90, 45),
            ("Desk", Office, 120, 60),
            ("Office chair", Office, 60, 60),
            ("Bookshelf", Office, 90, 30),
        ];
        PRESETS
            .iter()
            .filter_map(|&(name, category, w, d)| {
                Some(FurnitureTemplate::new(
                    name,
                    category,
                    Length::new(w).ok()?,
                    Length::new(d).ok()?,
                ))
            })
            .collect()
    }
}
