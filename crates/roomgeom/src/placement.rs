//! Shapes placed on a floor plan: position, rotation, display metadata.
//!
//! A `PlacedShape` keeps its outline in local coordinates. `world_points`
//! rotates the outline counter-clockwise about its vertex centroid, moves that
//! centroid onto `position`, and rounds to whole centimeters.

use nalgebra::Rotation2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shape::{Point, Polygon};
use crate::units::Degree;

/// Opaque green, `0xAARRGGBB`.
pub const DEFAULT_COLOR: u32 = 0xFF4C_AF50;

fn default_color() -> u32 {
    DEFAULT_COLOR
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    pub shape: Polygon,
    /// Where the outline's vertex centroid lands.
    pub position: Point,
    #[serde(default)]
    pub rotation: Degree,
    /// `0xAARRGGBB`.
    #[serde(default = "default_color")]
    pub color: u32,
    #[serde(default)]
    pub name: String,
}

impl PlacedShape {
    pub fn new(shape: Polygon, position: Point) -> Self {
        Self {
            shape,
            position,
            rotation: Degree::ZERO,
            color: DEFAULT_COLOR,
            name: String::new(),
        }
    }

    pub fn with_rotation(mut self, rotation: Degree) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_color(mut self, argb: u32) -> Self {
        self.color = argb;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Outline in floor-plan coordinates.
    ///
    /// Fails only if a rotated vertex leaves the centimeter range.
    pub fn world_points(&self) -> Result<Vec<Point>> {
        let center = self.shape.vertex_centroid();
        let rot = Rotation2::new(self.rotation.to_radians());
        let target = self.position.to_vector();
        self.shape
            .points()
            .iter()
            .map(|p| Point::from_vector_rounded(target + rot * (p.to_vector() - center)))
            .collect()
    }

    pub fn world_polygon(&self) -> Result<Polygon> {
        Polygon::new(self.world_points()?)
    }

    /// Hit test in floor-plan coordinates.
    pub fn contains(&self, point: Point) -> Result<bool> {
        Ok(self.world_polygon()?.contains(point))
    }
}
