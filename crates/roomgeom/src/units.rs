//! Unit newtypes: signed centimeters, non-negative lengths, wrap-around degrees.
//!
//! Every type here is a smart constructor: the only ways to obtain a value are
//! the validating `new`/`try_from` paths or arithmetic that provably stays in
//! range. Serde goes through the same checks (`try_from`), so a value read from
//! JSON is as trustworthy as one built in code.
//!
//! Conventions
//! - `Centimeter` is an `i32` with `value < i32::MAX`.
//! - `Length` is a `Centimeter` with `value >= 0`.
//! - `Degree` is an `f64` in `[0, 360)`; `+`/`-` wrap modulo 360.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Signed length along one axis, in whole centimeters.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Centimeter(i32);

impl Centimeter {
    pub const ZERO: Centimeter = Centimeter(0);
    /// Largest representable value (`i32::MAX` itself is excluded).
    pub const MAX: Centimeter = Centimeter(i32::MAX - 1);
    pub const MIN: Centimeter = Centimeter(i32::MIN);

    #[inline]
    pub fn new(value: i32) -> Result<Self> {
        if value < i32::MAX {
            Ok(Self(value))
        } else {
            Err(GeometryError::CentimeterOutOfRange(value as i64))
        }
    }

    /// Narrow a widened intermediate back into range.
    pub fn from_i64(value: i64) -> Result<Self> {
        if value >= i32::MIN as i64 && value < i32::MAX as i64 {
            Ok(Self(value as i32))
        } else {
            Err(GeometryError::CentimeterOutOfRange(value))
        }
    }

    /// Round a floating coordinate to the nearest centimeter; halves go up
    /// (`-2.5` becomes `-2`).
    pub fn from_f64_rounded(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite("centimeter"));
        }
        let r = (value + 0.5).floor();
        if r < i32::MIN as f64 || r >= i32::MAX as f64 {
            return Err(GeometryError::CentimeterOutOfRange(r as i64));
        }
        Ok(Self(r as i32))
    }

    #[inline]
    pub fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn checked_add(self, rhs: Centimeter) -> Option<Centimeter> {
        self.0.checked_add(rhs.0).and_then(|v| Self::new(v).ok())
    }

    #[inline]
    pub fn checked_sub(self, rhs: Centimeter) -> Option<Centimeter> {
        self.0.checked_sub(rhs.0).and_then(|v| Self::new(v).ok())
    }
}

/// Saturates at `Centimeter::MIN` / `Centimeter::MAX`; use `checked_add` to detect overflow.
impl Add for Centimeter {
    type Output = Centimeter;
    #[inline]
    fn add(self, rhs: Centimeter) -> Centimeter {
        Centimeter(self.0.saturating_add(rhs.0).min(Self::MAX.0))
    }
}

/// Saturates at `Centimeter::MIN` / `Centimeter::MAX`; use `checked_sub` to detect overflow.
impl Sub for Centimeter {
    type Output = Centimeter;
    #[inline]
    fn sub(self, rhs: Centimeter) -> Centimeter {
        Centimeter(self.0.saturating_sub(rhs.0).min(Self::MAX.0))
    }
}

impl TryFrom<i32> for Centimeter {
    type Error = GeometryError;
    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Centimeter> for i32 {
    fn from(cm: Centimeter) -> i32 {
        cm.0
    }
}

impl PartialEq<i32> for Centimeter {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<i32> for Centimeter {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.0.cmp(other))
    }
}

impl PartialEq<Length> for Centimeter {
    fn eq(&self, other: &Length) -> bool {
        *self == other.0
    }
}

impl PartialOrd<Length> for Centimeter {
    fn partial_cmp(&self, other: &Length) -> Option<Ordering> {
        Some(self.cmp(&other.0))
    }
}

impl fmt::Display for Centimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}cm", self.0)
    }
}

/// A distance that cannot be negative (furniture width, target edge length).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Length(Centimeter);

impl Length {
    pub const ZERO: Length = Length(Centimeter::ZERO);

    pub fn new(value: i32) -> Result<Self> {
        let cm = Centimeter::new(value)?;
        Self::try_from(cm)
    }

    #[inline]
    pub fn cm(self) -> Centimeter {
        self.0
    }

    #[inline]
    pub fn value(self) -> i32 {
        self.0.value()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Length {
    type Output = Length;
    #[inline]
    fn add(self, rhs: Length) -> Length {
        // Both operands are >= 0, so saturation only ever clamps upward.
        Length(self.0 + rhs.0)
    }
}

impl TryFrom<Centimeter> for Length {
    type Error = GeometryError;
    fn try_from(cm: Centimeter) -> Result<Self> {
        if cm.value() >= 0 {
            Ok(Self(cm))
        } else {
            Err(GeometryError::NegativeLength(cm.value()))
        }
    }
}

impl TryFrom<i32> for Length {
    type Error = GeometryError;
    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Length> for Centimeter {
    fn from(l: Length) -> Centimeter {
        l.0
    }
}

impl From<Length> for i32 {
    fn from(l: Length) -> i32 {
        l.0.value()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Angle in degrees, always in the half-open range `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Degree(f64);

impl Degree {
    pub const ZERO: Degree = Degree(0.0);

    /// Strict constructor: rejects anything outside `[0, 360)`.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite("degree"));
        }
        if (0.0..360.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GeometryError::DegreeOutOfRange(value))
        }
    }

    /// Wrap any finite angle into `[0, 360)` (e.g. `-90` becomes `270`).
    pub fn normalized(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite("degree"));
        }
        Ok(Self(wrap360(value)))
    }

    /// Wrap a radian angle into `[0, 360)` degrees.
    pub fn from_radians(rad: f64) -> Result<Self> {
        Self::normalized(rad.to_degrees())
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

#[inline]
fn wrap360(value: f64) -> f64 {
    let r = value.rem_euclid(360.0);
    // rem_euclid of a tiny negative input rounds up to exactly 360.0.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

impl Add for Degree {
    type Output = Degree;
    #[inline]
    fn add(self, rhs: Degree) -> Degree {
        Degree((self.0 + rhs.0) % 360.0)
    }
}

impl Sub for Degree {
    type Output = Degree;
    #[inline]
    fn sub(self, rhs: Degree) -> Degree {
        Degree((self.0 - rhs.0 + 360.0) % 360.0)
    }
}

impl TryFrom<f64> for Degree {
    type Error = GeometryError;
    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Degree> for f64 {
    fn from(d: Degree) -> f64 {
        d.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
