//! Core data types: dimensions, trucks and preset boxes
//!
//! All lengths are millimetres. Trucks and presets are immutable once the
//! catalog is built; the only mutable entity is the box being edited, which
//! lives in [`crate::store::DimensionStore`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// One of the three box/truck axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Width,
    Length,
    Height,
}

impl Axis {
    /// Field label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Width => "Width (mm)",
            Axis::Length => "Length (mm)",
            Axis::Height => "Height (mm)",
        }
    }
}

/// Width, length and height in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Value along one axis
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Length => self.length,
            Axis::Height => self.height,
        }
    }

    /// Product of the three sides
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.height
    }

    /// True when every side is finite and strictly positive
    pub fn is_measurable(&self) -> bool {
        [self.width, self.length, self.height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0)
    }
}

/// Rendered as `W × L × H`, e.g. `1600 × 2800 × 1600`
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} × {}", self.width, self.length, self.height)
    }
}

/// A truck bed's interior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub name: String,
    #[serde(flatten)]
    pub interior: Dimensions,
}

impl Truck {
    pub fn new(name: impl Into<String>, width: f64, length: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            interior: Dimensions::new(width, length, height),
        }
    }
}

/// A named, predefined box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetBox {
    pub name: String,
    #[serde(flatten)]
    pub dimensions: Dimensions,
}

impl PresetBox {
    pub fn new(name: impl Into<String>, width: f64, length: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            dimensions: Dimensions::new(width, length, height),
        }
    }
}
