//! Fit calculator
//!
//! Counts how many boxes fit in a truck by dividing each interior side by the
//! matching box side, flooring, and multiplying the three results. Boxes are
//! placed axis-aligned without rotation, so the count is an upper bound for a
//! simple grid stack rather than an optimal packing.

use serde::Serialize;
use std::fmt;

use crate::types::{Dimensions, Truck};

/// Display value used when no count can be computed
pub const SENTINEL: &str = "-";

/// Boxes along each axis of a truck bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub across_width: u64,
    pub along_length: u64,
    pub stacked_height: u64,
}

impl Breakdown {
    /// Total boxes, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.across_width
            .saturating_mul(self.along_length)
            .saturating_mul(self.stacked_height)
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {} × {}",
            self.across_width, self.along_length, self.stacked_height
        )
    }
}

/// Per-axis box counts, or `None` when the box cannot be measured.
///
/// A box with any side that is zero, negative or not finite has no fit.
pub fn breakdown(bx: &Dimensions, truck: &Dimensions) -> Option<Breakdown> {
    if !bx.is_measurable() || bx.volume() == 0.0 {
        return None;
    }

    Some(Breakdown {
        across_width: per_axis(truck.width, bx.width),
        along_length: per_axis(truck.length, bx.length),
        stacked_height: per_axis(truck.height, bx.height),
    })
}

/// How many boxes fit in the truck, or `None` (rendered as [`SENTINEL`]).
pub fn count(bx: &Dimensions, truck: &Dimensions) -> Option<u64> {
    breakdown(bx, truck).map(|b| b.total())
}

// Float to integer casts saturate, so huge quotients clamp to u64::MAX.
fn per_axis(space: f64, side: f64) -> u64 {
    (space / side).floor() as u64
}

/// A computed capacity, displayed as the count or the sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Capacity(pub Option<u64>);

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => f.write_str(SENTINEL),
        }
    }
}

/// One row of the capacity table
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityRow<'a> {
    pub truck: &'a Truck,
    pub capacity: Capacity,
    pub breakdown: Option<Breakdown>,
}

impl CapacityRow<'_> {
    /// Layout column text: `2 × 7 × 5` or the sentinel
    pub fn layout_label(&self) -> String {
        match self.breakdown {
            Some(b) => b.to_string(),
            None => SENTINEL.to_string(),
        }
    }
}

/// Evaluate the box against every truck, in table order.
///
/// `bx` is `None` while the inputs are incomplete; every row then carries the
/// sentinel.
pub fn capacity_table<'a>(bx: Option<&Dimensions>, trucks: &'a [Truck]) -> Vec<CapacityRow<'a>> {
    trucks
        .iter()
        .map(|truck| {
            let layout = bx.and_then(|b| breakdown(b, &truck.interior));
            CapacityRow {
                truck,
                capacity: Capacity(layout.map(|b| b.total())),
                breakdown: layout,
            }
        })
        .collect()
}
