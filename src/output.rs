//! Output formatting for the headless commands
//!
//! Every function writes to the given writer so the same code serves stdout
//! and tests.

use serde::Serialize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::fit::{Breakdown, CapacityRow, SENTINEL};
use crate::types::{Dimensions, PresetBox, Truck};

/// One truck in a capacity report
#[derive(Debug, Serialize)]
pub struct CapacityEntry<'a> {
    pub truck: &'a str,
    pub capacity: Option<u64>,
    pub layout: Option<Breakdown>,
    pub interior: Dimensions,
}

impl<'a> From<&CapacityRow<'a>> for CapacityEntry<'a> {
    fn from(row: &CapacityRow<'a>) -> Self {
        let truck: &'a Truck = row.truck;
        Self {
            truck: &truck.name,
            capacity: row.capacity.0,
            layout: row.breakdown,
            interior: truck.interior,
        }
    }
}

/// Capacity of every truck for one box
#[derive(Debug, Serialize)]
pub struct CapacityReport<'a> {
    #[serde(rename = "box")]
    pub bx: Option<Dimensions>,
    pub matches: Vec<&'a str>,
    pub trucks: Vec<CapacityEntry<'a>>,
}

impl<'a> CapacityReport<'a> {
    pub fn new(bx: Option<Dimensions>, matches: Vec<&'a str>, rows: &[CapacityRow<'a>]) -> Self {
        Self {
            bx,
            matches,
            trucks: rows.iter().map(CapacityEntry::from).collect(),
        }
    }
}

/// Left-align `text` in `width` terminal columns.
///
/// Hangul names take two columns per syllable, so `{:<N}` (which counts
/// chars) would push the following columns out of line.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print a capacity report
pub fn write_capacity_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &CapacityReport<'_>,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, report);
    }

    match &report.bx {
        Some(bx) => writeln!(out, "Box: {} mm", bx)?,
        None => writeln!(out, "Box: {}", SENTINEL)?,
    }
    if !report.matches.is_empty() {
        writeln!(out, "Matches: {}", report.matches.join(", "))?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:<12} {:>8}  {:<20} {}",
        "Truck", "Boxes", "Layout (W × L × H)", "Interior (mm)"
    )?;
    writeln!(out, "{}", "-".repeat(66))?;
    for entry in &report.trucks {
        let capacity = entry
            .capacity
            .map_or_else(|| SENTINEL.to_string(), |n| n.to_string());
        let layout = entry
            .layout
            .map_or_else(|| SENTINEL.to_string(), |b| b.to_string());
        writeln!(
            out,
            "{} {:>8}  {} {}",
            pad(entry.truck, 12),
            capacity,
            pad(&layout, 20),
            entry.interior
        )?;
    }
    Ok(())
}

/// Print the truck table
pub fn write_trucks<W: Write>(out: &mut W, format: OutputFormat, trucks: &[Truck]) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, trucks);
    }

    writeln!(out, "{:<12} {}", "Truck", "Interior W × L × H (mm)")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for truck in trucks {
        writeln!(out, "{} {}", pad(&truck.name, 12), truck.interior)?;
    }
    Ok(())
}

/// Print a list of preset boxes
pub fn write_presets<W: Write>(
    out: &mut W,
    format: OutputFormat,
    presets: &[&PresetBox],
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, presets);
    }

    if presets.is_empty() {
        writeln!(out, "No matching presets")?;
        return Ok(());
    }

    writeln!(out, "{:<10} {}", "Preset", "W × L × H (mm)")?;
    writeln!(out, "{}", "-".repeat(36))?;
    for preset in presets {
        writeln!(out, "{} {}", pad(&preset.name, 10), preset.dimensions)?;
    }
    Ok(())
}
