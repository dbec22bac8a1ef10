//! Truck and preset tables
//!
//! The built-in catalog holds the seven truck interiors and twelve preset
//! boxes the calculator ships with. A different catalog can be loaded from a
//! JSON file with the same shape as the one written by
//! [`Catalog::save_to_file`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::error::TruckloadError;
use crate::input::MAX_FIELD_LEN;
use crate::types::{Dimensions, PresetBox, Truck};

/// Built-in truck interiors, smallest first (name, width, length, height)
const TRUCK_TABLE: [(&str, f64, f64, f64); 7] = [
    ("1톤", 1600.0, 2800.0, 1600.0),
    ("1톤 장축", 1600.0, 3100.0, 1600.0),
    ("1.4톤", 1700.0, 3100.0, 1800.0),
    ("1.4톤 장축", 1700.0, 3400.0, 1800.0),
    ("2.5톤", 1900.0, 4300.0, 2000.0),
    ("3.5톤", 2000.0, 5000.0, 2200.0),
    ("5톤", 2300.0, 6200.0, 2400.0),
];

/// Built-in preset boxes in display order (name, width, length, height)
const PRESET_TABLE: [(&str, f64, f64, f64); 12] = [
    ("UR", 600.0, 400.0, 300.0),
    ("NH", 640.0, 280.0, 210.0),
    ("SR", 550.0, 280.0, 250.0),
    ("EH", 650.0, 260.0, 430.0),
    ("AL", 480.0, 270.0, 300.0),
    ("UV", 640.0, 280.0, 380.0),
    ("TS", 550.0, 280.0, 250.0),
    ("승연300", 600.0, 400.0, 300.0),
    ("승연500", 600.0, 400.0, 360.0),
    ("형제250", 580.0, 275.0, 380.0),
    ("형제300", 600.0, 300.0, 400.0),
    ("폴록", 700.0, 300.0, 440.0),
];

/// The built-in catalog, built once on first use
pub static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    trucks: TRUCK_TABLE
        .iter()
        .map(|&(name, w, l, h)| Truck::new(name, w, l, h))
        .collect(),
    presets: PRESET_TABLE
        .iter()
        .map(|&(name, w, l, h)| PresetBox::new(name, w, l, h))
        .collect(),
});

/// Ordered truck and preset tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub trucks: Vec<Truck>,
    pub presets: Vec<PresetBox>,
}

impl Default for Catalog {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl Catalog {
    /// Load a catalog from a JSON file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        catalog
            .validate()
            .with_context(|| format!("Invalid catalog in {:?}", path.as_ref()))?;

        info!(
            "Loaded catalog from {:?}: {} trucks, {} presets",
            path.as_ref(),
            catalog.trucks.len(),
            catalog.presets.len()
        );
        Ok(catalog)
    }

    /// Load the catalog at `path`, or the built-in one when no path is given
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("Using built-in catalog");
                Ok(Self::default())
            }
        }
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Check that both tables are usable.
    ///
    /// Both lists must be non-empty, names must be non-blank and unique within
    /// their list, and every side must be finite and greater than zero. Sides
    /// must also fit in a dimension field once written out, since applying a
    /// preset copies its numbers into the fields as text.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.trucks.is_empty() {
            return Err(TruckloadError::catalog("Catalog must define at least one truck"));
        }
        if self.presets.is_empty() {
            return Err(TruckloadError::catalog("Catalog must define at least one preset"));
        }

        check_entries(
            "truck",
            self.trucks.iter().map(|t| (t.name.as_str(), &t.interior)),
        )?;
        check_entries(
            "preset",
            self.presets.iter().map(|p| (p.name.as_str(), &p.dimensions)),
        )?;

        Ok(())
    }

    /// Find a preset by exact name
    pub fn preset(&self, name: &str) -> Option<&PresetBox> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Find a preset by name, failing with the list of valid names
    pub fn require_preset(&self, name: &str) -> crate::error::Result<&PresetBox> {
        self.preset(name).ok_or_else(|| {
            TruckloadError::unknown_preset(name, self.presets.iter().map(|p| p.name.as_str()))
        })
    }
}

fn check_entries<'a>(
    kind: &str,
    entries: impl Iterator<Item = (&'a str, &'a Dimensions)>,
) -> crate::error::Result<()> {
    let mut seen = HashSet::new();
    for (name, dims) in entries {
        if name.trim().is_empty() {
            return Err(TruckloadError::validation(format!("{} name must not be empty", kind)));
        }
        if !seen.insert(name) {
            return Err(TruckloadError::validation(format!(
                "Duplicate {} name '{}'",
                kind, name
            )));
        }
        if !dims.is_measurable() {
            return Err(TruckloadError::validation(format!(
                "{} '{}' has invalid dimensions {}: every side must be greater than zero",
                kind, name, dims
            )));
        }
        if let Some(side) = [dims.width, dims.length, dims.height]
            .into_iter()
            .find(|side| side.to_string().chars().count() > MAX_FIELD_LEN)
        {
            return Err(TruckloadError::validation(format!(
                "{} '{}' side {} is longer than {} characters",
                kind, name, side, MAX_FIELD_LEN
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_sizes() {
        assert_eq!(BUILTIN.trucks.len(), 7);
        assert_eq!(BUILTIN.presets.len(), 12);
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(BUILTIN.validate().is_ok());
    }

    #[test]
    fn test_builtin_order() {
        assert_eq!(BUILTIN.trucks[0].name, "1톤");
        assert_eq!(BUILTIN.trucks[6].name, "5톤");
        assert_eq!(BUILTIN.presets[0].name, "UR");
        assert_eq!(BUILTIN.presets[11].name, "폴록");
    }

    #[test]
    fn test_preset_lookup() {
        let ur = BUILTIN.preset("UR").unwrap();
        assert_eq!(ur.dimensions, Dimensions::new(600.0, 400.0, 300.0));
        assert!(BUILTIN.preset("ur").is_none());
    }

    #[test]
    fn test_require_preset_unknown() {
        let err = BUILTIN.require_preset("XL").unwrap_err();
        assert!(matches!(err, TruckloadError::UnknownPreset { .. }));
        assert!(err.to_string().contains("UR, NH, SR"));
    }

    #[test]
    fn test_validate_rejects_empty_tables() {
        let catalog = Catalog {
            trucks: Vec::new(),
            presets: BUILTIN.presets.clone(),
        };
        assert!(catalog.validate().is_err());

        let catalog = Catalog {
            trucks: BUILTIN.trucks.clone(),
            presets: Vec::new(),
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut catalog = Catalog::default();
        catalog.trucks.push(Truck::new("5톤", 1.0, 1.0, 1.0));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate truck name"));
    }

    #[test]
    fn test_validate_rejects_zero_side() {
        let mut catalog = Catalog::default();
        catalog.presets.push(PresetBox::new("flat", 100.0, 0.0, 100.0));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("'flat'"));
    }

    #[test]
    fn test_validate_rejects_side_longer_than_field() {
        let mut catalog = Catalog::default();
        catalog
            .presets
            .push(PresetBox::new("Big", 12345678901234.0, 100.0, 100.0));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("'Big'"));

        // Twelve characters still fit
        let mut catalog = Catalog::default();
        catalog
            .presets
            .push(PresetBox::new("Wide", 123456789012.0, 0.5, 100.0));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut catalog = Catalog::default();
        catalog.presets.push(PresetBox::new("  ", 100.0, 100.0, 100.0));
        assert!(catalog.validate().is_err());
    }
}
