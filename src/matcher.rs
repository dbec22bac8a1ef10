//! Preset matcher
//!
//! Finds every preset whose dimensions equal the box being edited. Used only
//! to highlight presets in the selector; presets sharing the same dimensions
//! (UR and 승연300, SR and TS) are always returned together.

use crate::types::{Dimensions, PresetBox};

/// Names of all presets equal to `bx` on every axis, in table order.
///
/// A box that is still incomplete (`None`) matches nothing.
pub fn matching_presets<'a>(bx: Option<&Dimensions>, presets: &'a [PresetBox]) -> Vec<&'a str> {
    let Some(bx) = bx else {
        return Vec::new();
    };

    presets
        .iter()
        .filter(|preset| preset.dimensions == *bx)
        .map(|preset| preset.name.as_str())
        .collect()
}

/// True when `preset` has exactly the dimensions of `bx`
pub fn is_match(bx: Option<&Dimensions>, preset: &PresetBox) -> bool {
    bx.is_some_and(|bx| preset.dimensions == *bx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BUILTIN;

    #[test]
    fn test_ties_are_all_returned() {
        let bx = Dimensions::new(600.0, 400.0, 300.0);
        assert_eq!(matching_presets(Some(&bx), &BUILTIN.presets), vec!["UR", "승연300"]);

        let bx = Dimensions::new(550.0, 280.0, 250.0);
        assert_eq!(matching_presets(Some(&bx), &BUILTIN.presets), vec!["SR", "TS"]);
    }

    #[test]
    fn test_unique_match() {
        let bx = Dimensions::new(700.0, 300.0, 440.0);
        assert_eq!(matching_presets(Some(&bx), &BUILTIN.presets), vec!["폴록"]);
    }

    #[test]
    fn test_no_match() {
        let bx = Dimensions::new(601.0, 400.0, 300.0);
        assert!(matching_presets(Some(&bx), &BUILTIN.presets).is_empty());
        assert!(matching_presets(None, &BUILTIN.presets).is_empty());
    }

    #[test]
    fn test_axis_order_matters() {
        // UR rotated is not UR
        let bx = Dimensions::new(400.0, 600.0, 300.0);
        assert!(matching_presets(Some(&bx), &BUILTIN.presets).is_empty());
    }

    #[test]
    fn test_is_match() {
        let ur = BUILTIN.preset("UR").unwrap();
        assert!(is_match(Some(&Dimensions::new(600.0, 400.0, 300.0)), ur));
        assert!(!is_match(None, ur));
    }
}
