//! Dimension store
//!
//! Holds the box being edited as the raw text of its three fields. Numbers
//! are only derived on demand, so a half-typed value like `60.` stays exactly
//! as the user left it.

use crate::input::{self, InputResult};
use crate::types::{Axis, Dimensions, PresetBox};

/// Current box width/length/height as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionStore {
    width: String,
    length: String,
    height: String,
}

impl DimensionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of one field
    pub fn field(&self, axis: Axis) -> &str {
        match axis {
            Axis::Width => &self.width,
            Axis::Length => &self.length,
            Axis::Height => &self.height,
        }
    }

    fn field_mut(&mut self, axis: Axis) -> &mut String {
        match axis {
            Axis::Width => &mut self.width,
            Axis::Length => &mut self.length,
            Axis::Height => &mut self.height,
        }
    }

    /// Replace a field, keeping only the text if it is a valid decimal.
    ///
    /// Returns false and leaves the field untouched otherwise.
    pub fn set(&mut self, axis: Axis, text: &str) -> bool {
        if !input::is_decimal_prefix(text) || text.chars().count() > input::MAX_FIELD_LEN {
            return false;
        }
        *self.field_mut(axis) = text.to_string();
        true
    }

    /// Offer a typed character to a field
    pub fn push_char(&mut self, axis: Axis, c: char) -> InputResult {
        input::filter_keystroke(self.field_mut(axis), c)
    }

    /// Delete the last character of a field
    pub fn pop_char(&mut self, axis: Axis) {
        self.field_mut(axis).pop();
    }

    pub fn clear_field(&mut self, axis: Axis) {
        self.field_mut(axis).clear();
    }

    /// Empty all three fields
    pub fn clear(&mut self) {
        self.width.clear();
        self.length.clear();
        self.height.clear();
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.width.is_empty() && self.length.is_empty() && self.height.is_empty()
    }

    /// Overwrite all fields with a preset's numbers
    pub fn apply_preset(&mut self, preset: &PresetBox) {
        self.apply_dimensions(&preset.dimensions);
    }

    /// Overwrite all fields with the given numbers.
    ///
    /// Catalog validation keeps preset sides within [`input::MAX_FIELD_LEN`]
    /// characters, so applied presets stay editable.
    pub fn apply_dimensions(&mut self, dims: &Dimensions) {
        self.width = dims.width.to_string();
        self.length = dims.length.to_string();
        self.height = dims.height.to_string();
    }

    /// All three fields as numbers, or `None` while any is empty or unparseable.
    ///
    /// Zero is returned as-is; the fit calculator turns it into the sentinel.
    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions::new(
            input::parse_dimension(&self.width)?,
            input::parse_dimension(&self.length)?,
            input::parse_dimension(&self.height)?,
        ))
    }
}

impl From<Dimensions> for DimensionStore {
    fn from(dims: Dimensions) -> Self {
        let mut store = Self::new();
        store.apply_dimensions(&dims);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BUILTIN;

    #[test]
    fn test_new_store_is_empty() {
        let store = DimensionStore::new();
        assert!(store.is_empty());
        assert!(store.dimensions().is_none());
    }

    #[test]
    fn test_typing_builds_dimensions() {
        let mut store = DimensionStore::new();
        for (axis, text) in [(Axis::Width, "600"), (Axis::Length, "400"), (Axis::Height, "300")] {
            for c in text.chars() {
                assert_eq!(store.push_char(axis, c), InputResult::Accepted);
            }
        }
        assert_eq!(store.dimensions(), Some(Dimensions::new(600.0, 400.0, 300.0)));
    }

    #[test]
    fn test_partial_input_has_no_dimensions() {
        let mut store = DimensionStore::new();
        store.set(Axis::Width, "600");
        store.set(Axis::Length, "400");
        assert!(store.dimensions().is_none());
    }

    #[test]
    fn test_set_rejects_non_decimal() {
        let mut store = DimensionStore::new();
        assert!(store.set(Axis::Width, "600"));
        assert!(!store.set(Axis::Width, "6e2"));
        assert_eq!(store.field(Axis::Width), "600");
    }

    #[test]
    fn test_pop_and_clear() {
        let mut store = DimensionStore::new();
        store.set(Axis::Height, "300");
        store.pop_char(Axis::Height);
        assert_eq!(store.field(Axis::Height), "30");
        store.clear_field(Axis::Height);
        assert_eq!(store.field(Axis::Height), "");
        store.pop_char(Axis::Height);
        assert_eq!(store.field(Axis::Height), "");
    }

    #[test]
    fn test_apply_preset_writes_plain_numbers() {
        let mut store = DimensionStore::new();
        store.apply_preset(BUILTIN.preset("EH").unwrap());
        assert_eq!(store.field(Axis::Width), "650");
        assert_eq!(store.field(Axis::Length), "260");
        assert_eq!(store.field(Axis::Height), "430");
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut store = DimensionStore::from(Dimensions::new(1.0, 2.0, 3.0));
        assert!(!store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_applied_presets_stay_within_field_cap() {
        for preset in BUILTIN.presets.iter() {
            let mut store = DimensionStore::new();
            store.apply_preset(preset);
            for axis in [Axis::Width, Axis::Length, Axis::Height] {
                assert!(store.field(axis).chars().count() <= input::MAX_FIELD_LEN);
                // The applied text is something the user could have typed
                let mut retyped = DimensionStore::new();
                assert!(retyped.set(axis, store.field(axis)));
            }
        }
    }
}
