//! Property-Based Tests for Truckload
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - The fit formula (floor per axis, product of the three)
//! - Sentinel handling for unmeasurable boxes
//! - Preset matcher consistency
//! - Keystroke filter invariants

use proptest::prelude::*;

use truckload::catalog::BUILTIN;
use truckload::fit::{breakdown, capacity_table, count};
use truckload::input::{filter_keystroke, is_decimal_prefix, parse_dimension, MAX_FIELD_LEN};
use truckload::matcher::{is_match, matching_presets};
use truckload::store::DimensionStore;
use truckload::types::{Axis, Dimensions};

/// Strategy for box sides in a realistic millimetre range
fn side_strategy() -> impl Strategy<Value = f64> {
    1.0f64..5000.0
}

fn dims_strategy() -> impl Strategy<Value = Dimensions> {
    (side_strategy(), side_strategy(), side_strategy())
        .prop_map(|(w, l, h)| Dimensions::new(w, l, h))
}

/// Keystrokes a user might plausibly hit in a number field
fn keystroke_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        8 => proptest::char::range('0', '9'),
        2 => Just('.'),
        1 => Just('-'),
        1 => Just('e'),
        1 => Just(' '),
        1 => Just('x'),
    ]
}

// =============================================================================
// Fit Formula Properties
// =============================================================================

proptest! {
    /// count equals the product of floored per-axis quotients
    #[test]
    fn count_is_product_of_floors(bx in dims_strategy(), truck in dims_strategy()) {
        let expected = (truck.width / bx.width).floor() as u64
            * (truck.length / bx.length).floor() as u64
            * (truck.height / bx.height).floor() as u64;
        prop_assert_eq!(count(&bx, &truck), Some(expected));
    }

    /// Packed boxes never take more room than the truck has
    #[test]
    fn packed_volume_never_exceeds_truck(bx in dims_strategy(), truck in dims_strategy()) {
        let n = count(&bx, &truck).unwrap_or(0) as f64;
        prop_assert!(n * bx.volume() <= truck.volume() * (1.0 + 1e-9));
    }

    /// A box larger than the truck on any axis fits zero times
    #[test]
    fn oversized_axis_gives_zero(bx in dims_strategy(), extra in 1.0f64..100.0) {
        let truck = Dimensions::new(bx.width - extra.min(bx.width / 2.0), bx.length, bx.height);
        prop_assert_eq!(count(&bx, &truck), Some(0));
    }

    /// Breakdown total always equals count
    #[test]
    fn breakdown_total_matches_count(bx in dims_strategy(), truck in dims_strategy()) {
        let layout = breakdown(&bx, &truck).map(|b| b.total());
        prop_assert_eq!(layout, count(&bx, &truck));
    }

    /// A zero or negative side always gives the sentinel
    #[test]
    fn non_positive_side_is_sentinel(
        bx in dims_strategy(),
        bad in prop_oneof![Just(0.0f64), -5000.0f64..0.0],
        axis in 0usize..3,
    ) {
        let bx = match axis {
            0 => Dimensions::new(bad, bx.length, bx.height),
            1 => Dimensions::new(bx.width, bad, bx.height),
            _ => Dimensions::new(bx.width, bx.length, bad),
        };
        for row in capacity_table(Some(&bx), &BUILTIN.trucks) {
            prop_assert_eq!(row.capacity.to_string(), "-");
        }
    }

    /// One row per truck, in table order, whatever the box
    #[test]
    fn table_rows_follow_truck_order(bx in dims_strategy()) {
        let rows = capacity_table(Some(&bx), &BUILTIN.trucks);
        prop_assert_eq!(rows.len(), BUILTIN.trucks.len());
        for (row, truck) in rows.iter().zip(BUILTIN.trucks.iter()) {
            prop_assert_eq!(&row.truck.name, &truck.name);
        }
    }
}

// =============================================================================
// Matcher Properties
// =============================================================================

proptest! {
    /// matching_presets agrees with is_match for every preset
    #[test]
    fn matcher_agrees_with_is_match(bx in dims_strategy()) {
        let names = matching_presets(Some(&bx), &BUILTIN.presets);
        let expected: Vec<&str> = BUILTIN
            .presets
            .iter()
            .filter(|p| is_match(Some(&bx), p))
            .map(|p| p.name.as_str())
            .collect();
        prop_assert_eq!(names, expected);
    }

    /// Every preset matches its own dimensions
    #[test]
    fn preset_matches_itself(index in 0usize..12) {
        let preset = &BUILTIN.presets[index];
        let names = matching_presets(Some(&preset.dimensions), &BUILTIN.presets);
        prop_assert!(names.contains(&preset.name.as_str()));
    }
}

// =============================================================================
// Keystroke Filter Properties
// =============================================================================

proptest! {
    /// Whatever is typed, the field stays a short decimal prefix
    #[test]
    fn filtered_text_stays_decimal(keys in proptest::collection::vec(keystroke_strategy(), 0..40)) {
        let mut text = String::new();
        for c in keys {
            filter_keystroke(&mut text, c);
            prop_assert!(is_decimal_prefix(&text));
            prop_assert!(text.chars().count() <= MAX_FIELD_LEN);
        }
    }

    /// Filtered text is empty or parses to a non-negative number, or is a lone point
    #[test]
    fn filtered_text_parses(keys in proptest::collection::vec(keystroke_strategy(), 0..40)) {
        let mut text = String::new();
        for c in keys {
            filter_keystroke(&mut text, c);
        }
        match parse_dimension(&text) {
            Some(value) => prop_assert!(value >= 0.0),
            None => prop_assert!(text.is_empty() || text == "."),
        }
    }

    /// Applying a box then reading it back is lossless
    #[test]
    fn store_round_trips_applied_dimensions(w in 1u32..10_000, l in 1u32..10_000, h in 1u32..10_000) {
        let dims = Dimensions::new(w as f64, l as f64, h as f64);
        let mut store = DimensionStore::new();
        store.apply_dimensions(&dims);
        prop_assert_eq!(store.dimensions(), Some(dims));
        prop_assert_eq!(store.field(Axis::Width), w.to_string());
    }
}
