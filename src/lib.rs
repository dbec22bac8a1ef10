//! Truckload Library
//!
//! Core functionality for the truck load capacity calculator: the truck and
//! preset catalog, the fit calculation, preset matching, the dimension input
//! store and the terminal UI built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod components;
pub mod error;
pub mod fit;
pub mod input;
pub mod matcher;
pub mod output;
pub mod store;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState, Focus, StatusLevel};
pub use catalog::{Catalog, BUILTIN};
pub use error::{Result, TruckloadError};
pub use fit::{breakdown, capacity_table, count, Breakdown, Capacity, CapacityRow, SENTINEL};
pub use input::{filter_keystroke, parse_dimension, InputResult, MAX_FIELD_LEN};
pub use matcher::matching_presets;
pub use store::DimensionStore;
pub use types::{Axis, Dimensions, PresetBox, Truck};
