//! Application state definitions
//!
//! Contains the owned UI session state: the dimension store, which control
//! has focus, the preset cursor and the status line.

use crate::catalog::Catalog;
use crate::fit::{self, CapacityRow};
use crate::matcher;
use crate::store::DimensionStore;
use crate::types::{Axis, Dimensions};

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Box width input
    Width,
    /// Box length input
    Length,
    /// Box height input
    Height,
    /// Preset selector row
    Presets,
}

impl Focus {
    /// Every control in tab order
    pub const ALL: [Focus; 4] = [Focus::Width, Focus::Length, Focus::Height, Focus::Presets];

    /// The next control, wrapping to the first
    pub fn next(&self) -> Self {
        match self {
            Focus::Width => Focus::Length,
            Focus::Length => Focus::Height,
            Focus::Height => Focus::Presets,
            Focus::Presets => Focus::Width,
        }
    }

    /// The previous control, wrapping to the last
    pub fn previous(&self) -> Self {
        match self {
            Focus::Width => Focus::Presets,
            Focus::Length => Focus::Width,
            Focus::Height => Focus::Length,
            Focus::Presets => Focus::Height,
        }
    }

    /// The input axis behind this control, if it is a text field
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Focus::Width => Some(Axis::Width),
            Focus::Length => Some(Axis::Length),
            Focus::Height => Some(Axis::Height),
            Focus::Presets => None,
        }
    }

    /// Name shown in the help overlay
    pub fn title(&self) -> &'static str {
        match self {
            Focus::Width => "Width field",
            Focus::Length => "Length field",
            Focus::Height => "Height field",
            Focus::Presets => "Preset selector",
        }
    }
}

impl From<Axis> for Focus {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Width => Focus::Width,
            Axis::Length => Focus::Length,
            Axis::Height => Focus::Height,
        }
    }
}

/// Tone of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Trucks and presets in use
    pub catalog: Catalog,
    /// Box being edited
    pub store: DimensionStore,
    /// Focused control
    pub focus: Focus,
    /// Index of the highlighted preset in the selector row
    pub preset_cursor: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Tone of the status message
    pub status_level: StatusLevel,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            store: DimensionStore::new(),
            focus: Focus::Width,
            preset_cursor: 0,
            help_visible: false,
            status_message: "Enter box dimensions in mm or pick a preset".to_string(),
            status_level: StatusLevel::Info,
            should_quit: false,
        }
    }

    /// Replace the status line
    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status_level = level;
        self.status_message = message.into();
    }

    /// Current box as numbers, if all three fields parse
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.store.dimensions()
    }

    /// Capacity of every truck for the current box
    pub fn capacity_rows(&self) -> Vec<CapacityRow<'_>> {
        fit::capacity_table(self.dimensions().as_ref(), &self.catalog.trucks)
    }

    /// Names of the presets equal to the current box
    pub fn matched_presets(&self) -> Vec<&str> {
        matcher::matching_presets(self.dimensions().as_ref(), &self.catalog.presets)
    }
}
