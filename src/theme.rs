//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and layout constants used by the calculator screen.
//!
//! # Usage
//! ```rust
//! use truckload::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for the focused item
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Presets equal to the current box
    pub const MATCHED_BG: Color = Color::Blue;

    /// Table header row
    pub const TABLE_HEADER: Color = Color::LightGreen;

    /// Capacity column
    pub const CAPACITY: Color = Color::LightYellow;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    // -------------------------------------------------------------------------
    // Text Styles
    // -------------------------------------------------------------------------

    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    // -------------------------------------------------------------------------
    // Title/Header Styles
    // -------------------------------------------------------------------------

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Capacity table header row
    pub fn table_header() -> Style {
        Style::default()
            .fg(Colors::TABLE_HEADER)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Border/Block Styles
    // -------------------------------------------------------------------------

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Dialog background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    // -------------------------------------------------------------------------
    // Selection Styles
    // -------------------------------------------------------------------------

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Preset whose dimensions equal the current box
    pub fn matched() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::MATCHED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list item
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Focused input text
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Status Styles
    // -------------------------------------------------------------------------

    pub fn capacity() -> Style {
        Style::default()
            .fg(Colors::CAPACITY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    // -------------------------------------------------------------------------
    // Navigation Styles
    // -------------------------------------------------------------------------

    /// Key name in the nav bar and help
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Default dialog width percentage
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    /// Default dialog max width
    pub const DIALOG_MAX_WIDTH: u16 = 80;

    /// Minimum dialog width
    pub const DIALOG_MIN_WIDTH: u16 = 40;

    /// Title bar height
    pub const TITLE_HEIGHT: u16 = 3;

    /// Input panel height (bordered fields)
    pub const INPUT_PANEL_HEIGHT: u16 = 3;

    /// Preset row height (bordered, room for the row to wrap once)
    pub const PRESET_PANEL_HEIGHT: u16 = 4;

    /// Status line height
    pub const STATUS_HEIGHT: u16 = 1;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_styles_differ() {
        assert_ne!(Styles::selected(), Styles::matched());
        assert_ne!(Styles::selected(), Styles::unselected());
    }

    #[test]
    fn test_border_styles() {
        assert_eq!(Styles::border_active().fg, Some(Colors::BORDER_ACTIVE));
        assert_eq!(Styles::border_inactive().fg, Some(Colors::BORDER_INACTIVE));
    }
}
