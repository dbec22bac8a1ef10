//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, status line, nav bar and help overlay
//! - `panels` - Dimension inputs, preset selector and capacity table

mod header;
mod panels;

pub use header::TITLE;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to the
/// submodules for each part of the screen.
pub struct UiRenderer {
    keybinding_ctx: KeybindingContext,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            keybinding_ctx: KeybindingContext::new(),
        }
    }

    /// Keybindings shown in the nav bar and help overlay
    pub fn keybindings(&self) -> &KeybindingContext {
        &self.keybinding_ctx
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::TITLE_HEIGHT),
                Constraint::Length(UiConstants::INPUT_PANEL_HEIGHT),
                Constraint::Length(UiConstants::PRESET_PANEL_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(UiConstants::STATUS_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        header::render_title(f, chunks[0]);
        panels::render_inputs(f, state, chunks[1]);
        panels::render_presets(f, state, chunks[2]);
        panels::render_capacity_table(f, state, chunks[3]);
        header::render_status(f, state, chunks[4]);
        header::render_nav_bar(f, state, &self.keybinding_ctx, chunks[5]);

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, &self.keybinding_ctx);
        }
    }
}
