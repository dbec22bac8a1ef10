//! Title, status line and overlay rendering
//!
//! This module contains the widgets that frame the calculator: the title
//! bar, the status line, the navigation bar and the help overlay.

use crate::app::{AppState, StatusLevel};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title shown at the top of the screen
pub const TITLE: &str = "Truck Load Capacity Calculator";

/// Render the title bar
pub fn render_title(f: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let title = Paragraph::new(Line::from(Span::styled(TITLE, Styles::title())))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive()),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Render the status message and the preset matches
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let style = match state.status_level {
        StatusLevel::Info => Styles::text_secondary(),
        StatusLevel::Success => Styles::success(),
        StatusLevel::Warning => Styles::warning(),
    };

    let mut spans = vec![Span::styled(state.status_message.clone(), style)];

    let matched = state.matched_presets();
    if !matched.is_empty() {
        spans.push(Span::styled("  Matches: ", Styles::text_muted()));
        spans.push(Span::styled(matched.join(", "), Styles::focused()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.focus);
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.focus, keybinding_ctx);
    help_overlay.render(f, f.area());
}
