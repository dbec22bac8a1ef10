//! Navigation bar component
//!
//! A single line of key hints drawn at the bottom of the screen.

use super::keybindings::NavBarItem;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Navigation bar showing the bindings of the focused control
pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Build the styled line: `Tab Next control | Esc Clear all fields | ...`
    pub fn line(&self) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", Styles::nav_hint()));
            }
            spans.push(Span::styled(item.key_display.clone(), Styles::nav_key()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(item.action_label.clone(), Styles::nav_hint()));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        f.render_widget(Paragraph::new(self.line()), area);
    }
}
