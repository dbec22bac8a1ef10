//! Help overlay component
//!
//! Displays context-sensitive help in a centred floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::Focus;
use crate::theme::{Colors, Styles, UiConstants};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the focused control
    pub fn new(focus: &Focus, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(focus);
        Self {
            content: Self::build_content(&sections, focus),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], focus: &Focus) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Truckload Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Current: ", Styles::text_muted()),
            Span::styled(
                focus.title().to_string(),
                Style::default().fg(Colors::SECONDARY),
            ),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::nav_key()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Capacities assume boxes are stacked upright in a grid, without rotation.",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Lines shown in the overlay
    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay centred in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let height = (self.content.len() as u16).saturating_add(2);
        let area = centered_rect(parent, UiConstants::DIALOG_WIDTH_PCT, height);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Help ")
            .title_bottom(Line::from(" Press ? or Esc to close ").centered())
            .style(Styles::panel_bg());

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(self.content.clone()).block(block), area);
    }
}

/// A rectangle `width_percent` wide and `height` tall, centred in `parent`
pub fn centered_rect(parent: Rect, width_percent: u16, height: u16) -> Rect {
    let width = (parent.width as u32 * width_percent.min(100) as u32 / 100) as u16;
    let width = width
        .max(UiConstants::DIALOG_MIN_WIDTH)
        .min(UiConstants::DIALOG_MAX_WIDTH)
        .min(parent.width);
    let height = height.min(parent.height);

    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let area = centered_rect(parent, 60, 20);
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 20);
        assert_eq!(area.x, 20);
        assert_eq!(area.y, 10);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_parent() {
        let parent = Rect::new(0, 0, 30, 10);
        let area = centered_rect(parent, 60, 50);
        assert_eq!(area.width, 30);
        assert_eq!(area.height, 10);
    }

    #[test]
    fn test_help_mentions_focus() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&Focus::Presets, &ctx);
        let text: String = overlay
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Preset selector"));
        assert!(text.contains("Use preset"));
    }
}
