//! Calculator panels
//!
//! The three dimension inputs, the preset selector and the capacity table.
//! Everything is derived from [`AppState`] on each draw; nothing is cached.

use crate::app::{AppState, Focus};
use crate::matcher;
use crate::theme::Styles;
use crate::types::Axis;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

/// Caret drawn after the text of the focused field
const CARET: &str = "▏";

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", title), Styles::text()))
}

/// Render the width/length/height inputs side by side
pub fn render_inputs(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (axis, chunk) in Axis::iter().zip(chunks.iter()) {
        let focused = state.focus == Focus::from(axis);
        let text = state.store.field(axis);

        let line = if focused {
            Line::from(vec![
                Span::styled(text.to_string(), Styles::focused()),
                Span::styled(CARET, Styles::focused()),
            ])
        } else if text.is_empty() {
            Line::from(Span::styled("mm", Styles::text_muted()))
        } else {
            Line::from(Span::styled(text.to_string(), Styles::text()))
        };

        let field = Paragraph::new(line).block(panel_block(axis.label(), focused));
        f.render_widget(field, *chunk);
    }
}

/// Render the preset selector.
///
/// The cursor is drawn in the selection style while the row has focus;
/// presets equal to the current box are drawn in the matched style.
pub fn render_presets(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Presets;
    let bx = state.dimensions();

    let mut spans: Vec<Span> = Vec::with_capacity(state.catalog.presets.len() * 2);
    for (index, preset) in state.catalog.presets.iter().enumerate() {
        let style = if focused && index == state.preset_cursor {
            Styles::selected()
        } else if matcher::is_match(bx.as_ref(), preset) {
            Styles::matched()
        } else {
            Styles::unselected()
        };
        spans.push(Span::styled(format!(" {} ", preset.name), style));
        spans.push(Span::raw(" "));
    }

    let row = Paragraph::new(Line::from(spans))
        .block(panel_block("Quick select (box type)", focused))
        .wrap(Wrap { trim: false });
    f.render_widget(row, area);
}

/// Render the capacity table: one row per truck
pub fn render_capacity_table(f: &mut Frame, state: &AppState, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Truck"),
        Cell::from("Boxes"),
        Cell::from("Layout (W × L × H)"),
        Cell::from("Interior W × L × H (mm)"),
    ])
    .style(Styles::table_header())
    .bottom_margin(1);

    let rows: Vec<Row> = state
        .capacity_rows()
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(Span::styled(row.truck.name.clone(), Styles::text())),
                Cell::from(Span::styled(row.capacity.to_string(), Styles::capacity())),
                Cell::from(Span::styled(row.layout_label(), Styles::text_secondary())),
                Cell::from(Span::styled(row.truck.interior.to_string(), Styles::text())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(20),
        Constraint::Min(22),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(panel_block("Boxes per truck", false));
    f.render_widget(table, area);
}
