//! Application module
//!
//! Contains the application state, key handling and the event loop.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, Focus, StatusLevel)
//! - Main module - App struct and event loop
//!
//! Everything runs on one thread: a key event updates the owned state, and
//! the next draw recomputes the capacity table and preset matches from it.

mod state;

pub use state::{AppState, Focus, StatusLevel};

use crate::catalog::Catalog;
use crate::components::keybindings::KeyAction;
use crate::error::Result;
use crate::input::{InputResult, MAX_FIELD_LEN};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// How long the loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Catalog) -> Self {
        info!(
            "Creating new App instance with {} trucks and {} presets",
            catalog.trucks.len(),
            catalog.presets.len()
        );
        Self {
            state: AppState::new(catalog),
            ui_renderer: UiRenderer::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn ui_renderer(&self) -> &UiRenderer {
        &self.ui_renderer
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Apply the preset at `index` to the dimension store.
    ///
    /// Equivalent to clicking the preset; the cursor moves to it as well.
    pub fn select_preset(&mut self, index: usize) {
        let Some(preset) = self.state.catalog.presets.get(index) else {
            return;
        };
        let message = format!("Using preset {} ({})", preset.name, preset.dimensions);
        info!("{}", message);

        self.state.store.apply_preset(preset);
        self.state.preset_cursor = index;
        self.state.set_status(StatusLevel::Success, message);
    }

    /// Move focus to another control
    pub fn focus(&mut self, focus: Focus) {
        if self.state.focus != focus {
            debug!("Focus {:?} -> {:?}", self.state.focus, focus);
            self.state.focus = focus;
        }
    }

    /// Handle a key event. Returns true when the application should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return self.state.should_quit;
        }

        // Help overlay swallows everything except the keys that close it and quit
        if self.state.help_visible {
            match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => self.toggle_help(),
                KeyCode::Char('q') => self.state.should_quit = true,
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.should_quit = true;
                }
                _ => {}
            }
            return self.state.should_quit;
        }

        let focus = self.state.focus;
        match self.ui_renderer.keybindings().resolve(&focus, &key_event) {
            Some(action) => self.apply_action(action),
            None => {
                if let KeyCode::Char(c) = key_event.code {
                    if !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    {
                        self.type_char(c);
                    }
                }
            }
        }

        self.state.should_quit
    }

    fn apply_action(&mut self, action: KeyAction) {
        let focus = self.state.focus;
        let preset_count = self.state.catalog.presets.len();

        match action {
            KeyAction::NextControl | KeyAction::Confirm => self.focus(focus.next()),
            KeyAction::PreviousControl => self.focus(focus.previous()),
            KeyAction::DeleteChar => {
                if let Some(axis) = focus.axis() {
                    self.state.store.pop_char(axis);
                }
            }
            KeyAction::ClearField => {
                if let Some(axis) = focus.axis() {
                    self.state.store.clear_field(axis);
                }
            }
            KeyAction::ClearAll => {
                debug!("Clearing all dimension fields");
                self.state.store.clear();
                self.state.set_status(StatusLevel::Info, "Cleared all fields");
            }
            KeyAction::PresetLeft if preset_count > 0 => {
                self.state.preset_cursor =
                    (self.state.preset_cursor + preset_count - 1) % preset_count;
            }
            KeyAction::PresetRight if preset_count > 0 => {
                self.state.preset_cursor = (self.state.preset_cursor + 1) % preset_count;
            }
            KeyAction::FirstPreset => self.state.preset_cursor = 0,
            KeyAction::LastPreset => self.state.preset_cursor = preset_count.saturating_sub(1),
            KeyAction::ApplyPreset => self.select_preset(self.state.preset_cursor),
            KeyAction::Help => self.toggle_help(),
            KeyAction::Quit => {
                info!("Quit requested");
                self.state.should_quit = true;
            }
            KeyAction::PresetLeft | KeyAction::PresetRight => {}
        }
    }

    fn type_char(&mut self, c: char) {
        let Some(axis) = self.state.focus.axis() else {
            return;
        };

        match self.state.store.push_char(axis, c) {
            InputResult::Accepted => {
                if self.state.status_level == StatusLevel::Warning {
                    self.state
                        .set_status(StatusLevel::Info, "Enter box dimensions in mm or pick a preset");
                }
            }
            InputResult::Rejected => {
                debug!("Rejected keystroke {:?} for {}", c, axis);
                self.state.set_status(
                    StatusLevel::Warning,
                    format!("'{}' ignored: only digits and one decimal point", c),
                );
            }
            InputResult::Full => {
                self.state.set_status(
                    StatusLevel::Warning,
                    format!("{} is limited to {} characters", axis.label(), MAX_FIELD_LEN),
                );
            }
        }
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;
        Ok(())
    }

    /// Run the main event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.draw(terminal)?;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, Dimensions};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_tabbing_fills_box() {
        let mut app = App::default();
        type_text(&mut app, "600");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "400");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "300");

        assert_eq!(app.state().dimensions(), Some(Dimensions::new(600.0, 400.0, 300.0)));
        assert_eq!(app.state().capacity_rows()[0].capacity.to_string(), "70");
    }

    #[test]
    fn test_rejected_keystroke_sets_warning() {
        let mut app = App::default();
        type_text(&mut app, "6x");
        assert_eq!(app.state().store.field(Axis::Width), "6");
        assert_eq!(app.state().status_level, StatusLevel::Warning);

        type_text(&mut app, "0");
        assert_eq!(app.state().store.field(Axis::Width), "60");
        assert_eq!(app.state().status_level, StatusLevel::Info);
    }

    #[test]
    fn test_preset_browsing_wraps() {
        let mut app = App::default();
        app.focus(Focus::Presets);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state().preset_cursor, 11);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().preset_cursor, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.state().preset_cursor, 11);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.state().preset_cursor, 0);
    }

    #[test]
    fn test_apply_preset_with_enter() {
        let mut app = App::default();
        app.focus(Focus::Presets);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().store.field(Axis::Width), "640");
        assert_eq!(app.state().matched_presets(), vec!["NH"]);
        assert_eq!(app.state().status_level, StatusLevel::Success);
    }

    #[test]
    fn test_escape_clears_everything() {
        let mut app = App::default();
        app.select_preset(0);
        press(&mut app, KeyCode::Esc);
        assert!(app.state().store.is_empty());
        assert!(app.state().capacity_rows().iter().all(|r| r.capacity.0.is_none()));
    }

    #[test]
    fn test_help_toggles_and_blocks_input() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state().help_visible);

        type_text(&mut app, "5");
        assert_eq!(app.state().store.field(Axis::Width), "");

        press(&mut app, KeyCode::Esc);
        assert!(!app.state().help_visible);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = App::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key_event(ctrl_c));
    }

    #[test]
    fn test_q_quits_while_help_is_open() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = App::default();
        let mut event = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        app.handle_key_event(event);
        assert_eq!(app.state().store.field(Axis::Width), "");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut app = App::default();
        type_text(&mut app, "123");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().store.field(Axis::Width), "12");
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.state().store.field(Axis::Width), "");
    }
}
