//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the focused
//! control. The same registry resolves key events for the event loop and
//! feeds the navigation bar and help overlay, so what is shown is what runs.

use crate::app::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NextControl,
    PreviousControl,
    Confirm,
    DeleteChar,
    ClearField,
    ClearAll,
    PresetLeft,
    PresetRight,
    FirstPreset,
    LastPreset,
    ApplyPreset,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    // Shift is ignored: terminals report it for `?` and BackTab inconsistently.
    fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Focus-specific keybindings
    focus_bindings: HashMap<Focus, Vec<Keybinding>>,
    /// Global keybindings (available for every control)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            focus_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all controls
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Esc, KeyAction::ClearAll, "Esc", "Clear all fields"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Dimension fields
        let field_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextControl, "Tab", "Next control"),
            Keybinding::new(KeyCode::BackTab, KeyAction::PreviousControl, "S-Tab", "Previous control"),
            Keybinding::new(KeyCode::Down, KeyAction::NextControl, "Down", "Next control"),
            Keybinding::new(KeyCode::Up, KeyAction::PreviousControl, "Up", "Previous control"),
            Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Next field"),
            Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete character"),
            Keybinding::new(KeyCode::Delete, KeyAction::ClearField, "Del", "Clear field"),
        ];

        for focus in [Focus::Width, Focus::Length, Focus::Height] {
            self.focus_bindings.insert(focus, field_bindings.clone());
        }

        // Preset selector
        self.focus_bindings.insert(
            Focus::Presets,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextControl, "Tab", "Next control"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousControl, "S-Tab", "Previous control"),
                Keybinding::new(KeyCode::Down, KeyAction::NextControl, "Down", "Next control"),
                Keybinding::new(KeyCode::Up, KeyAction::PreviousControl, "Up", "Previous control"),
                Keybinding::new(KeyCode::Left, KeyAction::PresetLeft, "Left", "Previous preset"),
                Keybinding::new(KeyCode::Right, KeyAction::PresetRight, "Right", "Next preset"),
                Keybinding::new(KeyCode::Home, KeyAction::FirstPreset, "Home", "First preset"),
                Keybinding::new(KeyCode::End, KeyAction::LastPreset, "End", "Last preset"),
                Keybinding::new(KeyCode::Enter, KeyAction::ApplyPreset, "Enter", "Use preset"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::ApplyPreset, "Space", "Use preset"),
            ],
        );
    }

    /// Get keybindings for a specific control (includes global bindings)
    pub fn get_bindings(&self, focus: &Focus) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(focus_bindings) = self.focus_bindings.get(focus) {
            bindings.extend(focus_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action for the focused control.
    ///
    /// Returns `None` for keys with no binding; in a text field those are
    /// offered to the input filter as typed characters.
    pub fn resolve(&self, focus: &Focus, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(focus)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, focus: &Focus) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(focus);

        let priority_actions = match focus {
            Focus::Width | Focus::Length | Focus::Height => vec![
                KeyAction::NextControl,
                KeyAction::DeleteChar,
                KeyAction::ClearField,
                KeyAction::ClearAll,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Focus::Presets => vec![
                KeyAction::PresetLeft,
                KeyAction::PresetRight,
                KeyAction::ApplyPreset,
                KeyAction::NextControl,
                KeyAction::ClearAll,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        // Combine Left/Right into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_browse = false;

        for action in priority_actions {
            if matches!(action, KeyAction::PresetLeft | KeyAction::PresetRight) {
                if !has_browse {
                    items.push(NavBarItem {
                        key_display: "Lt/Rt".to_string(),
                        action_label: "Browse".to_string(),
                    });
                    has_browse = true;
                }
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a control (for help overlay)
    pub fn get_help_content(&self, focus: &Focus) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NextControl
                        | KeyAction::PreviousControl
                        | KeyAction::PresetLeft
                        | KeyAction::PresetRight
                        | KeyAction::FirstPreset
                        | KeyAction::LastPreset
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Confirm
                        | KeyAction::DeleteChar
                        | KeyAction::ClearField
                        | KeyAction::ClearAll
                        | KeyAction::ApplyPreset
                )
            }),
            ("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ];

        let bindings = self.get_bindings(focus);
        let mut sections = Vec::new();

        for (title, belongs) in groups {
            let items: Vec<(String, String)> = bindings
                .iter()
                .filter(|b| belongs(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();

            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
