//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the focused panel.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    NextPanel,
    PreviousPanel,
    NextTab,
    Disclaimer,
    Back,
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

    /// Whether a key press triggers this binding. Shift is ignored so that
    /// `?` and BackTab match however the terminal reports them.
    pub fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.key == key && self.modifiers == modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
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
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextPanel, "Tab", "Next panel"),
            Keybinding::new(KeyCode::BackTab, KeyAction::PreviousPanel, "S-Tab", "Previous panel"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Left/Right", "Switch tab"),
            Keybinding::new(KeyCode::Left, KeyAction::NextTab, "Left/Right", "Switch tab"),
            Keybinding::new(KeyCode::Char('d'), KeyAction::Disclaimer, "D", "Disclaimer"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Both selectors share the same list navigation
        let selector_bindings = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
            Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
            Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to first"),
            Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to last"),
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select"),
        ];

        self.mode_bindings
            .insert(AppMode::CategoryMenu, selector_bindings.clone());

        let mut college_bindings = selector_bindings;
        college_bindings.push(Keybinding::new(
            KeyCode::Esc,
            KeyAction::Back,
            "Esc",
            "Back to categories",
        ));
        self.mode_bindings
            .insert(AppMode::CollegeMenu, college_bindings);

        self.mode_bindings.insert(
            AppMode::ResultTable,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous row"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next row"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First row"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last row"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to colleges"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Action bound to a key press in `mode`, if any
    pub fn action_for(
        &self,
        mode: &AppMode,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::CategoryMenu => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::NextPanel,
                KeyAction::NextTab,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::CollegeMenu => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::NextPanel,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::ResultTable => vec![
                KeyAction::NavigateUp,
                KeyAction::PageDown,
                KeyAction::Back,
                KeyAction::NextTab,
                KeyAction::Disclaimer,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                // Combine Up/Down into single item for cleaner display
                if action == KeyAction::NavigateUp {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }
        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::NextPanel
                        | KeyAction::PreviousPanel
                        | KeyAction::NextTab
                )
            }),
            ("Actions", |a| {
                matches!(a, KeyAction::Select | KeyAction::Back | KeyAction::Disclaimer)
            }),
            ("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let mut items: Vec<(String, String)> = Vec::new();
                for binding in bindings.iter().filter(|b| belongs(b.action)) {
                    let item = (binding.display.clone(), binding.description.clone());
                    // Left and Right share one display label
                    if !items.contains(&item) {
                        items.push(item);
                    }
                }
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
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
