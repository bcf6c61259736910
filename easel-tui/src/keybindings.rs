//! Key handling for the shell.
//!
//! Global bindings plus per-view overrides; a binding for the current view
//! wins over a global one.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the shell can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Pop one entry off the navigation history.
    Back,
    /// Navigate to the nth registered view, 1-based.
    JumpToView(usize),
    /// Switch to the next loaded theme.
    CycleTheme,
}

/// Keybindings with a global layer and per-view overrides.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    global: HashMap<KeyEvent, Action>,
    view_specific: HashMap<String, HashMap<KeyEvent, Action>>,
}

impl KeyBindings {
    /// Resolves a key press for the named view; view-specific bindings take
    /// precedence over global ones.
    pub fn resolve(&self, key: KeyEvent, current_view: &str) -> Option<Action> {
        if let Some(bindings) = self.view_specific.get(current_view)
            && let Some(action) = bindings.get(&key)
        {
            return Some(action.clone());
        }
        self.global.get(&key).cloned()
    }

    /// Adds or replaces a global binding.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.global.insert(key, action);
    }

    /// Adds or replaces a binding that only applies in the named view.
    pub fn bind_for_view(&mut self, view: impl Into<String>, key: KeyEvent, action: Action) {
        self.view_specific
            .entry(view.into())
            .or_default()
            .insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        global.insert(key('q'), Action::Quit);
        global.insert(key('t'), Action::CycleTheme);
        global.insert(key_code(KeyCode::Esc), Action::Back);
        global.insert(key_code(KeyCode::Backspace), Action::Back);

        // Jump to views (1-9)
        for i in 1..=9u32 {
            if let Some(c) = char::from_digit(i, 10) {
                global.insert(key(c), Action::JumpToView(i as usize));
            }
        }

        Self {
            global,
            view_specific: HashMap::new(),
        }
    }
}

/// Helper to create a KeyEvent from a character.
fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Helper to create a KeyEvent from a KeyCode.
fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
