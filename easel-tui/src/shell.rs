//! The easel shell: an event loop around a panel container.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use easel_core::{PanelContainer, Surfaces};

use crate::keybindings::{Action, KeyBindings};
use crate::panel::PanelHandle;
use crate::terminal::{EaselTerminal, restore_terminal, setup_terminal};
use crate::theme::{Theme, ThemeLoader, easel_default};

/// Interactive shell around a [`PanelContainer`].
///
/// Renders the container's command, content, and status surfaces into a
/// three-row layout and drives navigation from key presses. The loop is
/// synchronous: every transition is applied in the same turn as the key
/// event that caused it.
pub struct Shell {
    pub container: PanelContainer<PanelHandle>,
    pub keybindings: KeyBindings,
    pub themes: ThemeLoader,
    pub theme: Theme,
    pub running: bool,
}

impl Shell {
    /// Creates a shell with default keybindings and the built-in themes.
    pub fn new(container: PanelContainer<PanelHandle>) -> Self {
        Self {
            container,
            keybindings: KeyBindings::default(),
            themes: ThemeLoader::new(),
            theme: easel_default(),
            running: true,
        }
    }

    /// Switches to a named theme, keeping the current one if the name is
    /// unknown.
    pub fn with_theme(mut self, name: &str) -> Self {
        match self.themes.get(name) {
            Some(theme) => self.theme = theme.clone(),
            None => tracing::warn!(name, "unknown theme, keeping current"),
        }
        self
    }

    /// Handles one key event. Ctrl-C always quits, regardless of bindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        let current = self.container.navigator().current();
        if let Some(action) = self.keybindings.resolve(key, &current) {
            self.execute_action(action);
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Back => {
                self.container.go_back();
            }
            Action::JumpToView(n) => {
                let registry = self.container.registry();
                if let Some(name) = n.checked_sub(1).and_then(|i| registry.names().get(i).copied())
                {
                    self.container.navigate(name);
                }
            }
            Action::CycleTheme => {
                let names: Vec<String> =
                    self.themes.list().iter().map(|s| s.to_string()).collect();
                if names.is_empty() {
                    return;
                }
                let idx = names
                    .iter()
                    .position(|n| *n == self.theme.name)
                    .map(|i| (i + 1) % names.len())
                    .unwrap_or(0);
                if let Some(theme) = self.themes.get(&names[idx]) {
                    self.theme = theme.clone();
                    tracing::debug!(theme = %self.theme.name, "switched theme");
                }
            }
        }
    }

    /// Draws one frame: command bar, content, status bar, all resolved from
    /// the same context snapshot by the container.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let Surfaces {
            command,
            status,
            content,
        } = self.container.surfaces();

        if let Some(panel) = command {
            panel.render(frame, chunks[0], &self.theme);
        }
        if let Some(panel) = content {
            panel.render(frame, chunks[1], &self.theme);
        }
        if let Some(panel) = status {
            panel.render(frame, chunks[2], &self.theme);
        }
    }

    /// Runs the event loop, restoring the terminal on the way out even when
    /// the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut EaselTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }
}
