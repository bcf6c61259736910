//! Terminal shell for the easel container.
//!
//! This crate binds `easel-core` to ratatui and crossterm: a [`Shell`]
//! event loop renders a container's command, content, and status surfaces
//! into a three-row layout, with layered keybindings and a TOML-loadable
//! theme system.

mod keybindings;
mod panel;
mod shell;
mod terminal;
mod theme;
mod widgets;

pub use keybindings::{Action, KeyBindings};
pub use panel::{Panel, PanelHandle, TextPanel, panel};
pub use shell::Shell;
pub use terminal::{EaselTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, ThemeError, ThemeLoader, easel_default, easel_light};
pub use widgets::{CommandBar, StatusBar};
