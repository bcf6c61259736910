//! Theme system for the easel shell.

use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use thiserror::Error;

/// Colors and text styles for the shell chrome and its panels.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub warning: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub selection: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
}

/// Default dark theme: slate grey with an amber accent.
pub fn easel_default() -> Theme {
    let fg = Color::Rgb(200, 204, 212); // #c8ccd4

    Theme {
        name: "easel".into(),

        bg: Color::Rgb(20, 22, 26), // #14161a
        fg,
        accent: Color::Rgb(224, 164, 88),  // #e0a458 amber
        muted: Color::Rgb(107, 114, 128),  // #6b7280
        warning: Color::Rgb(217, 162, 60), // #d9a23c
        error: Color::Rgb(224, 85, 97),    // #e05561

        border: Color::Rgb(44, 49, 58),     // #2c313a
        selection: Color::Rgb(38, 64, 88),  // #264058

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

/// High-contrast light theme.
pub fn easel_light() -> Theme {
    let fg = Color::Rgb(44, 44, 44); // #2c2c2c

    Theme {
        name: "easel-light".into(),

        bg: Color::Rgb(245, 242, 234), // #f5f2ea
        fg,
        accent: Color::Rgb(31, 111, 178),  // #1f6fb2
        muted: Color::Rgb(138, 143, 152),  // #8a8f98
        warning: Color::Rgb(176, 125, 43), // #b07d2b
        error: Color::Rgb(179, 54, 74),    // #b3364a

        border: Color::Rgb(216, 210, 196),    // #d8d2c4
        selection: Color::Rgb(213, 227, 240), // #d5e3f0

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

/// Errors from loading theme files.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse theme file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color {value:?} for `{field}` in theme {name:?}")]
    Color {
        name: String,
        field: &'static str,
        value: String,
    },
}

/// On-disk theme representation: colors as `#rrggbb` strings.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: String,
    bg: String,
    fg: String,
    accent: String,
    muted: String,
    warning: String,
    error: String,
    border: String,
    selection: String,
}

impl ThemeFile {
    fn into_theme(self) -> Result<Theme, ThemeError> {
        let bg = field_color(&self.name, "bg", &self.bg)?;
        let fg = field_color(&self.name, "fg", &self.fg)?;
        let accent = field_color(&self.name, "accent", &self.accent)?;
        let muted = field_color(&self.name, "muted", &self.muted)?;
        let warning = field_color(&self.name, "warning", &self.warning)?;
        let error = field_color(&self.name, "error", &self.error)?;
        let border = field_color(&self.name, "border", &self.border)?;
        let selection = field_color(&self.name, "selection", &self.selection)?;

        Ok(Theme {
            name: self.name,
            bg,
            fg,
            accent,
            muted,
            warning,
            error,
            border,
            selection,
            bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
        })
    }
}

fn field_color(theme: &str, field: &'static str, value: &str) -> Result<Color, ThemeError> {
    parse_color(value).ok_or_else(|| ThemeError::Color {
        name: theme.to_string(),
        field,
        value: value.to_string(),
    })
}

/// Parses a `#rrggbb` string.
fn parse_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Built-in themes plus any `.toml` themes loaded from a directory.
///
/// Later loads shadow earlier ones with the same name, so a user theme can
/// override a built-in.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    themes: Vec<Theme>,
}

impl ThemeLoader {
    /// A loader holding the built-in themes.
    pub fn new() -> Self {
        Self {
            themes: vec![easel_default(), easel_light()],
        }
    }

    /// All theme names, load order preserved.
    pub fn list(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Finds a theme by name. The most recently loaded match wins.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().rev().find(|t| t.name == name)
    }

    /// Adds one theme.
    pub fn push(&mut self, theme: Theme) {
        self.themes.push(theme);
    }

    /// Loads every `.toml` file in `dir`, in path order, and returns how
    /// many themes were added.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ThemeError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ThemeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("toml"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let contents = std::fs::read_to_string(&path).map_err(|source| ThemeError::Io {
                path: path.clone(),
                source,
            })?;
            let file: ThemeFile = toml::from_str(&contents).map_err(|source| ThemeError::Parse {
                path: path.clone(),
                source,
            })?;
            self.themes.push(file.into_theme()?);
            loaded += 1;
        }

        tracing::debug!(loaded, dir = %dir.display(), "loaded themes");
        Ok(loaded)
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}
