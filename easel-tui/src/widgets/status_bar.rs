//! Status surface: a one-line banner with the active view and a clock.

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::panel::Panel;
use crate::theme::Theme;

/// Default status-surface panel.
///
/// Built from the current view name alone, matching the status slot's
/// narrow contract; an optional note carries transient messages.
pub struct StatusBar {
    view: String,
    note: Option<String>,
}

impl StatusBar {
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            note: None,
        }
    }

    /// Attaches a transient message shown next to the view name.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Panel for StatusBar {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![Span::styled(
            self.view.clone(),
            Style::default().fg(theme.accent),
        )];
        if let Some(note) = &self.note {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                note.clone(),
                Style::default().fg(theme.muted),
            ));
        }
        let left = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg));
        frame.render_widget(left, area);

        let clock = Local::now().format("%H:%M:%S").to_string();
        let right = Paragraph::new(Line::from(Span::styled(
            clock,
            Style::default().fg(theme.muted),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(right, area);
    }

    fn title(&self) -> &str {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_carries_the_view_name() {
        let bar = StatusBar::new("library");
        assert_eq!(bar.title(), "library");
        assert!(bar.note.is_none());
    }

    #[test]
    fn with_note_attaches_a_message() {
        let bar = StatusBar::new("library").with_note("3 records");
        assert_eq!(bar.note.as_deref(), Some("3 records"));
    }
}
