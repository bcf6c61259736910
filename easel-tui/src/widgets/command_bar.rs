//! Command surface: the title line with a back affordance for detail views.

use easel_core::ViewContext;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::panel::Panel;
use crate::theme::Theme;

/// Default command-surface panel: active view title, stack depth, and a
/// back hint once the active view is a detail view with somewhere to
/// return to.
pub struct CommandBar {
    title: String,
    depth: usize,
    show_back: bool,
}

impl CommandBar {
    /// Captures the pieces of `ctx` the bar displays.
    pub fn from_context(ctx: &ViewContext) -> Self {
        Self {
            title: ctx.current_view().to_string(),
            depth: ctx.history().len(),
            show_back: ctx.is_detail_view() && ctx.can_go_back(),
        }
    }

    /// Whether the bar is showing its back affordance.
    pub fn shows_back(&self) -> bool {
        self.show_back
    }
}

impl Panel for CommandBar {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![
            Span::styled(self.title.clone(), theme.bold),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", self.depth),
                Style::default().fg(theme.muted),
            ),
        ];
        if self.show_back {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "esc: back",
                Style::default().fg(theme.accent),
            ));
        }

        let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg));
        frame.render_widget(para, area);
    }

    fn title(&self) -> &str {
        &self.title
    }
}
