//! The panel trait and basic panel implementations.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::Theme;

/// A renderable unit plugged into one of the shell's surfaces.
pub trait Panel {
    /// Draw the panel into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Title shown by the command bar when this panel is the content.
    fn title(&self) -> &str {
        ""
    }
}

/// Shared handle to a panel.
///
/// The shell is single-threaded, so `Rc` is the right ownership for content
/// that both the registry and the resolved surfaces hold.
pub type PanelHandle = Rc<dyn Panel>;

/// Wraps a panel into a handle.
pub fn panel(p: impl Panel + 'static) -> PanelHandle {
    Rc::new(p)
}

/// Static text content with a title and border.
pub struct TextPanel {
    title: String,
    lines: Vec<String>,
}

impl TextPanel {
    pub fn new(
        title: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Panel for TextPanel {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let text: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let para = Paragraph::new(text)
            .style(Style::default().fg(theme.fg).bg(theme.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.as_str())
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(para, area);
    }

    fn title(&self) -> &str {
        &self.title
    }
}
