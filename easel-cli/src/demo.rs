//! Demo container: a small record library with list and detail views.

use std::collections::HashSet;

use easel_core::{PanelContainer, Slot, View, ViewSource};
use easel_tui::{CommandBar, PanelHandle, StatusBar, TextPanel, panel};

/// Record fixtures the demo navigates over.
const RECORDS: &[(&str, &str, &str)] = &[
    ("record-1", "Aurora Shift", "Ambient set recorded live in Bergen."),
    ("record-2", "Cobalt Lines", "Four-track EP, all analog."),
    ("record-3", "Meridian", "Longform drone, one take."),
];

/// Builds the demo container.
///
/// The views come from a factory so the library panel can close over the
/// navigator: it is rebuilt on every resolution and marks the records that
/// appear in the visit history.
pub fn build_container() -> PanelContainer<PanelHandle> {
    let source = ViewSource::factory(|nav| {
        let visited: HashSet<String> = nav.history().into_iter().collect();

        let mut lines = Vec::new();
        for (i, (name, title, _)) in RECORDS.iter().enumerate() {
            let marker = if visited.contains(*name) { "*" } else { " " };
            lines.push(format!("{marker} {}. {title}", i + 2));
        }
        lines.push(String::new());
        lines.push("digits: open a view   esc: back   t: theme   q: quit".to_string());

        let mut views = vec![View::new("library", panel(TextPanel::new("Library", lines)))];
        for (name, title, blurb) in RECORDS {
            views.push(View::detail(
                *name,
                panel(TextPanel::new(
                    *title,
                    [*blurb, "", "esc: back to the library"],
                )),
            ));
        }
        views.push(View::new(
            "empty",
            panel(TextPanel::new(
                "Nothing selected",
                ["Press 1 to open the library."],
            )),
        ));
        views
    });

    PanelContainer::new("empty", source)
        .with_command_slot(Slot::dynamic(|ctx| panel(CommandBar::from_context(ctx))))
        .with_status_slot(Slot::dynamic(|name: &str| {
            panel(StatusBar::new(name).with_note("easel demo"))
        }))
        .with_on_view_change(|name| tracing::debug!(view = name, "view changed"))
}
