//! planview-tui: terminal viewer for plan execution token traces.

use planview_term::input::{translate_input, InputEvent, UiAction};
use planview_term::render::{FrameSize, RenderFrame, TextRole};
use planview_term::style::{ThemeKind, ThemeSpec};
use planview_term::widgets::WidgetSpec;

pub mod detail_dialog;
pub mod expanded_rows;
pub mod filter_editor;
pub mod hidden_nodes;
pub mod interactive_runtime;
pub mod options_panel;
pub mod status_strip;
pub mod theme;
pub mod timeline_lanes;
pub mod view_model;

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "planview-tui"
}

/// Viewer default theme comes from the terminal adapter abstraction.
#[must_use]
pub fn default_theme() -> ThemeSpec {
    ThemeSpec::for_kind(ThemeKind::Dark)
}

/// Map terminal color capability to adapter theme tokens.
#[must_use]
pub fn theme_for_capability(capability: theme::TerminalColorCapability) -> ThemeSpec {
    match capability {
        theme::TerminalColorCapability::Ansi16 => ThemeSpec::for_kind(ThemeKind::HighContrast),
        theme::TerminalColorCapability::Ansi256 | theme::TerminalColorCapability::TrueColor => {
            ThemeSpec::for_kind(ThemeKind::Dark)
        }
    }
}

/// Resolve runtime theme from current terminal capability hints.
#[must_use]
pub fn detected_theme() -> ThemeSpec {
    let capability = theme::detect_terminal_color_capability();
    theme_for_capability(capability)
}

/// Build a tiny bootstrap frame via adapter render abstraction.
#[must_use]
pub fn bootstrap_frame() -> RenderFrame {
    let mut frame = RenderFrame::new(
        FrameSize {
            width: 20,
            height: 2,
        },
        default_theme(),
    );
    frame.draw_text(0, 0, "planview", TextRole::Accent);
    frame.draw_text(0, 1, "ready", TextRole::Primary);
    frame
}

/// Overlay panel primitives sourced from adapter layer.
#[must_use]
pub fn viewer_overlay_widgets() -> [WidgetSpec; 4] {
    [
        WidgetSpec::token_dialog_panel(),
        WidgetSpec::options_panel(),
        WidgetSpec::hidden_nodes_panel(),
        WidgetSpec::filter_editor_panel(),
    ]
}

/// Input mapping is sourced from the adapter event/input abstraction.
#[must_use]
pub fn map_input(event: InputEvent) -> UiAction {
    translate_input(&event)
}
