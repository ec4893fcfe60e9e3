//! Terminal color capability detection.
//!
//! The palette itself lives in `planview_term::style`; this module only
//! decides how much of it the terminal can show.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorCapability {
    Ansi16,
    Ansi256,
    TrueColor,
}

/// Classify a terminal from its environment. `NO_COLOR` wins over
/// everything and pins the conservative tier.
#[must_use]
pub fn capability_from_env(
    no_color: Option<&str>,
    colorterm: Option<&str>,
    term: Option<&str>,
) -> TerminalColorCapability {
    if no_color.is_some_and(|v| !v.is_empty()) {
        return TerminalColorCapability::Ansi16;
    }
    if colorterm.is_some_and(|v| v.contains("truecolor") || v.contains("24bit")) {
        return TerminalColorCapability::TrueColor;
    }
    if term.is_some_and(|v| v.contains("256color")) {
        return TerminalColorCapability::Ansi256;
    }
    TerminalColorCapability::Ansi16
}

#[must_use]
pub fn detect_terminal_color_capability() -> TerminalColorCapability {
    let no_color = env::var("NO_COLOR").ok();
    let colorterm = env::var("COLORTERM").ok();
    let term = env::var("TERM").ok();
    capability_from_env(no_color.as_deref(), colorterm.as_deref(), term.as_deref())
}
