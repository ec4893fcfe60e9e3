//! Options panel state: density, lane height, and the scale radios.
//!
//! The panel never holds values of its own. Adjustments write straight
//! through to the preference store so every change persists and the
//! next rebuild picks it up.

use chrono::{DateTime, Utc};
use planview_core::prefs::{Preferences, PrefsStore, SCALE_CHOICES};

/// Which panel row the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionsFocus {
    #[default]
    Density,
    LaneHeight,
    Scale,
}

const MAX_DENSITY: u32 = 120;
const MAX_LANE_HEIGHT: u32 = 8;

#[derive(Debug, Clone, Default)]
pub struct OptionsPanel {
    focus: OptionsFocus,
}

impl OptionsPanel {
    #[must_use]
    pub fn focus(&self) -> OptionsFocus {
        self.focus
    }

    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            OptionsFocus::Density => OptionsFocus::Density,
            OptionsFocus::LaneHeight => OptionsFocus::Density,
            OptionsFocus::Scale => OptionsFocus::LaneHeight,
        };
    }

    pub fn focus_down(&mut self) {
        self.focus = match self.focus {
            OptionsFocus::Density => OptionsFocus::LaneHeight,
            OptionsFocus::LaneHeight => OptionsFocus::Scale,
            OptionsFocus::Scale => OptionsFocus::Scale,
        };
    }

    /// Apply a left/right step to the focused row. Returns true when a
    /// preference actually changed and the caller must persist and
    /// rebuild.
    pub fn adjust(&self, store: &mut PrefsStore, step: i32, now: DateTime<Utc>) -> bool {
        let prefs = store.preferences();
        match self.focus {
            OptionsFocus::Density => {
                let next = stepped(prefs.density, step, MAX_DENSITY);
                if next == prefs.density {
                    return false;
                }
                store.set_density(next, now);
                true
            }
            OptionsFocus::LaneHeight => {
                let next = stepped(prefs.lane_height, step, MAX_LANE_HEIGHT);
                if next == prefs.lane_height {
                    return false;
                }
                store.set_lane_height(next, now);
                true
            }
            OptionsFocus::Scale => {
                let next = neighbor_scale(prefs.scale, step);
                if next == prefs.scale {
                    return false;
                }
                store.set_scale(next, now);
                true
            }
        }
    }

    /// Panel body lines for the overlay, one per row plus a key hint.
    #[must_use]
    pub fn render_lines(&self, prefs: &Preferences, width: usize) -> Vec<String> {
        let radios: Vec<String> = SCALE_CHOICES
            .iter()
            .map(|&choice| {
                let mark = if choice == prefs.scale { '*' } else { ' ' };
                format!("({mark}) {choice}")
            })
            .collect();
        let rows = [
            (
                OptionsFocus::Density,
                format!("Density     {:>4} columns per time unit", prefs.density),
            ),
            (
                OptionsFocus::LaneHeight,
                format!("Lane height {:>4} rows per lane", prefs.lane_height),
            ),
            (OptionsFocus::Scale, format!("Scale       {}", radios.join("  "))),
        ];

        let mut lines: Vec<String> = rows
            .iter()
            .map(|(row, text)| {
                let marker = if *row == self.focus { "> " } else { "  " };
                clip(&format!("{marker}{text}"), width)
            })
            .collect();
        lines.push(String::new());
        lines.push(clip("  up/down select, left/right change, o close", width));
        lines
    }
}

fn stepped(value: u32, step: i32, max: u32) -> u32 {
    if step >= 0 {
        value.saturating_add(step.unsigned_abs()).min(max)
    } else {
        value.saturating_sub(step.unsigned_abs()).max(1)
    }
}

/// Move along [`SCALE_CHOICES`]. The list runs largest first, so a
/// positive step selects a smaller divisor.
fn neighbor_scale(current: u32, step: i32) -> u32 {
    let at = SCALE_CHOICES
        .iter()
        .position(|&c| c == current)
        .unwrap_or(SCALE_CHOICES.len() - 1);
    let next = if step >= 0 {
        (at + 1).min(SCALE_CHOICES.len() - 1)
    } else {
        at.saturating_sub(1)
    };
    SCALE_CHOICES[next]
}

fn clip(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}
