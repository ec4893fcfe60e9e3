//! Expanded layout: one labelled row group per token, qualified names
//! on the left and each token's bar on the shared time axis.

use planview_core::token::Token;
use planview_term::render::{Rect, RenderFrame, TextRole};

use crate::timeline_lanes::{project_col, state_marker, state_role, TimelineConfig};

/// One token's row in the expanded layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedRow {
    pub token_index: usize,
    /// Qualified node name shown in the label column.
    pub label: String,
    pub start_col: usize,
    pub end_col: usize,
    pub open_ended: bool,
    pub glyph: char,
    pub role: TextRole,
}

/// Project the visible tokens into per-token rows, in arrival order.
#[must_use]
pub fn plan_expanded(tokens: &[Token], visible: &[usize], config: &TimelineConfig) -> Vec<ExpandedRow> {
    let columns = config.columns.max(8);
    let mut rows = Vec::with_capacity(visible.len());
    for &index in visible {
        let Some(token) = tokens.get(index) else {
            continue;
        };
        let open_ended = token.start.is_unresolved() || token.end.is_unresolved();
        let start = token
            .start
            .finite()
            .filter(|v| *v >= 0.0)
            .map_or(0, |v| project_col(v, config));
        let end = if open_ended {
            columns
        } else {
            token
                .end
                .finite()
                .map_or(start + 1, |v| project_col(v, config))
                .max(start + 1)
                .min(columns)
        };
        let state = token.parameter("state").unwrap_or_default();
        rows.push(ExpandedRow {
            token_index: index,
            label: token.qualified_name(),
            start_col: start.min(columns),
            end_col: end,
            open_ended,
            glyph: state_marker(state),
            role: state_role(state),
        });
    }
    rows
}

/// Draw the expanded rows into a frame region. Each token takes
/// `lane_height` rows; the first carries a selection marker, the label
/// column, a `|` axis separator, and the bar. `scroll` skips leading
/// row groups.
pub fn draw_expanded(
    frame: &mut RenderFrame,
    area: Rect,
    rows: &[ExpandedRow],
    selected_token: Option<usize>,
    lane_height: u32,
    label_width: usize,
    scroll: usize,
) {
    let group_rows = lane_height.max(1) as usize;
    let label_width = label_width.min(area.width.saturating_sub(4));
    let axis_x = label_width + 2;

    for (slot, row) in rows.iter().skip(scroll).enumerate() {
        let y = slot * group_rows;
        if y >= area.height {
            break;
        }
        let selected = selected_token == Some(row.token_index);
        let marker = if selected { ">" } else { " " };
        let label_role = if selected {
            TextRole::Focus
        } else {
            TextRole::Primary
        };

        frame.draw_text_in_rect(area, 0, y, marker, label_role);
        frame.draw_text_in_rect(area, 1, y, &fit_label(&row.label, label_width), label_role);
        frame.draw_text_in_rect(area, label_width + 1, y, "|", TextRole::Muted);

        let axis_width = area.width.saturating_sub(axis_x);
        if row.start_col >= axis_width || row.end_col <= row.start_col {
            continue;
        }
        let end = row.end_col.min(axis_width);
        let width = end - row.start_col;
        let mut body = String::new();
        while body.chars().count() < width {
            body.push(row.glyph);
        }
        if row.open_ended && end == axis_width {
            body.pop();
            body.push('>');
        }
        let bar_role = if selected { TextRole::Focus } else { row.role };
        frame.draw_text_in_rect(area, axis_x + row.start_col, y, &body, bar_role);
    }
}

fn fit_label(label: &str, width: usize) -> String {
    let count = label.chars().count();
    if count <= width {
        return label.to_string();
    }
    if width <= 1 {
        return label.chars().take(width).collect();
    }
    let mut out: String = label.chars().take(width - 1).collect();
    out.push('~');
    out
}
