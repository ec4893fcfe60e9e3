//! Packed-lane timeline: tokens share one time axis and are assigned
//! to horizontal lanes first-fit, in arrival order, so overlapping
//! spans never share a lane.

use planview_core::token::Token;
use planview_term::render::{Rect, RenderFrame, TextRole};

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineConfig {
    /// Viewport width in cells; bars clip here.
    pub columns: usize,
    /// Cells per scaled time unit.
    pub density: u32,
    /// Divisor applied to domain values before projection.
    pub scale_divisor: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            density: 10,
            scale_divisor: 1.0,
        }
    }
}

/// One projected bar, clipped to the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineBar {
    /// Index into the full token set.
    pub token_index: usize,
    /// Bare node name; the timeline always labels with short names.
    pub label: String,
    pub start_col: usize,
    /// Exclusive end column. Equals the viewport width for open-ended
    /// bars.
    pub end_col: usize,
    /// Start or end is unresolved; the bar runs to the window edge.
    pub open_ended: bool,
    pub glyph: char,
    pub role: TextRole,
}

/// Lane-packed projection of the visible tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelinePlan {
    pub columns: usize,
    pub lanes: Vec<Vec<TimelineBar>>,
}

impl TimelinePlan {
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }
}

/// Project the visible tokens onto lanes. `visible` carries indices
/// into `tokens` in arrival order; that order is the packing order.
#[must_use]
pub fn plan_timeline(tokens: &[Token], visible: &[usize], config: &TimelineConfig) -> TimelinePlan {
    let columns = config.columns.max(8);
    let mut occupancy: Vec<Vec<(usize, usize)>> = Vec::new();
    let mut lanes: Vec<Vec<TimelineBar>> = Vec::new();

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
        let span_end = if open_ended {
            usize::MAX
        } else {
            token
                .end
                .finite()
                .map_or(start + 1, |v| project_col(v, config))
                .max(start + 1)
        };

        let lane = match occupancy
            .iter()
            .position(|taken| !taken.iter().any(|&(s, e)| s < span_end && start < e))
        {
            Some(lane) => lane,
            None => {
                occupancy.push(Vec::new());
                lanes.push(Vec::new());
                occupancy.len() - 1
            }
        };
        occupancy[lane].push((start, span_end));

        let state = token.parameter("state").unwrap_or_default();
        lanes[lane].push(TimelineBar {
            token_index: index,
            label: token.display_name(false),
            start_col: start.min(columns),
            end_col: span_end.min(columns),
            open_ended,
            glyph: state_marker(state),
            role: state_role(state),
        });
    }

    TimelinePlan { columns, lanes }
}

/// Bar glyph for a node state.
#[must_use]
pub fn state_marker(state: &str) -> char {
    match state.trim().to_ascii_uppercase().as_str() {
        "ACTIVE" | "EXECUTING" => '=',
        "FINISHED" | "FINISHING" | "ITERATION_ENDED" => '+',
        "FAILING" | "FAILED" | "ERROR" => 'x',
        "WAITING" | "INACTIVE" => '~',
        _ => '#',
    }
}

/// Color role for a node state, matching the bar glyph mapping.
#[must_use]
pub fn state_role(state: &str) -> TextRole {
    match state.trim().to_ascii_uppercase().as_str() {
        "ACTIVE" | "EXECUTING" => TextRole::Executing,
        "FINISHED" | "FINISHING" | "ITERATION_ENDED" => TextRole::Finished,
        "FAILING" | "FAILED" | "ERROR" => TextRole::Failed,
        "WAITING" | "INACTIVE" => TextRole::Waiting,
        _ => TextRole::Accent,
    }
}

/// Draw the lane plan into a frame region. Each lane occupies
/// `lane_height` rows with the bar on the first; the selected token's
/// bar renders in the focus role.
pub fn draw_timeline(
    frame: &mut RenderFrame,
    area: Rect,
    plan: &TimelinePlan,
    selected_token: Option<usize>,
    lane_height: u32,
) {
    let group_rows = lane_height.max(1) as usize;
    for (lane_index, lane) in plan.lanes.iter().enumerate() {
        let row = area.y + lane_index * group_rows;
        if row >= area.y + area.height {
            break;
        }
        for bar in lane {
            draw_bar(frame, area, row, bar, selected_token == Some(bar.token_index));
        }
    }
}

fn draw_bar(frame: &mut RenderFrame, area: Rect, row: usize, bar: &TimelineBar, selected: bool) {
    if bar.start_col >= area.width || bar.end_col <= bar.start_col {
        return;
    }
    let end = bar.end_col.min(area.width);
    let role = if selected { TextRole::Focus } else { bar.role };

    let width = end - bar.start_col;
    let mut body: String = bar.label.chars().take(width).collect();
    while body.chars().count() < width {
        body.push(bar.glyph);
    }
    if bar.open_ended && end == area.width {
        body.pop();
        body.push('>');
    }
    frame.draw_text_in_rect(area, bar.start_col, row - area.y, &body, role);
}

/// Project a scaled time value onto the column axis.
#[must_use]
pub fn project_col(value: f64, config: &TimelineConfig) -> usize {
    ((value / config.scale_divisor.max(1.0)) * f64::from(config.density.max(1))).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use planview_core::token::{DomainValue, Token, TokenParameter};
    use planview_term::render::FrameSize;
    use planview_term::style::ThemeSpec;

    fn token(id: i64, name: &str, start: f64, end: f64) -> Token {
        Token {
            id,
            class_names: vec!["Root".to_string(), name.to_string()],
            object_name: "Root".to_string(),
            predicate_name: name.to_string(),
            predicate_instance_name: "Command".to_string(),
            start: DomainValue::Finite(start),
            duration: DomainValue::Finite(end - start),
            end: DomainValue::Finite(end),
            parameters: vec![TokenParameter {
                name: "state".to_string(),
                value: "ACTIVE".to_string(),
            }],
        }
    }

    fn unit_config(columns: usize) -> TimelineConfig {
        TimelineConfig {
            columns,
            density: 1,
            scale_divisor: 1.0,
        }
    }

    #[test]
    fn overlapping_tokens_take_distinct_lanes() {
        let tokens = vec![
            token(1, "A", 0.0, 10.0),
            token(2, "B", 5.0, 15.0),
            token(3, "C", 12.0, 20.0),
        ];
        let plan = plan_timeline(&tokens, &[0, 1, 2], &unit_config(40));
        assert_eq!(plan.lanes.len(), 2);
        assert_eq!(plan.lanes[0].len(), 2, "A and C share the first lane");
        assert_eq!(plan.lanes[0][0].label, "A");
        assert_eq!(plan.lanes[0][1].label, "C");
        assert_eq!(plan.lanes[1][0].label, "B");
    }

    #[test]
    fn lanes_never_hold_overlapping_spans() {
        let tokens: Vec<Token> = (0..6)
            .map(|i| token(i, "N", f64::from(i as i32) * 3.0, f64::from(i as i32) * 3.0 + 7.0))
            .collect();
        let visible: Vec<usize> = (0..tokens.len()).collect();
        let plan = plan_timeline(&tokens, &visible, &unit_config(60));
        for lane in &plan.lanes {
            for (i, a) in lane.iter().enumerate() {
                for b in lane.iter().skip(i + 1) {
                    let disjoint = a.end_col <= b.start_col || b.end_col <= a.start_col;
                    assert!(disjoint, "{} overlaps {}", a.label, b.label);
                }
            }
        }
    }

    #[test]
    fn half_open_spans_share_a_boundary_in_one_lane() {
        let tokens = vec![token(1, "A", 0.0, 5.0), token(2, "B", 5.0, 9.0)];
        let plan = plan_timeline(&tokens, &[0, 1], &unit_config(40));
        assert_eq!(plan.lanes.len(), 1);
    }

    #[test]
    fn packing_follows_arrival_order_not_start_order() {
        // The late-arriving early token must not displace the first.
        let tokens = vec![token(1, "Late", 10.0, 20.0), token(2, "Early", 0.0, 12.0)];
        let plan = plan_timeline(&tokens, &[0, 1], &unit_config(40));
        assert_eq!(plan.lanes[0][0].label, "Late");
        assert_eq!(plan.lanes[1][0].label, "Early");
    }

    #[test]
    fn density_and_scale_shape_the_projection() {
        let tokens = vec![token(1, "A", 2000.0, 3000.0)];
        let config = TimelineConfig {
            columns: 80,
            density: 10,
            scale_divisor: 1000.0,
        };
        let plan = plan_timeline(&tokens, &[0], &config);
        assert_eq!(plan.lanes[0][0].start_col, 20);
        assert_eq!(plan.lanes[0][0].end_col, 30);
    }

    #[test]
    fn unresolved_end_runs_to_the_window_edge() {
        let mut open = token(1, "A", 3.0, 0.0);
        open.end = DomainValue::Finite(-1.0);
        let plan = plan_timeline(&[open], &[0], &unit_config(24));
        let bar = &plan.lanes[0][0];
        assert!(bar.open_ended);
        assert_eq!(bar.end_col, 24);

        let mut sentinel = token(2, "B", 3.0, 0.0);
        sentinel.end = DomainValue::Infinity;
        let plan = plan_timeline(&[sentinel], &[0], &unit_config(24));
        assert!(plan.lanes[0][0].open_ended);
    }

    #[test]
    fn zero_duration_token_still_gets_one_cell() {
        let tokens = vec![token(1, "A", 4.0, 4.0)];
        let plan = plan_timeline(&tokens, &[0], &unit_config(40));
        let bar = &plan.lanes[0][0];
        assert_eq!(bar.end_col, bar.start_col + 1);
    }

    #[test]
    fn state_markers_cover_the_lifecycle() {
        assert_eq!(state_marker("ACTIVE"), '=');
        assert_eq!(state_marker("finished"), '+');
        assert_eq!(state_marker("FAILING"), 'x');
        assert_eq!(state_marker("WAITING"), '~');
        assert_eq!(state_marker("???"), '#');
        assert_eq!(state_role("ACTIVE"), TextRole::Executing);
        assert_eq!(state_role("unknown"), TextRole::Accent);
    }

    #[test]
    fn draw_fills_bars_with_label_then_glyphs() {
        let tokens = vec![token(1, "Go", 0.0, 8.0)];
        let plan = plan_timeline(&tokens, &[0], &unit_config(16));
        let mut frame = RenderFrame::new(
            FrameSize {
                width: 16,
                height: 2,
            },
            ThemeSpec::default(),
        );
        let area = Rect {
            x: 0,
            y: 0,
            width: 16,
            height: 2,
        };
        draw_timeline(&mut frame, area, &plan, None, 2);
        assert_eq!(frame.row_text(0), "Go======        ");
    }

    #[test]
    fn draw_marks_open_ended_bars_at_the_edge() {
        let mut open = token(1, "Go", 0.0, 0.0);
        open.end = DomainValue::Infinity;
        let plan = plan_timeline(&[open], &[0], &unit_config(12));
        let mut frame = RenderFrame::new(
            FrameSize {
                width: 12,
                height: 1,
            },
            ThemeSpec::default(),
        );
        let area = Rect {
            x: 0,
            y: 0,
            width: 12,
            height: 1,
        };
        draw_timeline(&mut frame, area, &plan, None, 1);
        assert_eq!(frame.row_text(0), "Go=========>");
    }
}
