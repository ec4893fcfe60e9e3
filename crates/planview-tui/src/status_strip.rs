//! Header and footer strips: token counts on top, the six footer
//! actions and the transient notice line at the bottom.

/// One footer action: its trigger key and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterAction {
    pub key: char,
    pub label: &'static str,
}

/// The footer strip, in display order. Labels are fixed.
#[must_use]
pub fn footer_actions() -> [FooterAction; 6] {
    [
        FooterAction {
            key: 'c',
            label: "Close all dialogs",
        },
        FooterAction {
            key: 'g',
            label: "Toggle generated nodes",
        },
        FooterAction {
            key: 'e',
            label: "Toggle timeline/expanded",
        },
        FooterAction {
            key: 'o',
            label: "Toggle options box",
        },
        FooterAction {
            key: 'r',
            label: "Resize",
        },
        FooterAction {
            key: 'd',
            label: "Reset to default",
        },
    ]
}

/// Header line: plan label, counts, and the active layout.
#[must_use]
pub fn header_line(
    plan_label: &str,
    total: usize,
    shown: usize,
    hidden: usize,
    expanded_lines: bool,
    width: usize,
) -> String {
    let layout = if expanded_lines { "expanded" } else { "timeline" };
    fit_width(
        &format!(
            "planview {plan_label}  tokens:{total} shown:{shown} hidden:{hidden}  layout:{layout}"
        ),
        width,
    )
}

/// Footer action line: `[key] label` segments joined with two spaces.
#[must_use]
pub fn footer_line(width: usize) -> String {
    let segments: Vec<String> = footer_actions()
        .iter()
        .map(|action| format!("[{}] {}", action.key, action.label))
        .collect();
    fit_width(&segments.join("  "), width)
}

/// Hint line shown above the footer when no notice is pending.
#[must_use]
pub fn hint_line(width: usize) -> String {
    fit_width(
        "[q] quit  [u] hidden nodes  [/] edit filter  [enter] open dialog  arrows/hjkl move",
        width,
    )
}

/// Truncate a strip line to the frame width.
#[must_use]
pub fn fit_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        value.chars().take(width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_carries_the_six_labels_in_order() {
        let labels: Vec<&str> = footer_actions().iter().map(|a| a.label).collect();
        assert_eq!(
            labels,
            [
                "Close all dialogs",
                "Toggle generated nodes",
                "Toggle timeline/expanded",
                "Toggle options box",
                "Resize",
                "Reset to default",
            ]
        );
    }

    #[test]
    fn footer_line_joins_key_and_label_segments() {
        let line = footer_line(200);
        assert!(line.starts_with("[c] Close all dialogs  [g] Toggle generated nodes"));
        assert!(line.ends_with("[d] Reset to default"));
    }

    #[test]
    fn header_reports_counts_and_layout() {
        let line = header_line("rover.json", 12, 9, 3, true, 200);
        assert_eq!(
            line,
            "planview rover.json  tokens:12 shown:9 hidden:3  layout:expanded"
        );
        let timeline = header_line("rover.json", 12, 12, 0, false, 200);
        assert!(timeline.ends_with("layout:timeline"));
    }

    #[test]
    fn strip_lines_truncate_to_width() {
        assert_eq!(footer_line(10), "[c] Close ");
        assert_eq!(fit_width("abc", 2), "ab");
        assert_eq!(fit_width("abc", 5), "abc");
    }
}
