//! Hidden-nodes panel: the names the custom filter hid this pass, with
//! an unhide action that deletes the responsible filter entry.

use chrono::{DateTime, Utc};
use planview_core::node_filter::{remove_filter_entry, HiddenNode};
use planview_core::prefs::PrefsStore;

#[derive(Debug, Clone, Default)]
pub struct HiddenNodesPanel {
    selected: usize,
}

impl HiddenNodesPanel {
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_selection(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let at = self.selected.min(len - 1);
        self.selected = if delta >= 0 {
            (at + delta.unsigned_abs() as usize).min(len - 1)
        } else {
            at.saturating_sub(delta.unsigned_abs() as usize)
        };
    }

    /// The list shrinks after an unhide; pull the cursor back in range.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }

    /// Delete the filter entry behind the selected row. Returns true
    /// when the stored text changed and the caller must persist and
    /// rebuild.
    pub fn unhide(
        &self,
        store: &mut PrefsStore,
        hidden: &[HiddenNode],
        now: DateTime<Utc>,
    ) -> bool {
        let Some(node) = hidden.get(self.selected) else {
            return false;
        };
        let text = store.preferences().custom_filter;
        let next = remove_filter_entry(&text, &node.entry);
        if next == text {
            return false;
        }
        store.set_custom_filter(next, now);
        true
    }

    /// Panel body lines, selection scrolled into view.
    #[must_use]
    pub fn render_lines(&self, hidden: &[HiddenNode], width: usize, max_rows: usize) -> Vec<String> {
        if hidden.is_empty() {
            return vec![
                clip("No nodes hidden by the custom filter", width),
                String::new(),
                clip("  u close", width),
            ];
        }
        let rows = max_rows.max(1);
        let first = self.selected.saturating_sub(rows - 1);
        let mut lines: Vec<String> = hidden
            .iter()
            .enumerate()
            .skip(first)
            .take(rows)
            .map(|(at, node)| {
                let marker = if at == self.selected { "> " } else { "  " };
                clip(&format!("{marker}{}  ({})", node.display_name, node.entry), width)
            })
            .collect();
        lines.push(String::new());
        lines.push(clip("  enter unhide, u close", width));
        lines
    }
}

fn clip(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single() {
            Some(ts) => ts,
            None => panic!("fixed timestamp"),
        }
    }

    fn hidden(names: &[(&str, &str)]) -> Vec<HiddenNode> {
        names
            .iter()
            .map(|(name, entry)| HiddenNode {
                display_name: (*name).to_string(),
                entry: (*entry).to_string(),
            })
            .collect()
    }

    #[test]
    fn selection_moves_and_clamps_to_the_list() {
        let mut panel = HiddenNodesPanel::default();
        panel.move_selection(1, 3);
        panel.move_selection(1, 3);
        panel.move_selection(1, 3);
        assert_eq!(panel.selected(), 2);
        panel.move_selection(-5, 3);
        assert_eq!(panel.selected(), 0);
        panel.clamp(0);
        assert_eq!(panel.selected(), 0);
    }

    #[test]
    fn unhide_removes_only_the_responsible_entry() {
        let mut store = PrefsStore::default();
        store.set_custom_filter("Drive, Steer*,Turn".to_string(), now());
        let list = hidden(&[("Root.SteerLeft", "Steer*")]);

        let panel = HiddenNodesPanel::default();
        assert!(panel.unhide(&mut store, &list, now()));
        assert_eq!(store.preferences().custom_filter, "Drive,Turn");
    }

    #[test]
    fn unhide_with_nothing_selected_changes_nothing() {
        let mut store = PrefsStore::default();
        store.set_custom_filter("Drive".to_string(), now());
        let panel = HiddenNodesPanel::default();
        assert!(!panel.unhide(&mut store, &[], now()));
        assert_eq!(store.preferences().custom_filter, "Drive");
    }

    #[test]
    fn render_marks_the_selected_row() {
        let panel = HiddenNodesPanel::default();
        let list = hidden(&[("Drive", "Drive"), ("Steer", "S*r")]);
        let lines = panel.render_lines(&list, 40, 5);
        assert_eq!(lines[0], "> Drive  (Drive)");
        assert_eq!(lines[1], "  Steer  (S*r)");
        assert_eq!(lines.last().map(String::as_str), Some("  enter unhide, u close"));
    }

    #[test]
    fn render_scrolls_the_selection_into_view() {
        let mut panel = HiddenNodesPanel::default();
        let list = hidden(&[("A", "A"), ("B", "B"), ("C", "C"), ("D", "D")]);
        panel.move_selection(3, list.len());
        let lines = panel.render_lines(&list, 40, 2);
        assert_eq!(lines[0], "  C  (C)");
        assert_eq!(lines[1], "> D  (D)");
    }

    #[test]
    fn empty_list_renders_a_placeholder() {
        let panel = HiddenNodesPanel::default();
        let lines = panel.render_lines(&[], 40, 5);
        assert_eq!(lines[0], "No nodes hidden by the custom filter");
    }
}
