//! Single-line editor for the custom filter text.
//!
//! Opens seeded with the stored text, edits a private buffer, and only
//! touches the preference store on commit. Cancel discards the buffer.

use chrono::{DateTime, Utc};
use planview_core::prefs::PrefsStore;

#[derive(Debug, Clone, Default)]
pub struct FilterEditor {
    buffer: String,
}

impl FilterEditor {
    /// Seed the buffer from the stored text.
    #[must_use]
    pub fn open(text: &str) -> FilterEditor {
        FilterEditor {
            buffer: text.to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn push_char(&mut self, ch: char) {
        if ch == '\n' || !ch.is_control() {
            self.buffer.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        self.buffer.pop();
    }

    /// Write the buffer through to the store. Returns true when the
    /// stored text changed and the caller must persist and rebuild.
    pub fn commit(&self, store: &mut PrefsStore, now: DateTime<Utc>) -> bool {
        if store.preferences().custom_filter == self.buffer {
            return false;
        }
        store.set_custom_filter(self.buffer.clone(), now);
        true
    }

    /// Editor body lines: the input line with a cursor mark, then the
    /// key hint. Long buffers keep their tail visible.
    #[must_use]
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        let shown = self.buffer.replace('\n', "\\n");
        let line = format!("Filter> {shown}_");
        let fitted = if line.chars().count() <= width {
            line
        } else {
            let tail: String = line
                .chars()
                .rev()
                .take(width.saturating_sub(1))
                .collect::<Vec<char>>()
                .into_iter()
                .rev()
                .collect();
            format!("~{tail}")
        };
        vec![
            fitted,
            String::new(),
            clip("  comma separates entries, enter save, esc discard", width),
        ]
    }
}

fn clip(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}
