//! Custom node filter: user-edited exact and wildcard name entries.
//!
//! The filter text is a comma/newline separated list. Entries without
//! any of `*`, `+`, `?` hide a token by exact name equality; entries
//! containing `*` hide by [`wildcard_match`]; entries with `+` or `?`
//! but no `*` hide nothing. The name a token presents depends on the
//! layout flag: qualified when expanded lines are on, bare otherwise.
//! Entries are re-parsed from the stored text on every pass.

use crate::token::Token;
use crate::wildcard::wildcard_match;

/// Parsed filter entries, in the order the user wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilter {
    entries: Vec<String>,
}

impl NodeFilter {
    /// Split the stored text on commas and trim each entry: leading
    /// newlines first, then leading spaces, then trailing spaces. The
    /// trim order is part of the observed contract (an entry like
    /// `" \nfoo"` keeps its newline because the space shields it).
    #[must_use]
    pub fn parse(text: &str) -> NodeFilter {
        if text.is_empty() {
            return NodeFilter::default();
        }
        let entries = text.split(',').map(trim_entry).collect();
        NodeFilter { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry that hides `candidate`, if any.
    #[must_use]
    pub fn matching_entry(&self, candidate: &str) -> Option<&str> {
        for entry in &self.entries {
            if entry.contains('*') {
                if wildcard_match(entry, candidate) {
                    return Some(entry);
                }
            } else if !entry.contains('+') && !entry.contains('?') && entry == candidate {
                return Some(entry);
            }
        }
        None
    }

    #[must_use]
    pub fn hides(&self, candidate: &str) -> bool {
        self.matching_entry(candidate).is_some()
    }
}

fn trim_entry(raw: &str) -> String {
    let mut entry = raw;
    while let Some(rest) = entry.strip_prefix('\n') {
        entry = rest;
    }
    while let Some(rest) = entry.strip_prefix(' ') {
        entry = rest;
    }
    while let Some(rest) = entry.strip_suffix(' ') {
        entry = rest;
    }
    entry.to_string()
}

/// Remove the first comma segment whose trimmed form equals `entry`,
/// keeping every other segment's raw spelling. The unhide action uses
/// this to delete exactly the entry that caused a hide.
#[must_use]
pub fn remove_filter_entry(text: &str, entry: &str) -> String {
    let mut removed = false;
    let kept: Vec<&str> = text
        .split(',')
        .filter(|segment| {
            if !removed && trim_entry(segment) == entry {
                removed = true;
                false
            } else {
                true
            }
        })
        .collect();
    kept.join(",")
}

/// One token hidden by the custom filter during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenNode {
    /// The name the token presented under the active layout flag.
    pub display_name: String,
    /// The filter entry that hid it.
    pub entry: String,
}

/// Outcome of one filtering pass over the token sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// Indices of tokens that remain visible, in arrival order.
    pub visible: Vec<usize>,
    /// Names hidden by the custom filter, first occurrence only.
    pub hidden_custom: Vec<HiddenNode>,
    /// Count of tokens hidden by the generated-node toggle.
    pub hidden_generated: usize,
}

impl FilterOutcome {
    #[must_use]
    pub fn hidden_total(&self, total: usize) -> usize {
        total.saturating_sub(self.visible.len())
    }
}

/// Run the full pass: generated-node visibility first, then the custom
/// filter. Recomputed from scratch every time; nothing is cached.
#[must_use]
pub fn run_filter_pass(
    tokens: &[Token],
    filter: &NodeFilter,
    show_generated: bool,
    expanded_lines: bool,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    for (index, token) in tokens.iter().enumerate() {
        if !show_generated && token.is_generated() {
            outcome.hidden_generated += 1;
            continue;
        }
        let name = token.display_name(expanded_lines);
        if let Some(entry) = filter.matching_entry(&name) {
            if !outcome.hidden_custom.iter().any(|h| h.display_name == name) {
                outcome.hidden_custom.push(HiddenNode {
                    display_name: name,
                    entry: entry.to_string(),
                });
            }
            continue;
        }
        outcome.visible.push(index);
    }
    outcome
}
