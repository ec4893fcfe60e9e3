//! Loop-iteration counting for repeated node ids.
//!
//! The executor reuses a node's id across loop iterations, so one id
//! appearing n times means the node ran n times. The table is rebuilt
//! from the full token set on every render pass and handed to the
//! dialog build, which consumes it; nothing survives across passes.

use std::collections::HashMap;

use crate::token::Token;

/// Occurrence counts per token id for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopTable {
    counts: HashMap<i64, usize>,
}

impl LoopTable {
    /// Count id occurrences across the whole set.
    #[must_use]
    pub fn build(tokens: &[Token]) -> LoopTable {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token.id).or_insert(0) += 1;
        }
        LoopTable { counts }
    }

    /// Total occurrences recorded for `id`; 0 when unseen.
    #[must_use]
    pub fn count(&self, id: i64) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Dialog text for `id`: the total when the node looped, `No loop`
    /// otherwise. Every occurrence of a looping id reports the same
    /// total.
    #[must_use]
    pub fn display(&self, id: i64) -> String {
        let count = self.count(id);
        if count > 1 {
            count.to_string()
        } else {
            "No loop".to_string()
        }
    }

    /// True once the table has been consumed (or never held counts).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Drop all counts. The dialog build calls this after its pass so a
    /// stale table can never leak into the next render.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
