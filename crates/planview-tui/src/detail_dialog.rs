//! Per-token detail surfaces: the modal dialog and the flat detail pane.
//!
//! Dialogs are built for the whole token set in one pass; the pass
//! consumes the loop table so stale counts can never leak into a later
//! render. Timing values in the dialog are divided by the scale
//! divisor; the pane shows them unscaled.

use planview_core::loops::LoopTable;
use planview_core::token::{DomainValue, Token};

/// One labelled line of a dialog body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLine {
    pub label: &'static str,
    pub value: String,
}

impl DialogLine {
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// A built detail dialog for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDialog {
    /// The token's position in the full set; dialog identity.
    pub token_index: usize,
    /// The qualified node name.
    pub title: String,
    pub lines: Vec<DialogLine>,
}

/// Build dialogs for every token, in set order. Consumes `loops` by
/// clearing it once the pass is done.
#[must_use]
pub fn build_token_dialogs(
    tokens: &[Token],
    loops: &mut LoopTable,
    scale_divisor: f64,
) -> Vec<TokenDialog> {
    let dialogs = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| TokenDialog {
            token_index: index,
            title: token.qualified_name(),
            lines: dialog_lines(token, loops, scale_divisor),
        })
        .collect();
    loops.clear();
    dialogs
}

fn dialog_lines(token: &Token, loops: &LoopTable, scale_divisor: f64) -> Vec<DialogLine> {
    vec![
        DialogLine {
            label: "This Node",
            value: token.predicate_name.clone(),
        },
        DialogLine {
            label: "Node Type",
            value: token.predicate_instance_name.clone(),
        },
        DialogLine {
            label: "Parent Node",
            value: token.object_name.clone(),
        },
        DialogLine {
            label: "Start Time",
            value: token.start.display_scaled(scale_divisor),
        },
        DialogLine {
            label: "End Time",
            value: token.end.display_scaled(scale_divisor),
        },
        DialogLine {
            label: "Duration",
            value: token.duration.display_scaled(scale_divisor),
        },
        DialogLine {
            label: "Node State",
            value: parameter_or_blank(token, "state"),
        },
        DialogLine {
            label: "Execution order",
            value: token.id.to_string(),
        },
        DialogLine {
            label: "Loop count",
            value: loops.display(token.id),
        },
        DialogLine {
            label: "Child Nodes",
            value: parameter_or_blank(token, "children"),
        },
        DialogLine {
            label: "Local Variables (name = val. before --> val. after)",
            value: parameter_or_blank(token, "localvariables"),
        },
    ]
}

/// Flat detail pane for one token: every named parameter first, then
/// the fixed identity and unscaled timing fields.
#[must_use]
pub fn detail_pane_lines(token: &Token) -> Vec<String> {
    let mut lines = Vec::new();
    for parameter in &token.parameters {
        lines.push(format!(
            "{}: {}",
            parameter.name,
            convert_infinities(&parameter.value)
        ));
    }
    lines.push(format!("Class: {}", token.qualified_name()));
    lines.push(format!("Instance: {}", token.object_name));
    lines.push(format!("Predicate: {}", token.predicate_name));
    lines.push(format!("Instance: {}", token.predicate_instance_name));
    lines.push(format!("Start: {}", token.start.display()));
    lines.push(format!("Duration: {}", token.duration.display()));
    lines.push(format!("End: {}", token.end.display()));
    lines
}

fn parameter_or_blank(token: &Token, name: &str) -> String {
    token.parameter(name).unwrap_or_default().to_string()
}

/// Rewrite an infinity spelling to the canonical display token; all
/// other text passes through untouched.
fn convert_infinities(value: &str) -> String {
    match DomainValue::parse(value) {
        Some(DomainValue::Infinity) => "infinity".to_string(),
        _ => value.to_string(),
    }
}
