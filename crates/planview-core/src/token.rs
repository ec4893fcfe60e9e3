//! Execution-token records supplied by the plan executor.
//!
//! A token is a read-only snapshot of one plan node: identity, naming,
//! timing domains, and an ordered list of named parameters. Tokens are
//! consumed as delivered; nothing here creates or mutates them.

/// One bound of a token's timing window: a finite number or the open
/// "infinity" sentinel used for domains the executor left unbounded.
///
/// `-1` is a finite value (the executor's "not yet known" marker) and is
/// kept distinct from the sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainValue {
    Finite(f64),
    Infinity,
}

impl DomainValue {
    /// Parse a domain value from its wire text. Accepts numeric text and
    /// the spellings `inf`, `+inf`, `Infinity`, `infinity` for the
    /// sentinel. Anything else is `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<DomainValue> {
        let trimmed = text.trim();
        match trimmed {
            "inf" | "+inf" | "Infinity" | "infinity" => Some(DomainValue::Infinity),
            _ => trimmed.parse::<f64>().ok().map(DomainValue::Finite),
        }
    }

    /// Render for display: finite values compactly, the sentinel as
    /// `infinity`.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            DomainValue::Finite(v) => format_finite(*v),
            DomainValue::Infinity => "infinity".to_string(),
        }
    }

    /// Render for display with the scale divisor applied to finite values.
    /// A divisor of zero or below falls back to unscaled display.
    #[must_use]
    pub fn display_scaled(&self, divisor: f64) -> String {
        match self {
            DomainValue::Finite(v) if divisor > 0.0 => format_finite(*v / divisor),
            _ => self.display(),
        }
    }

    /// True when the bound is not a settled finite time: the infinity
    /// sentinel, or the executor's `-1` "not yet known" marker.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        match self {
            DomainValue::Finite(v) => *v < 0.0,
            DomainValue::Infinity => true,
        }
    }

    /// The finite value, if settled.
    #[must_use]
    pub fn finite(&self) -> Option<f64> {
        match self {
            DomainValue::Finite(v) => Some(*v),
            DomainValue::Infinity => None,
        }
    }
}

/// A `name`/`value` pair attached to a token, kept in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParameter {
    pub name: String,
    pub value: String,
}

/// A rendered plan node: timing, state, and parameter data.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Execution order assigned by the executor. Repeated across loop
    /// iterations of the same node.
    pub id: i64,
    /// Qualifier chain for the node, outermost first (parent class, then
    /// the node itself). Joined with `.` it is the qualified name shown
    /// in dialog titles.
    pub class_names: Vec<String>,
    /// Bare parent object name, normalized from the wire's
    /// `OBJECT:<parent>(<n>)` reference.
    pub object_name: String,
    /// The node's own name.
    pub predicate_name: String,
    /// The node's type, e.g. `NodeList`, `Command`, `Assignment`.
    pub predicate_instance_name: String,
    pub start: DomainValue,
    pub duration: DomainValue,
    pub end: DomainValue,
    /// Remaining wire parameters (`state`, `value`, `children`,
    /// `localvariables`, and anything future) in wire order.
    pub parameters: Vec<TokenParameter>,
}

impl Token {
    /// The fully qualified display name: class names joined with `.`,
    /// falling back to the bare predicate name when no class chain was
    /// supplied.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.class_names.is_empty() {
            self.predicate_name.clone()
        } else {
            self.class_names.join(".")
        }
    }

    /// Name presented to filters and labels under the given layout flag:
    /// the qualified name when expanded lines are on, the bare predicate
    /// name otherwise.
    #[must_use]
    pub fn display_name(&self, expanded_lines: bool) -> String {
        if expanded_lines {
            self.qualified_name()
        } else {
            self.predicate_name.clone()
        }
    }

    /// Look up a named parameter's value.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// True for nodes the plan translator synthesized rather than the
    /// plan author: the name (or a qualifier segment) carries a
    /// `__<digits>` suffix.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        has_synthesized_suffix(&self.predicate_name)
            || self.class_names.iter().any(|c| has_synthesized_suffix(c))
    }
}

fn has_synthesized_suffix(name: &str) -> bool {
    let Some(pos) = name.rfind("__") else {
        return false;
    };
    let tail = &name[pos + 2..];
    !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit())
}

fn format_finite(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1.0e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
