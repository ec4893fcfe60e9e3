//! Loading token records from the plan executor's emission file.
//!
//! The executor's Gantt listener writes a JSON array of
//! `{ "id", "type", "parameters": [ { "name", "value", .. } ] }`
//! records. Well-known parameter names are lifted into [`Token`]
//! fields; everything else stays in the token's ordered parameter
//! list. Loading is read-only and best-effort: malformed domain values
//! fall back to the executor's "not yet known" marker rather than
//! failing the load.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::token::{DomainValue, Token, TokenParameter};

#[derive(Debug, Clone, Deserialize)]
struct WireParameter {
    name: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Clone, Deserialize)]
struct WireToken {
    id: i64,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    parameters: Vec<WireParameter>,
}

/// Read and parse the token file at `path`.
pub fn load_tokens(path: &Path) -> Result<Vec<Token>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("read plan file {}: {e}", path.display()))?;
    parse_tokens(&raw)
}

/// Parse a token array from raw JSON text.
pub fn parse_tokens(raw: &str) -> Result<Vec<Token>, String> {
    let records: Vec<WireToken> =
        serde_json::from_str(raw).map_err(|e| format!("parse plan tokens: {e}"))?;
    Ok(records.into_iter().map(token_from_wire).collect())
}

fn token_from_wire(record: WireToken) -> Token {
    let mut token = Token {
        id: record.id,
        class_names: Vec::new(),
        object_name: String::new(),
        predicate_name: record.type_name,
        predicate_instance_name: String::new(),
        start: DomainValue::Finite(-1.0),
        duration: DomainValue::Finite(-1.0),
        end: DomainValue::Finite(-1.0),
        parameters: Vec::new(),
    };
    for parameter in record.parameters {
        match parameter.name.as_str() {
            "entityName" => token.predicate_instance_name = parameter.value,
            "full type" => {
                token.class_names = parameter.value.split('.').map(str::to_string).collect();
            }
            "object" => token.object_name = parse_object_name(&parameter.value),
            "start" => token.start = parse_domain(&parameter.value),
            "end" => token.end = parse_domain(&parameter.value),
            "duration" => token.duration = parse_domain(&parameter.value),
            _ => token.parameters.push(TokenParameter {
                name: parameter.name,
                value: parameter.value,
            }),
        }
    }
    token
}

fn parse_domain(raw: &str) -> DomainValue {
    DomainValue::parse(raw).unwrap_or(DomainValue::Finite(-1.0))
}

/// Strip the `OBJECT:` prefix and the trailing `(<n>)` ordinal from a
/// parent reference like `OBJECT:Root(6)`. Anything that does not fit
/// the shape passes through untouched.
fn parse_object_name(raw: &str) -> String {
    let trimmed = raw.strip_prefix("OBJECT:").unwrap_or(raw);
    match trimmed.rfind('(') {
        Some(pos) if trimmed.ends_with(')') => {
            let ordinal = &trimmed[pos + 1..trimmed.len() - 1];
            if !ordinal.is_empty() && ordinal.bytes().all(|b| b.is_ascii_digit()) {
                trimmed[..pos].to_string()
            } else {
                trimmed.to_string()
            }
        }
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
      {
        "id": 1,
        "type": "Drive",
        "parameters": [
          { "name": "entityName", "type": "STRING", "value": "Command" },
          { "name": "full type", "type": "STRING", "value": "Root.Drive" },
          { "name": "state", "type": "STRING", "value": "ACTIVE" },
          { "name": "object", "value": "OBJECT:Root(6)" },
          { "name": "duration", "type": "INT", "value": "5" },
          { "name": "start", "type": "INT", "value": "0" },
          { "name": "end", "type": "INT", "value": "5" },
          { "name": "value", "type": "INT", "value": "UNKNOWN" },
          { "name": "children", "type": "INT", "value": "none" },
          { "name": "localvariables", "type": "INT", "value": "none" }
        ]
      },
      {
        "id": 2,
        "type": "Wait",
        "parameters": [
          { "name": "entityName", "type": "STRING", "value": "Empty" },
          { "name": "full type", "type": "STRING", "value": "Root.Wait" },
          { "name": "object", "value": "OBJECT:Root(6)" },
          { "name": "start", "type": "INT", "value": "5" },
          { "name": "end", "type": "INT", "value": "inf" },
          { "name": "duration", "type": "INT", "value": "-1" }
        ]
      }
    ]"#;

    #[test]
    fn lifts_known_parameters_into_fields() {
        let tokens = match parse_tokens(SAMPLE) {
            Ok(tokens) => tokens,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(tokens.len(), 2);

        let drive = &tokens[0];
        assert_eq!(drive.id, 1);
        assert_eq!(drive.predicate_name, "Drive");
        assert_eq!(drive.predicate_instance_name, "Command");
        assert_eq!(drive.class_names, ["Root", "Drive"]);
        assert_eq!(drive.qualified_name(), "Root.Drive");
        assert_eq!(drive.object_name, "Root");
        assert_eq!(drive.start, DomainValue::Finite(0.0));
        assert_eq!(drive.end, DomainValue::Finite(5.0));
        assert_eq!(drive.duration, DomainValue::Finite(5.0));
    }

    #[test]
    fn keeps_residual_parameters_in_wire_order() {
        let tokens = match parse_tokens(SAMPLE) {
            Ok(tokens) => tokens,
            Err(e) => panic!("parse failed: {e}"),
        };
        let names: Vec<&str> = tokens[0]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["state", "value", "children", "localvariables"]);
        assert_eq!(tokens[0].parameter("state"), Some("ACTIVE"));
        assert_eq!(tokens[0].parameter("children"), Some("none"));
    }

    #[test]
    fn parses_infinity_and_unknown_domains() {
        let tokens = match parse_tokens(SAMPLE) {
            Ok(tokens) => tokens,
            Err(e) => panic!("parse failed: {e}"),
        };
        let wait = &tokens[1];
        assert_eq!(wait.end, DomainValue::Infinity);
        assert_eq!(wait.duration, DomainValue::Finite(-1.0));
        assert!(wait.end.is_unresolved());
    }

    #[test]
    fn missing_parameters_fall_back_to_defaults() {
        let tokens = match parse_tokens(r#"[ { "id": 3, "type": "Bare" } ]"#) {
            Ok(tokens) => tokens,
            Err(e) => panic!("parse failed: {e}"),
        };
        let bare = &tokens[0];
        assert_eq!(bare.predicate_name, "Bare");
        assert_eq!(bare.qualified_name(), "Bare");
        assert_eq!(bare.object_name, "");
        assert_eq!(bare.start, DomainValue::Finite(-1.0));
        assert!(bare.parameters.is_empty());
    }

    #[test]
    fn malformed_domain_text_becomes_the_unknown_marker() {
        let raw = r#"[ { "id": 4, "type": "Odd", "parameters": [
            { "name": "start", "value": "soon" } ] } ]"#;
        let tokens = match parse_tokens(raw) {
            Ok(tokens) => tokens,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(tokens[0].start, DomainValue::Finite(-1.0));
    }

    #[test]
    fn object_references_normalize_to_the_parent_name() {
        assert_eq!(parse_object_name("OBJECT:Root(6)"), "Root");
        assert_eq!(parse_object_name("OBJECT:Root"), "Root");
        assert_eq!(parse_object_name("Root(12)"), "Root");
        assert_eq!(parse_object_name("Root(x)"), "Root(x)");
        assert_eq!(parse_object_name("Root"), "Root");
    }

    #[test]
    fn invalid_json_reports_context() {
        let err = match parse_tokens("not json") {
            Ok(_) => panic!("expected an error"),
            Err(e) => e,
        };
        assert!(err.starts_with("parse plan tokens:"), "got {err}");
    }
}
