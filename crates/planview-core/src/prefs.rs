//! Per-user display preferences with an explicit load/save lifecycle.
//!
//! The store keeps one schema-versioned JSON document holding the
//! viewer's seven preference entries. Each entry carries the timestamp
//! of its last write and expires after [`RETENTION_DAYS`], after which
//! it reads as unset and falls back to its default. Loading never
//! fails: malformed input degrades to defaults plus a warning.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const PREFS_SCHEMA_VERSION: u32 = 1;

/// Entries older than this read as unset, like the original viewer's
/// 365-day cookie expiry.
pub const RETENTION_DAYS: i64 = 365;

pub const DEFAULT_SHOW_GENERATED: bool = false;
pub const DEFAULT_EXPANDED_LINES: bool = true;
pub const DEFAULT_DENSITY: u32 = 10;
pub const DEFAULT_LANE_HEIGHT: u32 = 2;
pub const DEFAULT_SCALE: u32 = 1;

/// Offered scale divisors, largest first. The default is the last one,
/// matching the radio the original checked when no value was stored.
pub const SCALE_CHOICES: [u32; 4] = [1000, 100, 10, 1];

/// Resolved preference values for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Show nodes the plan translator synthesized.
    pub show_generated: bool,
    /// Expanded layout with one labelled row group per token; false
    /// selects the packed timeline.
    pub expanded_lines: bool,
    /// Columns per time unit on the shared axis.
    pub density: u32,
    /// Rows per lane / per token row group.
    pub lane_height: u32,
    /// Divisor applied to finite domain values for display.
    pub scale: u32,
    /// Free-form custom node filter text (comma/newline separated).
    pub custom_filter: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_generated: DEFAULT_SHOW_GENERATED,
            expanded_lines: DEFAULT_EXPANDED_LINES,
            density: DEFAULT_DENSITY,
            lane_height: DEFAULT_LANE_HEIGHT,
            scale: DEFAULT_SCALE,
            custom_filter: String::new(),
        }
    }
}

impl Preferences {
    #[must_use]
    pub fn scale_divisor(&self) -> f64 {
        f64::from(self.scale.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Entry<T> {
    value: T,
    saved_at: DateTime<Utc>,
}

impl<T> Entry<T> {
    fn new(value: T, now: DateTime<Utc>) -> Self {
        Self {
            value,
            saved_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct PrefsDocument {
    #[serde(default)]
    schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_generated: Option<Entry<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expanded_lines: Option<Entry<bool>>,
    /// Deprecated key, read for migration only and never written back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_file: Option<Entry<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    density: Option<Entry<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lane_height: Option<Entry<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scale: Option<Entry<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_filter: Option<Entry<String>>,
}

/// The persisted preference set. Unset entries resolve to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefsStore {
    document: PrefsDocument,
}

impl PrefsStore {
    /// Resolve the current values, substituting defaults for unset
    /// entries.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        let defaults = Preferences::default();
        Preferences {
            show_generated: self
                .document
                .show_generated
                .as_ref()
                .map_or(defaults.show_generated, |e| e.value),
            expanded_lines: self
                .document
                .expanded_lines
                .as_ref()
                .map_or(defaults.expanded_lines, |e| e.value),
            density: self
                .document
                .density
                .as_ref()
                .map_or(defaults.density, |e| e.value),
            lane_height: self
                .document
                .lane_height
                .as_ref()
                .map_or(defaults.lane_height, |e| e.value),
            scale: self
                .document
                .scale
                .as_ref()
                .map_or(defaults.scale, |e| e.value),
            custom_filter: self
                .document
                .custom_filter
                .as_ref()
                .map_or(defaults.custom_filter, |e| e.value.clone()),
        }
    }

    pub fn set_show_generated(&mut self, value: bool, now: DateTime<Utc>) {
        self.document.show_generated = Some(Entry::new(value, now));
    }

    pub fn set_expanded_lines(&mut self, value: bool, now: DateTime<Utc>) {
        self.document.expanded_lines = Some(Entry::new(value, now));
    }

    pub fn set_density(&mut self, value: u32, now: DateTime<Utc>) {
        self.document.density = Some(Entry::new(value.max(1), now));
    }

    pub fn set_lane_height(&mut self, value: u32, now: DateTime<Utc>) {
        self.document.lane_height = Some(Entry::new(value.max(1), now));
    }

    pub fn set_scale(&mut self, value: u32, now: DateTime<Utc>) {
        if SCALE_CHOICES.contains(&value) {
            self.document.scale = Some(Entry::new(value, now));
        }
    }

    pub fn set_custom_filter(&mut self, text: String, now: DateTime<Utc>) {
        self.document.custom_filter = Some(Entry::new(text, now));
    }

    /// Flip the show-generated flag and return the new value.
    pub fn toggle_show_generated(&mut self, now: DateTime<Utc>) -> bool {
        let next = !self.preferences().show_generated;
        self.set_show_generated(next, now);
        next
    }

    /// Flip the expanded-lines flag and return the new value.
    pub fn toggle_expanded_lines(&mut self, now: DateTime<Utc>) -> bool {
        let next = !self.preferences().expanded_lines;
        self.set_expanded_lines(next, now);
        next
    }

    /// The footer's "Reset to default": unset everything except the
    /// custom filter text, which the original deliberately kept.
    pub fn restore_defaults(&mut self) {
        let custom_filter = self.document.custom_filter.take();
        self.document = PrefsDocument {
            custom_filter,
            ..PrefsDocument::default()
        };
    }

    /// Delete every stored entry, custom filter included.
    pub fn clear_all(&mut self) {
        self.document = PrefsDocument::default();
    }
}

/// Result of restoring the store from raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefsLoadOutcome {
    pub store: PrefsStore,
    /// No usable document existed; the caller should persist the store
    /// so the defaults take a timestamp, like the original's
    /// first-visit cookie writes.
    pub first_visit: bool,
    /// A deprecated key was dropped; persisting rewrites the document
    /// without it.
    pub migrated: bool,
    pub warnings: Vec<String>,
}

/// Parse and sanitize a preferences document. Never fails; malformed
/// or expired content, and any document from a newer schema version,
/// degrades to defaults with a warning.
#[must_use]
pub fn restore_preferences(raw: &str, now: DateTime<Utc>) -> PrefsLoadOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return first_visit_outcome(now);
    }

    let mut document = match serde_json::from_str::<PrefsDocument>(trimmed) {
        Ok(document) => document,
        Err(err) => {
            let mut outcome = first_visit_outcome(now);
            outcome
                .warnings
                .push(format!("invalid preferences json; defaults restored ({err})"));
            return outcome;
        }
    };

    // A newer schema's entries are discarded, never read as v1. Not a
    // first visit: the on-disk document is only rewritten once the
    // user changes something.
    if document.schema_version > PREFS_SCHEMA_VERSION {
        let mut store = PrefsStore::default();
        store.document.schema_version = PREFS_SCHEMA_VERSION;
        return PrefsLoadOutcome {
            store,
            first_visit: false,
            migrated: false,
            warnings: vec![format!(
                "unknown schema_version={}; defaults restored",
                document.schema_version
            )],
        };
    }

    let mut warnings = Vec::new();

    let mut migrated = false;
    if document.show_file.take().is_some() {
        migrated = true;
        warnings.push("deprecated show-file preference dropped".to_string());
    }

    expire_entries(&mut document, now, &mut warnings);
    sanitize_numeric_entries(&mut document, &mut warnings);
    document.schema_version = PREFS_SCHEMA_VERSION;

    PrefsLoadOutcome {
        store: PrefsStore { document },
        first_visit: false,
        migrated,
        warnings,
    }
}

/// Serialize the store for writing.
pub fn persist_preferences(store: &PrefsStore) -> Result<String, String> {
    let mut document = store.document.clone();
    document.schema_version = PREFS_SCHEMA_VERSION;
    document.show_file = None;
    serde_json::to_string_pretty(&document).map_err(|e| format!("encode preferences: {e}"))
}

/// Load the store from `path`. A missing file is a first visit, not an
/// error; an unreadable one degrades to defaults with a warning.
#[must_use]
pub fn load_prefs_file(path: &Path, now: DateTime<Utc>) -> PrefsLoadOutcome {
    match fs::read_to_string(path) {
        Ok(raw) => restore_preferences(&raw, now),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => first_visit_outcome(now),
        Err(err) => {
            let mut outcome = first_visit_outcome(now);
            outcome.warnings.push(format!(
                "read preferences {}: {err}; defaults restored",
                path.display()
            ));
            outcome
        }
    }
}

/// Write the store to `path`, creating parent directories as needed.
pub fn save_prefs_file(path: &Path, store: &PrefsStore) -> Result<(), String> {
    let encoded = persist_preferences(store)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("create preferences dir {}: {e}", parent.display()))?;
        }
    }
    fs::write(path, encoded).map_err(|e| format!("write preferences {}: {e}", path.display()))
}

fn first_visit_outcome(now: DateTime<Utc>) -> PrefsLoadOutcome {
    // The original wrote the two flag cookies on first visit and left
    // the rest unset until the user touched them.
    let mut store = PrefsStore::default();
    store.set_show_generated(DEFAULT_SHOW_GENERATED, now);
    store.set_expanded_lines(DEFAULT_EXPANDED_LINES, now);
    store.document.schema_version = PREFS_SCHEMA_VERSION;
    PrefsLoadOutcome {
        store,
        first_visit: true,
        migrated: false,
        warnings: Vec::new(),
    }
}

fn expire_entries(document: &mut PrefsDocument, now: DateTime<Utc>, warnings: &mut Vec<String>) {
    let cutoff = now - Duration::days(RETENTION_DAYS);
    let mut expired: Vec<&'static str> = Vec::new();

    expire_entry(&mut document.show_generated, cutoff, "show_generated", &mut expired);
    expire_entry(&mut document.expanded_lines, cutoff, "expanded_lines", &mut expired);
    expire_entry(&mut document.density, cutoff, "density", &mut expired);
    expire_entry(&mut document.lane_height, cutoff, "lane_height", &mut expired);
    expire_entry(&mut document.scale, cutoff, "scale", &mut expired);
    expire_entry(&mut document.custom_filter, cutoff, "custom_filter", &mut expired);

    if !expired.is_empty() {
        warnings.push(format!("expired preferences reset: {}", expired.join(", ")));
    }
}

fn expire_entry<T>(
    entry: &mut Option<Entry<T>>,
    cutoff: DateTime<Utc>,
    name: &'static str,
    expired: &mut Vec<&'static str>,
) {
    if entry.as_ref().is_some_and(|e| e.saved_at < cutoff) {
        *entry = None;
        expired.push(name);
    }
}

fn sanitize_numeric_entries(document: &mut PrefsDocument, warnings: &mut Vec<String>) {
    if document.density.as_ref().is_some_and(|e| e.value == 0) {
        document.density = None;
        warnings.push("density of 0 reset to default".to_string());
    }
    if document.lane_height.as_ref().is_some_and(|e| e.value == 0) {
        document.lane_height = None;
        warnings.push("lane height of 0 reset to default".to_string());
    }
    if document
        .scale
        .as_ref()
        .is_some_and(|e| !SCALE_CHOICES.contains(&e.value))
    {
        document.scale = None;
        warnings.push("unsupported scale divisor reset to default".to_string());
    }
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

    fn encoded(store: &PrefsStore) -> String {
        match persist_preferences(store) {
            Ok(raw) => raw,
            Err(e) => panic!("persist failed: {e}"),
        }
    }

    #[test]
    fn empty_input_is_a_first_visit_with_flag_defaults_set() {
        let outcome = restore_preferences("", now());
        assert!(outcome.first_visit);
        assert!(outcome.warnings.is_empty());
        let prefs = outcome.store.preferences();
        assert!(!prefs.show_generated);
        assert!(prefs.expanded_lines);
        assert_eq!(prefs.density, DEFAULT_DENSITY);
        assert_eq!(prefs.scale, DEFAULT_SCALE);
        assert_eq!(prefs.custom_filter, "");
    }

    #[test]
    fn corrupt_json_degrades_to_defaults_with_warning() {
        let outcome = restore_preferences("{not json", now());
        assert!(outcome.first_visit);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("invalid preferences json"));
        assert_eq!(outcome.store.preferences(), Preferences::default());
    }

    #[test]
    fn round_trip_preserves_set_values() {
        let mut store = PrefsStore::default();
        store.set_show_generated(true, now());
        store.set_density(25, now());
        store.set_scale(100, now());
        store.set_custom_filter("Drive, Steer*".to_string(), now());

        let restored = restore_preferences(&encoded(&store), now());
        assert!(!restored.first_visit);
        assert!(restored.warnings.is_empty());
        let prefs = restored.store.preferences();
        assert!(prefs.show_generated);
        assert_eq!(prefs.density, 25);
        assert_eq!(prefs.scale, 100);
        assert_eq!(prefs.custom_filter, "Drive, Steer*");
    }

    #[test]
    fn toggle_twice_restores_the_original_value() {
        let mut store = restore_preferences("", now()).store;
        let original = store.preferences().show_generated;
        store.toggle_show_generated(now());
        store.toggle_show_generated(now());
        assert_eq!(store.preferences().show_generated, original);

        let restored = restore_preferences(&encoded(&store), now());
        assert_eq!(restored.store.preferences().show_generated, original);
    }

    #[test]
    fn entries_expire_after_the_retention_window() {
        let long_ago = now() - Duration::days(RETENTION_DAYS + 1);
        let mut store = PrefsStore::default();
        store.set_show_generated(true, long_ago);
        store.set_density(42, now());

        let restored = restore_preferences(&encoded(&store), now());
        let prefs = restored.store.preferences();
        assert!(!prefs.show_generated, "expired entry must read as unset");
        assert_eq!(prefs.density, 42, "fresh entry survives");
        assert_eq!(restored.warnings.len(), 1);
        assert!(restored.warnings[0].contains("show_generated"));
    }

    #[test]
    fn deprecated_show_file_key_is_dropped_with_a_note() {
        let raw = format!(
            r#"{{"schema_version":1,"show_file":{{"value":"x","saved_at":"{}"}}}}"#,
            now().to_rfc3339()
        );
        let outcome = restore_preferences(&raw, now());
        assert!(outcome.migrated);
        assert!(outcome.warnings[0].contains("show-file"));
        assert!(!encoded(&outcome.store).contains("show_file"));
    }

    #[test]
    fn unknown_schema_version_discards_its_entries() {
        let raw = format!(
            r#"{{"schema_version":2,"show_generated":{{"value":true,"saved_at":"{}"}}}}"#,
            now().to_rfc3339()
        );
        let outcome = restore_preferences(&raw, now());
        assert!(!outcome.first_visit);
        assert!(!outcome.migrated);
        assert!(outcome.warnings[0].contains("schema_version=2"));
        assert_eq!(
            outcome.store.preferences(),
            Preferences::default(),
            "entries from a newer schema must read as unset"
        );
    }

    #[test]
    fn numeric_entries_sanitize_on_load() {
        let mut store = PrefsStore::default();
        store.set_density(3, now());
        let mut raw = encoded(&store);
        raw = raw.replace("\"value\": 3", "\"value\": 0");
        let outcome = restore_preferences(&raw, now());
        assert_eq!(outcome.store.preferences().density, DEFAULT_DENSITY);
        assert!(outcome.warnings[0].contains("density"));
    }

    #[test]
    fn set_scale_rejects_values_outside_the_choices() {
        let mut store = PrefsStore::default();
        store.set_scale(37, now());
        assert_eq!(store.preferences().scale, DEFAULT_SCALE);
        store.set_scale(1000, now());
        assert_eq!(store.preferences().scale, 1000);
    }

    #[test]
    fn restore_defaults_keeps_only_the_custom_filter() {
        let mut store = PrefsStore::default();
        store.set_show_generated(true, now());
        store.set_expanded_lines(false, now());
        store.set_density(99, now());
        store.set_custom_filter("keep-me".to_string(), now());

        store.restore_defaults();
        let prefs = store.preferences();
        assert_eq!(prefs.show_generated, DEFAULT_SHOW_GENERATED);
        assert_eq!(prefs.expanded_lines, DEFAULT_EXPANDED_LINES);
        assert_eq!(prefs.density, DEFAULT_DENSITY);
        assert_eq!(prefs.custom_filter, "keep-me");
    }

    #[test]
    fn clear_all_drops_the_custom_filter_too() {
        let mut store = PrefsStore::default();
        store.set_custom_filter("gone".to_string(), now());
        store.clear_all();
        assert_eq!(store.preferences(), Preferences::default());
    }
}
