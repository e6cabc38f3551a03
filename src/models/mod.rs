//! Data model for the version history viewer.
//!
//! All records are supplied by the host (a history export or the owning
//! application) and treated as immutable by the view layer.

use crate::error::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single historical record of a content item.
///
/// `is_full_version` discriminates complete saved revisions from
/// lighter-weight snapshots; the two are rendered by different row
/// renderers. `author` and `note` are optional enrichments carried by
/// richer exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: u64,
    pub version: u64,
    pub last_edited: DateTime<Utc>,
    pub is_full_version: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Version {
    /// Stable identity of this record's rendered row.
    pub fn row_key(&self) -> RowKey {
        RowKey {
            id: self.id,
            last_edited: self.last_edited,
        }
    }
}

/// Identity of a rendered row across re-renders.
///
/// Composite of record id and edit timestamp; used to keep the cursor on
/// the same row when the list is rebuilt, not as a uniqueness guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub id: u64,
    pub last_edited: DateTime<Utc>,
}

/// Compare-mode selection.
///
/// `version_from` and `version_to` are only meaningful while `active` is
/// set; the state owner clears both when compare mode is left. The
/// selection evaluator still consults them unconditionally, so stale
/// values would match; see `is_version_active`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonState {
    pub active: bool,
    pub version_from: Option<Version>,
    pub version_to: Option<Version>,
}

impl ComparisonState {
    /// Both endpoints chosen.
    pub fn is_complete(&self) -> bool {
        self.active && self.version_from.is_some() && self.version_to.is_some()
    }

    pub fn clear(&mut self) {
        self.version_from = None;
        self.version_to = None;
    }
}

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Warning,
    Error,
    Info,
}

impl StatusKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Warning => "warning",
            StatusKind::Error => "error",
            StatusKind::Info => "info",
        }
    }
}

/// A transient alert shown above the version list.
///
/// Display order is insertion order; the panel does not dedup, sort or
/// truncate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: StatusKind,
    #[serde(rename = "message")]
    pub text: String,
}

/// Load a version history export from a JSON file.
pub fn load_history(path: &Path) -> AppResult<Vec<Version>> {
    let raw = std::fs::read_to_string(path)?;
    parse_history(&raw)
}

/// Parse a version history export from JSON text.
pub fn parse_history(raw: &str) -> AppResult<Vec<Version>> {
    let versions: Vec<Version> = serde_json::from_str(raw)?;
    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use claims::{assert_err, assert_ok};
    use std::io::Write;

    fn version(id: u64, number: u64, full: bool) -> Version {
        Version {
            id,
            version: number,
            last_edited: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            is_full_version: full,
            author: None,
            note: None,
        }
    }

    #[test]
    fn test_version_deserializes_from_export_json() {
        let raw = r#"
        {
            "id": 42,
            "version": 7,
            "last_edited": "2024-03-01T12:00:00Z",
            "is_full_version": true,
            "author": "sam"
        }
        "#;
        let v: Version = serde_json::from_str(raw).expect("version should parse");
        assert_eq!(v.id, 42);
        assert_eq!(v.version, 7);
        assert!(v.is_full_version);
        assert_eq!(v.author.as_deref(), Some("sam"));
        assert_eq!(v.note, None);
    }

    #[test]
    fn test_row_key_tracks_id_and_timestamp() {
        let a = version(1, 1, true);
        let mut b = a.clone();
        assert_eq!(a.row_key(), b.row_key());

        b.version = 99;
        // Key ignores the version number
        assert_eq!(a.row_key(), b.row_key());

        b.id = 2;
        assert_ne!(a.row_key(), b.row_key());
    }

    #[test]
    fn test_comparison_state_clear() {
        let mut compare = ComparisonState {
            active: true,
            version_from: Some(version(1, 1, true)),
            version_to: Some(version(2, 2, true)),
        };
        assert!(compare.is_complete());

        compare.clear();
        assert!(compare.version_from.is_none());
        assert!(compare.version_to.is_none());
        assert!(!compare.is_complete());
    }

    #[test]
    fn test_status_message_uses_export_field_names() {
        let msg = StatusMessage {
            id: 1,
            kind: StatusKind::Success,
            text: "Saved".to_string(),
        };
        let json = serde_json::to_string(&msg).expect("message should serialize");
        assert!(json.contains("\"type\":\"success\""));
        assert!(json.contains("\"message\":\"Saved\""));
    }

    #[test]
    fn test_load_history_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id":1,"version":1,"last_edited":"2024-03-01T12:00:00Z","is_full_version":true}}]"#
        )
        .expect("write sample");

        let versions = assert_ok!(load_history(file.path()));
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].version, 1);
    }

    #[test]
    fn test_load_history_rejects_malformed_json() {
        assert_err!(parse_history("{not json"));
    }
}
