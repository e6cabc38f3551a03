//! Injected row, header and alert renderers for the version list.
//!
//! The list view does not draw rows itself; it dispatches each entry to a
//! renderer supplied by the composition root. Defaults are provided for
//! all four roles.

use crate::localization::tr;
use crate::models::{ComparisonState, StatusKind, StatusMessage, Version};
use crate::theme::ThemeManager;
use tuirealm::props::{Color, TextSpan};

/// Props handed to the full-version row renderer.
///
/// Full rows get the comparison context; snapshot rows do not.
pub struct FullVersionRowProps<'a> {
    pub version: &'a Version,
    pub is_active: bool,
    pub compare: &'a ComparisonState,
    pub compare_mode_available: bool,
}

/// Props handed to the snapshot row renderer.
pub struct SnapshotRowProps<'a> {
    pub version: &'a Version,
    pub is_active: bool,
}

/// Props handed to the header renderer.
pub struct HeaderProps {
    pub compare_mode_available: bool,
}

pub trait HeaderRenderer {
    fn render(&self, props: &HeaderProps) -> Vec<TextSpan>;
}

pub trait FullVersionRowRenderer {
    fn render(&self, props: &FullVersionRowProps<'_>) -> Vec<TextSpan>;
}

pub trait SnapshotRowRenderer {
    fn render(&self, props: &SnapshotRowProps<'_>) -> Vec<TextSpan>;
}

pub trait AlertRenderer {
    fn render(&self, message: &StatusMessage, close_label: &str) -> Vec<TextSpan>;
}

/// The four renderer roles the list view needs, bundled for injection.
pub struct ListRenderers {
    pub alert: Box<dyn AlertRenderer + Send>,
    pub header: Box<dyn HeaderRenderer + Send>,
    pub full_version: Box<dyn FullVersionRowRenderer + Send>,
    pub snapshot: Box<dyn SnapshotRowRenderer + Send>,
}

impl Default for ListRenderers {
    fn default() -> Self {
        Self {
            alert: Box::new(StatusAlertLine),
            header: Box::new(VersionTableHeader),
            full_version: Box::new(FullVersionRow),
            snapshot: Box::new(SnapshotRow),
        }
    }
}

pub fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Success => ThemeManager::status_success(),
        StatusKind::Warning => ThemeManager::status_warning(),
        StatusKind::Error => ThemeManager::status_error(),
        StatusKind::Info => ThemeManager::status_info(),
    }
}

fn format_timestamp(version: &Version) -> String {
    version.last_edited.format("%Y-%m-%d %H:%M").to_string()
}

/// Default header: marker column plus version, timestamp, author and note.
pub struct VersionTableHeader;

impl HeaderRenderer for VersionTableHeader {
    fn render(&self, props: &HeaderProps) -> Vec<TextSpan> {
        let marker = if props.compare_mode_available {
            format!("{}/{}", tr("CompareFrom"), tr("CompareTo"))
        } else {
            String::new()
        };
        vec![
            TextSpan::from(marker).fg(ThemeManager::header_accent()),
            TextSpan::from(tr("FullVersion")).fg(ThemeManager::header_accent()),
            TextSpan::from(tr("Saved")).fg(ThemeManager::header_accent()),
            TextSpan::from(tr("Author")).fg(ThemeManager::header_accent()),
            TextSpan::from(tr("Note")).fg(ThemeManager::header_accent()),
        ]
    }
}

/// Default renderer for complete saved revisions.
pub struct FullVersionRow;

impl FullVersionRow {
    fn marker(props: &FullVersionRowProps<'_>) -> TextSpan {
        let matches = |candidate: &Option<Version>| {
            candidate
                .as_ref()
                .is_some_and(|c| c.version == props.version.version)
        };

        if props.compare_mode_available && matches(&props.compare.version_from) {
            TextSpan::from(tr("CompareFrom")).fg(ThemeManager::compare_badge())
        } else if props.compare_mode_available && matches(&props.compare.version_to) {
            TextSpan::from(tr("CompareTo")).fg(ThemeManager::compare_badge())
        } else if props.is_active {
            TextSpan::from("►").fg(ThemeManager::active_marker())
        } else {
            TextSpan::from("•").fg(ThemeManager::text_muted())
        }
    }
}

impl FullVersionRowRenderer for FullVersionRow {
    fn render(&self, props: &FullVersionRowProps<'_>) -> Vec<TextSpan> {
        let version = props.version;
        vec![
            Self::marker(props),
            TextSpan::from(format!("v{}", version.version)).fg(ThemeManager::version_number()),
            TextSpan::from(format_timestamp(version)).fg(ThemeManager::version_timestamp()),
            TextSpan::from(version.author.as_deref().unwrap_or("—").to_string())
                .fg(ThemeManager::version_author()),
            TextSpan::from(
                version
                    .note
                    .as_deref()
                    .unwrap_or_else(|| tr("FullVersion"))
                    .to_string(),
            )
            .fg(ThemeManager::version_note()),
        ]
    }
}

/// Default renderer for point-in-time snapshots; muted, no compare context.
pub struct SnapshotRow;

impl SnapshotRowRenderer for SnapshotRow {
    fn render(&self, props: &SnapshotRowProps<'_>) -> Vec<TextSpan> {
        let version = props.version;
        let marker = if props.is_active {
            TextSpan::from("►").fg(ThemeManager::active_marker())
        } else {
            TextSpan::from("·").fg(ThemeManager::snapshot_marker())
        };
        vec![
            marker,
            TextSpan::from(format!("v{}", version.version)).fg(ThemeManager::snapshot_marker()),
            TextSpan::from(format_timestamp(version)).fg(ThemeManager::snapshot_marker()),
            TextSpan::from(version.author.as_deref().unwrap_or("—").to_string())
                .fg(ThemeManager::snapshot_marker()),
            TextSpan::from(
                version
                    .note
                    .as_deref()
                    .unwrap_or_else(|| tr("Snapshot"))
                    .to_string(),
            )
            .fg(ThemeManager::text_muted()),
        ]
    }
}

/// Default alert line: severity label, text, dismiss hint.
pub struct StatusAlertLine;

impl AlertRenderer for StatusAlertLine {
    fn render(&self, message: &StatusMessage, close_label: &str) -> Vec<TextSpan> {
        vec![
            TextSpan::from(format!("[{}]", message.kind.label())).fg(status_color(message.kind)),
            TextSpan::from(format!(" {} ", message.text)).fg(ThemeManager::text_primary()),
            TextSpan::from(format!("[x {close_label}]")).fg(ThemeManager::text_muted()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn version(number: u64, full: bool) -> Version {
        Version {
            id: number,
            version: number,
            last_edited: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            is_full_version: full,
            author: Some("sam".to_string()),
            note: None,
        }
    }

    fn contents(spans: &[TextSpan]) -> Vec<String> {
        spans.iter().map(|s| s.content.clone()).collect()
    }

    #[test]
    fn test_full_row_cells() {
        let v = version(7, true);
        let compare = ComparisonState::default();
        let row = FullVersionRow.render(&FullVersionRowProps {
            version: &v,
            is_active: false,
            compare: &compare,
            compare_mode_available: true,
        });

        let cells = contents(&row);
        assert_eq!(cells[0], "•");
        assert_eq!(cells[1], "v7");
        assert_eq!(cells[2], "2024-03-01 12:00");
        assert_eq!(cells[3], "sam");
    }

    #[test]
    fn test_full_row_compare_badges() {
        let v = version(7, true);
        let compare = ComparisonState {
            active: true,
            version_from: Some(version(7, true)),
            version_to: Some(version(9, true)),
        };
        let row = FullVersionRow.render(&FullVersionRowProps {
            version: &v,
            is_active: true,
            compare: &compare,
            compare_mode_available: true,
        });
        assert_eq!(row[0].content, "A");

        let other = version(9, true);
        let row = FullVersionRow.render(&FullVersionRowProps {
            version: &other,
            is_active: true,
            compare: &compare,
            compare_mode_available: true,
        });
        assert_eq!(row[0].content, "B");
    }

    #[test]
    fn test_full_row_badge_suppressed_when_compare_unavailable() {
        let v = version(7, true);
        let compare = ComparisonState {
            active: true,
            version_from: Some(version(7, true)),
            version_to: None,
        };
        let row = FullVersionRow.render(&FullVersionRowProps {
            version: &v,
            is_active: true,
            compare: &compare,
            compare_mode_available: false,
        });
        assert_eq!(row[0].content, "►");
    }

    #[test]
    fn test_snapshot_row_marker_and_placeholder_note() {
        let v = version(3, false);
        let row = SnapshotRow.render(&SnapshotRowProps {
            version: &v,
            is_active: false,
        });
        let cells = contents(&row);
        assert_eq!(cells[0], "·");
        assert_eq!(cells[4], "Snapshot");
    }

    #[test]
    fn test_alert_line_includes_kind_text_and_close_label() {
        let msg = StatusMessage {
            id: 4,
            kind: StatusKind::Success,
            text: "Saved".to_string(),
        };
        let spans = StatusAlertLine.render(&msg, "Close");
        let joined = contents(&spans).join("");
        assert!(joined.contains("[success]"));
        assert!(joined.contains("Saved"));
        assert!(joined.contains("[x Close]"));
    }

    #[test]
    fn test_header_marker_column_tracks_compare_availability() {
        let with = VersionTableHeader.render(&HeaderProps {
            compare_mode_available: true,
        });
        assert_eq!(with[0].content, "A/B");

        let without = VersionTableHeader.render(&HeaderProps {
            compare_mode_available: false,
        });
        assert_eq!(without[0].content, "");
    }
}
