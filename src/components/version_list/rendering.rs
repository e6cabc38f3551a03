//! Pure projection of version list props into renderable rows.
//!
//! Everything here is a function of its arguments; the tuirealm component
//! calls into this module on every draw.

use crate::components::version_list::renderers::{
    FullVersionRowProps, HeaderProps, ListRenderers, SnapshotRowProps,
};
use crate::components::version_list::selection::is_version_active;
use crate::localization::tr;
use crate::models::{ComparisonState, RowKey, StatusMessage, Version};
use tuirealm::props::TextSpan;

/// Base style token every list carries.
pub const CLASS_BASE: &str = "table";
/// Modifier token applied when the header row is hidden.
pub const CLASS_HEADERLESS: &str = "table--headerless";
/// Extra token appended by default.
pub const DEFAULT_EXTRA_CLASS: &str = "history-viewer__table";

/// Caller-supplied extra style token(s) for the outer list.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraClasses {
    /// A single token.
    Token(String),
    /// A list of tokens, appended in order.
    List(Vec<String>),
    /// (token, enabled) pairs; only enabled tokens are appended.
    Toggles(Vec<(String, bool)>),
}

impl Default for ExtraClasses {
    fn default() -> Self {
        ExtraClasses::Token(DEFAULT_EXTRA_CLASS.to_string())
    }
}

/// Combined class name for the outer list element.
///
/// Always starts with the base token, adds the headerless modifier when
/// the header is hidden, then the caller's extra token(s) verbatim.
pub fn list_class_name(extra: &ExtraClasses, show_header: bool) -> String {
    let mut tokens = vec![CLASS_BASE.to_string()];
    if !show_header {
        tokens.push(CLASS_HEADERLESS.to_string());
    }
    match extra {
        ExtraClasses::Token(token) => {
            if !token.is_empty() {
                tokens.push(token.clone());
            }
        }
        ExtraClasses::List(list) => {
            tokens.extend(list.iter().filter(|t| !t.is_empty()).cloned());
        }
        ExtraClasses::Toggles(toggles) => {
            tokens.extend(
                toggles
                    .iter()
                    .filter(|(token, enabled)| *enabled && !token.is_empty())
                    .map(|(token, _)| token.clone()),
            );
        }
    }
    tokens.join(" ")
}

/// Inputs of one render pass. Owned by the application shell and passed
/// down whole; the view keeps no other state.
#[derive(Debug, Clone)]
pub struct VersionListProps {
    pub versions: Vec<Version>,
    pub messages: Vec<StatusMessage>,
    pub compare: ComparisonState,
    pub current_version: Option<Version>,
    pub extra_class: ExtraClasses,
    pub show_header: bool,
    pub compare_mode_available: bool,
}

impl Default for VersionListProps {
    fn default() -> Self {
        Self {
            versions: Vec::new(),
            messages: Vec::new(),
            compare: ComparisonState::default(),
            current_version: None,
            extra_class: ExtraClasses::default(),
            show_header: true,
            compare_mode_available: true,
        }
    }
}

impl VersionListProps {
    pub fn new(versions: Vec<Version>) -> Self {
        Self {
            versions,
            ..Self::default()
        }
    }
}

/// One rendered row plus its identity and active flag.
pub struct ListRow {
    pub key: RowKey,
    pub active: bool,
    pub cells: Vec<TextSpan>,
}

/// Complete output of one render pass, in display order.
pub struct ListLayout {
    pub class_name: String,
    /// One alert line per status message, keyed by message id.
    pub alerts: Vec<(u64, Vec<TextSpan>)>,
    pub header: Option<Vec<TextSpan>>,
    pub rows: Vec<ListRow>,
}

/// Project props through the injected renderers into a layout.
///
/// Input order is preserved exactly; nothing is filtered, sorted or
/// paginated here.
pub fn build_list_layout(props: &VersionListProps, renderers: &ListRenderers) -> ListLayout {
    let class_name = list_class_name(&props.extra_class, props.show_header);

    let close_label = tr("Close");
    let alerts = props
        .messages
        .iter()
        .map(|message| (message.id, renderers.alert.render(message, close_label)))
        .collect();

    let header = props.show_header.then(|| {
        renderers.header.render(&HeaderProps {
            compare_mode_available: props.compare_mode_available,
        })
    });

    let rows = props
        .versions
        .iter()
        .map(|version| {
            let active = is_version_active(version, props.current_version.as_ref(), &props.compare);
            let cells = if version.is_full_version {
                renderers.full_version.render(&FullVersionRowProps {
                    version,
                    is_active: active,
                    compare: &props.compare,
                    compare_mode_available: props.compare_mode_available,
                })
            } else {
                renderers.snapshot.render(&SnapshotRowProps {
                    version,
                    is_active: active,
                })
            };
            ListRow {
                key: version.row_key(),
                active,
                cells,
            }
        })
        .collect();

    ListLayout {
        class_name,
        alerts,
        header,
        rows,
    }
}

/// Proportional column widths for the row cells:
/// marker, version, timestamp, author, note.
pub fn calculate_column_widths(available_width: u16) -> Vec<u16> {
    // Borders, column spacing and padding
    let usable_width = available_width.saturating_sub(10);
    let spacing = 4 * 2;
    let content_width = usable_width.saturating_sub(spacing);

    let marker = 3;
    let remaining = content_width.saturating_sub(marker);

    let version_width = (remaining * 10 / 100).max(4);
    let timestamp_width = (remaining * 30 / 100).max(16);
    let author_width = (remaining * 20 / 100).max(8);
    let note_width = remaining
        .saturating_sub(version_width + timestamp_width + author_width)
        .max(8);

    vec![
        marker,
        version_width,
        timestamp_width,
        author_width,
        note_width,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatusKind, Version};
    use chrono::{TimeZone, Utc};

    fn version(id: u64, number: u64, full: bool) -> Version {
        Version {
            id,
            version: number,
            last_edited: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, number as u32).unwrap(),
            is_full_version: full,
            author: None,
            note: None,
        }
    }

    fn message(id: u64, text: &str) -> StatusMessage {
        StatusMessage {
            id,
            kind: StatusKind::Success,
            text: text.to_string(),
        }
    }

    fn props(versions: Vec<Version>) -> VersionListProps {
        VersionListProps::new(versions)
    }

    fn cell_text(row: &ListRow) -> String {
        row.cells
            .iter()
            .map(|span| span.content.as_str())
            .collect::<Vec<_>>()
            .join("|")
    }

    #[test]
    fn test_class_name_single_token() {
        let class = list_class_name(&ExtraClasses::default(), true);
        assert_eq!(class, "table history-viewer__table");
    }

    #[test]
    fn test_class_name_headerless_modifier() {
        let class = list_class_name(&ExtraClasses::default(), false);
        assert_eq!(class, "table table--headerless history-viewer__table");

        let with_header = list_class_name(&ExtraClasses::default(), true);
        assert!(!with_header.contains(CLASS_HEADERLESS));
    }

    #[test]
    fn test_class_name_list_shape() {
        let extra = ExtraClasses::List(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(list_class_name(&extra, true), "table one two");
    }

    #[test]
    fn test_class_name_toggle_shape_keeps_enabled_only() {
        let extra = ExtraClasses::Toggles(vec![
            ("on".to_string(), true),
            ("off".to_string(), false),
            ("also-on".to_string(), true),
        ]);
        assert_eq!(list_class_name(&extra, true), "table on also-on");
    }

    #[test]
    fn test_empty_messages_render_no_alerts() {
        let layout = build_list_layout(&props(vec![]), &ListRenderers::default());
        assert!(layout.alerts.is_empty());
    }

    #[test]
    fn test_one_alert_per_message_in_input_order() {
        let mut p = props(vec![]);
        p.messages = vec![message(2, "Second"), message(1, "First")];

        let layout = build_list_layout(&p, &ListRenderers::default());
        assert_eq!(layout.alerts.len(), 2);
        // Input order, not id order
        assert_eq!(layout.alerts[0].0, 2);
        assert_eq!(layout.alerts[1].0, 1);

        let first_line: String = layout.alerts[0]
            .1
            .iter()
            .map(|s| s.content.as_str())
            .collect();
        assert!(first_line.contains("Second"));
        assert!(first_line.contains("Close"));
    }

    #[test]
    fn test_rows_preserve_order_and_dispatch_by_kind() {
        let p = props(vec![version(1, 1, true), version(2, 2, false)]);
        let layout = build_list_layout(&p, &ListRenderers::default());

        assert_eq!(layout.rows.len(), 2);
        // Full rows use the bullet marker, snapshot rows the dot
        assert_eq!(layout.rows[0].cells[0].content, "•");
        assert_eq!(layout.rows[1].cells[0].content, "·");
        assert_eq!(layout.rows[0].key, version(1, 1, true).row_key());
        assert_eq!(layout.rows[1].key, version(2, 2, false).row_key());
    }

    #[test]
    fn test_header_toggle() {
        let mut p = props(vec![]);
        p.show_header = true;
        let layout = build_list_layout(&p, &ListRenderers::default());
        assert!(layout.header.is_some());

        p.show_header = false;
        let layout = build_list_layout(&p, &ListRenderers::default());
        assert!(layout.header.is_none());
        assert!(layout.class_name.contains(CLASS_HEADERLESS));
    }

    #[test]
    fn test_active_flag_follows_selection() {
        let mut p = props(vec![version(1, 1, true), version(2, 2, true)]);
        p.current_version = Some(version(9, 2, true));

        let layout = build_list_layout(&p, &ListRenderers::default());
        assert!(!layout.rows[0].active);
        assert!(layout.rows[1].active);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut p = props(vec![version(1, 1, true), version(2, 2, false)]);
        p.messages = vec![message(1, "Saved")];
        p.current_version = Some(version(1, 1, true));

        let renderers = ListRenderers::default();
        let first = build_list_layout(&p, &renderers);
        let second = build_list_layout(&p, &renderers);

        assert_eq!(first.class_name, second.class_name);
        assert_eq!(first.alerts.len(), second.alerts.len());
        assert_eq!(first.rows.len(), second.rows.len());
        for (a, b) in first.rows.iter().zip(second.rows.iter()) {
            assert_eq!(a.key, b.key);
            assert_eq!(a.active, b.active);
            assert_eq!(cell_text(a), cell_text(b));
        }
    }

    #[test]
    fn test_column_widths_cover_all_cells() {
        let widths = calculate_column_widths(120);
        assert_eq!(widths.len(), 5);
        assert!(widths.iter().all(|w| *w > 0));
    }
}
