//! Owning state for the version history screen.
//!
//! The list component is a pure projection; everything it displays lives
//! here and is mutated only by the update handlers.

use crate::models::{ComparisonState, StatusKind, StatusMessage, Version};

pub struct HistoryState {
    pub versions: Vec<Version>,
    pub messages: Vec<StatusMessage>,
    pub compare: ComparisonState,
    pub current_version: Option<Version>,
    next_message_id: u64,
}

impl HistoryState {
    pub fn new(versions: Vec<Version>) -> Self {
        Self {
            versions,
            messages: Vec::new(),
            compare: ComparisonState::default(),
            current_version: None,
            next_message_id: 1,
        }
    }

    /// Append an alert; display order is insertion order.
    pub fn push_message(&mut self, kind: StatusKind, text: impl Into<String>) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(StatusMessage {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss_message(&mut self, id: u64) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        before != self.messages.len()
    }

    /// Drop the oldest alert, returning its id.
    pub fn dismiss_oldest(&mut self) -> Option<u64> {
        if self.messages.is_empty() {
            None
        } else {
            Some(self.messages.remove(0).id)
        }
    }

    /// Enter or leave compare mode. Leaving clears both endpoints so they
    /// cannot linger while the flag is off.
    pub fn toggle_compare(&mut self) {
        if self.compare.active {
            self.compare.active = false;
            self.compare.clear();
            self.push_message(StatusKind::Info, "Compare mode off");
        } else {
            self.compare.active = true;
            self.push_message(StatusKind::Info, "Compare mode: pick version A");
        }
    }

    /// Drop an in-progress endpoint selection without leaving compare mode.
    pub fn clear_comparison(&mut self) {
        self.compare.clear();
    }

    /// Apply a row selection at `index`.
    ///
    /// In browse mode the row becomes the current version. In compare mode
    /// the first pick fills endpoint A, the second endpoint B; a third pick
    /// starts over from A.
    pub fn select_version(&mut self, index: usize) -> bool {
        let Some(version) = self.versions.get(index).cloned() else {
            return false;
        };

        if self.compare.active {
            if self.compare.version_from.is_none() {
                self.push_message(
                    StatusKind::Info,
                    format!("Version v{} picked as A", version.version),
                );
                self.compare.version_from = Some(version);
            } else if self.compare.version_to.is_none() {
                let from = self
                    .compare
                    .version_from
                    .as_ref()
                    .map(|v| v.version)
                    .unwrap_or_default();
                self.push_message(
                    StatusKind::Success,
                    format!("Comparing v{from} with v{}", version.version),
                );
                self.compare.version_to = Some(version);
            } else {
                self.compare.clear();
                self.push_message(
                    StatusKind::Info,
                    format!("Version v{} picked as A", version.version),
                );
                self.compare.version_from = Some(version);
            }
        } else {
            self.push_message(
                StatusKind::Success,
                format!("Showing version v{}", version.version),
            );
            self.current_version = Some(version);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn version(number: u64) -> Version {
        Version {
            id: number,
            version: number,
            last_edited: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            is_full_version: true,
            author: None,
            note: None,
        }
    }

    fn state() -> HistoryState {
        HistoryState::new(vec![version(1), version(2), version(3)])
    }

    #[test]
    fn test_browse_selection_sets_current_version() {
        let mut s = state();
        assert!(s.select_version(1));
        assert_eq!(s.current_version.as_ref().map(|v| v.version), Some(2));
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].kind, StatusKind::Success);
    }

    #[test]
    fn test_selection_out_of_bounds_is_noop() {
        let mut s = state();
        assert!(!s.select_version(9));
        assert!(s.current_version.is_none());
        assert!(s.messages.is_empty());
    }

    #[test]
    fn test_compare_flow_fills_from_then_to() {
        let mut s = state();
        s.toggle_compare();
        assert!(s.compare.active);

        s.select_version(0);
        assert_eq!(s.compare.version_from.as_ref().map(|v| v.version), Some(1));
        assert!(s.compare.version_to.is_none());
        // Browse selection must not change while comparing
        assert!(s.current_version.is_none());

        s.select_version(2);
        assert_eq!(s.compare.version_to.as_ref().map(|v| v.version), Some(3));
        assert!(s.compare.is_complete());
    }

    #[test]
    fn test_third_pick_restarts_comparison() {
        let mut s = state();
        s.toggle_compare();
        s.select_version(0);
        s.select_version(1);
        s.select_version(2);

        assert_eq!(s.compare.version_from.as_ref().map(|v| v.version), Some(3));
        assert!(s.compare.version_to.is_none());
    }

    #[test]
    fn test_leaving_compare_clears_endpoints() {
        let mut s = state();
        s.toggle_compare();
        s.select_version(0);
        s.select_version(1);

        s.toggle_compare();
        assert!(!s.compare.active);
        assert!(s.compare.version_from.is_none());
        assert!(s.compare.version_to.is_none());
    }

    #[test]
    fn test_message_ids_increment_and_dismiss_preserves_order() {
        let mut s = state();
        let a = s.push_message(StatusKind::Info, "a");
        let b = s.push_message(StatusKind::Warning, "b");
        let c = s.push_message(StatusKind::Error, "c");
        assert!(a < b && b < c);

        assert!(s.dismiss_message(b));
        assert!(!s.dismiss_message(b));
        let remaining: Vec<u64> = s.messages.iter().map(|m| m.id).collect();
        assert_eq!(remaining, vec![a, c]);

        assert_eq!(s.dismiss_oldest(), Some(a));
        assert_eq!(s.dismiss_oldest(), Some(c));
        assert_eq!(s.dismiss_oldest(), None);
    }
}
