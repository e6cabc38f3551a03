use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    TextLabel,
    VersionList,
    HelpBar,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    HistoryActivity(HistoryActivityMsg),
    Error(AppError),
}

/// Activity originating in the version list.
#[derive(Debug, PartialEq)]
pub enum HistoryActivityMsg {
    /// Cursor moved onto the row at this index.
    VersionHighlighted(usize),
    /// The row at this index was chosen (current version in browse mode,
    /// compare endpoint in compare mode).
    VersionSelected(usize),
    ToggleCompareMode,
    /// Drop an in-progress compare selection without leaving compare mode.
    ClearComparison,
    /// Dismiss the oldest visible alert.
    DismissAlert,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
