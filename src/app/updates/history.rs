use crate::app::model::Model;
use crate::components::common::{HistoryActivityMsg, Msg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_history(&mut self, msg: HistoryActivityMsg) -> Option<Msg> {
        match msg {
            HistoryActivityMsg::VersionHighlighted(index) => {
                self.focused_row = self.history.versions.get(index).map(|v| v.row_key());
                None
            }
            HistoryActivityMsg::VersionSelected(index) => {
                if self.history.select_version(index) {
                    self.focused_row = self.history.versions.get(index).map(|v| v.row_key());
                    if let Err(e) = self.remount_version_list() {
                        return Some(Msg::Error(e));
                    }
                }
                None
            }
            HistoryActivityMsg::ToggleCompareMode => {
                self.history.toggle_compare();
                if let Err(e) = self.remount_version_list() {
                    return Some(Msg::Error(e));
                }
                if let Err(e) = self.remount_help_bar() {
                    return Some(Msg::Error(e));
                }
                None
            }
            HistoryActivityMsg::ClearComparison => {
                self.history.clear_comparison();
                if let Err(e) = self.remount_version_list() {
                    return Some(Msg::Error(e));
                }
                None
            }
            HistoryActivityMsg::DismissAlert => {
                if self.history.dismiss_oldest().is_some() {
                    if let Err(e) = self.remount_version_list() {
                        return Some(Msg::Error(e));
                    }
                }
                None
            }
        }
    }
}
