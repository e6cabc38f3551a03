use super::Model;
use crate::app::history_state::HistoryState;
use crate::components::common::ComponentId;
use crate::components::help_bar::HelpBar;
use crate::components::state::ComponentStateMount;
use crate::components::version_list::{ExtraClasses, VersionList, VersionListProps};
use crate::config;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{AttrValue, Attribute};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Snapshot the store into list props, applying the configured display
    /// defaults.
    pub(crate) fn list_props(history: &HistoryState) -> VersionListProps {
        let ui = config::get_config_or_panic().ui();
        VersionListProps {
            versions: history.versions.clone(),
            messages: history.messages.clone(),
            compare: history.compare.clone(),
            current_version: history.current_version.clone(),
            extra_class: ExtraClasses::Token(ui.extra_class().to_string()),
            show_header: ui.show_header(),
            compare_mode_available: ui.compare_mode_available(),
        }
    }

    /// Rebuild the version list from the current store state, keeping the
    /// cursor on the row it was on when that row still exists.
    pub fn remount_version_list(&mut self) -> AppResult<()> {
        let props = Self::list_props(&self.history);
        let cursor = self
            .focused_row
            .and_then(|key| props.versions.iter().position(|v| v.row_key() == key));

        self.app
            .remount_with_state(ComponentId::VersionList, VersionList::new(props), Vec::default())?;

        if let Some(index) = cursor {
            self.app
                .attr(
                    &ComponentId::VersionList,
                    Attribute::Custom("cursor_position"),
                    AttrValue::Number(index as isize),
                )
                .map_err(|e| AppError::Component(e.to_string()))?;
        }

        self.app
            .active(&ComponentId::VersionList)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }

    pub fn remount_help_bar(&mut self) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::HelpBar,
                Box::new(HelpBar::new(self.history.compare.active)),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }
}
