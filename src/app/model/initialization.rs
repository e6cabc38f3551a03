use super::Model;
use crate::app::history_state::HistoryState;
use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::help_bar::HelpBar;
use crate::components::state::ComponentStateMount;
use crate::components::text_label::TextLabel;
use crate::components::version_list::VersionList;
use crate::config;
use crate::error::{AppError, AppResult};
use crate::models::Version;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(history: &HistoryState) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let config = config::get_config_or_panic();
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        app.mount(
            ComponentId::TextLabel,
            Box::new(TextLabel::new(
                "histty — content version history".to_string(),
            )),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount_with_state(
            ComponentId::VersionList,
            VersionList::new(Self::list_props(history)),
            Vec::default(),
        )?;

        app.mount(
            ComponentId::HelpBar,
            Box::new(HelpBar::new(history.compare.active)),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::default()),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.active(&ComponentId::VersionList)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(versions: Vec<Version>) -> AppResult<Self> {
        let history = HistoryState::new(versions);

        Ok(Self {
            app: Self::init_app(&history)?,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            history,
            focused_row: None,
        })
    }
}
