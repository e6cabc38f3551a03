use crate::app::history_state::HistoryState;
use crate::components::common::{ComponentId, Msg};
use crate::models::RowKey;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod initialization;
mod remount;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    /// All version-history state shown by the list
    pub history: HistoryState,
    /// Identity of the row under the cursor, restored across remounts
    pub focused_row: Option<RowKey>,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");
        self.quit = true;
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
