use super::Model;
use crate::components::common::Msg;
use crate::models::StatusKind;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        if let Some(msg) = msg {
            // Set redraw
            self.redraw = true;

            match msg {
                Msg::AppClose => {
                    self.shutdown();
                    None
                }
                Msg::ForceRedraw => None,
                Msg::HistoryActivity(msg) => self.update_history(msg),
                Msg::Error(e) => {
                    log::error!("Error received: {e}");
                    // Surface the error through the alert panel
                    self.history.push_message(StatusKind::Error, e.to_string());
                    if let Err(remount_err) = self.remount_version_list() {
                        log::error!("Failed to remount version list: {remount_err}");
                    }
                    None
                }
            }
        } else {
            None
        }
    }
}
