use crate::app::model::Model;
use crate::components::common::ComponentId;
use crate::error::AppResult;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let _ = self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(1), // Title
                        Constraint::Min(8),    // Version list
                        Constraint::Length(1), // Help bar
                    ]
                    .as_ref(),
                )
                .split(f.area());

            self.app.view(&ComponentId::TextLabel, f, chunks[0]);
            self.app.view(&ComponentId::VersionList, f, chunks[1]);
            self.app.view(&ComponentId::HelpBar, f, chunks[2]);
        });

        Ok(())
    }
}
