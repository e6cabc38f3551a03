use tuirealm::props::Alignment;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent};

use crate::components::common::Msg;
use crate::theme::ThemeManager;

/// Help bar showing keyboard shortcuts for the version list.
pub struct HelpBar {
    compare_active: bool,
}

impl HelpBar {
    pub fn new(compare_active: bool) -> Self {
        Self { compare_active }
    }

    fn get_shortcuts(&self) -> Vec<(String, bool)> {
        let mut shortcuts = vec![
            ("[↑/k]".to_string(), true),
            (" Up ".to_string(), false),
            ("[↓/j]".to_string(), true),
            (" Down ".to_string(), false),
            ("[Enter]".to_string(), true),
        ];

        if self.compare_active {
            shortcuts.push((" Pick A/B ".to_string(), false));
            shortcuts.push(("[c]".to_string(), true));
            shortcuts.push((" Exit compare ".to_string(), false));
            shortcuts.push(("[Esc]".to_string(), true));
            shortcuts.push((" Reset ".to_string(), false));
        } else {
            shortcuts.push((" Select ".to_string(), false));
            shortcuts.push(("[c]".to_string(), true));
            shortcuts.push((" Compare ".to_string(), false));
        }

        shortcuts.push(("[x]".to_string(), true));
        shortcuts.push((" Dismiss alert ".to_string(), false));
        shortcuts.push(("[q]".to_string(), true));
        shortcuts.push((" Quit".to_string(), false));

        shortcuts
    }
}

impl MockComponent for HelpBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (text, highlight)) in self.get_shortcuts().iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                spans.push(Span::styled(
                    " | ",
                    Style::default().fg(ThemeManager::shortcut_description()),
                ));
            }

            if *highlight {
                spans.push(Span::styled(
                    text.clone(),
                    Style::default().fg(ThemeManager::shortcut_key()),
                ));
            } else {
                spans.push(Span::raw(text.clone()));
            }
        }

        let paragraph = tuirealm::ratatui::widgets::Paragraph::new(Text::from(Line::from(spans)))
            .style(Style::default().fg(ThemeManager::text_primary()))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::None
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        tuirealm::command::CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for HelpBar {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
