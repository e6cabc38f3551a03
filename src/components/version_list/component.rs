use crate::components::common::{HistoryActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::components::version_list::rendering::{
    ListLayout, VersionListProps, build_list_layout, calculate_column_widths, list_class_name,
};
use crate::components::version_list::renderers::ListRenderers;
use crate::config;
use crate::localization::tr;
use crate::models::{ComparisonState, RowKey};
use crate::theme::ThemeManager;
use tui_realm_stdlib::Table;
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::{Alignment, BorderType, Borders, Color, TableBuilder};
use tuirealm::ratatui::layout::{Alignment as RatatuiAlignment, Constraint, Rect};
use tuirealm::ratatui::style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{
    Block, BorderType as RatatuiBorderType, Borders as RatatuiBorders, Cell, Paragraph, Row,
    Table as RatatuiTable, TableState,
};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_VERSION_SELECTED: &str = "VersionSelected";
const CMD_RESULT_VERSION_HIGHLIGHTED: &str = "VersionHighlighted";

/// Get current index from table state
fn get_current_index_from_state(state: &State) -> usize {
    match state {
        State::One(StateValue::Usize(index)) => *index,
        _ => 0,
    }
}

/// The version history list.
///
/// Holds one props snapshot and the injected renderer set; every draw is
/// a fresh projection of the props. The wrapped stdlib table only tracks
/// the cursor.
pub struct VersionList {
    component: Table,
    props: VersionListProps,
    renderers: ListRenderers,
    title: String,
    is_focused: bool,
}

impl VersionList {
    pub fn new(props: VersionListProps) -> Self {
        Self::new_with_renderers(props, ListRenderers::default())
    }

    pub fn new_with_renderers(props: VersionListProps, renderers: ListRenderers) -> Self {
        Self::new_with_renderers_and_focus(props, renderers, false)
    }

    pub fn new_with_renderers_and_focus(
        props: VersionListProps,
        renderers: ListRenderers,
        is_focused: bool,
    ) -> Self {
        let title = format!(" {} ", tr("VersionHistory"));
        let layout = build_list_layout(&props, &renderers);

        let component = {
            Table::default()
                .borders(
                    Borders::default()
                        .modifiers(BorderType::Rounded)
                        .color(ThemeManager::primary_accent()),
                )
                .background(Color::Reset)
                .foreground(ThemeManager::text_primary())
                .title(&title, Alignment::Center)
                .scroll(true)
                .highlighted_color(ThemeManager::selection_bg())
                .highlighted_str("► ")
                .rewind(false)
                .step(4)
                .row_height(1)
                .column_spacing(2)
                .table(Self::build_inner_table(&layout))
        };

        Self {
            component,
            props,
            renderers,
            title,
            is_focused,
        }
    }

    fn build_inner_table(layout: &ListLayout) -> Vec<Vec<tuirealm::props::TextSpan>> {
        if layout.rows.is_empty() {
            return Vec::new();
        }
        let mut builder = TableBuilder::default();
        for (i, row) in layout.rows.iter().enumerate() {
            for cell in &row.cells {
                builder.add_col(cell.clone());
            }
            if i + 1 < layout.rows.len() {
                builder.add_row();
            }
        }
        builder.build()
    }

    pub fn props(&self) -> &VersionListProps {
        &self.props
    }

    /// Combined class name of the outer list element.
    pub fn class_name(&self) -> String {
        list_class_name(&self.props.extra_class, self.props.show_header)
    }

    /// Get the current cursor index
    pub fn get_current_index(&self) -> usize {
        get_current_index_from_state(&self.component.state())
    }

    pub fn get_version_count(&self) -> usize {
        self.props.versions.len()
    }

    /// Identity of the row under the cursor, if any.
    pub fn cursor_key(&self) -> Option<RowKey> {
        self.props
            .versions
            .get(self.get_current_index())
            .map(|v| v.row_key())
    }

    /// Move cursor down with bounds checking
    pub fn move_down(&mut self) {
        let current = self.get_current_index();
        let max_index = self.get_version_count().saturating_sub(1);

        if current < max_index {
            self.component.perform(Cmd::Move(Direction::Down));
        }
    }

    /// Move cursor up with bounds checking
    pub fn move_up(&mut self) {
        let current = self.get_current_index();
        if current > 0 {
            self.component.perform(Cmd::Move(Direction::Up));
        }
    }

    /// Page down with bounds checking
    pub fn page_down(&mut self) {
        let current = self.get_current_index();
        let max_index = self.get_version_count().saturating_sub(1);

        if current < max_index {
            self.component.perform(Cmd::Scroll(Direction::Down));
            let new_index = self.get_current_index();
            if new_index > max_index {
                let moves_back = new_index - max_index;
                for _ in 0..moves_back {
                    self.component.perform(Cmd::Move(Direction::Up));
                }
            }
        }
    }

    pub fn page_up(&mut self) {
        self.component.perform(Cmd::Scroll(Direction::Up));
    }

    fn compare_status(compare: &ComparisonState) -> Option<String> {
        if !compare.active {
            return None;
        }
        let endpoint = |v: &Option<crate::models::Version>| match v {
            Some(version) => format!("v{}", version.version),
            None => "—".to_string(),
        };
        Some(format!(
            " {} • {}: {} • {}: {} ",
            tr("Compare"),
            tr("CompareFrom"),
            endpoint(&compare.version_from),
            tr("CompareTo"),
            endpoint(&compare.version_to),
        ))
    }
}

impl Component<Msg, NoUserEvent> for VersionList {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let keys = config::get_config_or_panic().keys();
        let cmd_result = match ev {
            // Navigation keys
            Event::Keyboard(KeyEvent {
                code: Key::Down,
                modifiers: KeyModifiers::NONE,
            }) => {
                self.move_down();
                CmdResult::Custom(CMD_RESULT_VERSION_HIGHLIGHTED, self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == keys.down() => {
                self.move_down();
                CmdResult::Custom(CMD_RESULT_VERSION_HIGHLIGHTED, self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Up,
                modifiers: KeyModifiers::NONE,
            }) => {
                self.move_up();
                CmdResult::Custom(CMD_RESULT_VERSION_HIGHLIGHTED, self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == keys.up() => {
                self.move_up();
                CmdResult::Custom(CMD_RESULT_VERSION_HIGHLIGHTED, self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageDown,
                modifiers: KeyModifiers::NONE,
            }) => {
                self.page_down();
                CmdResult::Custom(CMD_RESULT_VERSION_HIGHLIGHTED, self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageUp,
                modifiers: KeyModifiers::NONE,
            }) => {
                self.page_up();
                CmdResult::Custom(CMD_RESULT_VERSION_HIGHLIGHTED, self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter,
                modifiers: KeyModifiers::NONE,
            }) => CmdResult::Custom(CMD_RESULT_VERSION_SELECTED, self.state()),

            // Compare mode
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == keys.compare() => {
                if self.props.compare_mode_available {
                    return Some(Msg::HistoryActivity(HistoryActivityMsg::ToggleCompareMode));
                }
                CmdResult::None
            }
            Event::Keyboard(KeyEvent {
                code: Key::Esc,
                modifiers: KeyModifiers::NONE,
            }) => {
                if self.props.compare.active {
                    return Some(Msg::HistoryActivity(HistoryActivityMsg::ClearComparison));
                }
                CmdResult::None
            }

            // Alerts
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == keys.dismiss_alert() => {
                if self.props.messages.is_empty() {
                    CmdResult::None
                } else {
                    return Some(Msg::HistoryActivity(HistoryActivityMsg::DismissAlert));
                }
            }

            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(
                CMD_RESULT_VERSION_SELECTED,
                State::One(StateValue::Usize(index)),
            ) => Some(Msg::HistoryActivity(HistoryActivityMsg::VersionSelected(
                index,
            ))),
            CmdResult::Custom(
                CMD_RESULT_VERSION_HIGHLIGHTED,
                State::One(StateValue::Usize(index)),
            ) => Some(Msg::HistoryActivity(HistoryActivityMsg::VersionHighlighted(
                index,
            ))),
            _ => Some(Msg::ForceRedraw),
        }
    }
}

impl MockComponent for VersionList {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let layout = build_list_layout(&self.props, &self.renderers);
        let widths = calculate_column_widths(area.width);

        // Alerts take one line each above the table
        let alert_height = layout.alerts.len().min(4) as u16;
        let alert_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: alert_height.min(area.height),
        };
        let table_area = Rect {
            x: area.x,
            y: area.y + alert_height,
            width: area.width,
            height: area.height.saturating_sub(alert_height),
        };

        if alert_height > 0 {
            let lines: Vec<Line> = layout
                .alerts
                .iter()
                .take(alert_height as usize)
                .map(|(_, spans)| {
                    Line::from(
                        spans
                            .iter()
                            .map(|s| {
                                Span::styled(s.content.clone(), RatatuiStyle::default().fg(s.fg))
                            })
                            .collect::<Vec<_>>(),
                    )
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), alert_area);
        }

        let table_state_index = get_current_index_from_state(&self.component.state());

        let mut rows = Vec::new();
        for list_row in &layout.rows {
            let cells: Vec<Cell> = list_row
                .cells
                .iter()
                .map(|span| {
                    let mut style = RatatuiStyle::default().fg(span.fg);
                    if list_row.active {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Cell::from(span.content.clone()).style(style)
                })
                .collect();

            let mut row = Row::new(cells);
            if list_row.active {
                row = row.style(RatatuiStyle::default().fg(ThemeManager::active_marker()));
            }
            rows.push(row);
        }

        let header_row = layout.header.as_ref().map(|header| {
            Row::new(
                header
                    .iter()
                    .map(|h| {
                        Cell::from(h.content.clone()).style(
                            RatatuiStyle::default()
                                .fg(ThemeManager::header_accent())
                                .add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
            .height(1)
        });

        let mut table = RatatuiTable::new(
            rows,
            &widths
                .iter()
                .map(|&w| Constraint::Length(w))
                .collect::<Vec<_>>(),
        )
        .block(
            Block::default()
                .borders(RatatuiBorders::ALL)
                .border_type(RatatuiBorderType::Rounded)
                .border_style(RatatuiStyle::default().fg(if self.is_focused {
                    ThemeManager::primary_accent()
                } else {
                    RatatuiColor::White
                }))
                .title(self.title.as_str())
                .title_alignment(RatatuiAlignment::Center)
                .title_style(
                    RatatuiStyle::default()
                        .fg(ThemeManager::title_accent())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .column_spacing(2)
        .row_highlight_style(
            RatatuiStyle::default()
                .bg(ThemeManager::selection_bg())
                .fg(ThemeManager::selection_fg())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

        if let Some(header) = header_row {
            table = table.header(header);
        }

        let mut table_state = TableState::default();
        table_state.select(Some(table_state_index));

        frame.render_stateful_widget(table, table_area, &mut table_state);

        // Compare progress overlay on the bottom border
        if let Some(status_text) = Self::compare_status(&self.props.compare) {
            let status_bar = Paragraph::new(status_text)
                .style(RatatuiStyle::default().fg(ThemeManager::compare_badge()))
                .alignment(RatatuiAlignment::Center);

            let status_area = Rect {
                x: table_area.x,
                y: table_area.y + table_area.height.saturating_sub(1),
                width: table_area.width,
                height: 1,
            };

            frame.render_widget(status_bar, status_area);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.component.query(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        match attr {
            Attribute::Custom("cursor_position") => {
                if let AttrValue::Number(position) = value {
                    let target_position = position as usize;
                    let max_index = self.get_version_count().saturating_sub(1);
                    let bounded_position = target_position.min(max_index);

                    let current = self.get_current_index();
                    for _ in 0..current {
                        self.move_up();
                    }
                    for _ in 0..bounded_position {
                        self.move_down();
                    }

                    log::debug!(
                        "Moved cursor to position: {bounded_position} (requested: {target_position})"
                    );
                }
            }
            _ => {
                self.component.attr(attr, value);
            }
        }
    }

    fn state(&self) -> State {
        self.component.state()
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        self.component.perform(cmd)
    }
}

impl ComponentState for VersionList {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!(
            "Mounting VersionList ({}) with {} versions",
            self.class_name(),
            self.get_version_count()
        );
        Ok(())
    }
}

impl Drop for VersionList {
    fn drop(&mut self) {
        log::debug!("Dropping VersionList component");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;
    use chrono::{TimeZone, Utc};

    fn version(number: u64, full: bool) -> Version {
        Version {
            id: number,
            version: number,
            last_edited: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            is_full_version: full,
            author: None,
            note: None,
        }
    }

    #[test]
    fn test_compare_status_only_in_compare_mode() {
        assert!(VersionList::compare_status(&ComparisonState::default()).is_none());

        let compare = ComparisonState {
            active: true,
            version_from: Some(version(3, true)),
            version_to: None,
        };
        let status = VersionList::compare_status(&compare).expect("status in compare mode");
        assert!(status.contains("v3"));
        assert!(status.contains("—"));
    }

    #[test]
    fn test_cursor_key_tracks_first_row() {
        let list = VersionList::new(VersionListProps::new(vec![
            version(1, true),
            version(2, false),
        ]));
        assert_eq!(list.cursor_key(), Some(version(1, true).row_key()));
        assert_eq!(list.get_version_count(), 2);
    }

    #[test]
    fn test_class_name_reflects_props() {
        let mut props = VersionListProps::new(vec![]);
        props.show_header = false;
        let list = VersionList::new(props);
        assert!(list.class_name().contains("table--headerless"));
    }
}
