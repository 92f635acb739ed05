use classifier::{schema, Notification, Registry, Session, FEATURES};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{layout, theme::Theme, widgets};

use super::{menu::MenuState, Action, Screen};

/// The widget receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Model,
    Field(usize),
    Classify,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Model => Focus::Field(0),
            Focus::Field(i) if i + 1 < FEATURES.len() => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Classify,
            Focus::Classify => Focus::Model,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Model => Focus::Classify,
            Focus::Field(0) => Focus::Model,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Classify => Focus::Field(FEATURES.len() - 1),
        }
    }
}

/// The model selector plus one text entry per feature.
pub struct FormState {
    models: Vec<String>,
    selected: Option<usize>,
    entries: Vec<String>,
    focus: Focus,
    notice: Option<Notification>,
}

impl FormState {
    pub fn new(registry: &Registry) -> Self {
        Self {
            models: registry.names().map(String::from).collect(),
            selected: None,
            entries: vec![String::new(); FEATURES.len()],
            focus: Focus::Model,
            notice: None,
        }
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.models.get(i))
            .map(String::as_str)
    }

    fn cycle_model(&mut self, forward: bool) {
        let n = self.models.len();
        if n == 0 {
            return;
        }

        self.selected = Some(match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => n - 1,
            (Some(i), true) => (i + 1) % n,
            (Some(i), false) => (i + n - 1) % n,
        });
    }

    fn submit(&mut self, session: &Session) {
        let notice = session.submit(self.selected_model(), &self.entries);
        log::debug!("form submitted: {}", notice.message());
        self.notice = Some(notice);
    }
}

pub fn handle_key(state: &mut FormState, key: KeyCode, session: &Session) -> Action {
    if state.notice.is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc) {
            state.notice = None;
        }
        return Action::None;
    }

    match (key, state.focus) {
        (KeyCode::Esc, _) => {
            return Action::Transition(Screen::Menu(MenuState::new(session.registry(), None)));
        }
        (KeyCode::Tab | KeyCode::Down, focus) => state.focus = focus.next(),
        (KeyCode::BackTab | KeyCode::Up, focus) => state.focus = focus.prev(),
        (KeyCode::Left, Focus::Model) => state.cycle_model(false),
        (KeyCode::Right, Focus::Model) => state.cycle_model(true),
        (KeyCode::Char(c), Focus::Field(i)) => state.entries[i].push(c),
        (KeyCode::Backspace, Focus::Field(i)) => {
            state.entries[i].pop();
        }
        (KeyCode::Enter, Focus::Classify) => state.submit(session),
        (KeyCode::Enter, focus) => state.focus = focus.next(),
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &FormState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (model_area, fields_area, button_area, hints_area) = layout::form(area);

    draw_model(f, model_area, state);
    draw_fields(f, fields_area, state);
    draw_button(f, button_area, state.focus == Focus::Classify);
    widgets::hints(
        f,
        hints_area,
        &[
            ("tab/↑↓", "move"),
            ("←→", "model"),
            ("enter", "next / classify"),
            ("esc", "menu"),
        ],
    );

    if let Some(notice) = &state.notice {
        widgets::notice(f, area, notice);
    }
}

fn focus_border(focused: bool) -> ratatui::style::Style {
    if focused {
        Theme::border_focus()
    } else {
        Theme::border()
    }
}

fn draw_model(f: &mut Frame, area: Rect, state: &FormState) {
    let focused = state.focus == Focus::Model;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused))
        .title(" Model ")
        .title_style(Theme::title());

    let line = match (state.selected_model(), state.models.is_empty()) {
        (_, true) => Line::from(Span::styled("no models loaded", Theme::muted())),
        (None, false) => Line::from(Span::styled("◀ select a model ▶", Theme::muted())),
        (Some(name), false) => Line::from(vec![
            Span::styled("◀ ", Theme::key()),
            Span::styled(name.to_string(), Theme::text()),
            Span::styled(" ▶", Theme::key()),
        ]),
    };

    f.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}

fn draw_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let focused = match state.focus {
        Focus::Field(i) => Some(i),
        _ => None,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused.is_some()))
        .title(" Patient record ")
        .title_style(Theme::title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = (inner.height as usize).max(1);
    let offset = scroll_offset(focused, visible, FEATURES.len());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); visible])
        .split(inner);

    for (row, i) in rows.iter().zip(offset..FEATURES.len()) {
        let feature = FEATURES[i];
        widgets::field_row(
            f,
            *row,
            feature,
            &state.entries[i],
            schema::hint(feature),
            focused == Some(i),
        );
    }
}

/// First visible row keeping `focused` inside a window of `visible` rows.
fn scroll_offset(focused: Option<usize>, visible: usize, total: usize) -> usize {
    let max = total.saturating_sub(visible);
    match focused {
        Some(i) if i >= visible => (i + 1 - visible).min(max),
        _ => 0,
    }
}

fn draw_button(f: &mut Frame, area: Rect, focused: bool) {
    let rect = layout::centered_rect(40, 100, area);
    let style = if focused {
        Theme::highlight()
    } else {
        Theme::dim()
    };

    f.render_widget(
        Paragraph::new(Span::styled("Classify", style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_border(focused)),
            ),
        rect,
    );
}
