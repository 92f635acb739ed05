use classifier::{Notification, Registry, Session};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{layout::centered_rect, theme::Theme, widgets};

use super::{form::FormState, Action, Screen};

const LOGO: &str = r#"
  ██████╗██╗  ██╗██████╗
 ██╔════╝██║ ██╔╝██╔══██╗
 ██║     █████╔╝ ██║  ██║
 ██║     ██╔═██╗ ██║  ██║
 ╚██████╗██║  ██╗██████╔╝
  ╚═════╝╚═╝  ╚═╝╚═════╝

chronic kidney disease classifier
"#;

const MENU_ITEMS: &[&str] = &["Classify", "Quit"];

pub struct MenuState {
    pub selected: usize,
    models: usize,
    notice: Option<Notification>,
}

impl MenuState {
    pub fn new(registry: &Registry, notice: Option<Notification>) -> Self {
        Self {
            selected: 0,
            models: registry.len(),
            notice,
        }
    }
}

pub fn handle_key(state: &mut MenuState, key: KeyCode, session: &Session) -> Action {
    if state.notice.is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc) {
            state.notice = None;
        }
        return Action::None;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected < MENU_ITEMS.len() - 1 {
                state.selected += 1;
            }
            Action::None
        }
        KeyCode::Enter => match state.selected {
            0 => Action::Transition(Screen::Form(FormState::new(session.registry()))),
            1 => Action::Quit,
            _ => Action::None,
        },
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &MenuState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(60, 70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(MENU_ITEMS.len() as u16 * 2 + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    draw_logo(f, chunks[0]);
    draw_status(f, chunks[1], state.models);
    draw_menu(f, chunks[3], state);
    widgets::hints(
        f,
        chunks[5],
        &[("↑↓", "navigate"), ("enter", "select"), ("q", "quit")],
    );

    if let Some(notice) = &state.notice {
        widgets::notice(f, area, notice);
    }
}

fn draw_logo(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::title())))
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_status(f: &mut Frame, area: Rect, models: usize) {
    let (text, style) = match models {
        0 => ("no models loaded".to_string(), Theme::severity(classifier::Severity::Warning)),
        1 => ("1 model loaded".to_string(), Theme::dim()),
        n => (format!("{n} models loaded"), Theme::dim()),
    };

    f.render_widget(
        Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
        area,
    );
}

fn draw_menu(f: &mut Frame, area: Rect, state: &MenuState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" MENU ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let item_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            MENU_ITEMS
                .iter()
                .map(|_| Constraint::Length(2))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (i, (label, item_area)) in MENU_ITEMS.iter().zip(item_areas.iter()).enumerate() {
        let (prefix, style) = if i == state.selected {
            ("▶ ", Theme::highlight())
        } else {
            ("  ", Theme::dim())
        };

        let line = Line::from(vec![Span::styled(prefix, style), Span::styled(*label, style)]);
        f.render_widget(Paragraph::new(line), *item_area);
    }
}

#[cfg(test)]
mod tests {
    use classifier::Validation;

    use super::*;

    #[test]
    fn notice_swallows_keys_until_dismissed() {
        let registry = Registry::new();
        let session = Session::new(&registry, Validation::Lenient);
        let mut state = MenuState::new(&registry, Some(Notification::LoadFailed("boom".into())));

        assert!(matches!(handle_key(&mut state, KeyCode::Char('q'), &session), Action::None));
        assert!(state.notice.is_some());

        assert!(matches!(handle_key(&mut state, KeyCode::Enter, &session), Action::None));
        assert!(state.notice.is_none());

        assert!(matches!(handle_key(&mut state, KeyCode::Char('q'), &session), Action::Quit));
    }

    #[test]
    fn enter_opens_the_form() {
        let registry = Registry::new();
        let session = Session::new(&registry, Validation::Lenient);
        let mut state = MenuState::new(&registry, None);

        assert!(matches!(
            handle_key(&mut state, KeyCode::Enter, &session),
            Action::Transition(Screen::Form(_))
        ));

        handle_key(&mut state, KeyCode::Down, &session);
        assert!(matches!(handle_key(&mut state, KeyCode::Enter, &session), Action::Quit));
    }
}
