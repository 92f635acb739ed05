pub mod form;
pub mod menu;

use classifier::Session;
use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Form(form::FormState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Form(s) => form::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, session: &Session) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key, session),
            Screen::Form(s) => form::handle_key(s, key, session),
        }
    }
}
