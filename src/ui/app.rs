use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Sex, categories_for};
use crate::ui::controller::{Intent, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sex,
    WeightClass,
    Name,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Sex => Focus::WeightClass,
            Focus::WeightClass => Focus::Name,
            Focus::Name => Focus::Sex,
        }
    }

    fn prev(self) -> Focus {
        match self {
            Focus::Sex => Focus::Name,
            Focus::WeightClass => Focus::Sex,
            Focus::Name => Focus::WeightClass,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Dispatch(Intent),
    Export,
    Quit,
}

/// Widget-level state: which selector has focus, where its cursor is and
/// what is typed in the name box. Filter and selection live in `Session`.
#[derive(Debug, Clone)]
pub struct App {
    pub focus: Focus,
    pub sex_cursor: usize,
    pub class_cursor: usize,
    pub input: String,
    pub status: Option<String>,
}

impl App {
    pub fn new(session: &Session) -> Self {
        let mut app = Self {
            focus: Focus::Name,
            sex_cursor: 0,
            class_cursor: 0,
            input: String::new(),
            status: None,
        };
        app.sync(session);
        app
    }

    /// Moves both selector cursors back onto the active filter.
    pub fn sync(&mut self, session: &Session) {
        let filter = &session.state.filter;
        self.sex_cursor = Sex::ALL.iter().position(|s| *s == filter.sex).unwrap_or(0);
        self.class_cursor = filter.class_index();
    }

    pub fn on_key(&mut self, key: KeyEvent, session: &Session) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('s') if ctrl => return Action::Export,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Sex => self.on_sex_key(key.code),
            Focus::WeightClass => self.on_class_key(key.code, session),
            Focus::Name => self.on_name_key(key.code, ctrl),
        }
    }

    fn on_sex_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Up => {
                self.sex_cursor = self.sex_cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.sex_cursor = (self.sex_cursor + 1).min(Sex::ALL.len() - 1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Action::Dispatch(Intent::SexChanged(Sex::ALL[self.sex_cursor]))
            }
            _ => Action::None,
        }
    }

    fn on_class_key(&mut self, code: KeyCode, session: &Session) -> Action {
        let classes = categories_for(session.state.filter.sex);
        match code {
            KeyCode::Up => {
                self.class_cursor = self.class_cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.class_cursor = (self.class_cursor + 1).min(classes.len() - 1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match classes.get(self.class_cursor) {
                Some(class) => Action::Dispatch(Intent::WeightClassChanged(class.to_string())),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn on_name_key(&mut self, code: KeyCode, ctrl: bool) -> Action {
        match code {
            KeyCode::Enter => Action::Dispatch(Intent::NameSubmitted(self.input.clone())),
            KeyCode::Backspace => {
                self.input.pop();
                Action::None
            }
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                Action::None
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/ui/app.rs"]
mod tests;
