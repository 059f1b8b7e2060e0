use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    Up,
    Down,
    Left,
    Right,
    Top,
    Bottom,
    Select,
    Back,
    ToggleTheme,
    Help,
    GoToTab(usize),
    NewBooking,
    Approve,
    Decline,
    Complete,
    Delete,
    InsertChar(char),
    DeleteChar,
    NextField,
    PrevField,
    Submit,
    CancelInput,
    Resize { width: u16, height: u16 },
    None,
}

/// Whether keystrokes navigate the portal or feed a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct EventHandler {
    input_mode: InputMode,
    terminal_size: Option<(u16, u16)>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Normal,
            terminal_size: None,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    pub fn terminal_size(&self) -> Option<(u16, u16)> {
        self.terminal_size
    }

    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => self.handle_resize(width, height),
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode_key(key),
            InputMode::Editing => self.handle_editing_mode_key(key),
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl_pressed) {
            (KeyCode::Char('c'), true) => Some(Action::Quit),
            (KeyCode::Char('q'), false) => Some(Action::Quit),
            (KeyCode::Esc, _) => Some(Action::Back),
            (KeyCode::Tab, _) => Some(Action::NextTab),
            (KeyCode::BackTab, _) => Some(Action::PrevTab),
            (KeyCode::Char('j'), false) | (KeyCode::Down, _) => Some(Action::Down),
            (KeyCode::Char('k'), false) | (KeyCode::Up, _) => Some(Action::Up),
            (KeyCode::Char('h'), false) | (KeyCode::Left, _) => Some(Action::Left),
            (KeyCode::Char('l'), false) | (KeyCode::Right, _) => Some(Action::Right),
            (KeyCode::Char('g'), false) => Some(Action::Top),
            (KeyCode::Char('G'), false) => Some(Action::Bottom),
            (KeyCode::Enter, _) => Some(Action::Select),
            (KeyCode::Char('t'), false) => Some(Action::ToggleTheme),
            (KeyCode::Char('?'), false) => Some(Action::Help),
            (KeyCode::Char('n'), false) => Some(Action::NewBooking),
            (KeyCode::Char('a'), false) => Some(Action::Approve),
            (KeyCode::Char('x'), false) => Some(Action::Decline),
            (KeyCode::Char('m'), false) => Some(Action::Complete),
            (KeyCode::Char('d'), false) => Some(Action::Delete),
            (KeyCode::Char('1'), false) => Some(Action::GoToTab(0)),
            (KeyCode::Char('2'), false) => Some(Action::GoToTab(1)),
            (KeyCode::Char('3'), false) => Some(Action::GoToTab(2)),
            _ => None,
        }
    }

    fn handle_editing_mode_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                Some(Action::CancelInput)
            }
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            KeyCode::Up => Some(Action::Up),
            KeyCode::Down => Some(Action::Down),
            KeyCode::Char(c) => Some(Action::InsertChar(c)),
            _ => None,
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) -> Option<Action> {
        self.terminal_size = Some((width, height));
        Some(Action::Resize { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_navigation() {
        let mut handler = EventHandler::new();

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Down)),
            Some(Action::Down)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Up)), Some(Action::Up));
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('g'))),
            Some(Action::Top)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('G'))),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_normal_mode_quit() {
        let mut handler = EventHandler::new();

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_tab_switching() {
        let mut handler = EventHandler::new();

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Tab)),
            Some(Action::NextTab)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::BackTab)),
            Some(Action::PrevTab)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('1'))),
            Some(Action::GoToTab(0))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('3'))),
            Some(Action::GoToTab(2))
        );
    }

    #[test]
    fn test_triage_shortcuts() {
        let mut handler = EventHandler::new();

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('a'))),
            Some(Action::Approve)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('x'))),
            Some(Action::Decline)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('m'))),
            Some(Action::Complete)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('d'))),
            Some(Action::Delete)
        );
    }

    #[test]
    fn test_editing_mode_captures_text() {
        let mut handler = EventHandler::new();
        handler.set_input_mode(InputMode::Editing);

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            Some(Action::InsertChar('q'))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            Some(Action::DeleteChar)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            Some(Action::Submit)
        );
    }

    #[test]
    fn test_editing_mode_escape_returns_to_normal() {
        let mut handler = EventHandler::new();
        handler.set_input_mode(InputMode::Editing);

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            Some(Action::CancelInput)
        );
        assert_eq!(handler.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_editing_mode_ctrl_c_quits() {
        let mut handler = EventHandler::new();
        handler.set_input_mode(InputMode::Editing);

        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_resize() {
        let mut handler = EventHandler::new();

        assert_eq!(handler.terminal_size(), None);

        let action = handler.handle_resize(120, 40);
        assert_eq!(
            action,
            Some(Action::Resize {
                width: 120,
                height: 40
            })
        );
        assert_eq!(handler.terminal_size(), Some((120, 40)));
    }
}
