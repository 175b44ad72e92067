use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Direction, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Game view
    Steer(Direction),
    DashPress,
    DashRelease,
    DashToggle,
    TogglePause,
    /// Start a new game or resume a paused one
    Confirm,
    OpenDashboard,

    // Dashboard view
    SwitchTab,
    SelectPrevious,
    SelectNext,
    CyclePrevious,
    CycleNext,
    Activate,
    Back,

    Quit,
    None,
}

pub struct InputHandler {
    /// Whether the terminal sends key release events
    reports_release: bool,
}

impl InputHandler {
    pub fn new(reports_release: bool) -> Self {
        Self { reports_release }
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    pub fn handle_key_event(&self, key: KeyEvent, view: View) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match view {
            View::Game => self.game_key(key),
            View::Dashboard => Self::dashboard_key(key),
        }
    }

    fn game_key(&self, key: KeyEvent) -> KeyAction {
        if key.code == KeyCode::Char(' ') {
            return match (key.kind, self.reports_release) {
                (KeyEventKind::Press, true) => KeyAction::DashPress,
                (KeyEventKind::Press, false) => KeyAction::DashToggle,
                (KeyEventKind::Release, _) => KeyAction::DashRelease,
                (KeyEventKind::Repeat, _) => KeyAction::None,
            };
        }

        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::TogglePause,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::OpenDashboard,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    fn dashboard_key(key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => KeyAction::SwitchTab,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::SelectPrevious,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::SelectNext,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::CyclePrevious,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::CycleNext,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => KeyAction::Back,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(false)
    }
}
