use anyhow::{Context, Result};
use crossterm::{
    event::{
        Event, EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, Instant};
use tracing::{debug, info};

use crate::dashboard::{DashboardCommand, DashboardState};
use crate::game::{GameConfig, GameMachine, GameStatus, View};
use crate::history::HistoryRecorder;
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, Scene};
use crate::settings::Preferences;
use crate::storage::SharedStore;

/// How long the board flashes after a crash
const IMPACT_DURATION: Duration = Duration::from_millis(500);

pub struct HumanMode {
    machine: GameMachine,
    prefs: Preferences,
    dashboard: DashboardState,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    impact_until: Option<Instant>,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: SharedStore) -> Result<Self> {
        let history = HistoryRecorder::load(store.clone(), config.history_capacity);
        let prefs = Preferences::load(store);
        let machine = GameMachine::new(config, history).context("Failed to set up the board")?;

        Ok(Self {
            machine,
            prefs,
            dashboard: DashboardState::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::default(),
            should_quit: false,
            impact_until: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        // Dash is held down, so ask for key release events where the terminal has them
        let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
        if reports_release {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release events")?;
        }
        self.input_handler = InputHandler::new(reports_release);
        info!("Terminal ready (key release events: {})", reports_release);

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, paced by the machine's own clock
                _ = self.machine.clock_mut().tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.expire_impact();
                    let snapshot = self.machine.snapshot();
                    let scene = Scene {
                        snapshot: &snapshot,
                        language: self.prefs.language(),
                        skin: self.prefs.skin(),
                        theme: self.prefs.theme(),
                        history: self.machine.history().records(),
                        dashboard: &self.dashboard,
                    };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &scene);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        let action = self.input_handler.handle_key_event(key, self.machine.view());
        if action == KeyAction::None {
            return;
        }

        match self.machine.view() {
            View::Game => self.handle_game_action(action),
            View::Dashboard => {
                let command =
                    self.dashboard
                        .handle(action, &mut self.prefs, self.machine.history_mut());
                match command {
                    DashboardCommand::Stay => {}
                    DashboardCommand::Leave => {
                        self.machine.close_dashboard();
                    }
                    DashboardCommand::Quit => self.should_quit = true,
                }
            }
        }
    }

    fn handle_game_action(&mut self, action: KeyAction) {
        let handled = match action {
            KeyAction::Steer(direction) => self.machine.propose_direction(direction),
            KeyAction::DashPress => self.machine.press_dash(),
            KeyAction::DashRelease => self.machine.release_dash(),
            KeyAction::DashToggle => self.machine.toggle_dash(),
            KeyAction::TogglePause => self.machine.toggle_pause(),
            KeyAction::Confirm => match self.machine.status() {
                GameStatus::Paused => self.machine.resume(),
                _ => self.machine.start(),
            },
            KeyAction::OpenDashboard if self.machine.status() != GameStatus::Playing => {
                self.dashboard = DashboardState::new();
                self.machine.open_dashboard()
            }
            KeyAction::Quit => {
                self.should_quit = true;
                true
            }
            _ => false,
        };

        if !handled {
            debug!("Ignored {:?} while {:?}", action, self.machine.status());
        }
    }

    fn update_game(&mut self) {
        let outcome = self.machine.tick();

        if outcome.is_some_and(|outcome| outcome.is_terminal()) {
            self.impact_until = Some(Instant::now() + IMPACT_DURATION);
        }
    }

    fn expire_impact(&mut self) {
        if let Some(until) = self.impact_until {
            if Instant::now() >= until {
                self.machine.clear_impact();
                self.impact_until = None;
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        if self.input_handler.reports_release() {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard mode")?;
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, MemoryStore};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mode() -> HumanMode {
        HumanMode::new(GameConfig::default(), shared(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.machine.status(), GameStatus::Idle);
        assert_eq!(mode.machine.snapshot().score, 0);
    }

    #[test]
    fn test_enter_starts_and_escape_pauses() {
        let mut mode = mode();

        mode.handle_event(key(KeyCode::Enter));
        assert_eq!(mode.machine.status(), GameStatus::Playing);

        mode.handle_event(key(KeyCode::Esc));
        assert_eq!(mode.machine.status(), GameStatus::Paused);

        mode.handle_event(key(KeyCode::Enter));
        assert_eq!(mode.machine.status(), GameStatus::Playing);
    }

    #[test]
    fn test_dashboard_round_trip() {
        let mut mode = mode();

        mode.handle_event(key(KeyCode::Char('m')));
        assert_eq!(mode.machine.view(), View::Dashboard);

        // Escape means "back" on the dashboard, not "pause".
        mode.handle_event(key(KeyCode::Esc));
        assert_eq!(mode.machine.view(), View::Game);
        assert_eq!(mode.machine.status(), GameStatus::Idle);
    }

    #[test]
    fn test_dashboard_not_reachable_mid_game() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Enter));

        mode.handle_event(key(KeyCode::Char('m')));
        assert_eq!(mode.machine.view(), View::Game);
        assert_eq!(mode.machine.status(), GameStatus::Playing);
    }

    #[test]
    fn test_space_toggles_dash_without_release_events() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Enter));

        mode.handle_event(key(KeyCode::Char(' ')));
        assert!(mode.machine.snapshot().dashing);
        mode.handle_event(key(KeyCode::Char(' ')));
        assert!(!mode.machine.snapshot().dashing);
    }

    #[test]
    fn test_quit() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_impact_expires() {
        let mut mode = mode();
        mode.machine.start();
        // Steer into the left wall.
        mode.machine.propose_direction(crate::game::Direction::Left);
        while mode.machine.status() == GameStatus::Playing {
            mode.update_game();
        }
        assert!(mode.machine.snapshot().impact);
        assert!(mode.impact_until.is_some());

        mode.impact_until = Some(Instant::now());
        mode.expire_impact();
        assert!(!mode.machine.snapshot().impact);
    }
}
