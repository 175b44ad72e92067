//! Navigation state of the settings/history dashboard

use tracing::info;

use crate::history::HistoryRecorder;
use crate::i18n::Language;
use crate::input::KeyAction;
use crate::settings::{cycle, Preferences, Skin, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Settings,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRow {
    #[default]
    Language,
    Theme,
    Skin,
    ClearData,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Language,
        SettingsRow::Theme,
        SettingsRow::Skin,
        SettingsRow::ClearData,
    ];
}

/// What the caller should do after a dashboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardCommand {
    Stay,
    Leave,
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub tab: Tab,
    pub row: SettingsRow,
    /// Set after the first Enter on "Reset Data"; a second Enter clears
    pub confirm_clear: bool,
    /// First visible history entry
    pub history_offset: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(
        &mut self,
        action: KeyAction,
        prefs: &mut Preferences,
        history: &mut HistoryRecorder,
    ) -> DashboardCommand {
        if action != KeyAction::Activate {
            self.confirm_clear = false;
        }

        match action {
            KeyAction::Back => return DashboardCommand::Leave,
            KeyAction::Quit => return DashboardCommand::Quit,
            KeyAction::SwitchTab => {
                self.tab = match self.tab {
                    Tab::Settings => Tab::History,
                    Tab::History => Tab::Settings,
                };
            }
            KeyAction::SelectPrevious | KeyAction::SelectNext => {
                let step = if action == KeyAction::SelectNext { 1 } else { -1 };
                match self.tab {
                    Tab::Settings => self.row = cycle(&SettingsRow::ALL, self.row, step),
                    Tab::History => {
                        let last = history.len().saturating_sub(1);
                        self.history_offset = (self.history_offset as isize + step)
                            .clamp(0, last as isize) as usize;
                    }
                }
            }
            KeyAction::CyclePrevious | KeyAction::CycleNext if self.tab == Tab::Settings => {
                let step = if action == KeyAction::CycleNext { 1 } else { -1 };
                match self.row {
                    SettingsRow::Language => {
                        prefs.set_language(cycle(&Language::ALL, prefs.language(), step))
                    }
                    SettingsRow::Theme => prefs.set_theme(cycle(&Theme::ALL, prefs.theme(), step)),
                    SettingsRow::Skin => prefs.set_skin(cycle(&Skin::ALL, prefs.skin(), step)),
                    SettingsRow::ClearData => {}
                }
            }
            KeyAction::Activate if self.tab == Tab::Settings && self.row == SettingsRow::ClearData => {
                if self.confirm_clear {
                    info!("Clearing saved data");
                    history.clear();
                    prefs.reset_cosmetics();
                    self.confirm_clear = false;
                    self.history_offset = 0;
                } else {
                    self.confirm_clear = true;
                }
            }
            _ => {}
        }

        DashboardCommand::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, MemoryStore, SharedStore};

    fn setup() -> (SharedStore, Preferences, HistoryRecorder) {
        let store = shared(MemoryStore::new());
        let prefs = Preferences::load(store.clone());
        let history = HistoryRecorder::load(store.clone(), 50);
        (store, prefs, history)
    }

    #[test]
    fn test_cycle_skin() {
        let (_, mut prefs, mut history) = setup();
        let mut dash = DashboardState::new();

        dash.handle(KeyAction::SelectNext, &mut prefs, &mut history);
        dash.handle(KeyAction::SelectNext, &mut prefs, &mut history);
        assert_eq!(dash.row, SettingsRow::Skin);

        dash.handle(KeyAction::CycleNext, &mut prefs, &mut history);
        assert_eq!(prefs.skin(), Skin::Gold);
        dash.handle(KeyAction::CyclePrevious, &mut prefs, &mut history);
        dash.handle(KeyAction::CyclePrevious, &mut prefs, &mut history);
        assert_eq!(prefs.skin(), Skin::Flame);
    }

    #[test]
    fn test_clear_needs_confirmation() {
        let (_, mut prefs, mut history) = setup();
        history.record(50);
        prefs.set_theme(Theme::Clean);
        let mut dash = DashboardState {
            row: SettingsRow::ClearData,
            ..Default::default()
        };

        dash.handle(KeyAction::Activate, &mut prefs, &mut history);
        assert!(dash.confirm_clear);
        assert_eq!(history.len(), 1);

        dash.handle(KeyAction::Activate, &mut prefs, &mut history);
        assert!(history.is_empty());
        assert_eq!(history.high_score(), 0);
        assert_eq!(prefs.theme(), Theme::Default);
    }

    #[test]
    fn test_other_key_cancels_confirmation() {
        let (_, mut prefs, mut history) = setup();
        history.record(50);
        let mut dash = DashboardState {
            row: SettingsRow::ClearData,
            ..Default::default()
        };

        dash.handle(KeyAction::Activate, &mut prefs, &mut history);
        dash.handle(KeyAction::SwitchTab, &mut prefs, &mut history);
        dash.handle(KeyAction::SwitchTab, &mut prefs, &mut history);
        dash.handle(KeyAction::Activate, &mut prefs, &mut history);

        assert_eq!(history.len(), 1);
        assert!(dash.confirm_clear);
    }

    #[test]
    fn test_history_scroll_is_clamped() {
        let (_, mut prefs, mut history) = setup();
        history.record(10);
        history.record(20);
        let mut dash = DashboardState {
            tab: Tab::History,
            ..Default::default()
        };

        dash.handle(KeyAction::SelectPrevious, &mut prefs, &mut history);
        assert_eq!(dash.history_offset, 0);
        for _ in 0..5 {
            dash.handle(KeyAction::SelectNext, &mut prefs, &mut history);
        }
        assert_eq!(dash.history_offset, 1);
    }

    #[test]
    fn test_leave_and_quit() {
        let (_, mut prefs, mut history) = setup();
        let mut dash = DashboardState::new();

        assert_eq!(
            dash.handle(KeyAction::Back, &mut prefs, &mut history),
            DashboardCommand::Leave
        );
        assert_eq!(
            dash.handle(KeyAction::Quit, &mut prefs, &mut history),
            DashboardCommand::Quit
        );
    }
}
