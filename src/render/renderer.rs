use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::palette::{skin_colors, theme_colors};
use crate::dashboard::{DashboardState, SettingsRow, Tab};
use crate::game::{GameStatus, Outcome, Position, Snapshot, View};
use crate::history::GameRecord;
use crate::i18n::{Language, Strings};
use crate::settings::{Skin, Theme};

/// Everything needed to draw one frame
pub struct Scene<'a> {
    pub snapshot: &'a Snapshot,
    pub language: Language,
    pub skin: Skin,
    pub theme: Theme,
    pub history: &'a [GameRecord],
    pub dashboard: &'a DashboardState,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene) {
        let t = scene.language.strings();
        let background = theme_colors(scene.theme).background;
        frame.render_widget(
            Block::default().style(Style::default().bg(background)),
            frame.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(scene.snapshot, t), chunks[0]);

        match scene.snapshot.view {
            View::Game => {
                let board = board_area(chunks[1], scene.snapshot.grid_size);
                frame.render_widget(self.render_grid(scene), board);

                if scene.snapshot.status != GameStatus::Playing {
                    let popup = centered(board, 44, 11);
                    frame.render_widget(Clear, popup);
                    frame.render_widget(self.render_overlay(scene.snapshot, t), popup);
                }
            }
            View::Dashboard => self.render_dashboard(frame, chunks[1], scene),
        }

        frame.render_widget(self.render_controls(scene.snapshot, t), chunks[2]);
    }

    fn render_grid(&self, scene: &Scene) -> Paragraph<'static> {
        let state = scene.snapshot;
        let skin = skin_colors(scene.skin);
        let theme = theme_colors(scene.theme);
        let head = state.snake.first().copied();

        let mut lines = Vec::with_capacity(state.grid_size);
        for y in 0..state.grid_size {
            let mut spans = Vec::with_capacity(state.grid_size);

            for x in 0..state.grid_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if Some(pos) == head {
                    let color = if state.status == GameStatus::GameOver {
                        Color::Red
                    } else {
                        skin.head
                    };
                    Span::styled("■ ", Style::default().fg(color).add_modifier(Modifier::BOLD))
                } else if state.snake.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(skin.body))
                } else if pos == state.food {
                    Span::styled("● ", Style::default().fg(skin.food).add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("· ", Style::default().fg(theme.grid))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let border = if state.impact { Color::Red } else { theme.border };
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.background)),
        )
    }

    fn render_stats(&self, state: &Snapshot, t: &Strings) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled(format!("{}: ", t.high_score), Style::default().fg(Color::Magenta)),
            Span::styled(state.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled(format!("{}: ", t.score), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:04}", state.score),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_overlay(&self, state: &Snapshot, t: &Strings) -> Paragraph<'static> {
        let key = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(Color::Gray);
        let menu_line = |hotkey: &'static str, label: &'static str| {
            Line::from(vec![Span::styled(format!("[{}] ", hotkey), key), Span::styled(label, muted)])
        };

        let (text, border) = match state.status {
            GameStatus::Idle => (
                vec![
                    Line::from(Span::styled(
                        t.title,
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(t.subtitle, Style::default().fg(Color::LightCyan))),
                    Line::from(""),
                    Line::from(Span::styled(t.controls_move, muted)),
                    Line::from(Span::styled(t.controls_dash, muted)),
                    Line::from(""),
                    menu_line("Enter", t.start),
                    menu_line("M", t.dashboard),
                ],
                Color::Cyan,
            ),
            GameStatus::Paused => (
                vec![
                    Line::from(Span::styled(
                        t.paused,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    menu_line("Enter", t.resume),
                    menu_line("Esc", t.resume),
                ],
                Color::Magenta,
            ),
            GameStatus::GameOver => {
                let heading = match state.outcome {
                    Some(Outcome::BoardCleared) => t.board_cleared,
                    _ => t.game_over,
                };
                let mut lines = vec![
                    Line::from(Span::styled(
                        heading,
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(t.final_score, muted)),
                    Line::from(Span::styled(
                        state.score.to_string(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )),
                ];
                if state.is_new_high_score() {
                    lines.push(Line::from(Span::styled(
                        t.new_high_score,
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )));
                }
                lines.push(Line::from(""));
                lines.push(menu_line("Enter", t.reboot));
                lines.push(menu_line("M", t.dashboard));
                (lines, Color::Red)
            }
            GameStatus::Playing => (Vec::new(), Color::Cyan),
        };

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
    }

    fn render_dashboard(&self, frame: &mut Frame, area: Rect, scene: &Scene) {
        let t = scene.language.strings();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let selected = match scene.dashboard.tab {
            Tab::Settings => 0,
            Tab::History => 1,
        };
        let tabs = Tabs::new(vec![t.tab_settings, t.tab_history])
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", t.dashboard))
                    .title_alignment(Alignment::Center),
            );
        frame.render_widget(tabs, chunks[0]);

        let body = match scene.dashboard.tab {
            Tab::Settings => self.render_settings(scene, t),
            Tab::History => self.render_history(scene, t, chunks[1].height),
        };
        frame.render_widget(body, chunks[1]);

        let hint = Line::from(vec![
            Span::styled("[Esc] ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(t.back, Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(
            Block::default().title_bottom(hint.right_aligned()),
            chunks[1],
        );
    }

    fn render_settings(&self, scene: &Scene, t: &Strings) -> Paragraph<'static> {
        let dash = scene.dashboard;
        let lines = SettingsRow::ALL
            .iter()
            .map(|row| {
                let (label, value) = match row {
                    SettingsRow::Language => (t.language, scene.language.native_name()),
                    SettingsRow::Theme => (t.theme, scene.theme.name()),
                    SettingsRow::Skin => (t.skin, scene.skin.name()),
                    SettingsRow::ClearData if dash.confirm_clear => (t.clear_data, t.confirm_clear),
                    SettingsRow::ClearData => (t.clear_data, ""),
                };

                let style = if *row == dash.row {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let value = if value.is_empty() || *row == SettingsRow::ClearData {
                    value.to_string()
                } else {
                    format!("◀ {} ▶", value)
                };

                Line::from(vec![
                    Span::styled(format!(" {:<16}", label), style),
                    Span::raw("  "),
                    Span::styled(value, Style::default().fg(Color::White)),
                ])
            })
            .collect::<Vec<_>>();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }

    fn render_history(&self, scene: &Scene, t: &Strings, height: u16) -> Paragraph<'static> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        if scene.history.is_empty() {
            return Paragraph::new(t.history_empty)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
        }

        let mut lines = vec![Line::from(vec![
            Span::styled(format!(" {:<24}", t.date), Style::default().fg(Color::Magenta)),
            Span::styled(t.score, Style::default().fg(Color::Magenta)),
        ])];

        let visible = height.saturating_sub(3) as usize;
        lines.extend(
            scene
                .history
                .iter()
                .skip(scene.dashboard.history_offset)
                .take(visible)
                .map(|record| {
                    Line::from(vec![
                        Span::styled(
                            format!(" {:<24}", format_date(record.date)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(
                            record.score.to_string(),
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        ),
                    ])
                }),
        );

        Paragraph::new(lines).block(block)
    }

    fn render_controls(&self, state: &Snapshot, t: &Strings) -> Paragraph<'static> {
        let dash_style = if state.dashing {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (status_text, status_color) = if state.status == GameStatus::Playing {
            (t.system_online, Color::Green)
        } else {
            (t.system_idle, Color::Red)
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" | "),
            Span::styled("SPACE ⚡", dash_style),
            Span::styled(format!(" {}ms", state.tick_interval.as_millis()), dash_style),
            Span::raw(" | "),
            Span::styled(t.controls_pause, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled("●", Style::default().fg(status_color)),
            Span::raw(" "),
            Span::styled(status_text, Style::default().fg(Color::Gray)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Area for a board of `grid_size` cells, two columns per cell plus borders
fn board_area(area: Rect, grid_size: usize) -> Rect {
    let width = (grid_size as u16).saturating_mul(2).saturating_add(2);
    let height = (grid_size as u16).saturating_add(2);
    centered(area, width, height)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}
