use ratatui::style::Color;

use crate::settings::{Skin, Theme};

/// Colours for the snake and the food
pub struct SkinColors {
    pub head: Color,
    pub body: Color,
    pub food: Color,
}

/// Colours for the board
pub struct ThemeColors {
    pub background: Color,
    pub grid: Color,
    pub border: Color,
}

pub fn skin_colors(skin: Skin) -> SkinColors {
    match skin {
        Skin::Cyber => SkinColors {
            head: Color::Cyan,
            body: Color::Rgb(168, 85, 247),
            food: Color::LightGreen,
        },
        Skin::Gold => SkinColors {
            head: Color::Yellow,
            body: Color::Rgb(202, 138, 4),
            food: Color::Red,
        },
        Skin::Matrix => SkinColors {
            head: Color::Green,
            body: Color::Rgb(22, 101, 52),
            food: Color::White,
        },
        Skin::Flame => SkinColors {
            head: Color::Rgb(249, 115, 22),
            body: Color::Rgb(220, 38, 38),
            food: Color::LightBlue,
        },
    }
}

pub fn theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Default => ThemeColors {
            background: Color::Rgb(5, 5, 16),
            grid: Color::DarkGray,
            border: Color::Cyan,
        },
        Theme::Retro => ThemeColors {
            background: Color::Rgb(26, 11, 46),
            grid: Color::Rgb(88, 28, 135),
            border: Color::Magenta,
        },
        Theme::Clean => ThemeColors {
            background: Color::Rgb(15, 23, 42),
            grid: Color::Rgb(51, 65, 85),
            border: Color::Gray,
        },
    }
}
