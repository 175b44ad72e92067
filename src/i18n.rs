//! User-facing text in English and Chinese

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }
}

pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub controls_move: &'static str,
    pub controls_dash: &'static str,
    pub controls_pause: &'static str,
    pub start: &'static str,
    pub resume: &'static str,
    pub dashboard: &'static str,
    pub game_over: &'static str,
    pub reboot: &'static str,
    pub final_score: &'static str,
    pub new_high_score: &'static str,
    pub board_cleared: &'static str,
    pub paused: &'static str,
    pub high_score: &'static str,
    pub score: &'static str,
    pub system_online: &'static str,
    pub system_idle: &'static str,
    pub back: &'static str,
    pub tab_settings: &'static str,
    pub tab_history: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub skin: &'static str,
    pub clear_data: &'static str,
    pub confirm_clear: &'static str,
    pub history_empty: &'static str,
    pub date: &'static str,
}

static EN: Strings = Strings {
    title: "NEON SNAKE",
    subtitle: "Cybernetic Neural Link",
    controls_move: "WASD / Arrows to Move",
    controls_dash: "SPACE to Dash",
    controls_pause: "ESC to Pause",
    start: "START GAME",
    resume: "RESUME",
    dashboard: "DASHBOARD",
    game_over: "SYSTEM FAILURE",
    reboot: "REBOOT SYSTEM",
    final_score: "Final Score",
    new_high_score: "NEW HIGH SCORE!",
    board_cleared: "GRID CLEARED",
    paused: "PAUSED",
    high_score: "High Score",
    score: "Score",
    system_online: "SYSTEM ONLINE",
    system_idle: "SYSTEM IDLE",
    back: "BACK TO GAME",
    tab_settings: "SETTINGS",
    tab_history: "HISTORY",
    language: "Language",
    theme: "Map Theme",
    skin: "Snake Skin",
    clear_data: "Reset Data",
    confirm_clear: "Are you sure? Press Enter again",
    history_empty: "No records found.",
    date: "Date",
};

static ZH: Strings = Strings {
    title: "霓虹贪吃蛇",
    subtitle: "赛博神经网络链接",
    controls_move: "WASD / 方向键 移动",
    controls_dash: "按住空格键 加速",
    controls_pause: "ESC 暂停",
    start: "开始游戏",
    resume: "继续游戏",
    dashboard: "控制台",
    game_over: "系统崩溃",
    reboot: "重启系统",
    final_score: "最终得分",
    new_high_score: "新纪录!",
    board_cleared: "网格已填满",
    paused: "已暂停",
    high_score: "最高分",
    score: "得分",
    system_online: "系统在线",
    system_idle: "系统待机",
    back: "返回游戏",
    tab_settings: "设置",
    tab_history: "历史记录",
    language: "语言",
    theme: "地图主题",
    skin: "蛇皮肤",
    clear_data: "清除数据",
    confirm_clear: "确定要清除所有数据吗？再按一次回车",
    history_empty: "暂无记录",
    date: "日期",
};
