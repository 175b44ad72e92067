//! Cosmetic preferences persisted between runs

use tracing::{debug, warn};

use crate::i18n::Language;
use crate::storage::{KeyValueStore, SharedStore, LANGUAGE_KEY, SKIN_KEY, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    #[default]
    Cyber,
    Gold,
    Matrix,
    Flame,
}

impl Skin {
    pub const ALL: [Skin; 4] = [Skin::Cyber, Skin::Gold, Skin::Matrix, Skin::Flame];

    pub fn id(&self) -> &'static str {
        match self {
            Skin::Cyber => "CYBER",
            Skin::Gold => "GOLD",
            Skin::Matrix => "MATRIX",
            Skin::Flame => "FLAME",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skin::Cyber => "Cyber Cyan",
            Skin::Gold => "Midas Touch",
            Skin::Matrix => "The Code",
            Skin::Flame => "Inferno",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|skin| skin.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Retro,
    Clean,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Retro, Theme::Clean];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Default => "DEFAULT",
            Theme::Retro => "RETRO",
            Theme::Clean => "CLEAN",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "Deep Space",
            Theme::Retro => "Retro Grid",
            Theme::Clean => "Clean Slate",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.id() == id)
    }
}

/// Step through `all` from `current` by `offset`, wrapping around
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T, offset: isize) -> T {
    let len = all.len() as isize;
    let index = all.iter().position(|item| *item == current).unwrap_or(0) as isize;
    all[(index + offset).rem_euclid(len) as usize]
}

pub struct Preferences {
    store: SharedStore,
    language: Language,
    skin: Skin,
    theme: Theme,
}

impl Preferences {
    /// Read preferences, falling back to defaults for unknown identifiers
    pub fn load(store: SharedStore) -> Self {
        let values = store.borrow();
        let language = load_choice(&*values, LANGUAGE_KEY, Language::from_code);
        let skin = load_choice(&*values, SKIN_KEY, Skin::from_id);
        let theme = load_choice(&*values, THEME_KEY, Theme::from_id);
        drop(values);

        Self {
            store,
            language,
            skin,
            theme,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.save(LANGUAGE_KEY, language.code());
    }

    pub fn set_skin(&mut self, skin: Skin) {
        self.skin = skin;
        self.save(SKIN_KEY, skin.id());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.save(THEME_KEY, theme.id());
    }

    /// Restore skin and theme defaults. The language is kept.
    pub fn reset_cosmetics(&mut self) {
        self.skin = Skin::default();
        self.theme = Theme::default();

        let mut store = self.store.borrow_mut();
        for key in [SKIN_KEY, THEME_KEY] {
            if let Err(err) = store.remove(key) {
                warn!("Failed to clear {}: {}", key, err);
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        debug!("Saving preference {}={}", key, value);
        if let Err(err) = self.store.borrow_mut().set(key, value) {
            warn!("Failed to save {}: {}", key, err);
        }
    }
}

fn load_choice<T: Default>(
    store: &dyn KeyValueStore,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = store.get(key) else {
        return T::default();
    };

    parse(&raw).unwrap_or_else(|| {
        warn!("Unknown value {:?} for {}, using default", raw, key);
        T::default()
    })
}
