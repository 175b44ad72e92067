//! Key/value persistence
//!
//! The game keeps a handful of small string values between runs: the
//! selected language, skin and theme, the score history and the high score.
//! Everything goes through [`KeyValueStore`] so that tests can use an
//! in-memory map and the terminal build can use a JSON file.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

pub const LANGUAGE_KEY: &str = "ns_lang";
pub const SKIN_KEY: &str = "ns_skin";
pub const THEME_KEY: &str = "ns_theme";
pub const HISTORY_KEY: &str = "ns_history";
pub const HIGH_SCORE_KEY: &str = "ns_high_score";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Store handle shared by the history recorder and the preferences
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}
