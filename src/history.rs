//! Score history and high score
//!
//! Finished games are kept newest first in a capped log. The high score is
//! persisted on its own so that it does not vanish when the record that set
//! it falls off the end of the log.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::storage::{KeyValueStore, SharedStore, HIGH_SCORE_KEY, HISTORY_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub score: u32,
    /// Milliseconds since the Unix epoch
    pub date: i64,
}

impl GameRecord {
    fn now(score: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            score,
            date: Utc::now().timestamp_millis(),
        }
    }
}

pub struct HistoryRecorder {
    store: SharedStore,
    records: Vec<GameRecord>,
    high_score: u32,
    capacity: usize,
}

impl HistoryRecorder {
    /// Load history from the store. Bad data is logged and replaced by an empty log.
    pub fn load(store: SharedStore, capacity: usize) -> Self {
        let raw_records = store.borrow().get(HISTORY_KEY);
        let raw_high = store.borrow().get(HIGH_SCORE_KEY);

        let mut records = parse_records(raw_records);
        let persisted_high = parse_high_score(raw_high);
        records.truncate(capacity);

        let high_score = records
            .iter()
            .map(|r| r.score)
            .max()
            .unwrap_or(0)
            .max(persisted_high);

        Self {
            store,
            records,
            high_score,
            capacity,
        }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record for `score`, evicting the oldest past capacity
    pub fn record(&mut self, score: u32) {
        self.records.insert(0, GameRecord::now(score));
        self.records.truncate(self.capacity);
        self.high_score = self.high_score.max(score);

        info!("Recorded score {} (high score {})", score, self.high_score);
        self.persist();
    }

    /// Forget all records and the high score
    pub fn clear(&mut self) {
        self.records.clear();
        self.high_score = 0;

        let mut store = self.store.borrow_mut();
        for key in [HISTORY_KEY, HIGH_SCORE_KEY] {
            if let Err(err) = store.remove(key) {
                warn!("Failed to clear {}: {}", key, err);
            }
        }
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.records) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!("Failed to encode history: {}", err);
                return;
            }
        };

        let mut store = self.store.borrow_mut();
        if let Err(err) = store.set(HISTORY_KEY, &encoded) {
            warn!("Failed to save history: {}", err);
        }
        if let Err(err) = store.set(HIGH_SCORE_KEY, &self.high_score.to_string()) {
            warn!("Failed to save high score: {}", err);
        }
    }
}

fn parse_records(raw: Option<String>) -> Vec<GameRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    serde_json::from_str(&raw).unwrap_or_else(|err| {
        warn!("Failed to load history, starting empty: {}", err);
        Vec::new()
    })
}

fn parse_high_score(raw: Option<String>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };

    raw.trim().parse().unwrap_or_else(|err| {
        warn!("Ignoring invalid high score {:?}: {}", raw, err);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, MemoryStore};

    fn recorder() -> (SharedStore, HistoryRecorder) {
        let store = shared(MemoryStore::new());
        let recorder = HistoryRecorder::load(store.clone(), 50);
        (store, recorder)
    }

    #[test]
    fn test_empty_store() {
        let (_, recorder) = recorder();
        assert!(recorder.is_empty());
        assert_eq!(recorder.high_score(), 0);
    }

    #[test]
    fn test_record_newest_first() {
        let (_, mut recorder) = recorder();
        recorder.record(30);
        recorder.record(10);

        let scores: Vec<u32> = recorder.records().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![10, 30]);
        assert_eq!(recorder.high_score(), 30);
        assert_ne!(recorder.records()[0].id, recorder.records()[1].id);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let (_, mut recorder) = recorder();
        for i in 1..=50 {
            recorder.record(i * 10);
        }
        assert_eq!(recorder.len(), 50);
        assert_eq!(recorder.high_score(), 500);

        recorder.record(20);
        assert_eq!(recorder.len(), 50);
        assert_eq!(recorder.records()[0].score, 20);
        // The very first record (score 10) is gone.
        assert_eq!(recorder.records()[49].score, 20);
        assert_eq!(recorder.high_score(), 500);

        recorder.record(900);
        assert_eq!(recorder.high_score(), 900);
    }

    #[test]
    fn test_high_score_outlives_eviction() {
        let store = shared(MemoryStore::new());
        let mut recorder = HistoryRecorder::load(store.clone(), 2);
        recorder.record(100);
        recorder.record(10);
        recorder.record(20);

        assert!(recorder.records().iter().all(|r| r.score != 100));

        let reloaded = HistoryRecorder::load(store, 2);
        assert_eq!(reloaded.high_score(), 100);
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_reload_keeps_order() {
        let (store, mut recorder) = recorder();
        recorder.record(40);
        recorder.record(70);

        let reloaded = HistoryRecorder::load(store, 50);
        assert_eq!(reloaded.records(), recorder.records());
        assert_eq!(reloaded.high_score(), 70);
    }

    #[test]
    fn test_corrupt_history_loads_empty() {
        let store = shared(MemoryStore::new());
        store.borrow_mut().set(HISTORY_KEY, "[{oops").unwrap();
        store.borrow_mut().set(HIGH_SCORE_KEY, "NaN").unwrap();

        let recorder = HistoryRecorder::load(store, 50);
        assert!(recorder.is_empty());
        assert_eq!(recorder.high_score(), 0);
    }

    #[test]
    fn test_high_score_derived_from_log_without_field() {
        let store = shared(MemoryStore::new());
        let log = r#"[{"id":"2","score":30,"date":2},{"id":"1","score":80,"date":1}]"#;
        store.borrow_mut().set(HISTORY_KEY, log).unwrap();

        let recorder = HistoryRecorder::load(store, 50);
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.high_score(), 80);
    }

    #[test]
    fn test_clear() {
        let (store, mut recorder) = recorder();
        recorder.record(40);
        recorder.clear();

        assert!(recorder.is_empty());
        assert_eq!(recorder.high_score(), 0);
        assert_eq!(store.borrow().get(HISTORY_KEY), None);
        assert_eq!(store.borrow().get(HIGH_SCORE_KEY), None);
    }
}
