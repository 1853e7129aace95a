use std::{
    marker::PhantomData,
    sync::{Arc, Mutex, PoisonError},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::dao::{
    local_store::LocalStore,
    models::{FeedbackEntry, ScoreEntry},
    storage::{StorageError, StorageResult},
};

/// Storage key of the feedback history.
pub const FEEDBACK_HISTORY_KEY: &str = "building-work-feedback";
/// Storage key of the score history.
pub const SCORE_HISTORY_KEY: &str = "building-work-scores";

/// Append-only, newest-first collection capped at a fixed number of entries.
///
/// Every operation is best effort: reads degrade to an empty history and writes
/// report a plain success flag.
pub struct HistoryStore<T> {
    store: Arc<dyn LocalStore>,
    key: &'static str,
    cap: usize,
    // Held across the read-prepend-write cycle of `save`.
    write_lock: Mutex<()>,
    _entry: PhantomData<fn() -> T>,
}

/// Feedback left after each run.
pub type FeedbackHistory = HistoryStore<FeedbackEntry>;
/// Scores of completed runs.
pub type ScoreHistory = HistoryStore<ScoreEntry>;

impl<T> HistoryStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a history to `key` in the given store.
    pub fn new(store: Arc<dyn LocalStore>, key: &'static str, cap: usize) -> Self {
        Self {
            store,
            key,
            cap: cap.max(1),
            write_lock: Mutex::new(()),
            _entry: PhantomData,
        }
    }

    /// Prepend `entry`, dropping the oldest entries beyond the cap.
    ///
    /// When the store runs out of quota the history is reset to just `entry`.
    /// Returns `false` if even that write fails. Concurrent saves are applied
    /// one after the other, so none of them is lost.
    pub fn save(&self, entry: T) -> bool {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read();
        entries.insert(0, entry);
        entries.truncate(self.cap);

        match self.write(&entries) {
            Ok(()) => true,
            Err(err) if err.is_quota_exceeded() => {
                warn!(key = self.key, error = %err, "history quota exceeded; keeping newest entry only");
                entries.truncate(1);
                match self.write(&entries) {
                    Ok(()) => true,
                    Err(err) => {
                        warn!(key = self.key, error = %err, "failed to save pruned history");
                        false
                    }
                }
            }
            Err(err) => {
                warn!(key = self.key, error = %err, "failed to save history entry");
                false
            }
        }
    }

    /// Stored entries, newest first. Any read or parse failure yields an empty history.
    pub fn read(&self) -> Vec<T> {
        match self.store.get_item(self.key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(key = self.key, error = %err, "discarding unreadable history");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = self.key, error = %err, "failed to read history");
                Vec::new()
            }
        }
    }

    fn write(&self, entries: &[T]) -> StorageResult<()> {
        let payload = serde_json::to_string(entries).map_err(|source| {
            StorageError::unavailable(format!("serializing `{}`", self.key), source)
        })?;
        self.store.set_item(self.key, &payload)
    }
}

impl HistoryStore<ScoreEntry> {
    /// Sum of every recorded score.
    pub fn total_score(&self) -> u64 {
        self.read().iter().map(|entry| u64::from(entry.score)).sum()
    }

    /// Number of recorded runs.
    pub fn games_played(&self) -> usize {
        self.read().len()
    }
}
