//! Application-level configuration loading: quiz timings and local history storage.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "QUIZ_BACK_CONFIG_PATH";

const DEFAULT_QUESTION_DURATION_SECS: u64 = 30;
const DEFAULT_AUTO_ADVANCE_DELAY_MS: u64 = 2_000;
const DEFAULT_TIMER_POLL_INTERVAL_MS: u64 = 100;
/// Maximum number of entries kept per local history namespace.
pub const DEFAULT_HISTORY_CAP: usize = 50;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    pub(crate) question_duration: Duration,
    pub(crate) auto_advance_delay: Duration,
    pub(crate) timer_poll_interval: Duration,
    pub(crate) history_cap: usize,
    pub(crate) data_dir: Option<PathBuf>,
    pub(crate) storage_quota_bytes: Option<usize>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        question_duration_secs = app_config.question_duration.as_secs(),
                        history_cap = app_config.history_cap,
                        "loaded quiz configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Time allowed to answer a single question.
    pub fn question_duration(&self) -> Duration {
        self.question_duration
    }

    /// Delay between an answer (or a timeout) and the move to the next question.
    pub fn auto_advance_delay(&self) -> Duration {
        self.auto_advance_delay
    }

    /// Interval at which the countdown recomputes the remaining time.
    pub fn timer_poll_interval(&self) -> Duration {
        self.timer_poll_interval
    }

    /// Maximum entries kept in each history namespace.
    pub fn history_cap(&self) -> usize {
        self.history_cap
    }

    /// Directory backing the on-disk history store, when configured.
    pub fn data_dir(&self) -> Option<&PathBuf> {
        self.data_dir.as_ref()
    }

    /// Optional byte budget enforced by the local store.
    pub fn storage_quota_bytes(&self) -> Option<usize> {
        self.storage_quota_bytes
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            question_duration: Duration::from_secs(DEFAULT_QUESTION_DURATION_SECS),
            auto_advance_delay: Duration::from_millis(DEFAULT_AUTO_ADVANCE_DELAY_MS),
            timer_poll_interval: Duration::from_millis(DEFAULT_TIMER_POLL_INTERVAL_MS),
            history_cap: DEFAULT_HISTORY_CAP,
            data_dir: None,
            storage_quota_bytes: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    question_duration_secs: Option<u64>,
    #[serde(default)]
    auto_advance_delay_ms: Option<u64>,
    #[serde(default)]
    timer_poll_interval_ms: Option<u64>,
    #[serde(default)]
    history_cap: Option<usize>,
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    storage_quota_bytes: Option<usize>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            question_duration: value
                .question_duration_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.question_duration),
            auto_advance_delay: value
                .auto_advance_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.auto_advance_delay),
            timer_poll_interval: value
                .timer_poll_interval_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timer_poll_interval),
            // A zero cap would make every save a no-op.
            history_cap: value
                .history_cap
                .filter(|cap| *cap > 0)
                .unwrap_or(defaults.history_cap),
            data_dir: value.data_dir.filter(|dir| !dir.as_os_str().is_empty()),
            storage_quota_bytes: value.storage_quota_bytes,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_overrides_defaults() {
        let raw: RawConfig = serde_json::from_str(
            r#"{"question_duration_secs": 10, "history_cap": 5, "data_dir": "/tmp/quiz"}"#,
        )
        .unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.question_duration(), Duration::from_secs(10));
        assert_eq!(config.history_cap(), 5);
        assert_eq!(config.data_dir(), Some(&PathBuf::from("/tmp/quiz")));
        assert_eq!(
            config.auto_advance_delay(),
            Duration::from_millis(DEFAULT_AUTO_ADVANCE_DELAY_MS)
        );
    }

    #[test]
    fn zero_values_fall_back_to_defaults() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"question_duration_secs": 0, "history_cap": 0}"#).unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(
            config.question_duration(),
            Duration::from_secs(DEFAULT_QUESTION_DURATION_SECS)
        );
        assert_eq!(config.history_cap(), DEFAULT_HISTORY_CAP);
    }
}
