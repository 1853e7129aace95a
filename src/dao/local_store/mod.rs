pub mod file;
pub mod memory;

use std::sync::Arc;

use tracing::info;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
use crate::{config::AppConfig, dao::storage::StorageResult};

/// Best-effort string key-value storage standing in for the device's local storage.
///
/// Calls are synchronous and small; callers decide how to degrade on failure.
pub trait LocalStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Verify the backend is usable.
    fn health_check(&self) -> StorageResult<()>;
}

/// Open the store described by the configuration: on disk when a data directory
/// is set, in memory otherwise.
pub fn open(config: &AppConfig) -> StorageResult<Arc<dyn LocalStore>> {
    match config.data_dir() {
        Some(dir) => {
            let store = FileStore::open(dir.clone(), config.storage_quota_bytes())?;
            info!(path = %dir.display(), "using on-disk history store");
            Ok(Arc::new(store))
        }
        None => {
            info!("no data directory configured; history is kept in memory");
            Ok(Arc::new(MemoryStore::new(config.storage_quota_bytes())))
        }
    }
}
