use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by local store backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Human readable context.
        message: String,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// Writing the value would exceed the configured byte budget.
    #[error("storage quota exceeded for `{key}` ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Total bytes the store would hold after the write.
        needed: usize,
        /// Configured budget.
        quota: usize,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }

    /// Whether the failure is a quota refusal rather than an I/O problem.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }
}

/// Check a write of `value_len` bytes against an optional quota.
pub(crate) fn check_quota(
    key: &str,
    other_bytes: usize,
    value_len: usize,
    quota: Option<usize>,
) -> StorageResult<()> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let needed = other_bytes + value_len;
    if needed > quota {
        return Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            needed,
            quota,
        });
    }

    Ok(())
}
