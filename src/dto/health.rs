use serde::Serialize;
use utoipa::ToSchema;

/// Result of probing the local history store.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` when histories can be written, `degraded` when saves will fail.
    pub status: String,
}

impl HealthResponse {
    /// The history store answered the probe.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// The history store is unusable; the quiz still runs but scores and
    /// feedback are not kept.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}
