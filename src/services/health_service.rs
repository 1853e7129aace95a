use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether the local history store is usable.
pub fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().health_check() {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "history store health check failed");
            HealthResponse::degraded()
        }
    }
}
