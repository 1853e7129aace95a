use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::health::HealthResponse, services::health_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "health",
    responses((status = 200, description = "`ok`, or `degraded` when the history store is unusable", body = HealthResponse))
)]
/// Report whether score and feedback histories can currently be saved.
pub async fn healthcheck(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(health_service::health_status(&state))
}

/// Route of the history store probe.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/healthcheck", get(healthcheck))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState};

    #[tokio::test]
    async fn in_memory_store_reports_ok() {
        let state = AppState::in_memory(AppConfig::default());
        let Json(health) = healthcheck(State(state)).await;
        assert_eq!(health.status, "ok");
    }
}
