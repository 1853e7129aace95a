use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::stats::HomeStats, services::stats_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/",
    tag = "session",
    responses((status = 200, description = "Personal statistics of the entry surface", body = HomeStats))
)]
/// Games played and total points shown next to the session code form.
pub async fn home(State(state): State<SharedState>) -> Json<HomeStats> {
    Json(stats_service::home_stats(&state))
}

/// Configure the entry surface route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(home))
}
