use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{dto::results::ResultsResponse, services::results_service, state::SharedState};

/// Routes of the results surface.
pub fn router() -> Router<SharedState> {
    Router::new().route("/results", get(results))
}

/// Score, percentage and ranking of the current run.
#[utoipa::path(
    get,
    path = "/results",
    tag = "results",
    responses(
        (status = 200, description = "Ranked results", body = ResultsResponse),
        (status = 303, description = "No active session; redirect to `/`")
    )
)]
pub async fn results(State(state): State<SharedState>) -> Response {
    match results_service::get_results(&state).await {
        Some(results) => Json(results).into_response(),
        None => Redirect::to("/").into_response(),
    }
}
