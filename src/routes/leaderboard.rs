use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, put},
};
use axum_valid::Valid;

use crate::{
    dto::leaderboard::{LeaderboardResponse, SetFilterRequest, TeamQuery, TeamResponse},
    services::leaderboard_service,
    state::SharedState,
};

/// Routes of the leaderboard and team directory.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/leaderboard", get(leaderboard))
        .route("/leaderboard/filter", put(set_filter))
        .route("/team", get(team))
}

/// Mock leaderboard for the selected time window.
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "results",
    responses((status = 200, description = "Leaderboard", body = LeaderboardResponse))
)]
pub async fn leaderboard(State(state): State<SharedState>) -> Json<LeaderboardResponse> {
    Json(leaderboard_service::get_leaderboard(&state).await)
}

/// Select the time window of the leaderboard.
#[utoipa::path(
    put,
    path = "/leaderboard/filter",
    tag = "results",
    request_body = SetFilterRequest,
    responses((status = 200, description = "Leaderboard for the new window", body = LeaderboardResponse))
)]
pub async fn set_filter(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<SetFilterRequest>>,
) -> Json<LeaderboardResponse> {
    Json(leaderboard_service::set_filter(&state, payload.filter).await)
}

/// Search the team directory by name or department.
#[utoipa::path(
    get,
    path = "/team",
    tag = "results",
    params(TeamQuery),
    responses((status = 200, description = "Matching team members", body = TeamResponse))
)]
pub async fn team(
    State(state): State<SharedState>,
    Valid(Query(query)): Valid<Query<TeamQuery>>,
) -> Json<TeamResponse> {
    Json(leaderboard_service::search_team(&state, query.q.as_deref()).await)
}
