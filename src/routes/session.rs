use axum::{Json, Router, extract::State, routing::post};
use axum_valid::Valid;

use crate::{
    dto::session::{JoinSessionRequest, SessionSummary},
    error::AppError,
    services::session_service,
    state::SharedState,
};

/// Routes of the session code gate.
pub fn router() -> Router<SharedState> {
    Router::new().route("/sessions/join", post(join_session))
}

/// Validate a session code and start a run for it.
#[utoipa::path(
    post,
    path = "/sessions/join",
    tag = "session",
    request_body = JoinSessionRequest,
    responses(
        (status = 200, description = "Session joined, run started", body = SessionSummary),
        (status = 400, description = "Empty or unknown session code")
    )
)]
pub async fn join_session(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<JoinSessionRequest>>,
) -> Result<Json<SessionSummary>, AppError> {
    let session = session_service::join_session(&state, &payload.code).await?;
    Ok(Json(session.into()))
}
