use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_valid::Valid;

use crate::{
    dto::feedback::{FeedbackRequest, FeedbackResponse, FeedbackScaleResponse},
    error::AppError,
    services::feedback_service,
    state::SharedState,
};

/// Routes of the feedback surface.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/feedback/scale", get(rating_scale))
        .route("/feedback", post(submit_feedback))
        .route("/feedback/skip", post(skip_feedback))
}

/// Emoji rating scale.
#[utoipa::path(
    get,
    path = "/feedback/scale",
    tag = "feedback",
    responses((status = 200, description = "Rating options", body = FeedbackScaleResponse))
)]
pub async fn rating_scale() -> Json<FeedbackScaleResponse> {
    Json(feedback_service::rating_scale())
}

/// Store feedback for the last run and end it.
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback saved", body = FeedbackResponse),
        (status = 400, description = "Missing rating or comment too long"),
        (status = 503, description = "Feedback history could not be written; retry")
    )
)]
pub async fn submit_feedback(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<FeedbackRequest>>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let response = feedback_service::submit_feedback(&state, payload).await?;
    Ok(Json(response))
}

/// Leave without feedback and end the run.
#[utoipa::path(
    post,
    path = "/feedback/skip",
    tag = "feedback",
    responses((status = 200, description = "Back to the entry surface", body = FeedbackResponse))
)]
pub async fn skip_feedback(
    State(state): State<SharedState>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let response = feedback_service::skip_feedback(&state).await?;
    Ok(Json(response))
}
