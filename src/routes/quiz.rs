use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_valid::Valid;
use tracing::info;

use crate::{
    dto::quiz::{AnswerRequest, AnswerSummary, QuestionResponse},
    error::AppError,
    services::{
        quiz_service::{self, QuizView},
        session_service,
    },
    state::SharedState,
};

/// Routes of the quiz surface.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/quiz/{code}", get(current_question))
        .route("/quiz/{code}/answer", post(submit_answer))
}

/// Show the question on screen for the joined session.
#[utoipa::path(
    get,
    path = "/quiz/{code}",
    tag = "quiz",
    params(("code" = String, Path, description = "Session code, any case")),
    responses(
        (status = 200, description = "Current question", body = QuestionResponse),
        (status = 303, description = "Unknown or stale session (to `/`), or finished run (to `/results`)")
    )
)]
pub async fn current_question(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    if session_service::resolve_session(&state, &code).await.is_none() {
        info!(code = %code, "no active run for session; redirecting to entry");
        return Ok(Redirect::to("/").into_response());
    }

    let response = match quiz_service::current_view(&state).await? {
        QuizView::NotStarted => Redirect::to("/").into_response(),
        QuizView::Completed => Redirect::to("/results").into_response(),
        QuizView::Question(current) => Json(QuestionResponse::from(*current)).into_response(),
    };
    Ok(response)
}

/// Answer the question on screen.
#[utoipa::path(
    post,
    path = "/quiz/{code}/answer",
    tag = "quiz",
    params(("code" = String, Path, description = "Session code, any case")),
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer recorded", body = AnswerSummary),
        (status = 303, description = "Unknown or stale session"),
        (status = 400, description = "Not the current question or unknown option"),
        (status = 409, description = "Question already answered or run not in progress")
    )
)]
pub async fn submit_answer(
    State(state): State<SharedState>,
    Path(code): Path<String>,
    Valid(Json(payload)): Valid<Json<AnswerRequest>>,
) -> Result<Response, AppError> {
    if session_service::resolve_session(&state, &code).await.is_none() {
        info!(code = %code, "answer for an inactive session; redirecting to entry");
        return Ok(Redirect::to("/").into_response());
    }

    let outcome =
        quiz_service::submit_answer(&state, &payload.question_id, payload.selected_index).await?;
    Ok(Json(AnswerSummary::from(outcome)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};

    use super::*;
    use crate::{config::AppConfig, services::session_service, state::AppState};

    #[tokio::test(start_paused = true)]
    async fn stale_or_unknown_codes_redirect_to_entry() {
        let state = AppState::in_memory(AppConfig::default());
        session_service::join_session(&state, "ABC123").await.unwrap();

        for code in ["def456", "bogus"] {
            let response = current_question(State(state.clone()), Path(code.to_string()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[LOCATION], "/");
        }

        let response = current_question(State(state), Path("abc123".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
