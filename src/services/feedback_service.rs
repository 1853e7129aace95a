use tracing::{info, warn};

use crate::{
    dao::models::FeedbackEntry,
    dto::{
        feedback::{
            COMMENT_MAX_CHARS, FeedbackRequest, FeedbackResponse, FeedbackScaleResponse,
            RatingOption,
        },
        now_rfc3339,
    },
    error::ServiceError,
    sanitize::sanitize_comment,
    services::quiz_service,
    state::SharedState,
};

const RATING_SCALE: [(u8, &str, &str); 5] = [
    (1, "😞", "Très mal"),
    (2, "😕", "Mal"),
    (3, "😐", "Neutre"),
    (4, "🙂", "Bien"),
    (5, "😄", "Très bien"),
];

/// Session recorded when feedback is left without an active run.
pub const UNKNOWN_SESSION: &str = "unknown";

/// Emoji scale offered on the feedback surface.
pub fn rating_scale() -> FeedbackScaleResponse {
    FeedbackScaleResponse {
        options: RATING_SCALE
            .iter()
            .map(|(value, emoji, label)| RatingOption {
                value: *value,
                emoji: emoji.to_string(),
                label: label.to_string(),
            })
            .collect(),
        comment_max_chars: COMMENT_MAX_CHARS,
    }
}

/// Store the feedback of the last run and return to the entry surface.
///
/// Nothing is reset when the history refuses the write, so the form can be
/// submitted again.
pub async fn submit_feedback(
    state: &SharedState,
    request: FeedbackRequest,
) -> Result<FeedbackResponse, ServiceError> {
    let Some(rating) = request.rating else {
        return Err(ServiceError::InvalidInput("please select a rating".into()));
    };
    if !RATING_SCALE.iter().any(|(value, _, _)| *value == rating) {
        return Err(ServiceError::InvalidInput(format!(
            "rating {rating} is outside the 1-5 scale"
        )));
    }

    let comment = request.comment.unwrap_or_default();
    if comment.chars().count() as u64 > COMMENT_MAX_CHARS {
        return Err(ServiceError::InvalidInput(format!(
            "comment exceeds {COMMENT_MAX_CHARS} characters"
        )));
    }
    let comment = Some(sanitize_comment(&comment)).filter(|comment| !comment.is_empty());

    let session_id = state
        .quiz()
        .read()
        .await
        .session_id()
        .unwrap_or(UNKNOWN_SESSION)
        .to_string();

    let entry = FeedbackEntry {
        session_id: session_id.clone(),
        rating,
        comment,
        timestamp: now_rfc3339(),
    };
    if !state.feedback_history().save(entry) {
        warn!(session = %session_id, rating, "feedback could not be saved");
        return Err(ServiceError::Persistence(
            "feedback could not be saved, please try again".into(),
        ));
    }

    info!(session = %session_id, rating, "feedback saved");
    quiz_service::reset_run(state).await?;
    Ok(FeedbackResponse::saved())
}

/// Leave the feedback surface without storing anything.
pub async fn skip_feedback(state: &SharedState) -> Result<FeedbackResponse, ServiceError> {
    info!("feedback skipped");
    quiz_service::reset_run(state).await?;
    Ok(FeedbackResponse::skipped())
}
