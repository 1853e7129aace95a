use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Maximum number of characters accepted in a feedback comment.
pub const COMMENT_MAX_CHARS: u64 = 500;

/// Feedback form submission.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct FeedbackRequest {
    /// Position on the emoji scale; required.
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

/// Outcome of a feedback submission or skip.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackResponse {
    /// Whether an entry was written to the feedback history.
    pub saved: bool,
    /// Surface to navigate to next.
    pub next: String,
}

impl FeedbackResponse {
    pub(crate) fn saved() -> Self {
        Self {
            saved: true,
            next: "/".into(),
        }
    }

    pub(crate) fn skipped() -> Self {
        Self {
            saved: false,
            next: "/".into(),
        }
    }
}

/// One step of the emoji rating scale.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct RatingOption {
    pub value: u8,
    pub emoji: String,
    pub label: String,
}

/// Emoji scale rendered on the feedback surface.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackScaleResponse {
    pub options: Vec<RatingOption>,
    pub comment_max_chars: u64,
}
