use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// Feedback left after a run, as persisted in the feedback history.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    /// Session the feedback relates to (`unknown` when no run was active).
    pub session_id: String,
    /// Emoji scale rating from 1 to 5.
    pub rating: u8,
    /// Sanitized free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

/// Score of a completed run, as persisted in the score history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    /// Session code the run was played under.
    pub session_id: String,
    /// Number of correct answers.
    pub score: u32,
    /// Number of questions answered (including timeouts).
    pub total_questions: u32,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}
