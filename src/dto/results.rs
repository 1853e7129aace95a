use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::leaderboard::PlayerSummary;

/// One step of the podium.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct PodiumEntry {
    pub rank: usize,
    /// Display name shortened for the podium.
    pub label: String,
    pub total_points: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_current_user: bool,
}

/// Results surface payload, recomputed on every request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultsResponse {
    pub session_id: String,
    pub score: u32,
    /// Number of answers recorded, timeouts included.
    pub total_questions: u32,
    pub percentage: u32,
    /// 1-based position of the user among the ranked rows.
    pub rank: usize,
    pub rankings: Vec<PlayerSummary>,
    pub podium: Vec<PodiumEntry>,
}
