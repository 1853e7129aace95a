use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{data::sessions::GameSession, dto::format_system_time};

/// Code submitted from the entry form.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct JoinSessionRequest {
    #[validate(length(max = 64))]
    pub code: String,
}

/// Session joined successfully; the quiz can start.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionSummary {
    pub id: String,
    pub code: String,
    pub created_at: String,
    pub player_count: u32,
    /// Route of the quiz surface for this session.
    pub quiz_path: String,
}

impl From<GameSession> for SessionSummary {
    fn from(session: GameSession) -> Self {
        Self {
            quiz_path: format!("/quiz/{}", session.code.to_lowercase()),
            id: session.id,
            code: session.code,
            created_at: format_system_time(session.created_at),
            player_count: session.player_count,
        }
    }
}
