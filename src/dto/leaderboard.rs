use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{data::players::Player, state::leaderboard::TimeFilter};

/// Time window accepted by the leaderboard surface.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilterDto {
    Week,
    Month,
    All,
}

impl From<TimeFilter> for TimeFilterDto {
    fn from(value: TimeFilter) -> Self {
        match value {
            TimeFilter::Week => TimeFilterDto::Week,
            TimeFilter::Month => TimeFilterDto::Month,
            TimeFilter::All => TimeFilterDto::All,
        }
    }
}

impl From<TimeFilterDto> for TimeFilter {
    fn from(value: TimeFilterDto) -> Self {
        match value {
            TimeFilterDto::Week => TimeFilter::Week,
            TimeFilterDto::Month => TimeFilter::Month,
            TimeFilterDto::All => TimeFilter::All,
        }
    }
}

/// Player row rendered on the leaderboard, team and results surfaces.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    /// 1-based position in the list it belongs to.
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub department: String,
    pub avatar: String,
    pub total_points: u32,
    pub games_played: u32,
    pub average_score: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_current_user: bool,
}

impl PlayerSummary {
    pub(crate) fn ranked(rank: usize, player: &Player, is_current_user: bool) -> Self {
        Self {
            rank,
            id: player.id.clone(),
            name: player.name.clone(),
            department: player.department.clone(),
            avatar: player.avatar.clone(),
            total_points: player.total_points,
            games_played: player.games_played,
            average_score: player.average_score,
            is_current_user,
        }
    }

    pub(crate) fn list(players: &[Player]) -> Vec<Self> {
        players
            .iter()
            .enumerate()
            .map(|(index, player)| Self::ranked(index + 1, player, false))
            .collect()
    }
}

/// Leaderboard surface payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub filter: TimeFilterDto,
    pub players: Vec<PlayerSummary>,
}

/// Body of `PUT /leaderboard/filter`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SetFilterRequest {
    pub filter: TimeFilterDto,
}

/// Search string of the team directory.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct TeamQuery {
    /// Case-insensitive substring of a name or department.
    #[validate(length(max = 100))]
    pub q: Option<String>,
}

/// Team directory payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    pub members: Vec<PlayerSummary>,
}
