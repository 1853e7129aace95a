use serde::Serialize;
use utoipa::ToSchema;

/// Personal statistics shown on the entry surface.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct HomeStats {
    /// Number of completed runs in the score history.
    pub games_played: usize,
    /// Sum of every recorded score.
    pub total_points: u64,
}
