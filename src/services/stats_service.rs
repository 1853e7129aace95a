use crate::{dto::stats::HomeStats, state::SharedState};

/// Games played and total points, derived from the score history.
pub fn home_stats(state: &SharedState) -> HomeStats {
    let history = state.score_history();
    HomeStats {
        games_played: history.games_played(),
        total_points: history.total_score(),
    }
}
