use tracing::{info, warn};

use crate::{
    dao::models::ScoreEntry,
    data::players::Player,
    dto::{
        leaderboard::PlayerSummary,
        now_rfc3339,
        results::{PodiumEntry, ResultsResponse},
    },
    sanitize::truncate,
    state::SharedState,
};

/// Number of mock players ranked together with the user.
pub const RANKED_POOL_SIZE: usize = 9;
/// Number of rows shown on the results surface.
pub const RANKING_ROWS: usize = 10;
/// Number of podium steps.
pub const PODIUM_SIZE: usize = 3;
const PODIUM_LABEL_MAX_CHARS: usize = 16;

/// Identifier of the user's row in the rankings.
pub const CURRENT_USER_ID: &str = "current-user";

/// Ranked rows together with the user's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// Rows in display order, user included.
    pub rows: Vec<(Player, bool)>,
    /// 1-based position of the user.
    pub user_rank: usize,
}

/// Leaderboard row representing the user after a run.
pub fn current_user_entry(score: u32) -> Player {
    Player {
        id: CURRENT_USER_ID.to_string(),
        name: "Vous".to_string(),
        department: "Votre équipe".to_string(),
        avatar: String::new(),
        total_points: score,
        games_played: 1,
        average_score: score,
    }
}

/// Rank the user against the head of `pool` by total points, highest first.
///
/// Ties keep the mock players ahead of the user.
pub fn rank_with_user(pool: &[Player], score: u32) -> Ranking {
    let mut rows: Vec<(Player, bool)> = pool
        .iter()
        .take(RANKED_POOL_SIZE)
        .cloned()
        .map(|player| (player, false))
        .collect();
    rows.push((current_user_entry(score), true));
    rows.sort_by(|(a, _), (b, _)| b.total_points.cmp(&a.total_points));

    let user_rank = rows
        .iter()
        .position(|(_, is_user)| *is_user)
        .map_or(rows.len(), |index| index + 1);
    rows.truncate(RANKING_ROWS);

    Ranking { rows, user_rank }
}

/// Share of correct answers, rounded to the nearest integer; 0 when nothing was answered.
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(score) / f64::from(total) * 100.0).round() as u32
}

/// Append the score of a completed run to the score history.
pub fn record_score(state: &SharedState, session_id: &str, score: u32, total_questions: u32) -> bool {
    let entry = ScoreEntry {
        session_id: session_id.to_string(),
        score,
        total_questions,
        timestamp: now_rfc3339(),
    };

    let saved = state.score_history().save(entry);
    if saved {
        info!(session = session_id, score, total_questions, "score saved");
    } else {
        warn!(session = session_id, score, "score could not be saved");
    }
    saved
}

/// Build the results of the current run, or `None` when no session is active.
pub async fn get_results(state: &SharedState) -> Option<ResultsResponse> {
    let session_id = {
        let run = state.quiz().read().await;
        run.session_id()?.to_string()
    };
    if state.session().read().await.is_none() {
        return None;
    }

    let (score, total_questions) = {
        let run = state.quiz().read().await;
        (run.score(), run.answers().len() as u32)
    };
    let ranking = {
        let leaderboard = state.leaderboard().read().await;
        rank_with_user(leaderboard.players(), score)
    };

    let rankings: Vec<PlayerSummary> = ranking
        .rows
        .iter()
        .enumerate()
        .map(|(index, (player, is_user))| PlayerSummary::ranked(index + 1, player, *is_user))
        .collect();
    let podium = rankings
        .iter()
        .take(PODIUM_SIZE)
        .map(|row| PodiumEntry {
            rank: row.rank,
            label: truncate(&row.name, PODIUM_LABEL_MAX_CHARS),
            total_points: row.total_points,
            is_current_user: row.is_current_user,
        })
        .collect();

    Some(ResultsResponse {
        session_id,
        score,
        total_questions,
        percentage: percentage(score, total_questions),
        rank: ranking.user_rank,
        rankings,
        podium,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::players::{MOCK_PLAYER_COUNT, generate_mock_players};

    fn player(id: &str, total_points: u32) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_string(),
            department: "Design".to_string(),
            avatar: String::new(),
            total_points,
            games_played: 1,
            average_score: total_points,
        }
    }

    #[test]
    fn percentage_rounds_and_handles_empty_runs() {
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn user_below_the_whole_pool_ranks_last() {
        let pool: Vec<Player> = (0..12).map(|i| player(&format!("p{i}"), 100 - i)).collect();

        let ranking = rank_with_user(&pool, 5);

        assert_eq!(ranking.user_rank, 10);
        assert_eq!(ranking.rows.len(), RANKING_ROWS);
        assert!(ranking.rows[9].1);
        assert_eq!(ranking.rows[9].0.id, CURRENT_USER_ID);
    }

    #[test]
    fn ties_keep_mock_players_ahead_of_the_user() {
        let pool = vec![player("a", 10), player("b", 5), player("c", 5), player("d", 1)];

        let ranking = rank_with_user(&pool, 5);

        let ids: Vec<&str> = ranking.rows.iter().map(|(p, _)| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", CURRENT_USER_ID, "d"]);
        assert_eq!(ranking.user_rank, 4);
    }

    #[test]
    fn only_the_pool_head_is_ranked() {
        let pool: Vec<Player> = (0..20).map(|i| player(&format!("p{i}"), 200 - i)).collect();

        let ranking = rank_with_user(&pool, 1000);

        assert_eq!(ranking.user_rank, 1);
        assert_eq!(ranking.rows.len(), RANKED_POOL_SIZE + 1);
        assert!(ranking.rows.iter().all(|(p, _)| p.id != "p9"));
    }

    #[test]
    fn mock_pool_ranking_is_deterministic() {
        let pool = generate_mock_players(MOCK_PLAYER_COUNT);
        assert_eq!(rank_with_user(&pool, 3), rank_with_user(&pool, 3));
    }

    #[test]
    fn user_entry_mirrors_the_score() {
        let user = current_user_entry(4);
        assert_eq!(user.name, "Vous");
        assert_eq!(user.department, "Votre équipe");
        assert_eq!(user.total_points, 4);
        assert_eq!(user.average_score, 4);
        assert_eq!(user.games_played, 1);
    }
}
