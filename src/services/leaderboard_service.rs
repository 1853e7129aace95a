use tracing::info;

use crate::{
    dto::leaderboard::{LeaderboardResponse, PlayerSummary, TeamResponse, TimeFilterDto},
    state::{SharedState, leaderboard::TimeFilter},
};

/// Leaderboard rows for the selected window.
pub async fn get_leaderboard(state: &SharedState) -> LeaderboardResponse {
    let leaderboard = state.leaderboard().read().await;
    LeaderboardResponse {
        filter: leaderboard.filter().into(),
        players: PlayerSummary::list(leaderboard.filtered_players()),
    }
}

/// Select a time window and return the refreshed leaderboard.
pub async fn set_filter(state: &SharedState, filter: TimeFilterDto) -> LeaderboardResponse {
    let filter = TimeFilter::from(filter);
    state.leaderboard().write().await.set_filter(filter);
    info!(?filter, "leaderboard filter changed");
    get_leaderboard(state).await
}

/// Team members whose name or department contains `query`, ignoring case.
///
/// The query is matched as typed, surrounding whitespace included.
pub async fn search_team(state: &SharedState, query: Option<&str>) -> TeamResponse {
    let needle = query.unwrap_or_default().to_lowercase();
    let leaderboard = state.leaderboard().read().await;
    let members = leaderboard
        .players()
        .iter()
        .filter(|player| {
            player.name.to_lowercase().contains(&needle)
                || player.department.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect::<Vec<_>>();

    TeamResponse {
        members: PlayerSummary::list(&members),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState};

    #[tokio::test]
    async fn every_filter_shows_the_same_players() {
        let state = AppState::in_memory(AppConfig::default());
        let all = get_leaderboard(&state).await;
        assert_eq!(all.filter, TimeFilterDto::All);

        let week = set_filter(&state, TimeFilterDto::Week).await;
        assert_eq!(week.filter, TimeFilterDto::Week);
        assert_eq!(week.players, all.players);

        let month = set_filter(&state, TimeFilterDto::Month).await;
        assert_eq!(month.players, all.players);
    }

    #[tokio::test]
    async fn team_search_matches_name_or_department_case_insensitively() {
        let state = AppState::in_memory(AppConfig::default());
        let everyone = search_team(&state, None).await.members;
        assert_eq!(everyone.len(), 50);

        let first = &everyone[0];
        let by_name = search_team(&state, Some(&first.name.to_uppercase())).await;
        assert!(by_name.members.iter().any(|m| m.id == first.id));

        let department = first.department.to_lowercase();
        let by_department = search_team(&state, Some(&department)).await;
        assert!(by_department.members.iter().any(|m| m.department == first.department));
        assert!(by_department.members.iter().all(|m| {
            m.department.to_lowercase().contains(&department)
                || m.name.to_lowercase().contains(&department)
        }));

        let padded = format!(" {department} ");
        let padded_matches = search_team(&state, Some(&padded)).await;
        assert!(padded_matches.members.is_empty());

        let nobody = search_team(&state, Some("zzzz-nobody")).await;
        assert!(nobody.members.is_empty());
    }
}
