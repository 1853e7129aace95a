use crate::data::players::Player;

/// Time window selectable on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    /// Current week.
    Week,
    /// Current month.
    Month,
    /// Since the beginning.
    #[default]
    All,
}

/// Leaderboard view state: the mock pool and the selected window.
#[derive(Debug, Clone)]
pub struct LeaderboardState {
    players: Vec<Player>,
    filter: TimeFilter,
}

impl LeaderboardState {
    /// Wrap an already sorted player list.
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            filter: TimeFilter::default(),
        }
    }

    /// Currently selected window.
    pub fn filter(&self) -> TimeFilter {
        self.filter
    }

    /// Select a window.
    pub fn set_filter(&mut self, filter: TimeFilter) {
        self.filter = filter;
    }

    /// Full player list, sorted by total points descending.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players visible for the selected window.
    ///
    /// Mock players carry no per-game timestamps, so every window shows the
    /// whole pool.
    pub fn filtered_players(&self) -> &[Player] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::players::{MOCK_PLAYER_COUNT, generate_mock_players};

    #[test]
    fn every_filter_returns_the_full_pool() {
        let mut state = LeaderboardState::new(generate_mock_players(MOCK_PLAYER_COUNT));
        assert_eq!(state.filter(), TimeFilter::All);

        for filter in [TimeFilter::Week, TimeFilter::Month, TimeFilter::All] {
            state.set_filter(filter);
            assert_eq!(state.filter(), filter);
            assert_eq!(state.filtered_players(), state.players());
            assert_eq!(state.filtered_players().len(), MOCK_PLAYER_COUNT);
        }
    }
}
