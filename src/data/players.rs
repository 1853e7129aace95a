/// Number of synthetic players generated at startup.
pub const MOCK_PLAYER_COUNT: usize = 50;
/// Offset added to the player index to form its generator seed.
const SEED_OFFSET: u32 = 1000;
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

const FIRST_NAMES: [&str; 20] = [
    "Sophie",
    "Antoine",
    "Marie",
    "Lucas",
    "Emma",
    "Thomas",
    "Léa",
    "Hugo",
    "Chloé",
    "Nathan",
    "Camille",
    "Alexandre",
    "Julie",
    "Maxime",
    "Sarah",
    "Nicolas",
    "Laura",
    "Pierre",
    "Manon",
    "Vincent",
];

const LAST_NAMES: [&str; 20] = [
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David", "Bertrand", "Roux",
    "Vincent", "Fournier",
];

const DEPARTMENTS: [&str; 8] = [
    "Ressources Humaines",
    "Marketing",
    "Développement",
    "Design",
    "Ventes",
    "Support Client",
    "Finance",
    "Operations",
];

/// Leaderboard participant, either synthetic or the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable identifier (`player-1`, ..., or `current-user`).
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Department label.
    pub department: String,
    /// Avatar image URL (empty for the current user).
    pub avatar: String,
    /// Points accumulated over all games.
    pub total_points: u32,
    /// Number of games played.
    pub games_played: u32,
    /// Average points per game.
    pub average_score: u32,
}

/// Deterministic value in `[0, 1)` derived from `seed`.
fn seeded_random(seed: u32) -> f64 {
    let x = f64::from(seed).sin() * 10_000.0;
    x - x.floor()
}

fn pick<'a>(items: &[&'a str], seed: u32) -> &'a str {
    let index = (seeded_random(seed) * items.len() as f64).floor() as usize;
    items[index.min(items.len() - 1)]
}

/// Build the synthetic player at position `index` (before sorting).
pub fn mock_player(index: usize) -> Player {
    let seed = index as u32 + SEED_OFFSET;
    let first_name = pick(&FIRST_NAMES, seed);
    let last_name = pick(&LAST_NAMES, seed + 1);
    let department = pick(&DEPARTMENTS, seed + 2);
    let games_played = (seeded_random(seed + 3) * 20.0).floor() as u32 + 1;
    let average_score = (seeded_random(seed + 4) * 5.0).floor() as u32;

    Player {
        id: format!("player-{}", index + 1),
        name: format!("{first_name} {last_name}"),
        department: department.to_string(),
        avatar: format!("{AVATAR_BASE_URL}{first_name}{last_name}"),
        total_points: games_played * average_score,
        games_played,
        average_score,
    }
}

/// Generate `count` synthetic players sorted by total points, highest first.
///
/// Ties keep generation order, so the output is identical on every call.
pub fn generate_mock_players(count: usize) -> Vec<Player> {
    let mut players: Vec<Player> = (0..count).map(mock_player).collect();
    players.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    players
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_reproducible() {
        assert_eq!(
            generate_mock_players(MOCK_PLAYER_COUNT),
            generate_mock_players(MOCK_PLAYER_COUNT)
        );
        assert_eq!(mock_player(7), mock_player(7));
    }

    #[test]
    fn pool_is_sorted_by_total_points_descending() {
        let players = generate_mock_players(MOCK_PLAYER_COUNT);
        assert_eq!(players.len(), MOCK_PLAYER_COUNT);
        assert!(
            players
                .windows(2)
                .all(|pair| pair[0].total_points >= pair[1].total_points)
        );
    }

    #[test]
    fn generated_fields_stay_in_range() {
        for index in 0..MOCK_PLAYER_COUNT {
            let player = mock_player(index);
            assert!((1..=20).contains(&player.games_played));
            assert!(player.average_score < 5);
            assert_eq!(
                player.total_points,
                player.games_played * player.average_score
            );
            assert!(DEPARTMENTS.contains(&player.department.as_str()));
            assert!(player.avatar.starts_with(AVATAR_BASE_URL));
            assert_eq!(player.id, format!("player-{}", index + 1));
        }
    }

    #[test]
    fn seeded_random_is_a_unit_fraction() {
        for seed in 1000..1300 {
            let value = seeded_random(seed);
            assert!((0.0..1.0).contains(&value));
        }
    }
}
