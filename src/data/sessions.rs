use std::time::SystemTime;

use rand::Rng;

/// Session codes accepted by the entry surface.
pub const VALID_SESSION_CODES: [&str; 4] = ["ABC123", "DEF456", "GHI789", "JKL012"];

/// Synthetic descriptor for a joined session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Identifier derived from the code (`session-abc123`).
    pub id: String,
    /// Normalized session code.
    pub code: String,
    /// When the descriptor was built.
    pub created_at: SystemTime,
    /// Simulated number of connected players.
    pub player_count: u32,
}

/// Trim surrounding whitespace and uppercase a user-entered code.
pub fn normalize_session_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Whether the code (case-insensitive) belongs to the allow-list.
pub fn is_valid_session_code(code: &str) -> bool {
    let upper = code.to_uppercase();
    VALID_SESSION_CODES.contains(&upper.as_str())
}

/// Resolve a raw code into a session descriptor, or `None` when it is not allowed.
pub fn session_by_code(code: &str) -> Option<GameSession> {
    session_by_code_with_rng(code, &mut rand::rng())
}

/// Same as [`session_by_code`] with an explicit random source for the player count.
pub fn session_by_code_with_rng<R: Rng + ?Sized>(code: &str, rng: &mut R) -> Option<GameSession> {
    let normalized = normalize_session_code(code);
    if !is_valid_session_code(&normalized) {
        return None;
    }

    Some(GameSession {
        id: format!("session-{}", normalized.to_lowercase()),
        code: normalized,
        created_at: SystemTime::now(),
        player_count: rng.random_range(5..15),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_lowercase_codes_normalize_to_the_same_session() {
        for code in VALID_SESSION_CODES {
            let variants = [
                code.to_string(),
                code.to_lowercase(),
                format!("  {}\t", code.to_lowercase()),
                format!(" {code} "),
            ];
            for variant in variants {
                let session = session_by_code(&variant).expect("valid variant");
                assert_eq!(session.code, code);
                assert_eq!(session.id, format!("session-{}", code.to_lowercase()));
            }
        }
    }

    #[test]
    fn example_code_yields_player_count_in_range() {
        assert_eq!(normalize_session_code(" abc123 "), "ABC123");

        for _ in 0..100 {
            let session = session_by_code(" abc123 ").unwrap();
            assert!((5..=15).contains(&session.player_count));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(session_by_code("ZZZ999").is_none());
        assert!(session_by_code("").is_none());
        assert!(session_by_code("ABC 123").is_none());
        assert!(!is_valid_session_code(" ABC123 "));
    }
}
