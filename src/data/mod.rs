/// Mock player pool backing the leaderboard and team directory.
pub mod players;
/// Fixed well-being question bank.
pub mod questions;
/// Session code allow-list and synthetic session descriptors.
pub mod sessions;
