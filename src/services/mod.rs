/// OpenAPI documentation generation.
pub mod documentation;
/// Feedback capture and the rating scale.
pub mod feedback_service;
/// Health check service.
pub mod health_service;
/// Leaderboard view and team directory.
pub mod leaderboard_service;
/// Quiz run sequencing: answers, timeouts, auto-advance and completion.
pub mod quiz_service;
/// Ranking of the user against the mock pool.
pub mod results_service;
/// Session code gate.
pub mod session_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
/// Personal statistics of the entry surface.
pub mod stats_service;
/// Countdown and auto-advance tasks.
pub mod timer_service;

#[cfg(test)]
mod flow_tests;
