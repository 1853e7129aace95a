use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod feedback;
pub mod health;
pub mod home;
pub mod leaderboard;
pub mod quiz;
pub mod results;
pub mod session;
pub mod sse;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = home::router()
        .merge(session::router())
        .merge(quiz::router())
        .merge(results::router())
        .merge(leaderboard::router())
        .merge(feedback::router())
        .merge(health::router())
        .merge(sse::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
