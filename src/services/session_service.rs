use tracing::{info, warn};

use crate::{
    data::sessions::{GameSession, is_valid_session_code, normalize_session_code, session_by_code},
    error::ServiceError,
    services::quiz_service,
    state::SharedState,
};

/// Validate the code typed on the entry surface and start a run for it.
pub async fn join_session(state: &SharedState, code: &str) -> Result<GameSession, ServiceError> {
    if code.trim().is_empty() {
        return Err(ServiceError::InvalidInput(
            "please enter a session code".into(),
        ));
    }

    let Some(session) = session_by_code(code) else {
        warn!(code = %code.trim(), "rejected session code");
        return Err(ServiceError::InvalidInput("invalid session code".into()));
    };

    info!(code = %session.code, "session joined");
    quiz_service::start_run(state, session.clone()).await?;
    Ok(session)
}

/// Active session matching the code of a quiz route.
///
/// Unknown codes and valid codes that are not the joined session both yield `None`.
pub async fn resolve_session(state: &SharedState, code: &str) -> Option<GameSession> {
    let normalized = normalize_session_code(code);
    if !is_valid_session_code(&normalized) {
        return None;
    }

    state
        .session()
        .read()
        .await
        .as_ref()
        .filter(|session| session.code == normalized)
        .cloned()
}
