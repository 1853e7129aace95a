use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod feedback;
pub mod health;
pub mod leaderboard;
pub mod phase;
pub mod quiz;
pub mod results;
pub mod session;
pub mod sse;
pub mod stats;

pub(crate) fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// Current time as an RFC 3339 string, as stored in the local histories.
pub(crate) fn now_rfc3339() -> String {
    format_system_time(SystemTime::now())
}
