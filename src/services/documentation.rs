use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the well-being quiz backend.
#[openapi(
    paths(
        crate::routes::home::home,
        crate::routes::session::join_session,
        crate::routes::quiz::current_question,
        crate::routes::quiz::submit_answer,
        crate::routes::results::results,
        crate::routes::leaderboard::leaderboard,
        crate::routes::leaderboard::set_filter,
        crate::routes::leaderboard::team,
        crate::routes::feedback::rating_scale,
        crate::routes::feedback::submit_feedback,
        crate::routes::feedback::skip_feedback,
        crate::routes::health::healthcheck,
        crate::routes::sse::public_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::stats::HomeStats,
            crate::dto::session::JoinSessionRequest,
            crate::dto::session::SessionSummary,
            crate::dto::phase::VisibleQuizPhase,
            crate::dto::quiz::AnswerRequest,
            crate::dto::quiz::QuestionResponse,
            crate::dto::quiz::AnswerSummary,
            crate::dto::results::ResultsResponse,
            crate::dto::leaderboard::LeaderboardResponse,
            crate::dto::leaderboard::SetFilterRequest,
            crate::dto::leaderboard::TeamResponse,
            crate::dto::feedback::FeedbackRequest,
            crate::dto::feedback::FeedbackResponse,
            crate::dto::feedback::FeedbackScaleResponse,
            crate::dto::sse::PhaseChangedEvent,
            crate::dto::sse::TimerTickEvent,
            crate::dto::sse::TimerExpiredEvent,
            crate::dto::sse::AnswerRecordedEvent,
            crate::dto::sse::RunCompletedEvent,
            crate::dao::models::FeedbackEntry,
            crate::dao::models::ScoreEntry,
        )
    ),
    tags(
        (name = "session", description = "Session code gate"),
        (name = "quiz", description = "Question flow of the current run"),
        (name = "results", description = "Results and leaderboard"),
        (name = "feedback", description = "Post-run feedback"),
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events streams"),
    )
)]
pub struct ApiDoc;
