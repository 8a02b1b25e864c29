pub const HEALTHCHECK_MESSAGE: &str = "API is working perfectly fine. Bleep bloop. Thanks for checking.";

/// GET /healthcheck - liveness only, never touches the database
pub async fn healthcheck() -> &'static str {
    HEALTHCHECK_MESSAGE
}
