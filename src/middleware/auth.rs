use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_api_key, AuthError, API_KEY_HEADER};
use crate::config::AppConfig;
use crate::error::ApiError;

/// Rejects requests whose `x-api-key` header does not match the configured key
pub async fn require_api_key(
    State(config): State<Arc<AppConfig>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // A header that is not visible ASCII compares as empty, so it never matches
    let supplied = headers.get(API_KEY_HEADER).map(|value| value.to_str().unwrap_or_default());

    verify_api_key(config.security.api_key.as_deref(), supplied).map_err(|e| {
        if e == AuthError::ServerMisconfigured {
            tracing::error!("Rejecting {}: no API key configured", request.uri().path());
        } else {
            tracing::debug!("Rejecting {}: {}", request.uri().path(), e);
        }
        ApiError::from(e)
    })?;

    Ok(next.run(request).await)
}
