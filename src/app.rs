use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::ConnectionProvider;
use crate::handlers;
use crate::middleware::require_api_key;
use crate::queries::{EnrichedSubmissionQuery, QualityReviewQuery, SubmissionQuery, TaskQuery};

/// Shared, read-only request context
pub struct AppState<P> {
    pub config: Arc<AppConfig>,
    pub provider: Arc<P>,
}

impl<P> AppState<P> {
    pub fn new(config: AppConfig, provider: P) -> Self {
        Self {
            config: Arc::new(config),
            provider: Arc::new(provider),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            provider: self.provider.clone(),
        }
    }
}

pub fn app<P: ConnectionProvider>(state: AppState<P>) -> Router {
    let cors = if state.config.security.enable_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Public
        .route("/healthcheck", get(handlers::healthcheck))
        // Protected by x-api-key
        .merge(data_routes(state))
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn data_routes<P: ConnectionProvider>(state: AppState<P>) -> Router {
    use handlers::list;

    Router::new()
        .route("/tasks", get(list::<P, TaskQuery>))
        .route("/submissions", get(list::<P, SubmissionQuery>))
        .route("/submissions/enriched", get(list::<P, EnrichedSubmissionQuery>))
        .route("/quality_reviews", get(list::<P, QualityReviewQuery>))
        .route_layer(middleware::from_fn_with_state(state.config.clone(), require_api_key))
        .with_state(state)
}
