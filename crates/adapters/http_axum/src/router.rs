//! Axum router assembly.

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::Repositories;
use hbnb_domain::error::NotFoundError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api/v1` and answers anything else with a JSON
/// 404. Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R: Repositories>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> ApiError {
    NotFoundError::new("Route", uri.path()).into()
}
