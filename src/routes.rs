use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::{self, AppState};
use crate::landing;

/// Builds the full application router.
///
/// The body limit applies to the lead endpoint only; oversized forms are
/// rejected before the handler sees them.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_form_bytes = state.config.max_form_bytes;

    let lead_routes = Router::new()
        .route("/api/lead", post(handlers::submit_lead))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(max_form_bytes)));

    Router::new()
        .route("/", get(landing::landing_page))
        .route("/health", get(handlers::health))
        .route("/api/contact-link", get(handlers::contact_link))
        .merge(lead_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
