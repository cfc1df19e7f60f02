pub mod health;
pub mod listings;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors::dashboard_cors, rate_limit};
use crate::AppState;

pub fn router(state: AppState, api_rps: u32) -> Router {
    let api = Router::new()
        .route("/api/listings", post(listings::load_listings))
        .route("/api/listings/details", post(listings::load_listing_details))
        .route("/api/jobs/:job_id/detail", post(listings::get_job_detail))
        .route("/api/jobs/:job_id/applicants", post(listings::get_applicants))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::new(api_rps),
            rate_limit::rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(api)
        .with_state(state)
        .layer(dashboard_cors())
        .layer(TraceLayer::new_for_http())
}
