use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// The dashboard front end is served from another origin and only posts JSON.
pub fn dashboard_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any)
}
