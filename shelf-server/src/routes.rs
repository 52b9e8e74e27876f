//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Build the CORS layer.
///
/// `origins` is a comma-separated list, or "*" for any origin. Without it
/// only local development origins are allowed.
fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::any(),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            AllowOrigin::list(allowed)
        }
        None => AllowOrigin::list(DEV_ORIGINS.map(HeaderValue::from_static)),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState, cors_origins: Option<&str>) -> Router {
    let api_routes = Router::new()
        // Collection endpoints
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/:id",
            get(handlers::get_book)
                .put(handlers::replace_book)
                .patch(handlers::patch_book)
                .delete(handlers::delete_book),
        )
        .route("/books/:id/start-reading", post(handlers::start_reading))
        .route("/books/:id/wishlist", post(handlers::toggle_wishlist))
        // Reporting endpoints
        .route("/stats", get(handlers::get_stats))
        .route("/report", get(handlers::download_report))
        // SSE endpoint
        .route("/sync", get(handlers::sync_events));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}
