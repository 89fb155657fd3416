pub mod listings;
pub mod models;

// Re-exports
pub use models::*;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Root router with every route group merged in.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(listings::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
