use crate::api::models::AppState;
use crate::api::listings::handlers::listings_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listings", get(listings_handler))
}
