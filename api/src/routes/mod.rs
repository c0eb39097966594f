mod pages;

use axum::{routing::get, Router};

/// Create all routes for the application
pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
}
