use crate::services::content;
use axum::{response::IntoResponse, Json};

/// Portfolio home page content
pub async fn home() -> impl IntoResponse {
    Json(content::home_page())
}

/// Site owner credentials
pub async fn about() -> impl IntoResponse {
    Json(content::about_page())
}
