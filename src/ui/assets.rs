//! Stylesheet compiled into the binary so the server ships as a single file.

use axum::{http::header, response::IntoResponse};

pub const STYLESHEET_CSS: &str = include_str!("../../assets/staybooker.css");

/// GET /assets/staybooker.css
pub async fn stylesheet_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET_CSS,
    )
}
