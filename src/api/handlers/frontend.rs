use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Body returned by the frontend root route
pub const FRONTEND_BANNER: &str = "Frontend Server Running";

/// GET /
///
/// Static banner served as `text/plain`.
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, FRONTEND_BANNER)
}
