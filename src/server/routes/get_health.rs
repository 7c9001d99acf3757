use axum::{http::StatusCode, response::IntoResponse};

#[axum_macros::debug_handler]
pub async fn get_health() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
