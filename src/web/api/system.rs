use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::system::{self, SystemStats};
use crate::web::api::error::ApiResult;

#[utoipa::path(
    get,
    path = "/get_system_stats",
    tag = "system",
    responses(
        (status = 200, description = "Current host statistics", body = SystemStats),
        (status = 500, description = "Collection failed", body = crate::web::api::error::ErrorResponse)
    )
)]
pub async fn get_system_stats() -> ApiResult<impl IntoResponse> {
    let stats = tokio::task::spawn_blocking(system::collect).await?;
    Ok((StatusCode::OK, Json(stats)))
}
