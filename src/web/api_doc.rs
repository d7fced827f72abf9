use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use crate::system::SystemStats;

#[derive(OpenApi)]
#[openapi(
    paths(super::api::system::get_system_stats),
    components(schemas(SystemStats, ErrorResponse)),
    info(
        title = "Skywatch Dashboard API",
        description = "JSON endpoints backing the dashboard pages",
        version = "0.1.0"
    ),
    tags(
        (name = "system", description = "Host statistics")
    )
)]
pub struct ApiDoc;
