use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::system as system_handlers;
use super::api_doc::ApiDoc;
use super::config::{Config, API_KEY_ENV};
use super::state::{AppState, Providers};
use super::ui::handlers as ui_handlers;

pub fn router(state: AppState) -> Router {
    Router::new()
        // UI routes
        .route("/", get(ui_handlers::home))
        .route("/apps", get(ui_handlers::apps))
        .route(
            "/iss-guide",
            get(ui_handlers::iss_guide_redirect).post(ui_handlers::iss_guide_redirect),
        )
        .route(
            "/iss-guide/",
            get(ui_handlers::iss_guide).post(ui_handlers::iss_guide_submit),
        )
        // Dashboard API
        .route("/get_system_stats", get(system_handlers::get_system_stats))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    if config.api_key.is_none() {
        log::warn!(
            "{} is not set; ISS position and pass lookups will be unavailable",
            API_KEY_ENV
        );
    }

    let providers = Providers::live(&config).map_err(std::io::Error::other)?;
    let state = AppState::new(config, providers);
    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
