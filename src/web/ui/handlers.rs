use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect},
    Form,
};

use crate::iss::{GuideReport, GuideRequest};
use crate::system;
use crate::web::state::AppState;

use super::templates::{AppsTemplate, HomeTemplate, IssGuideTemplate};

pub async fn home() -> impl IntoResponse {
    let stats = match tokio::task::spawn_blocking(system::collect).await {
        Ok(stats) => Some(stats),
        Err(e) => {
            log::warn!("Failed to collect system stats: {}", e);
            None
        }
    };
    HomeTemplate { stats }
}

pub async fn apps() -> impl IntoResponse {
    AppsTemplate {}
}

pub async fn iss_guide_redirect() -> impl IntoResponse {
    Redirect::permanent("/iss-guide/")
}

pub async fn iss_guide(State(state): State<AppState>) -> impl IntoResponse {
    IssGuideTemplate {
        report: GuideReport::default(),
        submitted: false,
        lookahead_days: state.config.tracking.lookahead_days,
    }
}

pub async fn iss_guide_submit(
    State(state): State<AppState>,
    form: Result<Form<GuideRequest>, FormRejection>,
) -> impl IntoResponse {
    // A missing or unreadable body is treated as an empty form
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            log::debug!("Unreadable guide form ({}), using defaults", rejection);
            GuideRequest::default()
        }
    };

    let guide = state.guide.clone();
    // A panicking stage must still leave the user with a page
    let report = match tokio::spawn(async move { guide.run(&request).await }).await {
        Ok(report) => report,
        Err(e) => {
            log::error!("ISS guide pipeline failed: {}", e);
            GuideReport::failed(e)
        }
    };

    IssGuideTemplate {
        report,
        submitted: true,
        lookahead_days: state.config.tracking.lookahead_days,
    }
}
