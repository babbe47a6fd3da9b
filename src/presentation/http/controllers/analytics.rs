// src/presentation/http/controllers/analytics.rs
use crate::application::dto::AnalyticsReport;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn report(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<AnalyticsReport>> {
    state
        .services
        .analytics
        .report()
        .await
        .into_http()
        .map(Json)
}
