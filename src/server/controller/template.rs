use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, TemplateCatalogDto, TemplateStatsDto},
        preview::TemplatePreview,
    },
    server::{error::AppError, service::preview::PreviewService, state::AppState},
};

/// Tag for grouping template endpoints in OpenAPI documentation
pub static TEMPLATE_TAG: &str = "template";

/// Upper bound for the `limit` query parameter of the popularity endpoint.
const MAX_POPULAR_LIMIT: u64 = 100;

#[derive(Deserialize)]
pub struct PopularParams {
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Get the built-in template catalog.
///
/// # Returns
/// - `200 OK` - Template names and descriptions grouped by category
#[utoipa::path(
    get,
    path = "/api/templates",
    tag = TEMPLATE_TAG,
    responses(
        (status = 200, description = "Template catalog", body = TemplateCatalogDto)
    ),
)]
pub async fn get_templates(State(state): State<AppState>) -> impl IntoResponse {
    Json(TemplateCatalogDto {
        categories: state.catalog.by_category(),
    })
}

/// Get the most applied templates.
///
/// # Arguments
/// - `state` - Application state containing the usage tracker
/// - `params` - Maximum number of templates (default 10, capped at 100)
///
/// # Returns
/// - `200 OK` - Usage counters ordered by total uses, highest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/templates/popular",
    tag = TEMPLATE_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of templates (default: 10)")
    ),
    responses(
        (status = 200, description = "Most applied templates", body = Vec<TemplateStatsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular_templates(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.min(MAX_POPULAR_LIMIT);

    let popular = state.tracker.popular(limit).await?;

    Ok(Json(
        popular
            .into_iter()
            .map(|stats| stats.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get usage counters of one template.
///
/// # Returns
/// - `200 OK` - Usage counters of the template
/// - `404 Not Found` - The template was never applied
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/templates/{name}/stats",
    tag = TEMPLATE_TAG,
    params(
        ("name" = String, Path, description = "Template name")
    ),
    responses(
        (status = 200, description = "Usage counters", body = TemplateStatsDto),
        (status = 404, description = "No usage recorded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_template_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stats = state
        .tracker
        .stats(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No usage recorded for template '{}'", name)))?;

    Ok(Json(stats.into_dto()))
}

/// Get the preview of a built-in template.
///
/// Anonymous previews are not tracked as views.
///
/// # Returns
/// - `200 OK` - Template summary
/// - `404 Not Found` - No template with that name
#[utoipa::path(
    get,
    path = "/api/templates/{name}/preview",
    tag = TEMPLATE_TAG,
    params(
        ("name" = String, Path, description = "Template name")
    ),
    responses(
        (status = 200, description = "Template summary", body = TemplatePreview),
        (status = 404, description = "Template not found", body = ErrorDto)
    ),
)]
pub async fn get_template_preview(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let template = state
        .catalog
        .get(&name)
        .ok_or_else(|| AppError::NotFound(format!("Template '{}' not found", name)))?;

    let preview = PreviewService::new(&state.tracker)
        .preview(template, None)
        .await;

    Ok(Json(preview))
}
