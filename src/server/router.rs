use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{
            ErrorDto, HealthDto, KeepAliveDto, StatusDto, TemplateCatalogDto, TemplateStatsDto,
            UptimeDto,
        },
        preview::{CategoryPreview, ChannelPreview, RolePreview, TemplatePreview},
        template::ChannelKind,
    },
    server::{
        controller::{
            page::{landing, not_found},
            status::{self, health, keep_alive, ping, uptime},
            template::{
                self, get_popular_templates, get_template_preview, get_template_stats,
                get_templates,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        status::status,
        status::keep_alive,
        status::uptime,
        status::health,
        template::get_templates,
        template::get_popular_templates,
        template::get_template_stats,
        template::get_template_preview,
    ),
    components(schemas(
        ErrorDto,
        StatusDto,
        KeepAliveDto,
        UptimeDto,
        HealthDto,
        TemplateCatalogDto,
        TemplateStatsDto,
        TemplatePreview,
        RolePreview,
        CategoryPreview,
        ChannelPreview,
        ChannelKind,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(landing))
        .route("/status", get(status::status))
        .route("/keep-alive", get(keep_alive))
        .route("/uptime", get(uptime))
        .route("/ping", get(ping))
        .route("/health", get(health))
        .route("/api/templates", get(get_templates))
        .route("/api/templates/popular", get(get_popular_templates))
        .route("/api/templates/{name}/stats", get(get_template_stats))
        .route("/api/templates/{name}/preview", get(get_template_preview))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .fallback(not_found)
        .layer(cors)
}
