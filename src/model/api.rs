use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: String,
    pub message: String,
    pub client_id: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KeepAliveDto {
    pub status: String,
    pub bot: String,
    pub uptime: String,
    pub timestamp: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UptimeDto {
    pub status: String,
    pub counter: u64,
    pub bot_connected: bool,
    pub timestamp: f64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub uptime: f64,
}

/// Template names and descriptions grouped by template category.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TemplateCatalogDto {
    pub categories: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemplateStatsDto {
    pub template_name: String,
    pub total_uses: i32,
    pub successful_uses: i32,
    pub failed_uses: i32,
    pub ai_generated_uses: i32,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}
