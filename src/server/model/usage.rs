//! Template usage and view analytics.

use chrono::{DateTime, Utc};

use crate::model::api::TemplateStatsDto;
use crate::server::model::apply::ApplyOptions;

/// One completed or aborted template application.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyEvent {
    pub template_name: String,
    pub guild_id: u64,
    pub guild_name: String,
    pub user_id: u64,
    pub is_ai_generated: bool,
    pub options: ApplyOptions,
    pub success: bool,
}

/// One template preview by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEvent {
    pub template_name: String,
    pub user_id: u64,
    pub guild_id: Option<u64>,
}

/// Aggregated usage counters for a template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateStats {
    pub template_name: String,
    pub total_uses: i32,
    pub successful_uses: i32,
    pub failed_uses: i32,
    pub ai_generated_uses: i32,
    pub last_updated: DateTime<Utc>,
}

impl TemplateStats {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::template_analytics::Model) -> Self {
        Self {
            template_name: entity.template_name,
            total_uses: entity.total_uses,
            successful_uses: entity.successful_uses,
            failed_uses: entity.failed_uses,
            ai_generated_uses: entity.ai_generated_uses,
            last_updated: entity.last_updated,
        }
    }

    pub fn into_dto(self) -> TemplateStatsDto {
        TemplateStatsDto {
            template_name: self.template_name,
            total_uses: self.total_uses,
            successful_uses: self.successful_uses,
            failed_uses: self.failed_uses,
            ai_generated_uses: self.ai_generated_uses,
            last_updated: self.last_updated,
        }
    }
}
