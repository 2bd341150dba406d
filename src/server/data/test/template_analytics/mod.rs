use crate::server::{
    data::template_analytics::TemplateAnalyticsRepository,
    model::{apply::ApplyOptions, usage::ApplyEvent},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_template_name;
mod get_popular;
mod increment;

fn apply_event(template_name: &str, success: bool, is_ai_generated: bool) -> ApplyEvent {
    ApplyEvent {
        template_name: template_name.to_string(),
        guild_id: 1,
        guild_name: "Guild".to_string(),
        user_id: 2,
        is_ai_generated,
        options: ApplyOptions::default(),
        success,
    }
}
