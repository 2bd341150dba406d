use crate::server::{
    data::template_usage::TemplateUsageRepository,
    model::{apply::ApplyOptions, usage::ApplyEvent},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::template_usage::TemplateUsageFactory};

mod create;
mod get_by_template_name;
