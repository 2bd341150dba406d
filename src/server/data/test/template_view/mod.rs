use crate::server::{data::template_view::TemplateViewRepository, model::usage::ViewEvent};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_template_name;
mod create;
