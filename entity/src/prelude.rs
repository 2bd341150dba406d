pub use super::template_analytics::Entity as TemplateAnalytics;
pub use super::template_usage::Entity as TemplateUsage;
pub use super::template_view::Entity as TemplateView;
