mod template_analytics;
mod template_store;
mod template_usage;
mod template_view;
