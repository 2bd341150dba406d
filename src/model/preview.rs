//! Read-only template summaries shown before a template is applied.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use utoipa::ToSchema;

use crate::model::template::ChannelKind;

/// Maximum number of roles listed in a preview.
pub const MAX_PREVIEW_ROLES: usize = 10;
/// Maximum number of categories listed in a preview.
pub const MAX_PREVIEW_CATEGORIES: usize = 5;
/// Maximum number of channels listed per category in a preview.
pub const MAX_PREVIEW_CHANNELS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemplatePreview {
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: Option<String>,
    pub role_count: usize,
    pub category_count: usize,
    pub channel_count: usize,
    pub roles: Vec<RolePreview>,
    /// Roles not listed in `roles`.
    pub more_roles: usize,
    pub categories: Vec<CategoryPreview>,
    /// Categories not listed in `categories`.
    pub more_categories: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RolePreview {
    pub name: String,
    pub color: String,
    /// Display names of notable permissions, e.g. "Manage Server".
    pub key_permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryPreview {
    pub name: String,
    pub channels: Vec<ChannelPreview>,
    /// Channels of this category not listed in `channels`.
    pub more_channels: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChannelPreview {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    pub topic: String,
}

impl TemplatePreview {
    /// Renders the preview as chat markdown with "+N more" truncation markers.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "**{}** ({})", self.name, self.category);
        let _ = writeln!(out, "{}", self.description);
        let _ = writeln!(
            out,
            "Roles: {} | Categories: {} | Channels: {}",
            self.role_count, self.category_count, self.channel_count
        );

        if !self.roles.is_empty() {
            let _ = writeln!(out, "\n__Roles__");
            for role in &self.roles {
                if role.key_permissions.is_empty() {
                    let _ = writeln!(out, "- {}", role.name);
                } else {
                    let _ = writeln!(out, "- {} ({})", role.name, role.key_permissions.join(", "));
                }
            }
            if self.more_roles > 0 {
                let _ = writeln!(out, "- +{} more", self.more_roles);
            }
        }

        if !self.categories.is_empty() {
            let _ = writeln!(out, "\n__Categories & Channels__");
            for category in &self.categories {
                let _ = writeln!(out, "**{}**", category.name);
                for channel in &category.channels {
                    let marker = match channel.kind {
                        ChannelKind::Text => "#",
                        ChannelKind::Voice => "🔊",
                        ChannelKind::Forum => "💬",
                    };
                    let _ = writeln!(out, "  {} {}", marker, channel.name);
                }
                if category.more_channels > 0 {
                    let _ = writeln!(out, "  +{} more", category.more_channels);
                }
            }
            if self.more_categories > 0 {
                let _ = writeln!(out, "+{} more categories", self.more_categories);
            }
        }

        out
    }
}
