//! Template previews.

use serenity::all::Permissions;

use crate::{
    model::{
        preview::{
            CategoryPreview, ChannelPreview, RolePreview, TemplatePreview, MAX_PREVIEW_CATEGORIES,
            MAX_PREVIEW_CHANNELS, MAX_PREVIEW_ROLES,
        },
        template::{CategorySpec, RoleSpec, Template},
    },
    server::{
        model::{permission::permission_bit, usage::ViewEvent},
        service::usage::UsageTracker,
    },
};

const NO_DESCRIPTION: &str = "No description available";

/// Permissions worth pointing out in a preview, with their display names.
///
/// Administrator implies every other entry, so a role with administrator lists only
/// that.
const NOTABLE_PERMISSIONS: &[(Permissions, &str)] = &[
    (Permissions::MANAGE_GUILD, "Manage Server"),
    (Permissions::MANAGE_ROLES, "Manage Roles"),
    (Permissions::MANAGE_CHANNELS, "Manage Channels"),
    (Permissions::KICK_MEMBERS, "Kick Members"),
    (Permissions::BAN_MEMBERS, "Ban Members"),
    (Permissions::MANAGE_MESSAGES, "Manage Messages"),
    (Permissions::PRIORITY_SPEAKER, "Priority Speaker"),
];

/// Identity of the user requesting a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: u64,
    pub guild_id: Option<u64>,
}

pub struct PreviewService<'a> {
    tracker: &'a dyn UsageTracker,
}

impl<'a> PreviewService<'a> {
    pub fn new(tracker: &'a dyn UsageTracker) -> Self {
        Self { tracker }
    }

    /// Builds a preview, tracking a view event when a viewer is given.
    pub async fn preview(&self, template: &Template, viewer: Option<Viewer>) -> TemplatePreview {
        if let Some(viewer) = viewer {
            self.tracker
                .record_view(ViewEvent {
                    template_name: template.name.clone(),
                    user_id: viewer.user_id,
                    guild_id: viewer.guild_id,
                })
                .await;
        }

        build_preview(template)
    }
}

/// Summarizes a template: counts, the first roles with their notable permissions and
/// the first categories with their first channels.
pub fn build_preview(template: &Template) -> TemplatePreview {
    let description = if template.description.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        template.description.clone()
    };

    TemplatePreview {
        name: template.name.clone(),
        description,
        category: template.category.clone(),
        image_url: template.image_url.clone(),
        role_count: template.roles.len(),
        category_count: template.categories.len(),
        channel_count: template.channel_count(),
        roles: template
            .roles
            .iter()
            .take(MAX_PREVIEW_ROLES)
            .map(role_preview)
            .collect(),
        more_roles: template.roles.len().saturating_sub(MAX_PREVIEW_ROLES),
        categories: template
            .categories
            .iter()
            .take(MAX_PREVIEW_CATEGORIES)
            .map(category_preview)
            .collect(),
        more_categories: template
            .categories
            .len()
            .saturating_sub(MAX_PREVIEW_CATEGORIES),
    }
}

/// Display names of the notable permissions a role grants.
pub fn key_permissions(role: &RoleSpec) -> Vec<String> {
    let granted = role
        .permissions
        .iter()
        .filter(|(_, granted)| **granted)
        .filter_map(|(name, _)| permission_bit(name))
        .fold(Permissions::empty(), |bits, bit| bits | bit);

    if granted.contains(Permissions::ADMINISTRATOR) {
        return vec!["Administrator".to_string()];
    }

    NOTABLE_PERMISSIONS
        .iter()
        .filter(|(bit, _)| granted.contains(*bit))
        .map(|(_, label)| label.to_string())
        .collect()
}

fn role_preview(role: &RoleSpec) -> RolePreview {
    RolePreview {
        name: role.name.clone(),
        color: role.color.clone(),
        key_permissions: key_permissions(role),
    }
}

fn category_preview(category: &CategorySpec) -> CategoryPreview {
    CategoryPreview {
        name: category.name.clone(),
        channels: category
            .channels
            .iter()
            .take(MAX_PREVIEW_CHANNELS)
            .map(|channel| ChannelPreview {
                name: channel.name.clone(),
                kind: channel.kind,
                topic: channel.topic.clone().unwrap_or_default(),
            })
            .collect(),
        more_channels: category.channels.len().saturating_sub(MAX_PREVIEW_CHANNELS),
    }
}
