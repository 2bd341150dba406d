//! Guild backup.
//!
//! Serializes a live guild into the template document shape so that it can be stored,
//! submitted or re-applied to another guild.
//!
//! The `@everyone` role and managed roles are never written, neither as roles nor as
//! overwrite targets. Channel overwrites are delta-encoded: a channel overwrite equal
//! to the parent category's overwrite for the same role is omitted. Channels outside
//! any category are not backed up.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::{
    model::template::{CategorySpec, ChannelKind, ChannelSpec, RoleOverwrites, RoleSpec, Template},
    server::{
        data::template_store::TemplateStore,
        error::AppError,
        model::{
            backup::GuildBackup,
            guild::{GuildCategory, GuildChannelInfo, GuildLayout, GuildRole, RoleOverwrite},
            permission::permissions_to_map,
        },
        service::{apply::DEFAULT_BITRATE, guild_api::GuildApi},
        util::parse::format_color,
    },
};

/// Category assigned to every backup document.
pub const BACKUP_CATEGORY: &str = "Backup";

pub struct GuildBackupService<'a> {
    api: &'a dyn GuildApi,
    store: &'a dyn TemplateStore,
}

impl<'a> GuildBackupService<'a> {
    /// Creates a new backup service for one guild.
    ///
    /// # Arguments
    /// - `api` - Guild to back up
    /// - `store` - Receives the backup document
    pub fn new(api: &'a dyn GuildApi, store: &'a dyn TemplateStore) -> Self {
        Self { api, store }
    }

    /// Backs up the guild and persists the document.
    ///
    /// The document is named `{guild_id}_{YYYYMMDD_HHMMSS}` (UTC). A failure to persist
    /// it is logged and reported through `GuildBackup::persisted`; the template is
    /// returned regardless.
    ///
    /// # Returns
    /// - `Ok(GuildBackup)` - The serialized guild and whether it was stored
    /// - `Err(AppError::GuildApi)` - Listing roles or channels failed
    pub async fn backup(&self) -> Result<GuildBackup, AppError> {
        let now = Utc::now();
        let template = self.snapshot(now).await?;
        let document_name = format!("{}_{}", self.api.guild_id(), now.format("%Y%m%d_%H%M%S"));

        let persisted = match self.store.save_backup(&document_name, &template).await {
            Ok(()) => {
                tracing::info!(
                    "Backed up guild {} as '{}'",
                    self.api.guild_id(),
                    document_name
                );
                true
            }
            Err(e) => {
                tracing::error!("Failed to save backup '{}': {:?}", document_name, e);
                false
            }
        };

        Ok(GuildBackup {
            template,
            document_name,
            persisted,
        })
    }

    /// Serializes the guild without persisting it.
    pub async fn snapshot(&self, created_at: DateTime<Utc>) -> Result<Template, AppError> {
        let roles = self.api.roles().await?;
        let layout = self.api.layout().await?;

        Ok(serialize_guild(self.api.guild_name(), &roles, &layout, created_at))
    }
}

/// Builds a template document from a guild snapshot.
///
/// Roles are written highest position first. Categories are ordered by position, and
/// within a category text channels come first, then voice, then forum channels, each
/// ordered by position.
pub fn serialize_guild(
    guild_name: &str,
    roles: &[GuildRole],
    layout: &GuildLayout,
    created_at: DateTime<Utc>,
) -> Template {
    let backed_up: HashMap<u64, &GuildRole> = roles
        .iter()
        .filter(|r| !r.is_default && !r.managed)
        .map(|r| (r.id, r))
        .collect();

    let mut ordered_roles: Vec<&GuildRole> = backed_up.values().copied().collect();
    ordered_roles.sort_by(|a, b| b.position.cmp(&a.position).then(b.id.cmp(&a.id)));

    let mut categories: Vec<&GuildCategory> = layout.categories.iter().collect();
    categories.sort_by_key(|c| (c.position, c.id));

    Template {
        name: format!("{} Backup", guild_name),
        description: format!(
            "Backup of {} created on {}",
            guild_name,
            created_at.format("%Y-%m-%d")
        ),
        category: BACKUP_CATEGORY.to_string(),
        image_url: None,
        roles: ordered_roles.into_iter().map(role_spec).collect(),
        categories: categories
            .into_iter()
            .map(|c| category_spec(c, layout, &backed_up))
            .collect(),
        is_ai_generated: false,
    }
}

fn role_spec(role: &GuildRole) -> RoleSpec {
    RoleSpec {
        name: role.name.clone(),
        color: format_color(role.color),
        hoist: role.hoist,
        mentionable: role.mentionable,
        permissions: permissions_to_map(role.permissions),
    }
}

fn category_spec(
    category: &GuildCategory,
    layout: &GuildLayout,
    backed_up: &HashMap<u64, &GuildRole>,
) -> CategorySpec {
    let mut channels: Vec<&GuildChannelInfo> = layout.channels_in(category.id).collect();
    channels.sort_by_key(|c| (kind_order(c.kind), c.position, c.id));

    CategorySpec {
        name: category.name.clone(),
        permissions: overwrite_maps(category.overwrites.iter(), backed_up),
        channels: channels
            .into_iter()
            .map(|channel| channel_spec(channel, category, backed_up))
            .collect(),
    }
}

fn kind_order(kind: ChannelKind) -> u8 {
    match kind {
        ChannelKind::Text => 0,
        ChannelKind::Voice => 1,
        ChannelKind::Forum => 2,
    }
}

fn channel_spec(
    channel: &GuildChannelInfo,
    category: &GuildCategory,
    backed_up: &HashMap<u64, &GuildRole>,
) -> ChannelSpec {
    let differing = channel
        .overwrites
        .iter()
        .filter(|o| category.overwrite_for(o.role_id) != Some(&o.overwrite));

    let mut spec = ChannelSpec::new(channel.name.clone(), channel.kind);
    spec.permissions = overwrite_maps(differing, backed_up);

    match channel.kind {
        ChannelKind::Text | ChannelKind::Forum => {
            spec.topic = Some(channel.topic.clone().unwrap_or_default());
            spec.slowmode = Some(channel.slowmode);
            spec.nsfw = Some(channel.nsfw);
        }
        ChannelKind::Voice => {
            spec.bitrate = Some(channel.bitrate.unwrap_or(DEFAULT_BITRATE));
            spec.user_limit = Some(channel.user_limit.unwrap_or(0));
        }
    }

    spec
}

/// Writes non-neutral overwrites of backed up roles, keyed by role name.
fn overwrite_maps<'a>(
    overwrites: impl Iterator<Item = &'a RoleOverwrite>,
    backed_up: &HashMap<u64, &GuildRole>,
) -> RoleOverwrites {
    overwrites
        .filter(|o| !o.overwrite.is_neutral())
        .filter_map(|o| {
            backed_up
                .get(&o.role_id)
                .map(|role| (role.name.clone(), o.overwrite.to_map()))
        })
        .collect()
}
