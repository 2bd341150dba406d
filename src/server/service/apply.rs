//! Template application.
//!
//! Walks a template in strict order (roles, then categories, then each category's
//! channels) and issues create-or-skip calls against a guild. Names are the identity
//! of every entity, so re-applying a template creates nothing that already exists;
//! only the overwrites of existing categories are refreshed.
//!
//! Failure of a single role, category or channel is recorded in the returned
//! `ApplyReport` and the walk continues. Errors outside the per-item calls (listing
//! roles or channels) and rate limiting abort the walk and are returned. Exactly one
//! usage event is tracked per call either way.

use crate::{
    model::template::{CategorySpec, ChannelKind, ChannelSpec, RoleSpec, Template},
    server::{
        error::{guild::GuildApiError, AppError},
        model::{
            apply::{ApplyOptions, ApplyReport, EntityKind, ItemStatus, SkipReason},
            guild::{GuildLayout, NewCategory, NewChannel, NewRole, RoleOverwrite},
            permission::permissions_from_map,
            usage::ApplyEvent,
        },
        service::{
            guild_api::GuildApi,
            overwrite::{merge_channel_overwrites, resolve_overwrites, RoleDirectory},
            usage::UsageTracker,
        },
        util::parse::parse_color,
    },
};

/// Bitrate of created voice channels when the template does not set one.
pub const DEFAULT_BITRATE: u32 = 64_000;

/// Audit log reason attached to every call made while applying `template_name`.
pub fn audit_reason(template_name: &str) -> String {
    format!("ServerSetup Bot - Applying {} template", template_name)
}

/// Mutable state of one walk.
struct Walk {
    roles: RoleDirectory,
    layout: GuildLayout,
    report: ApplyReport,
    reason: String,
}

pub struct TemplateApplier<'a> {
    api: &'a dyn GuildApi,
    tracker: &'a dyn UsageTracker,
}

impl<'a> TemplateApplier<'a> {
    /// Creates a new applier for one guild.
    ///
    /// # Arguments
    /// - `api` - Guild the template is applied to
    /// - `tracker` - Receives the usage event of every apply
    pub fn new(api: &'a dyn GuildApi, tracker: &'a dyn UsageTracker) -> Self {
        Self { api, tracker }
    }

    /// Applies a template to the guild.
    ///
    /// # Arguments
    /// - `template` - Template to apply; never modified
    /// - `options` - Parts of the template to apply
    /// - `user_id` - User who requested the apply, for usage tracking
    ///
    /// # Returns
    /// - `Ok(ApplyReport)` - Walk completed; per-item failures are in the report
    /// - `Err(AppError::GuildApi)` - Listing the guild failed or the guild rate limited
    ///   a call; the guild may be partially modified
    pub async fn apply(
        &self,
        template: &Template,
        options: ApplyOptions,
        user_id: u64,
    ) -> Result<ApplyReport, AppError> {
        let result = self.walk(template, options).await;

        match &result {
            Ok(report) => tracing::info!(
                "Applied template '{}' to guild {}: {} roles, {} categories, {} channels created, {} failures",
                template.name,
                self.api.guild_id(),
                report.created(EntityKind::Role),
                report.created(EntityKind::Category),
                report.created(EntityKind::Channel),
                report.failures().count()
            ),
            Err(e) => tracing::error!(
                "Failed to apply template '{}' to guild {}: {:?}",
                template.name,
                self.api.guild_id(),
                e
            ),
        }

        self.track(template, options, user_id, result.is_ok())
            .await;

        result
    }

    /// Tracks an apply of a template name that could not be found.
    pub async fn track_missing(&self, template_name: &str, options: ApplyOptions, user_id: u64) {
        self.tracker
            .record_apply(ApplyEvent {
                template_name: template_name.to_string(),
                guild_id: self.api.guild_id(),
                guild_name: self.api.guild_name().to_string(),
                user_id,
                is_ai_generated: false,
                options,
                success: false,
            })
            .await;
    }

    async fn track(&self, template: &Template, options: ApplyOptions, user_id: u64, success: bool) {
        self.tracker
            .record_apply(ApplyEvent {
                template_name: template.name.clone(),
                guild_id: self.api.guild_id(),
                guild_name: self.api.guild_name().to_string(),
                user_id,
                is_ai_generated: template.is_ai_generated,
                options,
                success,
            })
            .await;
    }

    async fn walk(&self, template: &Template, options: ApplyOptions) -> Result<ApplyReport, AppError> {
        let existing_roles = self.api.roles().await?;

        let mut walk = Walk {
            roles: RoleDirectory::new(&existing_roles),
            layout: GuildLayout::default(),
            report: ApplyReport::new(&template.name, self.api.guild_id()),
            reason: audit_reason(&template.name),
        };

        if options.include_roles {
            for spec in &template.roles {
                self.apply_role(spec, &mut walk).await?;
            }
        }

        if options.include_categories {
            walk.layout = self.api.layout().await?;

            for category in &template.categories {
                self.apply_category(category, options, &mut walk).await?;
            }
        }

        Ok(walk.report)
    }

    async fn apply_role(
        &self,
        spec: &RoleSpec,
        walk: &mut Walk,
    ) -> Result<(), AppError> {
        if let Some(role_id) = walk.roles.resolve(&spec.name) {
            walk.roles.insert(&spec.name, role_id);
            walk.report
                .record(EntityKind::Role, &spec.name, ItemStatus::Reused);
            return Ok(());
        }

        let color = match parse_color(&spec.color) {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!("Skipping role '{}': {}", spec.name, e);
                walk.report
                    .record(EntityKind::Role, &spec.name, ItemStatus::Invalid(e));
                return Ok(());
            }
        };

        let new_role = NewRole {
            name: spec.name.clone(),
            color,
            hoist: spec.hoist,
            mentionable: spec.mentionable,
            permissions: permissions_from_map(&spec.permissions),
        };

        let status = match self.api.create_role(new_role, &walk.reason).await {
            Ok(role) => {
                tracing::debug!("Created role '{}' ({})", role.name, role.id);
                walk.roles.insert(&spec.name, role.id);
                ItemStatus::Created
            }
            Err(e) => item_failure("create role", &spec.name, e)?,
        };

        walk.report.record(EntityKind::Role, &spec.name, status);
        Ok(())
    }

    async fn apply_category(
        &self,
        spec: &CategorySpec,
        options: ApplyOptions,
        walk: &mut Walk,
    ) -> Result<(), AppError> {
        let overwrites = resolve_overwrites(&spec.permissions, &walk.roles);

        let category_id = match walk.layout.category_by_name(&spec.name).map(|c| c.id) {
            Some(category_id) => {
                let status = self
                    .refresh_overwrites(&spec.name, category_id, &overwrites, &walk.reason)
                    .await?;
                walk.report.record(EntityKind::Category, &spec.name, status);
                category_id
            }
            None => {
                let new_category = NewCategory {
                    name: spec.name.clone(),
                    overwrites: overwrites.clone(),
                };

                match self.api.create_category(new_category, &walk.reason).await {
                    Ok(category) => {
                        tracing::debug!("Created category '{}' ({})", category.name, category.id);
                        let category_id = category.id;
                        walk.layout.categories.push(category);
                        walk.report
                            .record(EntityKind::Category, &spec.name, ItemStatus::Created);
                        category_id
                    }
                    Err(e) => {
                        let status = item_failure("create category", &spec.name, e)?;
                        walk.report.record(EntityKind::Category, &spec.name, status);
                        return Ok(());
                    }
                }
            }
        };

        for channel in &spec.channels {
            self.apply_channel(channel, category_id, &overwrites, options, walk)
                .await?;
        }

        Ok(())
    }

    /// Sets every resolved overwrite on an existing category, stopping at the first
    /// failure.
    async fn refresh_overwrites(
        &self,
        name: &str,
        category_id: u64,
        overwrites: &[RoleOverwrite],
        reason: &str,
    ) -> Result<ItemStatus, AppError> {
        for overwrite in overwrites {
            if let Err(e) = self
                .api
                .set_category_overwrite(category_id, *overwrite, reason)
                .await
            {
                return item_failure("update overwrites of category", name, e);
            }
        }

        Ok(ItemStatus::Updated)
    }

    async fn apply_channel(
        &self,
        spec: &ChannelSpec,
        category_id: u64,
        category_overwrites: &[RoleOverwrite],
        options: ApplyOptions,
        walk: &mut Walk,
    ) -> Result<(), AppError> {
        if walk
            .layout
            .channels_in(category_id)
            .any(|c| c.name == spec.name)
        {
            walk.report.record(
                EntityKind::Channel,
                &spec.name,
                ItemStatus::Skipped(SkipReason::AlreadyExists),
            );
            return Ok(());
        }

        let excluded = match spec.kind {
            ChannelKind::Text => !options.include_text_channels,
            ChannelKind::Voice => !options.include_voice_channels,
            ChannelKind::Forum => false,
        };
        if excluded {
            walk.report.record(
                EntityKind::Channel,
                &spec.name,
                ItemStatus::Skipped(SkipReason::Excluded),
            );
            return Ok(());
        }

        let new_channel = NewChannel {
            name: spec.name.clone(),
            kind: spec.kind,
            parent_id: category_id,
            overwrites: merge_channel_overwrites(
                category_overwrites,
                &spec.permissions,
                &walk.roles,
            ),
            topic: spec.topic.clone().unwrap_or_default(),
            slowmode: spec.slowmode.unwrap_or(0),
            nsfw: spec.nsfw.unwrap_or(false),
            bitrate: spec.bitrate.unwrap_or(DEFAULT_BITRATE),
            user_limit: spec.user_limit.unwrap_or(0),
        };

        let status = match self.api.create_channel(new_channel, &walk.reason).await {
            Ok(channel) => {
                tracing::debug!(
                    "Created {} channel '{}' ({})",
                    channel.kind,
                    channel.name,
                    channel.id
                );
                walk.layout.channels.push(channel);
                ItemStatus::Created
            }
            Err(e) => item_failure("create channel", &spec.name, e)?,
        };

        walk.report.record(EntityKind::Channel, &spec.name, status);
        Ok(())
    }
}

/// Turns a failed per-item call into an outcome, or aborts the walk when rate limited.
fn item_failure(action: &str, name: &str, error: GuildApiError) -> Result<ItemStatus, AppError> {
    if error.is_rate_limited() {
        return Err(error.into());
    }

    tracing::warn!("Failed to {} '{}': {}", action, name, error);
    Ok(ItemStatus::Failed(error))
}
