//! Serenity-backed implementation of the remote guild API.

use serenity::all::{ChannelId, ChannelType, CreateChannel, EditRole, GuildChannel, GuildId, Http};
use serenity::async_trait;
use std::sync::Arc;

use crate::{
    model::template::ChannelKind,
    server::{
        error::guild::GuildApiError,
        model::guild::{
            GuildCategory, GuildChannelInfo, GuildLayout, GuildRole, NewCategory, NewChannel,
            NewRole, RoleOverwrite,
        },
        service::guild_api::GuildApi,
    },
};

/// One guild reached through the bot's HTTP client.
pub struct SerenityGuildApi {
    http: Arc<Http>,
    guild_id: GuildId,
    guild_name: String,
}

impl SerenityGuildApi {
    pub fn new(http: Arc<Http>, guild_id: GuildId, guild_name: impl Into<String>) -> Self {
        Self {
            http,
            guild_id,
            guild_name: guild_name.into(),
        }
    }
}

#[async_trait]
impl GuildApi for SerenityGuildApi {
    fn guild_id(&self) -> u64 {
        self.guild_id.get()
    }

    fn guild_name(&self) -> &str {
        &self.guild_name
    }

    async fn roles(&self) -> Result<Vec<GuildRole>, GuildApiError> {
        let roles = self.guild_id.roles(&self.http).await?;
        let guild_id = self.guild_id.get();

        Ok(roles
            .values()
            .map(|role| GuildRole::from_serenity(guild_id, role))
            .collect())
    }

    async fn layout(&self) -> Result<GuildLayout, GuildApiError> {
        let channels = self.guild_id.channels(&self.http).await?;

        Ok(GuildLayout::from_serenity(channels.values()))
    }

    async fn create_role(&self, role: NewRole, reason: &str) -> Result<GuildRole, GuildApiError> {
        let builder = EditRole::new()
            .name(&role.name)
            .colour(role.color)
            .hoist(role.hoist)
            .mentionable(role.mentionable)
            .permissions(role.permissions)
            .audit_log_reason(reason);

        let created = self.guild_id.create_role(&self.http, builder).await?;

        Ok(GuildRole::from_serenity(self.guild_id.get(), &created))
    }

    async fn create_category(
        &self,
        category: NewCategory,
        reason: &str,
    ) -> Result<GuildCategory, GuildApiError> {
        let builder = CreateChannel::new(&category.name)
            .kind(ChannelType::Category)
            .permissions(to_serenity_overwrites(&category.overwrites))
            .audit_log_reason(reason);

        let created = self.guild_id.create_channel(&self.http, builder).await?;

        Ok(GuildCategory::from_serenity(&created))
    }

    async fn create_channel(
        &self,
        channel: NewChannel,
        reason: &str,
    ) -> Result<GuildChannelInfo, GuildApiError> {
        let builder = CreateChannel::new(&channel.name)
            .category(ChannelId::new(channel.parent_id))
            .permissions(to_serenity_overwrites(&channel.overwrites))
            .audit_log_reason(reason);

        let builder = match channel.kind {
            ChannelKind::Text => builder
                .kind(ChannelType::Text)
                .topic(&channel.topic)
                .rate_limit_per_user(channel.slowmode)
                .nsfw(channel.nsfw),
            ChannelKind::Voice => builder
                .kind(ChannelType::Voice)
                .bitrate(channel.bitrate)
                .user_limit(channel.user_limit),
            ChannelKind::Forum => builder
                .kind(ChannelType::Forum)
                .topic(&channel.topic)
                .rate_limit_per_user(channel.slowmode)
                .nsfw(channel.nsfw),
        };

        let created = self.guild_id.create_channel(&self.http, builder).await?;

        channel_info(&created)
    }

    async fn set_category_overwrite(
        &self,
        category_id: u64,
        overwrite: RoleOverwrite,
        _reason: &str,
    ) -> Result<(), GuildApiError> {
        ChannelId::new(category_id)
            .create_permission(&self.http, overwrite.to_serenity())
            .await?;

        Ok(())
    }
}

fn to_serenity_overwrites(
    overwrites: &[RoleOverwrite],
) -> Vec<serenity::all::PermissionOverwrite> {
    overwrites.iter().map(RoleOverwrite::to_serenity).collect()
}

fn channel_info(channel: &GuildChannel) -> Result<GuildChannelInfo, GuildApiError> {
    GuildChannelInfo::from_serenity(channel).ok_or_else(|| {
        GuildApiError::Transport(format!(
            "Discord returned unexpected channel type {:?} for '{}'",
            channel.kind, channel.name
        ))
    })
}
