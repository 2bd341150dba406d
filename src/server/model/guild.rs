//! Snapshot of a remote guild's role/category/channel hierarchy.
//!
//! These are the domain shapes the applier and the backup serializer work on. They are
//! built from Serenity models by the bot adapter and directly by the in-memory fake
//! used in tests, so neither service depends on Serenity's HTTP layer.

use serenity::all::{
    ChannelType, GuildChannel, PermissionOverwrite, PermissionOverwriteType, Role, RoleId,
};

use crate::model::template::ChannelKind;
use crate::server::model::permission::Overwrite;

/// Overwrite targeting a single role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleOverwrite {
    pub role_id: u64,
    pub overwrite: Overwrite,
}

/// Role as it exists in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    pub id: u64,
    pub name: String,
    /// 24-bit RGB color.
    pub color: u32,
    pub hoist: bool,
    pub mentionable: bool,
    pub permissions: serenity::all::Permissions,
    /// Owned by an integration or bot; never backed up.
    pub managed: bool,
    /// The `@everyone` role; never backed up.
    pub is_default: bool,
    /// Position in the hierarchy (higher = more important).
    pub position: u16,
}

impl GuildRole {
    /// Converts a Serenity role. The default role shares its id with the guild.
    pub fn from_serenity(guild_id: u64, role: &Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
            color: role.colour.0,
            hoist: role.hoist,
            mentionable: role.mentionable,
            permissions: role.permissions,
            managed: role.managed,
            is_default: role.id.get() == guild_id,
            position: role.position,
        }
    }
}

/// Category channel with its role overwrites.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildCategory {
    pub id: u64,
    pub name: String,
    pub position: u16,
    pub overwrites: Vec<RoleOverwrite>,
}

impl GuildCategory {
    pub fn from_serenity(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            position: channel.position,
            overwrites: role_overwrites(channel),
        }
    }

    pub fn overwrite_for(&self, role_id: u64) -> Option<&Overwrite> {
        find_overwrite(&self.overwrites, role_id)
    }
}

/// Non-category guild channel.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildChannelInfo {
    pub id: u64,
    pub name: String,
    pub kind: ChannelKind,
    pub parent_id: Option<u64>,
    pub position: u16,
    pub topic: Option<String>,
    pub slowmode: u16,
    pub nsfw: bool,
    pub bitrate: Option<u32>,
    pub user_limit: Option<u32>,
    pub overwrites: Vec<RoleOverwrite>,
}

impl GuildChannelInfo {
    /// Converts a text, announcement, voice, stage or forum channel.
    ///
    /// # Returns
    /// - `Some(GuildChannelInfo)` - The channel has a template representation
    /// - `None` - Categories, threads and other channel types
    pub fn from_serenity(channel: &GuildChannel) -> Option<Self> {
        let kind = match channel.kind {
            ChannelType::Text | ChannelType::News => ChannelKind::Text,
            ChannelType::Voice | ChannelType::Stage => ChannelKind::Voice,
            ChannelType::Forum => ChannelKind::Forum,
            _ => return None,
        };

        Some(Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            kind,
            parent_id: channel.parent_id.map(|id| id.get()),
            position: channel.position,
            topic: channel.topic.clone(),
            slowmode: channel.rate_limit_per_user.unwrap_or(0),
            nsfw: channel.nsfw,
            bitrate: channel.bitrate,
            user_limit: channel.user_limit,
            overwrites: role_overwrites(channel),
        })
    }
}

fn find_overwrite(overwrites: &[RoleOverwrite], role_id: u64) -> Option<&Overwrite> {
    overwrites
        .iter()
        .find(|o| o.role_id == role_id)
        .map(|o| &o.overwrite)
}

/// Channels of a guild split into categories and everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildLayout {
    pub categories: Vec<GuildCategory>,
    pub channels: Vec<GuildChannelInfo>,
}

impl GuildLayout {
    /// Splits Serenity guild channels. Channel types other than category, text,
    /// announcement, voice, stage and forum are dropped.
    pub fn from_serenity<'a>(channels: impl IntoIterator<Item = &'a GuildChannel>) -> Self {
        let mut layout = GuildLayout::default();

        for channel in channels {
            if channel.kind == ChannelType::Category {
                layout.categories.push(GuildCategory::from_serenity(channel));
            } else if let Some(info) = GuildChannelInfo::from_serenity(channel) {
                layout.channels.push(info);
            }
        }

        layout
    }

    pub fn category_by_name(&self, name: &str) -> Option<&GuildCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Channels parented to `category_id`, in no particular order.
    pub fn channels_in(&self, category_id: u64) -> impl Iterator<Item = &GuildChannelInfo> {
        self.channels
            .iter()
            .filter(move |c| c.parent_id == Some(category_id))
    }
}

impl RoleOverwrite {
    /// Converts to a Serenity overwrite targeting the role.
    pub fn to_serenity(&self) -> PermissionOverwrite {
        PermissionOverwrite {
            allow: self.overwrite.allow,
            deny: self.overwrite.deny,
            kind: PermissionOverwriteType::Role(RoleId::new(self.role_id)),
        }
    }
}

/// Keeps role overwrites only; member overwrites have no template representation.
fn role_overwrites(channel: &GuildChannel) -> Vec<RoleOverwrite> {
    channel
        .permission_overwrites
        .iter()
        .filter_map(|o| match o.kind {
            PermissionOverwriteType::Role(role_id) => Some(RoleOverwrite {
                role_id: role_id.get(),
                overwrite: Overwrite::new(o.allow, o.deny),
            }),
            _ => None,
        })
        .collect()
}

/// Parameters for creating a role.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub name: String,
    pub color: u32,
    pub hoist: bool,
    pub mentionable: bool,
    pub permissions: serenity::all::Permissions,
}

/// Parameters for creating a category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub overwrites: Vec<RoleOverwrite>,
}

/// Parameters for creating a text, voice or forum channel under a category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChannel {
    pub name: String,
    pub kind: ChannelKind,
    pub parent_id: u64,
    pub overwrites: Vec<RoleOverwrite>,
    pub topic: String,
    pub slowmode: u16,
    pub nsfw: bool,
    pub bitrate: u32,
    pub user_limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::Permissions;
    use test_utils::serenity::{
        channel::ChannelBuilder, create_test_channel, create_test_role, role::RoleBuilder,
    };

    const GUILD_ID: u64 = 1;

    #[test]
    fn detects_default_and_managed_roles() {
        let everyone =
            GuildRole::from_serenity(GUILD_ID, &create_test_role(GUILD_ID, "@everyone", 0, 0));
        let bot = GuildRole::from_serenity(
            GUILD_ID,
            &RoleBuilder::new(42, "Music Bot").managed(true).position(3).build(),
        );
        let admin = GuildRole::from_serenity(
            GUILD_ID,
            &RoleBuilder::new(43, "Admin")
                .color(0xe74c3c)
                .hoist(true)
                .permissions(Permissions::ADMINISTRATOR)
                .position(5)
                .build(),
        );

        assert!(everyone.is_default);
        assert!(bot.managed && !bot.is_default);
        assert_eq!(admin.color, 0xe74c3c);
        assert_eq!(admin.position, 5);
        assert!(admin.hoist);
        assert_eq!(admin.permissions, Permissions::ADMINISTRATOR);
    }

    #[test]
    fn splits_layout_and_keeps_role_overwrites_only() {
        let category = ChannelBuilder::new(10, GUILD_ID, "General", ChannelType::Category)
            .role_overwrite(43, Permissions::VIEW_CHANNEL, Permissions::empty())
            .member_overwrite(99, Permissions::SEND_MESSAGES, Permissions::empty())
            .build();
        let chat = ChannelBuilder::new(11, GUILD_ID, "chat", ChannelType::Text)
            .parent(10)
            .topic("Say hi")
            .slowmode(5)
            .build();
        let lounge = ChannelBuilder::new(12, GUILD_ID, "Lounge", ChannelType::Voice)
            .parent(10)
            .bitrate(96_000)
            .user_limit(8)
            .build();
        let thread = create_test_channel(13, GUILD_ID, "thread", ChannelType::PublicThread);

        let layout = GuildLayout::from_serenity([&category, &chat, &lounge, &thread]);

        assert_eq!(layout.categories.len(), 1);
        assert_eq!(layout.channels.len(), 2);

        let general = layout.category_by_name("General").unwrap();
        assert_eq!(general.overwrites.len(), 1);
        assert_eq!(
            general.overwrite_for(43),
            Some(&Overwrite::new(Permissions::VIEW_CHANNEL, Permissions::empty()))
        );

        let chat = layout.channels.iter().find(|c| c.name == "chat").unwrap();
        assert_eq!(chat.kind, ChannelKind::Text);
        assert_eq!(chat.parent_id, Some(10));
        assert_eq!(chat.topic.as_deref(), Some("Say hi"));
        assert_eq!(chat.slowmode, 5);

        let lounge = layout.channels.iter().find(|c| c.name == "Lounge").unwrap();
        assert_eq!(lounge.kind, ChannelKind::Voice);
        assert_eq!(lounge.bitrate, Some(96_000));
        assert_eq!(lounge.user_limit, Some(8));
        assert_eq!(layout.channels_in(10).count(), 2);
    }

    #[test]
    fn converts_role_overwrite_to_serenity() {
        let overwrite = RoleOverwrite {
            role_id: 43,
            overwrite: Overwrite::new(Permissions::SPEAK, Permissions::CONNECT),
        };

        let converted = overwrite.to_serenity();

        assert_eq!(converted.allow, Permissions::SPEAK);
        assert_eq!(converted.deny, Permissions::CONNECT);
        assert_eq!(converted.kind, PermissionOverwriteType::Role(RoleId::new(43)));
    }
}
