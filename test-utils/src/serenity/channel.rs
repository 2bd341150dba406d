//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel, Permissions};

/// Creates a test Serenity GuildChannel without parent or overwrites.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Owning guild ID
/// - `name` - Channel name
/// - `kind` - Channel type (category, text, voice, forum, ...)
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: ChannelType,
) -> GuildChannel {
    ChannelBuilder::new(channel_id, guild_id, name, kind).build()
}

/// Builder for Serenity guild channels.
///
/// # Example
///
/// ```rust,ignore
/// let chat = ChannelBuilder::new(20, 1, "chat", ChannelType::Text)
///     .parent(10)
///     .topic("General talk")
///     .role_overwrite(30, Permissions::SEND_MESSAGES, Permissions::empty())
///     .build();
/// ```
pub struct ChannelBuilder {
    channel_id: u64,
    guild_id: u64,
    name: String,
    kind: ChannelType,
    parent_id: Option<u64>,
    position: u16,
    topic: Option<String>,
    nsfw: bool,
    slowmode: Option<u16>,
    bitrate: Option<u32>,
    user_limit: Option<u32>,
    overwrites: Vec<serde_json::Value>,
}

impl ChannelBuilder {
    pub fn new(channel_id: u64, guild_id: u64, name: &str, kind: ChannelType) -> Self {
        Self {
            channel_id,
            guild_id,
            name: name.to_string(),
            kind,
            parent_id: None,
            position: 0,
            topic: None,
            nsfw: false,
            slowmode: None,
            bitrate: None,
            user_limit: None,
            overwrites: Vec::new(),
        }
    }

    pub fn parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn position(mut self, position: u16) -> Self {
        self.position = position;
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.topic = Some(topic.to_string());
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    pub fn slowmode(mut self, seconds: u16) -> Self {
        self.slowmode = Some(seconds);
        self
    }

    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn user_limit(mut self, user_limit: u32) -> Self {
        self.user_limit = Some(user_limit);
        self
    }

    /// Adds an overwrite targeting a role.
    pub fn role_overwrite(mut self, role_id: u64, allow: Permissions, deny: Permissions) -> Self {
        self.overwrites.push(overwrite(role_id, 0, allow, deny));
        self
    }

    /// Adds an overwrite targeting a member.
    pub fn member_overwrite(mut self, user_id: u64, allow: Permissions, deny: Permissions) -> Self {
        self.overwrites.push(overwrite(user_id, 1, allow, deny));
        self
    }

    /// # Panics
    /// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
    pub fn build(self) -> GuildChannel {
        serde_json::from_value(serde_json::json!({
            "id": self.channel_id.to_string(),
            "guild_id": self.guild_id.to_string(),
            "type": u8::from(self.kind),
            "name": self.name,
            "parent_id": self.parent_id.map(|id| id.to_string()),
            "position": self.position,
            "topic": self.topic,
            "nsfw": self.nsfw,
            "rate_limit_per_user": self.slowmode,
            "bitrate": self.bitrate,
            "user_limit": self.user_limit,
            "permission_overwrites": self.overwrites,
            "flags": 0,
            "available_tags": [],
            "applied_tags": [],
        }))
        .expect("Failed to create test channel - invalid JSON structure")
    }
}

fn overwrite(id: u64, kind: u8, allow: Permissions, deny: Permissions) -> serde_json::Value {
    serde_json::json!({
        "id": id.to_string(),
        "type": kind,
        "allow": allow.bits().to_string(),
        "deny": deny.bits().to_string(),
    })
}
