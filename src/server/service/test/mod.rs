use crate::{
    model::template::{ChannelKind, Template},
    server::{
        error::{guild::GuildApiError, AppError},
        model::{
            apply::{ApplyOptions, EntityKind, ItemStatus, SkipReason},
            guild::RoleOverwrite,
            permission::Overwrite,
        },
        service::{apply::TemplateApplier, backup::GuildBackupService, guild_api::GuildApi},
    },
};
use fake_guild::{Call, FakeGuild, RecordingTracker, GUILD_ID};
use serenity::all::Permissions;

mod fake_guild;
mod preview;
mod round_trip;

/// Parses a template from inline JSON.
fn template(value: serde_json::Value) -> Template {
    serde_json::from_value(value).unwrap()
}

/// One role, one category and one text channel.
fn example_template() -> Template {
    template(serde_json::json!({
        "name": "Example",
        "roles": [{ "name": "Mod", "permissions": { "kick_members": true } }],
        "categories": [{ "name": "General", "channels": [{ "name": "chat", "type": "text" }] }]
    }))
}

/// Text and voice channels with category and channel overwrites.
fn community_template() -> Template {
    template(serde_json::json!({
        "name": "Community",
        "description": "A community server",
        "category": "Community",
        "roles": [
            { "name": "Admin", "color": "0xe74c3c", "hoist": true, "permissions": { "administrator": true } },
            { "name": "Mod", "color": "0x3498db", "mentionable": true, "permissions": { "kick_members": true, "manage_messages": true } },
            { "name": "Member", "permissions": {} }
        ],
        "categories": [
            {
                "name": "Info",
                "permissions": {
                    "Member": { "read_messages": true, "send_messages": false },
                    "Mod": { "send_messages": true }
                },
                "channels": [
                    { "name": "rules", "type": "text", "topic": "Read first" },
                    { "name": "announcements", "type": "text", "permissions": { "Member": { "add_reactions": false } } }
                ]
            },
            {
                "name": "Voice",
                "channels": [
                    { "name": "Lounge", "type": "voice", "bitrate": 96000, "user_limit": 10 },
                    { "name": "general", "type": "text" }
                ]
            }
        ]
    }))
}

fn role_id(guild: &FakeGuild, name: &str) -> u64 {
    guild.role(name).unwrap().id
}

fn overwrite_of(overwrites: &[RoleOverwrite], role_id: u64) -> Option<Overwrite> {
    overwrites
        .iter()
        .find(|o| o.role_id == role_id)
        .map(|o| o.overwrite)
}
