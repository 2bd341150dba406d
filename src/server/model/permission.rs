//! Permission vocabulary and role-scoped overwrites.
//!
//! Template documents name permissions with strings. Every name is resolved through a
//! fixed table to a Serenity `Permissions` bit; names outside the table are ignored
//! with a warning rather than failing the operation.

use serenity::all::Permissions;

use crate::model::template::{OverwriteMap, PermissionMap};

/// Canonical permission names and their bits, in bit order.
///
/// Backups always write these names.
const PERMISSIONS: &[(&str, Permissions)] = &[
    ("create_instant_invite", Permissions::CREATE_INSTANT_INVITE),
    ("kick_members", Permissions::KICK_MEMBERS),
    ("ban_members", Permissions::BAN_MEMBERS),
    ("administrator", Permissions::ADMINISTRATOR),
    ("manage_channels", Permissions::MANAGE_CHANNELS),
    ("manage_guild", Permissions::MANAGE_GUILD),
    ("add_reactions", Permissions::ADD_REACTIONS),
    ("view_audit_log", Permissions::VIEW_AUDIT_LOG),
    ("priority_speaker", Permissions::PRIORITY_SPEAKER),
    ("stream", Permissions::STREAM),
    ("read_messages", Permissions::VIEW_CHANNEL),
    ("send_messages", Permissions::SEND_MESSAGES),
    ("send_tts_messages", Permissions::SEND_TTS_MESSAGES),
    ("manage_messages", Permissions::MANAGE_MESSAGES),
    ("embed_links", Permissions::EMBED_LINKS),
    ("attach_files", Permissions::ATTACH_FILES),
    ("read_message_history", Permissions::READ_MESSAGE_HISTORY),
    ("mention_everyone", Permissions::MENTION_EVERYONE),
    ("external_emojis", Permissions::USE_EXTERNAL_EMOJIS),
    ("view_guild_insights", Permissions::VIEW_GUILD_INSIGHTS),
    ("connect", Permissions::CONNECT),
    ("speak", Permissions::SPEAK),
    ("mute_members", Permissions::MUTE_MEMBERS),
    ("deafen_members", Permissions::DEAFEN_MEMBERS),
    ("move_members", Permissions::MOVE_MEMBERS),
    ("use_voice_activation", Permissions::USE_VAD),
    ("change_nickname", Permissions::CHANGE_NICKNAME),
    ("manage_nicknames", Permissions::MANAGE_NICKNAMES),
    ("manage_roles", Permissions::MANAGE_ROLES),
    ("manage_webhooks", Permissions::MANAGE_WEBHOOKS),
    ("manage_expressions", Permissions::MANAGE_GUILD_EXPRESSIONS),
    ("use_application_commands", Permissions::USE_APPLICATION_COMMANDS),
    ("request_to_speak", Permissions::REQUEST_TO_SPEAK),
    ("manage_events", Permissions::MANAGE_EVENTS),
    ("manage_threads", Permissions::MANAGE_THREADS),
    ("create_public_threads", Permissions::CREATE_PUBLIC_THREADS),
    ("create_private_threads", Permissions::CREATE_PRIVATE_THREADS),
    ("external_stickers", Permissions::USE_EXTERNAL_STICKERS),
    ("send_messages_in_threads", Permissions::SEND_MESSAGES_IN_THREADS),
    ("use_embedded_activities", Permissions::USE_EMBEDDED_ACTIVITIES),
    ("moderate_members", Permissions::MODERATE_MEMBERS),
    (
        "view_creator_monetization_analytics",
        Permissions::VIEW_CREATOR_MONETIZATION_ANALYTICS,
    ),
    ("use_soundboard", Permissions::USE_SOUNDBOARD),
    ("create_expressions", Permissions::CREATE_GUILD_EXPRESSIONS),
    ("create_events", Permissions::CREATE_EVENTS),
    ("use_external_sounds", Permissions::USE_EXTERNAL_SOUNDS),
    ("send_voice_messages", Permissions::SEND_VOICE_MESSAGES),
    ("set_voice_channel_status", Permissions::SET_VOICE_CHANNEL_STATUS),
    ("send_polls", Permissions::SEND_POLLS),
    ("use_external_apps", Permissions::USE_EXTERNAL_APPS),
];

/// Accepted alternative spellings mapped to their canonical name.
const ALIASES: &[(&str, &str)] = &[
    ("view_channel", "read_messages"),
    ("use_external_emojis", "external_emojis"),
    ("use_vad", "use_voice_activation"),
    ("manage_permissions", "manage_roles"),
    ("manage_emojis", "manage_expressions"),
    ("manage_emojis_and_stickers", "manage_expressions"),
    ("use_external_stickers", "external_stickers"),
    ("start_embedded_activities", "use_embedded_activities"),
];

/// Looks up the permission bit for a name or alias.
///
/// # Returns
/// - `Some(Permissions)` - Single-bit set for the named permission
/// - `None` - Name is not part of the vocabulary
pub fn permission_bit(name: &str) -> Option<Permissions> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name);

    PERMISSIONS
        .iter()
        .find(|(known, _)| *known == canonical)
        .map(|(_, bit)| *bit)
}

/// Canonical names of every vocabulary bit set in `bits`, in bit order.
pub fn permission_names(bits: Permissions) -> impl Iterator<Item = &'static str> {
    PERMISSIONS
        .iter()
        .filter(move |(_, bit)| bits.contains(*bit))
        .map(|(name, _)| *name)
}

/// Builds guild-wide role permissions from a template permission map.
///
/// `true` grants the bit, `false` leaves it unset. Unknown names are skipped.
pub fn permissions_from_map(map: &PermissionMap) -> Permissions {
    let mut bits = Permissions::empty();

    for (name, granted) in map {
        match permission_bit(name) {
            Some(bit) => bits.set(bit, *granted),
            None => tracing::warn!("Ignoring unknown permission '{}'", name),
        }
    }

    bits
}

/// Lists every granted bit as `name: true`. Unset bits are omitted rather than written
/// as `false`.
pub fn permissions_to_map(bits: Permissions) -> PermissionMap {
    permission_names(bits)
        .map(|name| (name.to_string(), true))
        .collect()
}

/// Resolved allow/deny pair for one role on one category or channel.
///
/// A bit is never present in both sets. Two overwrites are equal iff both sets are
/// identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overwrite {
    pub allow: Permissions,
    pub deny: Permissions,
}

impl Overwrite {
    pub fn new(allow: Permissions, deny: Permissions) -> Self {
        Self {
            allow,
            deny: deny.difference(allow),
        }
    }

    /// Builds an overwrite from a template overwrite map.
    pub fn from_map(map: &OverwriteMap) -> Self {
        let mut overwrite = Self::default();
        overwrite.merge(map);
        overwrite
    }

    /// Applies `map` on top of this overwrite key by key.
    ///
    /// Keys present in `map` replace the current state of that bit; keys absent from
    /// `map` keep their current allow/deny value.
    pub fn merge(&mut self, map: &OverwriteMap) {
        for (name, value) in map {
            let Some(bit) = permission_bit(name) else {
                tracing::warn!("Ignoring unknown overwrite permission '{}'", name);
                continue;
            };

            self.allow.remove(bit);
            self.deny.remove(bit);

            match value {
                Some(true) => self.allow.insert(bit),
                Some(false) => self.deny.insert(bit),
                None => {}
            }
        }
    }

    /// Explicit keys only: allowed bits as `true`, denied bits as `false`.
    pub fn to_map(&self) -> OverwriteMap {
        let mut map: OverwriteMap = permission_names(self.allow)
            .map(|name| (name.to_string(), Some(true)))
            .collect();

        for name in permission_names(self.deny) {
            map.insert(name.to_string(), Some(false));
        }

        map
    }

    /// `true` when neither set has a bit.
    pub fn is_neutral(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}
