//! Portable template documents.
//!
//! A template describes a desired role/category/channel structure for a guild. The
//! same shape is used for bundled templates, user submissions and guild backups, so
//! every field that a backup may omit carries a serde default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Guild-wide permission bits for a role, keyed by permission name.
///
/// Absent keys mean the bit is not granted.
pub type PermissionMap = BTreeMap<String, bool>;

/// Ternary permission overwrite keyed by permission name.
///
/// `Some(true)` allows, `Some(false)` denies, `None` (JSON `null`) resets the key to
/// inherit. An absent key also inherits.
pub type OverwriteMap = BTreeMap<String, Option<bool>>;

/// Overwrites keyed by role name.
pub type RoleOverwrites = BTreeMap<String, OverwriteMap>;

const DEFAULT_COLOR: &str = "0x000000";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_category() -> String {
    "Other".to_string()
}

/// Declarative server template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleSpec>,
    #[serde(default)]
    pub categories: Vec<CategorySpec>,
    #[serde(default)]
    pub is_ai_generated: bool,
}

impl Template {
    /// Total number of channels across all categories.
    pub fn channel_count(&self) -> usize {
        self.categories.iter().map(|c| c.channels.len()).sum()
    }
}

/// Role definition. The name is the natural key used to reconcile against a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSpec {
    pub name: String,
    /// 24-bit RGB color as a hex string, e.g. `"0x3498db"`.
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub mentionable: bool,
    #[serde(default)]
    pub permissions: PermissionMap,
}

/// Category definition with role overwrites and its ordered channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    #[serde(default)]
    pub permissions: RoleOverwrites,
    #[serde(default)]
    pub channels: Vec<ChannelSpec>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    #[default]
    Text,
    Voice,
    Forum,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Text => "text",
            ChannelKind::Voice => "voice",
            ChannelKind::Forum => "forum",
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel definition.
///
/// `topic`, `slowmode` and `nsfw` apply to text and forum channels; `bitrate` and
/// `user_limit` apply to voice channels. Channel `permissions` are merged key by key
/// on top of the parent category's overwrite for the same role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ChannelKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slowmode: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    #[serde(default)]
    pub permissions: RoleOverwrites,
}

impl ChannelSpec {
    /// Creates a channel definition with no type-specific fields.
    pub fn new(name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            name: name.into(),
            kind,
            topic: None,
            slowmode: None,
            nsfw: None,
            bitrate: None,
            user_limit: None,
            permissions: RoleOverwrites::new(),
        }
    }
}

/// Review state of a user-submitted template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    pub submitted_by: u64,
    /// UTC submission time formatted as `%Y-%m-%d %H:%M:%S`.
    pub submitted_at: String,
    #[serde(default)]
    pub status: SubmissionStatus,
}

/// A submitted template together with its review metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTemplate {
    pub data: Template,
    pub metadata: SubmissionMetadata,
}
