//! Options and per-item outcomes of applying a template.

use serde::{Deserialize, Serialize};

use crate::server::error::{guild::GuildApiError, template::TemplateError};

fn enabled() -> bool {
    true
}

/// Independent toggles controlling which parts of a template are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOptions {
    #[serde(default = "enabled")]
    pub include_roles: bool,
    #[serde(default = "enabled")]
    pub include_categories: bool,
    #[serde(default = "enabled")]
    pub include_text_channels: bool,
    #[serde(default = "enabled")]
    pub include_voice_channels: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            include_roles: true,
            include_categories: true,
            include_text_channels: true,
            include_voice_channels: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Role,
    Category,
    Channel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A channel of the same name already exists in the category.
    AlreadyExists,
    /// The channel type is disabled by the apply options.
    Excluded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemStatus {
    Created,
    /// Matched an existing entity by name and left it untouched.
    Reused,
    /// Matched an existing category by name and refreshed its overwrites.
    Updated,
    Skipped(SkipReason),
    /// The remote call for this item failed.
    Failed(GuildApiError),
    /// The item carries a value that cannot be sent to the guild.
    Invalid(TemplateError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    pub kind: EntityKind,
    pub name: String,
    pub status: ItemStatus,
}

/// Everything the applier did, one outcome per template item it visited.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyReport {
    pub template_name: String,
    pub guild_id: u64,
    pub outcomes: Vec<ItemOutcome>,
}

impl ApplyReport {
    pub fn new(template_name: impl Into<String>, guild_id: u64) -> Self {
        Self {
            template_name: template_name.into(),
            guild_id,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: EntityKind, name: impl Into<String>, status: ItemStatus) {
        self.outcomes.push(ItemOutcome {
            kind,
            name: name.into(),
            status,
        });
    }

    /// Number of entities of `kind` that were newly created.
    pub fn created(&self, kind: EntityKind) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.kind == kind && o.status == ItemStatus::Created)
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(o.status, ItemStatus::Failed(_) | ItemStatus::Invalid(_))
            })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
