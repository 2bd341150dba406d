//! Resolution of name-keyed template overwrites into role-scoped overwrites.
//!
//! Role names that match neither a role handled by the current apply nor an existing
//! guild role are skipped silently; templates are applied best-effort.

use std::collections::HashMap;

use crate::{
    model::template::RoleOverwrites,
    server::model::{
        guild::{GuildRole, RoleOverwrite},
        permission::Overwrite,
    },
};

/// Name to role id lookup for one apply.
///
/// Roles created or reused by the apply take precedence over other guild roles of the
/// same name.
#[derive(Debug, Default)]
pub struct RoleDirectory {
    applied: HashMap<String, u64>,
    existing: Vec<(String, u64)>,
}

impl RoleDirectory {
    pub fn new(existing: &[GuildRole]) -> Self {
        Self {
            applied: HashMap::new(),
            existing: existing.iter().map(|r| (r.name.clone(), r.id)).collect(),
        }
    }

    /// Records the role handling a template role name.
    pub fn insert(&mut self, name: impl Into<String>, role_id: u64) {
        self.applied.insert(name.into(), role_id);
    }

    pub fn resolve(&self, name: &str) -> Option<u64> {
        self.applied.get(name).copied().or_else(|| {
            self.existing
                .iter()
                .find(|(existing, _)| existing == name)
                .map(|(_, id)| *id)
        })
    }
}

/// Builds category-level overwrites from a role-name keyed map.
pub fn resolve_overwrites(map: &RoleOverwrites, roles: &RoleDirectory) -> Vec<RoleOverwrite> {
    let mut resolved: Vec<RoleOverwrite> = Vec::new();

    for (role_name, permissions) in map {
        let Some(role_id) = roles.resolve(role_name) else {
            tracing::debug!("Skipping overwrite for unknown role '{}'", role_name);
            continue;
        };

        let overwrite = Overwrite::from_map(permissions);
        match resolved.iter_mut().find(|o| o.role_id == role_id) {
            Some(entry) => entry.overwrite = overwrite,
            None => resolved.push(RoleOverwrite { role_id, overwrite }),
        }
    }

    resolved
}

/// Builds channel overwrites on top of the parent category's overwrites.
///
/// Every category overwrite is carried over. For roles named in `channel_map`, keys
/// mentioned at the channel level replace the category value for that key; other keys
/// keep the category's allow/deny state.
pub fn merge_channel_overwrites(
    category: &[RoleOverwrite],
    channel_map: &RoleOverwrites,
    roles: &RoleDirectory,
) -> Vec<RoleOverwrite> {
    let mut merged = category.to_vec();

    for (role_name, permissions) in channel_map {
        let Some(role_id) = roles.resolve(role_name) else {
            tracing::debug!("Skipping channel overwrite for unknown role '{}'", role_name);
            continue;
        };

        match merged.iter_mut().find(|o| o.role_id == role_id) {
            Some(entry) => entry.overwrite.merge(permissions),
            None => merged.push(RoleOverwrite {
                role_id,
                overwrite: Overwrite::from_map(permissions),
            }),
        }
    }

    merged
}
