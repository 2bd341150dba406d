//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role` structs
//! for testing purposes. These factories create valid Role objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::{Permissions, Role};

/// Creates a test Serenity Role with customizable fields.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed, not
/// mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 24-bit RGB integer
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "Admin", 0xFF0000, 10);
/// assert_eq!(role.colour.0, 0xFF0000);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    RoleBuilder::new(role_id, name)
        .color(color)
        .position(position)
        .build()
}

/// Builder for Serenity roles with permissions and flags.
///
/// # Example
///
/// ```rust,ignore
/// let bot_role = RoleBuilder::new(42, "Music Bot")
///     .managed(true)
///     .permissions(Permissions::CONNECT | Permissions::SPEAK)
///     .build();
/// ```
pub struct RoleBuilder {
    role_id: u64,
    name: String,
    color: u32,
    position: i16,
    hoist: bool,
    mentionable: bool,
    managed: bool,
    permissions: Permissions,
}

impl RoleBuilder {
    pub fn new(role_id: u64, name: &str) -> Self {
        Self {
            role_id,
            name: name.to_string(),
            color: 0,
            position: 1,
            hoist: false,
            mentionable: false,
            managed: false,
            permissions: Permissions::empty(),
        }
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn position(mut self, position: i16) -> Self {
        self.position = position;
        self
    }

    pub fn hoist(mut self, hoist: bool) -> Self {
        self.hoist = hoist;
        self
    }

    pub fn mentionable(mut self, mentionable: bool) -> Self {
        self.mentionable = mentionable;
        self
    }

    /// Marks the role as owned by an integration.
    pub fn managed(mut self, managed: bool) -> Self {
        self.managed = managed;
        self
    }

    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// # Panics
    /// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
    pub fn build(self) -> Role {
        serde_json::from_value(serde_json::json!({
            "id": self.role_id.to_string(),
            "name": self.name,
            "color": self.color,
            "colors": {
                "primary_color": self.color,
                "secondary_color": null,
                "tertiary_color": null,
            },
            "hoist": self.hoist,
            "icon": null,
            "unicode_emoji": null,
            "position": self.position,
            "permissions": self.permissions.bits().to_string(),
            "managed": self.managed,
            "mentionable": self.mentionable,
        }))
        .expect("Failed to create test role - invalid JSON structure")
    }
}
