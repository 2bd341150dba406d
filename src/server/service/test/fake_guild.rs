//! In-memory guild implementing `GuildApi`.
//!
//! New roles are inserted directly above `@everyone` and push every other role up one
//! position, like a real guild does. Failures can be injected per entity name.

use serenity::{all::Permissions, async_trait};
use std::{collections::HashMap, sync::Mutex};

use crate::{
    model::template::ChannelKind,
    server::{
        error::guild::GuildApiError,
        model::{
            guild::{
                GuildCategory, GuildChannelInfo, GuildLayout, GuildRole, NewCategory, NewChannel,
                NewRole, RoleOverwrite,
            },
            usage::{ApplyEvent, ViewEvent},
        },
        service::{guild_api::GuildApi, usage::UsageTracker},
    },
};

pub const GUILD_ID: u64 = 1_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateRole(String),
    CreateCategory(String),
    CreateChannel(String),
    SetCategoryOverwrite { category: String, role_id: u64 },
}

#[derive(Default)]
struct State {
    next_id: u64,
    roles: Vec<GuildRole>,
    layout: GuildLayout,
    failures: HashMap<String, GuildApiError>,
    listing_failure: Option<GuildApiError>,
    calls: Vec<Call>,
    reasons: Vec<String>,
}

impl State {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn check(&self, name: &str) -> Result<(), GuildApiError> {
        match self.failures.get(name) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub struct FakeGuild {
    id: u64,
    name: String,
    state: Mutex<State>,
}

impl FakeGuild {
    /// Creates a guild containing only the `@everyone` role.
    pub fn new(name: &str) -> Self {
        let everyone = GuildRole {
            id: GUILD_ID,
            name: "@everyone".to_string(),
            color: 0,
            hoist: false,
            mentionable: false,
            permissions: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
            managed: false,
            is_default: true,
            position: 0,
        };

        Self {
            id: GUILD_ID,
            name: name.to_string(),
            state: Mutex::new(State {
                next_id: GUILD_ID,
                roles: vec![everyone],
                ..Default::default()
            }),
        }
    }

    /// Adds a role owned by an integration.
    pub fn add_managed_role(&self, name: &str) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let position = state.roles.len() as u16;
        state.roles.push(GuildRole {
            id,
            name: name.to_string(),
            color: 0,
            hoist: false,
            mentionable: false,
            permissions: Permissions::empty(),
            managed: true,
            is_default: false,
            position,
        });
        id
    }

    /// Makes every create or update of the entity named `name` fail.
    pub fn fail_on(&self, name: &str, error: GuildApiError) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(name.to_string(), error);
    }

    /// Makes listing roles and channels fail.
    pub fn fail_listing(&self, error: GuildApiError) {
        self.state.lock().unwrap().listing_failure = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn reasons(&self) -> Vec<String> {
        self.state.lock().unwrap().reasons.clone()
    }

    pub fn role(&self, name: &str) -> Option<GuildRole> {
        let state = self.state.lock().unwrap();
        state.roles.iter().find(|r| r.name == name).cloned()
    }

    pub fn role_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.roles.iter().map(|r| r.name.clone()).collect()
    }

    pub fn category(&self, name: &str) -> Option<GuildCategory> {
        let state = self.state.lock().unwrap();
        state.layout.category_by_name(name).cloned()
    }

    pub fn category_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.layout.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn channel(&self, category: &str, name: &str) -> Option<GuildChannelInfo> {
        let state = self.state.lock().unwrap();
        let category = state.layout.category_by_name(category)?;
        let found = state
            .layout
            .channels_in(category.id)
            .find(|c| c.name == name)
            .cloned();
        found
    }

    pub fn channel_names(&self, kind: ChannelKind) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .layout
            .channels
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Replaces the overwrites of an existing channel, as a moderator editing it would.
    pub fn set_channel_overwrites(&self, category: &str, name: &str, overwrites: Vec<RoleOverwrite>) {
        let mut state = self.state.lock().unwrap();
        let category_id = state
            .layout
            .category_by_name(category)
            .map(|c| c.id)
            .unwrap();
        let channel = state
            .layout
            .channels
            .iter_mut()
            .find(|c| c.parent_id == Some(category_id) && c.name == name)
            .unwrap();
        channel.overwrites = overwrites;
    }
}

#[async_trait]
impl GuildApi for FakeGuild {
    fn guild_id(&self) -> u64 {
        self.id
    }

    fn guild_name(&self) -> &str {
        &self.name
    }

    async fn roles(&self) -> Result<Vec<GuildRole>, GuildApiError> {
        let state = self.state.lock().unwrap();
        if let Some(error) = &state.listing_failure {
            return Err(error.clone());
        }
        Ok(state.roles.clone())
    }

    async fn layout(&self) -> Result<GuildLayout, GuildApiError> {
        let state = self.state.lock().unwrap();
        if let Some(error) = &state.listing_failure {
            return Err(error.clone());
        }
        Ok(state.layout.clone())
    }

    async fn create_role(&self, role: NewRole, reason: &str) -> Result<GuildRole, GuildApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateRole(role.name.clone()));
        state.reasons.push(reason.to_string());
        state.check(&role.name)?;

        for existing in state.roles.iter_mut().filter(|r| !r.is_default) {
            existing.position += 1;
        }

        let created = GuildRole {
            id: state.next_id(),
            name: role.name,
            color: role.color,
            hoist: role.hoist,
            mentionable: role.mentionable,
            permissions: role.permissions,
            managed: false,
            is_default: false,
            position: 1,
        };
        state.roles.push(created.clone());
        Ok(created)
    }

    async fn create_category(
        &self,
        category: NewCategory,
        reason: &str,
    ) -> Result<GuildCategory, GuildApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateCategory(category.name.clone()));
        state.reasons.push(reason.to_string());
        state.check(&category.name)?;

        let created = GuildCategory {
            id: state.next_id(),
            name: category.name,
            position: state.layout.categories.len() as u16,
            overwrites: category.overwrites,
        };
        state.layout.categories.push(created.clone());
        Ok(created)
    }

    async fn create_channel(
        &self,
        channel: NewChannel,
        reason: &str,
    ) -> Result<GuildChannelInfo, GuildApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateChannel(channel.name.clone()));
        state.reasons.push(reason.to_string());
        state.check(&channel.name)?;

        let position = state.layout.channels_in(channel.parent_id).count() as u16;
        let voice = channel.kind == ChannelKind::Voice;
        let created = GuildChannelInfo {
            id: state.next_id(),
            name: channel.name,
            kind: channel.kind,
            parent_id: Some(channel.parent_id),
            position,
            topic: (!voice).then_some(channel.topic),
            slowmode: if voice { 0 } else { channel.slowmode },
            nsfw: !voice && channel.nsfw,
            bitrate: voice.then_some(channel.bitrate),
            user_limit: voice.then_some(channel.user_limit),
            overwrites: channel.overwrites,
        };
        state.layout.channels.push(created.clone());
        Ok(created)
    }

    async fn set_category_overwrite(
        &self,
        category_id: u64,
        overwrite: RoleOverwrite,
        reason: &str,
    ) -> Result<(), GuildApiError> {
        let mut state = self.state.lock().unwrap();
        let name = state
            .layout
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.clone())
            .ok_or_else(|| GuildApiError::Transport("Unknown category".to_string()))?;
        state.calls.push(Call::SetCategoryOverwrite {
            category: name.clone(),
            role_id: overwrite.role_id,
        });
        state.reasons.push(reason.to_string());
        state.check(&name)?;

        let category = state
            .layout
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .unwrap();
        match category
            .overwrites
            .iter_mut()
            .find(|o| o.role_id == overwrite.role_id)
        {
            Some(existing) => existing.overwrite = overwrite.overwrite,
            None => category.overwrites.push(overwrite),
        }
        Ok(())
    }
}

/// Usage tracker remembering every event.
#[derive(Default)]
pub struct RecordingTracker {
    applies: Mutex<Vec<ApplyEvent>>,
    views: Mutex<Vec<ViewEvent>>,
}

impl RecordingTracker {
    pub fn applies(&self) -> Vec<ApplyEvent> {
        self.applies.lock().unwrap().clone()
    }

    pub fn views(&self) -> Vec<ViewEvent> {
        self.views.lock().unwrap().clone()
    }
}

#[async_trait]
impl UsageTracker for RecordingTracker {
    async fn record_apply(&self, event: ApplyEvent) {
        self.applies.lock().unwrap().push(event);
    }

    async fn record_view(&self, event: ViewEvent) {
        self.views.lock().unwrap().push(event);
    }
}
