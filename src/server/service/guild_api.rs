//! Capability surface of a remote guild required by the applier and the backup
//! serializer.
//!
//! Every call may fail with a permission, rate-limit or transport error. Calls are
//! issued sequentially by a single apply/backup invocation; implementations do not
//! need to be internally ordered beyond that.

use serenity::async_trait;

use crate::server::{
    error::guild::GuildApiError,
    model::guild::{
        GuildCategory, GuildChannelInfo, GuildLayout, GuildRole, NewCategory, NewChannel, NewRole,
        RoleOverwrite,
    },
};

#[async_trait]
pub trait GuildApi: Send + Sync {
    fn guild_id(&self) -> u64;

    fn guild_name(&self) -> &str;

    /// All roles of the guild, including `@everyone` and managed roles.
    async fn roles(&self) -> Result<Vec<GuildRole>, GuildApiError>;

    /// All categories and channels of the guild.
    async fn layout(&self) -> Result<GuildLayout, GuildApiError>;

    async fn create_role(&self, role: NewRole, reason: &str) -> Result<GuildRole, GuildApiError>;

    async fn create_category(
        &self,
        category: NewCategory,
        reason: &str,
    ) -> Result<GuildCategory, GuildApiError>;

    async fn create_channel(
        &self,
        channel: NewChannel,
        reason: &str,
    ) -> Result<GuildChannelInfo, GuildApiError>;

    /// Replaces the overwrite for one role on an existing category.
    async fn set_category_overwrite(
        &self,
        category_id: u64,
        overwrite: RoleOverwrite,
        reason: &str,
    ) -> Result<(), GuildApiError>;
}
