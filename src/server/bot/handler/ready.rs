//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after authentication. Global slash commands are
//! (re)registered here so that a deploy with changed command options takes effect on
//! the next connect.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::server::{bot::command, service::metrics::ServiceMetrics};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `metrics` - Marked as connected
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(metrics: &ServiceMetrics, ctx: Context, ready: Ready) {
    metrics.set_bot_connected(true);

    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("/templates | Creating servers")));

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}

pub fn handle_resume(metrics: &ServiceMetrics) {
    tracing::info!("Resumed Discord gateway connection");
    metrics.set_bot_connected(true);
}
