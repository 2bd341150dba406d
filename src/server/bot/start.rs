use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::server::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    service::{catalog::TemplateCatalog, metrics::ServiceMetrics, usage::UsageTracker},
};

/// Connects the Discord bot and runs it until the gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `catalog` - Template catalog shared with the HTTP server
/// - `tracker` - Usage tracker shared with the HTTP server
/// - `metrics` - Receives the bot's connection state
///
/// # Returns
/// - `Ok(())` - The client shut down
/// - `Err(AppError::DiscordErr)` - The client could not be built or lost its connection
pub async fn start_bot(
    config: &Config,
    catalog: Arc<TemplateCatalog>,
    tracker: Arc<dyn UsageTracker>,
    metrics: Arc<ServiceMetrics>,
) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(
        catalog,
        tracker,
        metrics.clone(),
        config.template_reviewer_id,
    );

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    let result = client.start().await;
    metrics.set_bot_connected(false);
    result?;

    Ok(())
}
