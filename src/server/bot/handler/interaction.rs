//! Slash command and autocomplete interaction handlers.
//!
//! Every command replies ephemerally: the interaction is deferred first, the
//! command runs, and the deferred response is edited with the plain-text result.
//! Commands that touch the guild structure are limited to the guild owner, and
//! submission review is limited to the configured reviewer.

use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateInteractionResponse,
    EditInteractionResponse, GuildId, Interaction,
};
use std::collections::BTreeMap;

use crate::server::{
    bot::{
        command::{self, BotCommand, CommandArgs},
        guild_api::SerenityGuildApi,
    },
    error::AppError,
    service::{
        backup::GuildBackupService,
        catalog::TemplateCatalog,
        preview::{PreviewService, Viewer},
        usage::UsageTracker,
    },
};

/// Dispatches an interaction to the command or autocomplete handler.
///
/// # Arguments
/// - `catalog` - Template catalog for lookups, applies and submissions
/// - `tracker` - Receives preview and apply usage events
/// - `reviewer_id` - User allowed to review template submissions
/// - `ctx` - Discord context for replying
/// - `interaction` - The received interaction
pub async fn handle_interaction(
    catalog: &TemplateCatalog,
    tracker: &dyn UsageTracker,
    reviewer_id: Option<u64>,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Command(command) => {
            handle_command(catalog, tracker, reviewer_id, &ctx, &command).await
        }
        Interaction::Autocomplete(autocomplete) => {
            handle_autocomplete(catalog, &ctx, &autocomplete).await
        }
        _ => {}
    }
}

async fn handle_command(
    catalog: &TemplateCatalog,
    tracker: &dyn UsageTracker,
    reviewer_id: Option<u64>,
    ctx: &Context,
    interaction: &CommandInteraction,
) {
    if let Err(e) = interaction.defer_ephemeral(&ctx.http).await {
        tracing::error!(
            "Failed to defer /{} interaction: {:?}",
            interaction.data.name,
            e
        );
        return;
    }

    let args = CommandArgs::from_resolved(&interaction.data.options());
    let content = match BotCommand::parse(&interaction.data.name, &args) {
        Some(parsed)
            if parsed.requires_reviewer()
                && !command::is_reviewer(reviewer_id, interaction.user.id.get()) =>
        {
            "Only the bot creator can review templates.".to_string()
        }
        Some(parsed) => match run_command(catalog, tracker, ctx, interaction, parsed).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to run /{}: {:?}", interaction.data.name, e);
                user_message(&e)
            }
        },
        None => {
            tracing::warn!("Received unknown command or invalid options for /{}", interaction.data.name);
            "Unknown command or missing options.".to_string()
        }
    };

    let response = EditInteractionResponse::new().content(command::fit_message(content));
    if let Err(e) = interaction.edit_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to /{} interaction: {:?}",
            interaction.data.name,
            e
        );
    }
}

async fn run_command(
    catalog: &TemplateCatalog,
    tracker: &dyn UsageTracker,
    ctx: &Context,
    interaction: &CommandInteraction,
    parsed: BotCommand,
) -> Result<String, AppError> {
    let user_id = interaction.user.id.get();

    let guild = if parsed.requires_owner() {
        let Some(guild_id) = interaction.guild_id else {
            return Ok("This command can only be used in a server.".to_string());
        };
        match owned_guild(ctx, guild_id, interaction).await? {
            Some(api) => Some(api),
            None => return Ok("This command can only be used by the server owner!".to_string()),
        }
    } else {
        None
    };

    match (parsed, guild) {
        (BotCommand::Templates, _) => Ok(command::render_catalog(&catalog.by_category())),
        (BotCommand::Preview { template }, _) => {
            let template = catalog
                .get(&template)
                .ok_or_else(|| AppError::NotFound(format!("Template '{}' not found", template)))?;
            let viewer = Viewer {
                user_id,
                guild_id: interaction.guild_id.map(|id| id.get()),
            };

            let preview = PreviewService::new(tracker)
                .preview(template, Some(viewer))
                .await;

            Ok(preview.to_markdown())
        }
        (BotCommand::Apply { template, options }, Some(api)) => {
            let report = catalog
                .apply(&api, tracker, &template, options, user_id)
                .await?;

            Ok(command::render_report(&report))
        }
        (BotCommand::Backup, Some(api)) => {
            let backup = GuildBackupService::new(&api, catalog.store())
                .backup()
                .await?;

            Ok(command::render_backup(&backup))
        }
        (
            BotCommand::SubmitTemplate {
                name,
                description,
                category,
            },
            Some(api),
        ) => {
            let mut template = GuildBackupService::new(&api, catalog.store())
                .backup()
                .await?
                .template;
            template.name = name;
            template.description = description;
            template.category = category;

            let submission = catalog.submit(user_id, template).await?;

            Ok(format!(
                "Your template **{}** has been submitted for review!\nCategory: {}\nDescription: {}",
                submission.data.name, submission.data.category, submission.data.description
            ))
        }
        (BotCommand::PendingSubmissions, _) => {
            let pending = catalog.pending_submissions().await?;

            Ok(command::render_pending(&pending))
        }
        (BotCommand::ReviewSubmission { template, status }, _) => {
            let submission = catalog.review(&template, status).await?;

            Ok(command::render_review(&submission))
        }
        (_, None) => Err(AppError::InternalError(
            "Guild command dispatched without a guild".to_string(),
        )),
    }
}

/// Builds a guild adapter when the invoking user owns the guild.
///
/// # Returns
/// - `Ok(Some(SerenityGuildApi))` - The user owns the guild
/// - `Ok(None)` - The user is not the owner
/// - `Err(AppError::DiscordErr)` - The guild could not be fetched
async fn owned_guild(
    ctx: &Context,
    guild_id: GuildId,
    interaction: &CommandInteraction,
) -> Result<Option<SerenityGuildApi>, AppError> {
    let guild = guild_id.to_partial_guild(&ctx.http).await?;

    if guild.owner_id != interaction.user.id {
        return Ok(None);
    }

    Ok(Some(SerenityGuildApi::new(
        ctx.http.clone(),
        guild_id,
        guild.name,
    )))
}

async fn handle_autocomplete(
    catalog: &TemplateCatalog,
    ctx: &Context,
    interaction: &CommandInteraction,
) {
    let Some(focused) = interaction.data.autocomplete() else {
        return;
    };

    let templates: BTreeMap<String, String> = if interaction.data.name == command::REVIEW_TEMPLATES {
        match catalog.pending_submissions().await {
            Ok(pending) => pending
                .into_iter()
                .map(|(name, submission)| (name, submission.data.description))
                .collect(),
            Err(e) => {
                tracing::error!("Failed to load pending submissions: {:?}", e);
                return;
            }
        }
    } else {
        catalog.list()
    };

    let choices = command::autocomplete_choices(&templates, focused.value);
    let response = choices
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, (label, name)| {
            response.add_string_choice(label, name)
        });

    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await
    {
        tracing::error!("Failed to send autocomplete choices: {:?}", e);
    }
}

/// Reply text for a failed command; internal details stay in the logs.
fn user_message(err: &AppError) -> String {
    match err {
        AppError::NotFound(msg) | AppError::BadRequest(msg) => msg.clone(),
        AppError::GuildApi(e) if e.is_rate_limited() => {
            "Discord is rate limiting this bot. Please wait a few minutes and try again."
                .to_string()
        }
        AppError::GuildApi(e) => format!(
            "{}\nMake sure the bot has Administrator permission and its role is above the roles it manages.",
            e
        ),
        _ => "Something went wrong. Please try again later.".to_string(),
    }
}
