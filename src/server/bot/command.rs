//! Slash command definitions, argument parsing and plain-text replies.
//!
//! Parsing and rendering are kept free of Serenity's interaction types beyond
//! `ResolvedOption` so that the reply text can be tested without a gateway.

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, Permissions, ResolvedOption,
    ResolvedValue,
};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

use crate::{
    model::template::{SubmissionStatus, UserTemplate},
    server::model::{
        apply::{ApplyOptions, ApplyReport, EntityKind, ItemStatus},
        backup::GuildBackup,
    },
};

/// Discord rejects message content longer than this many characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Discord accepts at most this many autocomplete choices.
pub const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

/// Discord rejects autocomplete choice names longer than this many characters.
const MAX_CHOICE_NAME_LENGTH: usize = 100;

/// Number of failed items listed in an apply reply.
const MAX_LISTED_FAILURES: usize = 10;

pub const TEMPLATES: &str = "templates";
pub const PREVIEW: &str = "preview";
pub const APPLY: &str = "apply";
pub const BACKUP: &str = "backup";
pub const SUBMIT_TEMPLATE: &str = "submit-template";
pub const REVIEW_TEMPLATES: &str = "review-templates";

const TEMPLATE_OPTION: &str = "template";
const INCLUDE_ROLES: &str = "include_roles";
const INCLUDE_CATEGORIES: &str = "include_categories";
const INCLUDE_TEXT_CHANNELS: &str = "include_text_channels";
const INCLUDE_VOICE_CHANNELS: &str = "include_voice_channels";
const DECISION_OPTION: &str = "decision";
const APPROVE: &str = "approve";
const REJECT: &str = "reject";

/// Global slash commands registered when the bot connects.
pub fn definitions() -> Vec<CreateCommand> {
    let template_option = || {
        CreateCommandOption::new(
            CommandOptionType::String,
            TEMPLATE_OPTION,
            "Name of the template",
        )
        .required(true)
        .set_autocomplete(true)
    };
    let toggle = |name: &str, description: &str| {
        CreateCommandOption::new(CommandOptionType::Boolean, name, description)
    };

    vec![
        CreateCommand::new(TEMPLATES).description("List the available server templates"),
        CreateCommand::new(PREVIEW)
            .description("Preview a server template before applying it")
            .add_option(template_option()),
        CreateCommand::new(APPLY)
            .description("Apply a server template to this server")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(template_option())
            .add_option(toggle(INCLUDE_ROLES, "Create the template's roles (default: true)"))
            .add_option(toggle(
                INCLUDE_CATEGORIES,
                "Create the template's categories and channels (default: true)",
            ))
            .add_option(toggle(
                INCLUDE_TEXT_CHANNELS,
                "Create text channels (default: true)",
            ))
            .add_option(toggle(
                INCLUDE_VOICE_CHANNELS,
                "Create voice channels (default: true)",
            )),
        CreateCommand::new(BACKUP)
            .description("Create a backup of this server's structure")
            .default_member_permissions(Permissions::ADMINISTRATOR),
        CreateCommand::new(SUBMIT_TEMPLATE)
            .description("Submit this server as a template for others to use")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "A name for your template")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "description",
                    "What your template is for",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "category",
                    "The category your template belongs to",
                )
                .required(true),
            ),
        CreateCommand::new(REVIEW_TEMPLATES)
            .description("Review pending template submissions")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    TEMPLATE_OPTION,
                    "Submitted template to review; omit to list pending submissions",
                )
                .set_autocomplete(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    DECISION_OPTION,
                    "Whether to approve or reject the submission",
                )
                .add_string_choice("Approve", APPROVE)
                .add_string_choice("Reject", REJECT),
            ),
    ]
}

/// String and boolean option values of one invocation.
#[derive(Debug, Default)]
pub struct CommandArgs {
    strings: HashMap<String, String>,
    flags: HashMap<String, bool>,
}

impl CommandArgs {
    pub fn from_resolved(options: &[ResolvedOption<'_>]) -> Self {
        let mut args = Self::default();

        for option in options {
            match option.value {
                ResolvedValue::String(value) => {
                    args.strings.insert(option.name.to_string(), value.to_string());
                }
                ResolvedValue::Boolean(value) => {
                    args.flags.insert(option.name.to_string(), value);
                }
                _ => {}
            }
        }

        args
    }

    #[cfg(test)]
    pub fn with_string(mut self, name: &str, value: &str) -> Self {
        self.strings.insert(name.to_string(), value.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.flags.insert(name.to_string(), value);
        self
    }

    fn string(&self, name: &str) -> Option<String> {
        self.strings.get(name).map(|v| v.trim().to_string())
    }

    /// Omitted toggles default to enabled.
    fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(true)
    }
}

/// A parsed slash command invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCommand {
    Templates,
    Preview {
        template: String,
    },
    Apply {
        template: String,
        options: ApplyOptions,
    },
    Backup,
    SubmitTemplate {
        name: String,
        description: String,
        category: String,
    },
    PendingSubmissions,
    ReviewSubmission {
        template: String,
        status: SubmissionStatus,
    },
}

impl BotCommand {
    /// Parses an invocation by command name.
    ///
    /// # Returns
    /// - `Some(BotCommand)` - Known command with its required options present
    /// - `None` - Unknown command or a required option is missing
    pub fn parse(name: &str, args: &CommandArgs) -> Option<Self> {
        match name {
            TEMPLATES => Some(Self::Templates),
            PREVIEW => Some(Self::Preview {
                template: args.string(TEMPLATE_OPTION)?,
            }),
            APPLY => Some(Self::Apply {
                template: args.string(TEMPLATE_OPTION)?,
                options: ApplyOptions {
                    include_roles: args.flag(INCLUDE_ROLES),
                    include_categories: args.flag(INCLUDE_CATEGORIES),
                    include_text_channels: args.flag(INCLUDE_TEXT_CHANNELS),
                    include_voice_channels: args.flag(INCLUDE_VOICE_CHANNELS),
                },
            }),
            BACKUP => Some(Self::Backup),
            SUBMIT_TEMPLATE => Some(Self::SubmitTemplate {
                name: args.string("name")?,
                description: args.string("description")?,
                category: args.string("category")?,
            }),
            REVIEW_TEMPLATES => {
                match (args.string(TEMPLATE_OPTION), args.string(DECISION_OPTION)) {
                    (None, None) => Some(Self::PendingSubmissions),
                    (Some(template), Some(decision)) => Some(Self::ReviewSubmission {
                        template,
                        status: parse_decision(&decision)?,
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Commands that modify or read the whole guild are limited to its owner.
    pub fn requires_owner(&self) -> bool {
        matches!(
            self,
            Self::Apply { .. } | Self::Backup | Self::SubmitTemplate { .. }
        )
    }

    /// Commands limited to the configured template reviewer.
    pub fn requires_reviewer(&self) -> bool {
        matches!(
            self,
            Self::PendingSubmissions | Self::ReviewSubmission { .. }
        )
    }
}

/// Review is disabled when no reviewer is configured.
pub fn is_reviewer(reviewer_id: Option<u64>, user_id: u64) -> bool {
    reviewer_id == Some(user_id)
}

fn parse_decision(decision: &str) -> Option<SubmissionStatus> {
    match decision {
        APPROVE => Some(SubmissionStatus::Approved),
        REJECT => Some(SubmissionStatus::Rejected),
        _ => None,
    }
}

pub fn render_catalog(by_category: &BTreeMap<String, BTreeMap<String, String>>) -> String {
    if by_category.is_empty() {
        return "No templates are available right now.".to_string();
    }

    let mut out = String::from("**Available templates**\n");
    for (category, templates) in by_category {
        let _ = writeln!(out, "\n__{}__", category);
        for (name, description) in templates {
            if description.is_empty() {
                let _ = writeln!(out, "- **{}**", name);
            } else {
                let _ = writeln!(out, "- **{}**: {}", name, description);
            }
        }
    }
    let _ = write!(out, "\nUse `/{} <template>` to see what a template creates.", PREVIEW);

    out
}

pub fn render_report(report: &ApplyReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Applied the **{}** template: {} roles, {} categories and {} channels created.",
        report.template_name,
        report.created(EntityKind::Role),
        report.created(EntityKind::Category),
        report.created(EntityKind::Channel)
    );

    if report.has_failures() {
        let failures: Vec<_> = report.failures().collect();
        let _ = writeln!(out, "\n{} items could not be set up:", failures.len());
        for outcome in failures.iter().take(MAX_LISTED_FAILURES) {
            let reason = match &outcome.status {
                ItemStatus::Failed(err) => err.to_string(),
                ItemStatus::Invalid(err) => err.to_string(),
                _ => continue,
            };
            let _ = writeln!(
                out,
                "- {} `{}`: {}",
                entity_label(outcome.kind),
                outcome.name,
                reason
            );
        }
        if failures.len() > MAX_LISTED_FAILURES {
            let _ = writeln!(out, "- +{} more", failures.len() - MAX_LISTED_FAILURES);
        }
    }

    out
}

pub fn render_backup(backup: &GuildBackup) -> String {
    let template = &backup.template;
    let mut out = String::new();

    let _ = writeln!(out, "Backup of **{}** created.", template.name);
    let _ = writeln!(
        out,
        "Roles: {} | Categories: {} | Channels: {}",
        template.roles.len(),
        template.categories.len(),
        template.channel_count()
    );
    if backup.persisted {
        let _ = write!(out, "Backup ID: `{}`", backup.document_name);
    } else {
        let _ = write!(out, "The backup could not be saved. Please try again later.");
    }

    out
}

pub fn render_pending(pending: &BTreeMap<String, UserTemplate>) -> String {
    if pending.is_empty() {
        return "No template submissions are waiting for review.".to_string();
    }

    let mut out = format!("**{} pending submissions**\n", pending.len());
    for (name, submission) in pending {
        let _ = writeln!(
            out,
            "- **{}** ({}) by <@{}> on {}: {}",
            name,
            submission.data.category,
            submission.metadata.submitted_by,
            submission.metadata.submitted_at,
            submission.data.description
        );
    }
    let _ = write!(
        out,
        "\nUse `/{} <template> <decision>` to approve or reject a submission.",
        REVIEW_TEMPLATES
    );

    out
}

pub fn render_review(submission: &UserTemplate) -> String {
    let verdict = match submission.metadata.status {
        SubmissionStatus::Approved => "approved",
        SubmissionStatus::Rejected => "rejected",
        SubmissionStatus::Pending => "left pending",
    };

    format!(
        "Template **{}** submitted by <@{}> has been {}.",
        submission.data.name, submission.metadata.submitted_by, verdict
    )
}

/// Cuts `content` to Discord's message limit on a character boundary.
pub fn fit_message(content: String) -> String {
    if content.chars().count() <= MAX_MESSAGE_LENGTH {
        return content;
    }

    let mut truncated: String = content.chars().take(MAX_MESSAGE_LENGTH - 1).collect();
    truncated.push('…');
    truncated
}

/// Templates whose name contains `query`, case-insensitively, in name order.
///
/// Each choice is a `(label, name)` pair; the label appends the description and is
/// cut to Discord's choice name limit.
pub fn autocomplete_choices(
    templates: &BTreeMap<String, String>,
    query: &str,
) -> Vec<(String, String)> {
    let query = query.trim().to_lowercase();

    templates
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&query))
        .take(MAX_AUTOCOMPLETE_CHOICES)
        .map(|(name, description)| (choice_label(name, description), name.clone()))
        .collect()
}

fn choice_label(name: &str, description: &str) -> String {
    let label = if description.is_empty() {
        name.to_string()
    } else {
        format!("{} - {}", name, description)
    };

    if label.chars().count() <= MAX_CHOICE_NAME_LENGTH {
        return label;
    }

    let mut truncated: String = label.chars().take(MAX_CHOICE_NAME_LENGTH - 1).collect();
    truncated.push('…');
    truncated
}

fn entity_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Role => "Role",
        EntityKind::Category => "Category",
        EntityKind::Channel => "Channel",
    }
}
