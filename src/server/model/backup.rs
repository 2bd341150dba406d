use crate::model::template::Template;

/// Result of backing up a guild.
///
/// The template is always returned, even when writing the backup document failed.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildBackup {
    pub template: Template,
    /// `{guild_id}_{YYYYMMDD_HHMMSS}` in UTC.
    pub document_name: String,
    pub persisted: bool,
}
