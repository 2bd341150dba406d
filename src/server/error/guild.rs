use std::time::Duration;
use thiserror::Error;

/// Failure of a single call against the remote guild API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuildApiError {
    /// The bot lacks the permission required for the call (HTTP 403).
    ///
    /// Usually the bot's role is missing Manage Roles/Manage Channels or sits below
    /// the role it is trying to reference.
    #[error("Missing permissions: {0}")]
    PermissionDenied(String),

    /// Discord rejected the call with HTTP 429.
    ///
    /// Never retried internally; surfaced to the caller for external backoff.
    #[error("Rate limited by Discord")]
    RateLimited {
        /// Suggested wait before retrying, when Discord provided one.
        retry_after: Option<Duration>,
    },

    /// Any other transport or API failure.
    #[error("Discord request failed: {0}")]
    Transport(String),
}

impl GuildApiError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Classifies Serenity errors by HTTP status.
impl From<serenity::Error> for GuildApiError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(ref http_err) = err {
            match http_err.status_code().map(|status| status.as_u16()) {
                Some(403) => return Self::PermissionDenied(err.to_string()),
                Some(429) => return Self::RateLimited { retry_after: None },
                _ => {}
            }
        }

        Self::Transport(err.to_string())
    }
}
