use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://serversetup.db?mode=rwc";
const DEFAULT_TEMPLATE_DATA_DIR: &str = "data";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

pub struct Config {
    pub discord_bot_token: String,
    /// Application id used for the invite link; empty when unset.
    pub discord_client_id: String,
    /// User allowed to review submitted templates; nobody can review when unset.
    pub template_reviewer_id: Option<u64>,

    pub database_url: String,
    /// Directory holding built-in templates, user submissions and backups.
    pub template_data_dir: PathBuf,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_BOT_TOKEN` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - `BIND_ADDRESS` is not a socket address, or
    ///   `TEMPLATE_REVIEWER_ID` is not a user id
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        let template_reviewer_id = lookup("TEMPLATE_REVIEWER_ID")
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "TEMPLATE_REVIEWER_ID".to_string(),
                    value: id.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            discord_bot_token,
            discord_client_id: lookup("DISCORD_CLIENT_ID").unwrap_or_default(),
            template_reviewer_id,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            template_data_dir: lookup("TEMPLATE_DATA_DIR")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_DATA_DIR.to_string())
                .into(),
            bind_address,
        })
    }
}
