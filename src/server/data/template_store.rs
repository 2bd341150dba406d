//! Template document store.
//!
//! Built-in templates, user submissions and guild backups are plain JSON documents.
//! Services depend on the `TemplateStore` trait only; `JsonTemplateStore` keeps the
//! documents in a data directory. Tests use `InMemoryTemplateStore` instead.
//!
//! The store performs no locking of its own. Callers that read, modify and write the
//! user submission document must serialize that sequence themselves.

use serenity::async_trait;
use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    model::template::{Template, UserTemplate},
    server::error::store::StoreError,
};

#[cfg(test)]
mod memory;

#[cfg(test)]
pub use memory::InMemoryTemplateStore;

/// File holding the bundled templates, keyed by template name.
pub const BUILTIN_FILE: &str = "server_templates.json";
/// File holding user submissions, keyed by template name.
pub const USER_SUBMITTED_FILE: &str = "user_submitted_templates.json";
/// Directory holding one document per guild backup.
pub const BACKUP_DIR: &str = "backups";

#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn load_builtin(&self) -> Result<BTreeMap<String, Template>, StoreError>;

    async fn load_user_submitted(&self) -> Result<BTreeMap<String, UserTemplate>, StoreError>;

    /// Replaces the whole user submission document.
    async fn save_user_submitted(
        &self,
        templates: &BTreeMap<String, UserTemplate>,
    ) -> Result<(), StoreError>;

    /// Writes a backup document under `document_name`.
    async fn save_backup(&self, document_name: &str, template: &Template)
        -> Result<(), StoreError>;
}

/// Store backed by JSON files in a data directory.
pub struct JsonTemplateStore {
    dir: PathBuf,
}

impl JsonTemplateStore {
    /// Creates a store rooted at `dir`.
    ///
    /// # Arguments
    /// - `dir` - Directory containing `server_templates.json`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the data directory and an empty user submission document if missing.
    ///
    /// # Returns
    /// - `Ok(())` - Directory and submission document exist
    /// - `Err(StoreError::Io)` - Directory or file could not be created
    pub async fn init(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let user_path = self.dir.join(USER_SUBMITTED_FILE);
        if !tokio::fs::try_exists(&user_path).await? {
            tokio::fs::write(&user_path, "{}").await?;
            tracing::info!("Created empty {}", user_path.display());
        }

        Ok(())
    }

    pub fn backup_path(&self, document_name: &str) -> PathBuf {
        self.dir
            .join(BACKUP_DIR)
            .join(format!("{}.json", document_name))
    }
}

/// Reads a JSON map, treating a missing file as empty.
async fn read_map<T>(path: &Path) -> Result<Option<BTreeMap<String, T>>, StoreError>
where
    T: serde::de::DeserializeOwned,
{
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let contents = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, contents).await?;
    Ok(())
}

#[async_trait]
impl TemplateStore for JsonTemplateStore {
    async fn load_builtin(&self) -> Result<BTreeMap<String, Template>, StoreError> {
        let path = self.dir.join(BUILTIN_FILE);

        match read_map(&path).await? {
            Some(templates) => Ok(templates),
            None => {
                tracing::error!("Template file not found: {}", path.display());
                Ok(BTreeMap::new())
            }
        }
    }

    async fn load_user_submitted(&self) -> Result<BTreeMap<String, UserTemplate>, StoreError> {
        let path = self.dir.join(USER_SUBMITTED_FILE);

        match read_map(&path).await? {
            Some(templates) => Ok(templates),
            None => {
                let empty = BTreeMap::new();
                write_json(&path, &empty).await?;
                Ok(empty)
            }
        }
    }

    async fn save_user_submitted(
        &self,
        templates: &BTreeMap<String, UserTemplate>,
    ) -> Result<(), StoreError> {
        write_json(&self.dir.join(USER_SUBMITTED_FILE), templates).await
    }

    async fn save_backup(
        &self,
        document_name: &str,
        template: &Template,
    ) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(self.dir.join(BACKUP_DIR)).await?;
        write_json(&self.backup_path(document_name), template).await
    }
}
