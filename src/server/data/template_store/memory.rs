use serenity::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

use crate::{
    model::template::{Template, UserTemplate},
    server::{data::template_store::TemplateStore, error::store::StoreError},
};

/// Store keeping every document in memory.
///
/// Writes can be made to fail to exercise persistence failure handling.
#[derive(Default)]
pub struct InMemoryTemplateStore {
    builtin: BTreeMap<String, Template>,
    user_submitted: Mutex<BTreeMap<String, UserTemplate>>,
    backups: Mutex<HashMap<String, Template>>,
    fail_writes: bool,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the built-in templates, keyed by their names.
    pub fn with_builtin(mut self, templates: impl IntoIterator<Item = Template>) -> Self {
        self.builtin = templates
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();
        self
    }

    /// Makes every save fail with an I/O error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub async fn backup(&self, document_name: &str) -> Option<Template> {
        self.backups.lock().await.get(document_name).cloned()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(std::io::Error::other("writes disabled").into());
        }
        Ok(())
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn load_builtin(&self) -> Result<BTreeMap<String, Template>, StoreError> {
        Ok(self.builtin.clone())
    }

    async fn load_user_submitted(&self) -> Result<BTreeMap<String, UserTemplate>, StoreError> {
        Ok(self.user_submitted.lock().await.clone())
    }

    async fn save_user_submitted(
        &self,
        templates: &BTreeMap<String, UserTemplate>,
    ) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.user_submitted.lock().await = templates.clone();
        Ok(())
    }

    async fn save_backup(
        &self,
        document_name: &str,
        template: &Template,
    ) -> Result<(), StoreError> {
        self.check_writable()?;
        self.backups
            .lock()
            .await
            .insert(document_name.to_string(), template.clone());
        Ok(())
    }
}
